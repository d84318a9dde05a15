use rand::Rng;
use thiserror::Error;
use crate::core::{MatchError, Matcher};
use crate::models::{Candidate, CandidateProfile, MatchResult};
use super::store::{HrStore, StoreError};

/// Errors surfaced by mentor assignment
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Candidate not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for AssignmentError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(ic) => AssignmentError::NotFound(ic),
            other => AssignmentError::Storage(other),
        }
    }
}

impl From<MatchError> for AssignmentError {
    fn from(err: MatchError) -> Self {
        AssignmentError::Configuration(err.to_string())
    }
}

/// A persisted mentor assignment
#[derive(Debug, Clone)]
pub struct MentorAssignment {
    /// Candidate row after the write
    pub candidate: Candidate,
    pub result: MatchResult,
    pub mentor_email: Option<String>,
}

/// Look up a candidate by IC number, pick a mentor and store it on the record
///
/// Read and write are separate statements; a concurrent assignment for the same
/// candidate may overwrite this one.
pub async fn assign_mentor<R>(
    store: &dyn HrStore,
    matcher: &Matcher,
    ic_number: &str,
    rng: &mut R,
) -> Result<MentorAssignment, AssignmentError>
where
    R: Rng,
{
    // Blank counts as missing; otherwise the key is matched as sent
    if ic_number.trim().is_empty() {
        return Err(AssignmentError::InvalidArgument("ic_number is required".to_string()));
    }

    let candidate = store
        .find_candidate_by_ic(ic_number)
        .await?
        .ok_or_else(|| AssignmentError::NotFound(ic_number.to_string()))?;

    let profile = CandidateProfile::from_candidate(&candidate);
    let result = matcher.select_mentor(&profile, rng)?;

    let candidate = store
        .set_candidate_mentor(ic_number, &result.mentor_name)
        .await?;

    let mentor_email = matcher
        .registry()
        .email_for(&result.mentor_name)
        .map(str::to_string);

    tracing::info!(
        "Assigned mentor {} to {} (score: {}, fallback: {})",
        result.mentor_name,
        candidate.ic_number,
        result.score,
        result.fallback
    );

    Ok(MentorAssignment {
        candidate,
        result,
        mentor_email,
    })
}
