use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use crate::core::{registry::MentorRegistry, scoring::calculate_mentor_score};
use crate::models::{CandidateProfile, MatchResult};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Mentor registry is empty")]
    EmptyRegistry,
}

/// Picks the best-fit mentor for a candidate
///
/// # Selection
/// 1. Score every mentor in registry order
/// 2. Keep the first mentor reaching the highest score (ties go to the earlier entry)
/// 3. If nobody scored, pick a mentor uniformly at random
#[derive(Debug, Clone)]
pub struct Matcher {
    registry: Arc<MentorRegistry>,
}

impl Matcher {
    pub fn new(registry: Arc<MentorRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MentorRegistry {
        &self.registry
    }

    /// Select a mentor for the candidate
    ///
    /// The result only depends on `rng` when every mentor scores zero.
    pub fn select_mentor<R>(
        &self,
        candidate: &CandidateProfile,
        rng: &mut R,
    ) -> Result<MatchResult, MatchError>
    where
        R: Rng,
    {
        let mentors = self.registry.mentors();
        let mut best: Option<(&str, u32)> = None;

        for mentor in mentors {
            let score = calculate_mentor_score(candidate, mentor);
            tracing::trace!("Mentor {} scored {}", mentor.name, score);

            match best {
                Some((_, max)) if score <= max => {}
                _ => best = Some((mentor.name.as_str(), score)),
            }
        }

        match best {
            None => Err(MatchError::EmptyRegistry),
            Some((name, score)) if score > 0 => Ok(MatchResult {
                mentor_name: name.to_string(),
                score,
                fallback: false,
            }),
            Some(_) => {
                let pick = &mentors[rng.random_range(0..mentors.len())];
                tracing::debug!("No mentor scored above zero, randomly picked {}", pick.name);
                Ok(MatchResult {
                    mentor_name: pick.name.clone(),
                    score: 0,
                    fallback: true,
                })
            }
        }
    }
}
