use std::collections::BTreeSet;
use crate::models::{Candidate, CandidateProfile};

/// Normalize a single token: trimmed and lower-cased
#[inline]
fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_lowercase())
    }
}

/// Split a comma separated field into a normalized token set
///
/// Empty or whitespace-only input yields an empty set; duplicates collapse.
pub fn normalize_csv(raw: &str) -> BTreeSet<String> {
    raw.split(',').filter_map(normalize_token).collect()
}

/// Normalize an already-split list of tokens
///
/// Applying this to the output of [`normalize_csv`] returns the same set.
pub fn normalize_tokens<I, S>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .filter_map(|t| normalize_token(t.as_ref()))
        .collect()
}

/// Split a comma separated field, trimming but keeping the original case and order
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl CandidateProfile {
    /// Build the scoring profile from a stored candidate row
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            position: candidate
                .position
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_string(),
            skills: normalize_csv(&candidate.skills_csv),
            languages: normalize_csv(&candidate.languages),
        }
    }
}
