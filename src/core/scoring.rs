use std::collections::BTreeSet;
use crate::models::{CandidateProfile, MentorProfile};

/// Points awarded when the candidate position is one of the mentor's roles
pub const ROLE_MATCH_POINTS: u32 = 2;

/// Calculate how well a mentor fits a candidate
///
/// Scoring formula:
/// score = (
///     2 if position in mentor.roles +
///     |languages ∩ mentor.languages| +
///     |skills ∩ mentor.languages| +     # skills and languages share vocabulary
///     |skills ∩ mentor.areas| +
///     |languages ∩ mentor.areas|
/// )
pub fn calculate_mentor_score(candidate: &CandidateProfile, mentor: &MentorProfile) -> u32 {
    let role_score = if !candidate.position.is_empty()
        && mentor.roles.iter().any(|r| r == &candidate.position)
    {
        ROLE_MATCH_POINTS
    } else {
        0
    };

    role_score
        + overlap(&candidate.languages, &mentor.languages)
        + overlap(&candidate.skills, &mentor.languages)
        + overlap(&candidate.skills, &mentor.areas)
        + overlap(&candidate.languages, &mentor.areas)
}

#[inline]
fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> u32 {
    a.intersection(b).count() as u32
}
