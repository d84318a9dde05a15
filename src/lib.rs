//! HR onboarding backend
//!
//! Candidate records, mentor assignment and the employee idea/task/feedback/todo
//! lists. The mentor matcher scores every mentor on the roster against a
//! candidate's position, skills and languages and keeps the best fit.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchError, MentorRegistry};
pub use models::{Candidate, CandidateProfile, MatchResult, MentorProfile};
pub use services::{assign_mentor, AssignmentError, HrStore, MemoryStore, PostgresStore};
