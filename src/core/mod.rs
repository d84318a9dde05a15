// Core algorithm exports
pub mod matcher;
pub mod normalize;
pub mod registry;
pub mod scoring;

pub use matcher::{MatchError, Matcher};
pub use normalize::{normalize_csv, normalize_tokens, split_csv};
pub use registry::{default_mentor_specs, MentorRegistry, MentorSpec, RegistryError};
pub use scoring::calculate_mentor_score;
