use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use crate::core::normalize::normalize_tokens;
use crate::models::MentorProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate mentor name: {0}")]
    DuplicateMentor(String),

    #[error("Mentor name must not be empty")]
    EmptyName,
}

/// Raw mentor entry as written in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentorSpec {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub areas: Vec<String>,
    pub email: String,
}

impl From<MentorSpec> for MentorProfile {
    fn from(spec: MentorSpec) -> Self {
        Self {
            name: spec.name.trim().to_string(),
            roles: spec.roles,
            languages: normalize_tokens(&spec.languages),
            areas: normalize_tokens(&spec.areas),
            email: spec.email,
        }
    }
}

/// Read-only mentor roster, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct MentorRegistry {
    mentors: Vec<MentorProfile>,
}

impl MentorRegistry {
    pub fn new(mentors: Vec<MentorProfile>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for mentor in &mentors {
            if mentor.name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if !seen.insert(mentor.name.as_str()) {
                return Err(RegistryError::DuplicateMentor(mentor.name.clone()));
            }
        }
        Ok(Self { mentors })
    }

    pub fn from_specs(specs: Vec<MentorSpec>) -> Result<Self, RegistryError> {
        Self::new(specs.into_iter().map(MentorProfile::from).collect())
    }

    pub fn mentors(&self) -> &[MentorProfile] {
        &self.mentors
    }

    pub fn len(&self) -> usize {
        self.mentors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&MentorProfile> {
        self.mentors.iter().find(|m| m.name == name)
    }

    /// Contact address for a mentor, if they are on the roster
    pub fn email_for(&self, name: &str) -> Option<&str> {
        self.get(name).map(|m| m.email.as_str())
    }
}

fn spec(name: &str, roles: &[&str], languages: &[&str], areas: &[&str], email: &str) -> MentorSpec {
    let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
    MentorSpec {
        name: name.to_string(),
        roles: owned(roles),
        languages: owned(languages),
        areas: owned(areas),
        email: email.to_string(),
    }
}

/// Built-in roster used when configuration does not provide one
pub fn default_mentor_specs() -> Vec<MentorSpec> {
    vec![
        spec(
            "Alice",
            &["Software Engineer"],
            &["Python", "C++", "Java"],
            &["Web", "Backend"],
            "alice123@npc.com",
        ),
        spec(
            "Bob",
            &["Data Scientist"],
            &["Python", "R", "SQL"],
            &["AI", "Machine Learning"],
            "bobatea@npc.com",
        ),
        spec(
            "Charlie",
            &["Firmware Engineer"],
            &["C", "C++"],
            &["Embedded Systems", "Hardware Interface"],
            "charlieputh.fake@npc.com",
        ),
        spec("Default Mentor", &[], &[], &[], "mentor@company.com"),
    ]
}
