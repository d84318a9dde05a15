use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::NewCandidate;

/// First value that was sent and is not empty, in key order
fn first_filled<'a>(values: &[&'a Option<String>]) -> &'a str {
    values
        .iter()
        .copied()
        .find_map(|v| v.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

fn take_filled<const N: usize>(values: [Option<String>; N]) -> Option<String> {
    values.into_iter().flatten().find(|s| !s.is_empty())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(format!("{} is required", field).into());
        return Err(err);
    }
    Ok(())
}

/// Request to assign a mentor to a candidate
///
/// Either key may carry the IC number; a missing or null `ic_number` falls
/// through to `ic`. Emptiness is checked by the assignment service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignMentorRequest {
    #[serde(default)]
    ic_number: Option<String>,
    #[serde(default)]
    ic: Option<String>,
}

impl AssignMentorRequest {
    pub fn ic_number(&self) -> &str {
        first_filled(&[&self.ic_number, &self.ic])
    }
}

/// Request to verify a candidate by name and IC number
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_verify_request"))]
pub struct VerifyCandidateRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ic_number: Option<String>,
    #[serde(default)]
    ic: Option<String>,
}

impl VerifyCandidateRequest {
    pub fn name(&self) -> &str {
        first_filled(&[&self.name])
    }

    pub fn ic_number(&self) -> &str {
        first_filled(&[&self.ic_number, &self.ic])
    }
}

fn validate_verify_request(req: &VerifyCandidateRequest) -> Result<(), ValidationError> {
    require("name", req.name())?;
    require("ic_number", req.ic_number())
}

/// Request to register a new candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_add_candidate_request"))]
pub struct AddCandidateRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    ic_number: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default, rename = "positionTitle")]
    position_title: Option<String>,
    #[serde(default)]
    email_prefix: Option<String>,
    #[serde(default)]
    skills: Option<String>,
    #[serde(default)]
    languages: Option<String>,
    #[serde(default, rename = "spokenLanguages")]
    spoken_languages: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    telephone: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    address: Option<String>,
}

impl AddCandidateRequest {
    pub fn name(&self) -> &str {
        first_filled(&[&self.name])
    }

    pub fn ic_number(&self) -> &str {
        first_filled(&[&self.ic_number])
    }

    pub fn position(&self) -> &str {
        first_filled(&[&self.position, &self.position_title])
    }

    /// Build the row to insert; `email_prefix` becomes `prefix@email_domain`
    pub fn into_new_candidate(self, email_domain: &str) -> NewCandidate {
        let email = take_filled([self.email_prefix])
            .map(|prefix| format!("{}@{}", prefix, email_domain));

        NewCandidate {
            name: self.name.unwrap_or_default(),
            ic_number: self.ic_number.unwrap_or_default(),
            position: take_filled([self.position, self.position_title]),
            email,
            phone: take_filled([self.phone, self.telephone]),
            location: take_filled([self.location, self.address]),
            skills_csv: self.skills.unwrap_or_default(),
            languages: take_filled([self.languages, self.spoken_languages]).unwrap_or_default(),
        }
    }
}

fn validate_add_candidate_request(req: &AddCandidateRequest) -> Result<(), ValidationError> {
    require("name", req.name())?;
    require("ic_number", req.ic_number())?;
    require("position", req.position())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_idea_request"))]
pub struct CreateIdeaRequest {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    idea: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl CreateIdeaRequest {
    pub fn text(&self) -> &str {
        first_filled(&[&self.text, &self.idea, &self.description])
    }
}

fn validate_idea_request(req: &CreateIdeaRequest) -> Result<(), ValidationError> {
    require("text", req.text())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_task_request"))]
pub struct CreateTaskRequest {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    task: Option<String>,
    #[serde(default, rename = "taskText")]
    task_text: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

impl CreateTaskRequest {
    pub fn date(&self) -> &str {
        first_filled(&[&self.date])
    }

    pub fn task(&self) -> &str {
        first_filled(&[&self.task, &self.task_text])
    }

    /// Requested priority, `None` when absent or empty
    pub fn priority(&self) -> Option<&str> {
        Some(first_filled(&[&self.priority])).filter(|p| !p.is_empty())
    }
}

fn validate_task_request(req: &CreateTaskRequest) -> Result<(), ValidationError> {
    require("date", req.date())?;
    require("task", req.task())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_feedback_request"))]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    employee_name: Option<String>,
    #[serde(default, rename = "employeeName")]
    employee_name_camel: Option<String>,
    #[serde(default)]
    feedback_text: Option<String>,
    #[serde(default, rename = "feedbackText")]
    feedback_text_camel: Option<String>,
}

impl SubmitFeedbackRequest {
    pub fn employee_name(&self) -> &str {
        first_filled(&[&self.employee_name, &self.employee_name_camel])
    }

    pub fn feedback_text(&self) -> &str {
        first_filled(&[&self.feedback_text, &self.feedback_text_camel])
    }
}

fn validate_feedback_request(req: &SubmitFeedbackRequest) -> Result<(), ValidationError> {
    require("employee_name", req.employee_name())?;
    require("feedback_text", req.feedback_text())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_todo_request"))]
pub struct AddTodoRequest {
    #[serde(default)]
    employee_name: Option<String>,
    #[serde(default, rename = "employeeName")]
    employee_name_camel: Option<String>,
    #[serde(default)]
    task: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default, rename = "dueDate")]
    due_date_camel: Option<String>,
}

impl AddTodoRequest {
    pub fn employee_name(&self) -> &str {
        first_filled(&[&self.employee_name, &self.employee_name_camel])
    }

    pub fn task(&self) -> &str {
        first_filled(&[&self.task])
    }

    pub fn due_date(&self) -> Option<&str> {
        Some(first_filled(&[&self.due_date, &self.due_date_camel])).filter(|d| !d.is_empty())
    }
}

fn validate_todo_request(req: &AddTodoRequest) -> Result<(), ValidationError> {
    require("employee_name", req.employee_name())?;
    require("task", req.task())
}

/// Partial todo update; absent keys are left unchanged, explicit nulls clear
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "present")]
    pub is_completed: Option<Option<bool>>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<String>>,
}

/// Distinguishes a key sent as `null` from a missing key
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
