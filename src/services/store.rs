use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Candidate, Feedback, Idea, NewCandidate, Task, Todo, TodoUpdate};

/// Errors that can occur when reading or writing HR records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    Conflict(String),
}

/// Record accessors the HTTP layer and mentor assignment depend on
///
/// Implemented by [`PostgresStore`](super::PostgresStore) in production and
/// [`MemoryStore`](super::MemoryStore) for tests and database-less runs.
#[async_trait]
pub trait HrStore: Send + Sync {
    async fn find_candidate_by_ic(&self, ic_number: &str) -> Result<Option<Candidate>, StoreError>;

    async fn find_candidate(&self, name: &str, ic_number: &str)
        -> Result<Option<Candidate>, StoreError>;

    /// Insert a candidate; fails with `Conflict` when the IC number is taken
    async fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError>;

    /// Overwrite the mentor of a candidate and return the updated row
    async fn set_candidate_mentor(&self, ic_number: &str, mentor: &str)
        -> Result<Candidate, StoreError>;

    async fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError>;

    /// Ideas, newest first
    async fn list_ideas(&self) -> Result<Vec<Idea>, StoreError>;

    async fn insert_idea(&self, text: &str, status: &str, submitted_at: &str)
        -> Result<Idea, StoreError>;

    /// Tasks, oldest first
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;

    async fn insert_task(&self, date: &str, task: &str, status: &str, priority: &str)
        -> Result<Task, StoreError>;

    async fn insert_feedback(&self, employee_name: &str, feedback_text: &str)
        -> Result<Feedback, StoreError>;

    /// Feedback, newest first
    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError>;

    async fn insert_todo(&self, employee_name: &str, task: &str, due_date: Option<&str>)
        -> Result<Todo, StoreError>;

    /// Todos of one employee, oldest first
    async fn list_todos(&self, employee_name: &str) -> Result<Vec<Todo>, StoreError>;

    async fn update_todo(&self, id: i64, update: TodoUpdate) -> Result<Option<Todo>, StoreError>;

    /// Returns false when no todo had that id
    async fn delete_todo(&self, id: i64) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
