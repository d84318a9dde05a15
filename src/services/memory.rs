use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::models::{Candidate, Feedback, Idea, NewCandidate, Task, Todo, TodoUpdate};
use super::store::{HrStore, StoreError};

#[derive(Default)]
struct Tables {
    candidates: Vec<Candidate>,
    ideas: Vec<Idea>,
    tasks: Vec<Task>,
    feedback: Vec<Feedback>,
    todos: Vec<Todo>,
    sequences: Sequences,
}

/// One id counter per table, like a BIGSERIAL column
#[derive(Default)]
struct Sequences {
    candidate: i64,
    idea: i64,
    task: i64,
    feedback: i64,
    todo: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

/// Process-local store with the same semantics as [`PostgresStore`](super::PostgresStore)
///
/// Rows live in insertion order, so ascending id order is iteration order.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HrStore for MemoryStore {
    async fn find_candidate_by_ic(&self, ic_number: &str) -> Result<Option<Candidate>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .candidates
            .iter()
            .find(|c| c.ic_number == ic_number)
            .cloned())
    }

    async fn find_candidate(
        &self,
        name: &str,
        ic_number: &str,
    ) -> Result<Option<Candidate>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .candidates
            .iter()
            .find(|c| c.name == name && c.ic_number == ic_number)
            .cloned())
    }

    async fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.candidates.iter().any(|c| c.ic_number == candidate.ic_number) {
            return Err(StoreError::Conflict(candidate.ic_number));
        }

        let row = Candidate {
            id: next_id(&mut tables.sequences.candidate),
            name: candidate.name,
            ic_number: candidate.ic_number,
            position: candidate.position,
            email: candidate.email,
            mentor: None,
            phone: candidate.phone,
            location: candidate.location,
            years_exp: 0,
            skills_csv: candidate.skills_csv,
            projects: vec![],
            education: vec![],
            certifications: vec![],
            summary: String::new(),
            languages: candidate.languages,
        };
        tables.candidates.push(row.clone());
        Ok(row)
    }

    async fn set_candidate_mentor(
        &self,
        ic_number: &str,
        mentor: &str,
    ) -> Result<Candidate, StoreError> {
        let mut tables = self.tables.lock().await;
        let candidate = tables
            .candidates
            .iter_mut()
            .find(|c| c.ic_number == ic_number)
            .ok_or_else(|| StoreError::NotFound(ic_number.to_string()))?;

        candidate.mentor = Some(mentor.to_string());
        Ok(candidate.clone())
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.tables.lock().await.candidates.clone())
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.ideas.iter().rev().cloned().collect())
    }

    async fn insert_idea(
        &self,
        text: &str,
        status: &str,
        submitted_at: &str,
    ) -> Result<Idea, StoreError> {
        let mut tables = self.tables.lock().await;
        let idea = Idea {
            id: next_id(&mut tables.sequences.idea),
            text: text.to_string(),
            status: status.to_string(),
            submitted_at: submitted_at.to_string(),
        };
        tables.ideas.push(idea.clone());
        Ok(idea)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tables.lock().await.tasks.clone())
    }

    async fn insert_task(
        &self,
        date: &str,
        task: &str,
        status: &str,
        priority: &str,
    ) -> Result<Task, StoreError> {
        let mut tables = self.tables.lock().await;
        let row = Task {
            id: next_id(&mut tables.sequences.task),
            date: date.to_string(),
            task: task.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
        };
        tables.tasks.push(row.clone());
        Ok(row)
    }

    async fn insert_feedback(
        &self,
        employee_name: &str,
        feedback_text: &str,
    ) -> Result<Feedback, StoreError> {
        let mut tables = self.tables.lock().await;
        let row = Feedback {
            id: next_id(&mut tables.sequences.feedback),
            employee_name: employee_name.to_string(),
            feedback_text: feedback_text.to_string(),
        };
        tables.feedback.push(row.clone());
        Ok(row)
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.feedback.iter().rev().cloned().collect())
    }

    async fn insert_todo(
        &self,
        employee_name: &str,
        task: &str,
        due_date: Option<&str>,
    ) -> Result<Todo, StoreError> {
        let mut tables = self.tables.lock().await;
        let row = Todo {
            id: next_id(&mut tables.sequences.todo),
            employee_name: employee_name.to_string(),
            task: task.to_string(),
            is_completed: false,
            due_date: due_date.map(str::to_string),
        };
        tables.todos.push(row.clone());
        Ok(row)
    }

    async fn list_todos(&self, employee_name: &str) -> Result<Vec<Todo>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .todos
            .iter()
            .filter(|t| t.employee_name == employee_name)
            .cloned()
            .collect())
    }

    async fn update_todo(&self, id: i64, update: TodoUpdate) -> Result<Option<Todo>, StoreError> {
        let mut tables = self.tables.lock().await;
        let Some(todo) = tables.todos.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(done) = update.is_completed {
            todo.is_completed = done;
        }
        if let Some(task) = update.task {
            todo.task = task;
        }
        if let Some(due_date) = update.due_date {
            todo.due_date = due_date;
        }
        Ok(Some(todo.clone()))
    }

    async fn delete_todo(&self, id: i64) -> Result<bool, StoreError> {
        let mut tables = self.tables.lock().await;
        let before = tables.todos.len();
        tables.todos.retain(|t| t.id != id);
        Ok(tables.todos.len() < before)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
