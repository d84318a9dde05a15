use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use crate::models::{Candidate, Feedback, Idea, NewCandidate, Task, Todo, TodoUpdate};
use super::store::{HrStore, StoreError};

const CANDIDATE_COLUMNS: &str = "id, name, ic_number, position, email, mentor, phone, location, \
    years_exp, skills_csv, projects, education, certifications, summary, languages";

/// PostgreSQL-backed store for candidates and the employee lists
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new store from a connection string and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

#[async_trait]
impl HrStore for PostgresStore {
    async fn find_candidate_by_ic(&self, ic_number: &str) -> Result<Option<Candidate>, StoreError> {
        let query = format!("SELECT {CANDIDATE_COLUMNS} FROM candidate WHERE ic_number = $1");

        let candidate = sqlx::query_as::<_, Candidate>(&query)
            .bind(ic_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(candidate)
    }

    async fn find_candidate(
        &self,
        name: &str,
        ic_number: &str,
    ) -> Result<Option<Candidate>, StoreError> {
        let query =
            format!("SELECT {CANDIDATE_COLUMNS} FROM candidate WHERE name = $1 AND ic_number = $2");

        let candidate = sqlx::query_as::<_, Candidate>(&query)
            .bind(name)
            .bind(ic_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(candidate)
    }

    async fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, StoreError> {
        let query = format!(
            r#"
            INSERT INTO candidate (name, ic_number, position, email, phone, location, skills_csv, languages)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {CANDIDATE_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, Candidate>(&query)
            .bind(&candidate.name)
            .bind(&candidate.ic_number)
            .bind(&candidate.position)
            .bind(&candidate.email)
            .bind(&candidate.phone)
            .bind(&candidate.location)
            .bind(&candidate.skills_csv)
            .bind(&candidate.languages)
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(row) => {
                tracing::debug!("Inserted candidate {} ({})", row.name, row.ic_number);
                Ok(row)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::Conflict(candidate.ic_number))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Single UPDATE with no row lock: concurrent writers are last-write-wins
    async fn set_candidate_mentor(
        &self,
        ic_number: &str,
        mentor: &str,
    ) -> Result<Candidate, StoreError> {
        let query = format!(
            "UPDATE candidate SET mentor = $2 WHERE ic_number = $1 RETURNING {CANDIDATE_COLUMNS}"
        );

        sqlx::query_as::<_, Candidate>(&query)
            .bind(ic_number)
            .bind(mentor)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(ic_number.to_string()))
    }

    async fn list_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let query = format!("SELECT {CANDIDATE_COLUMNS} FROM candidate ORDER BY id ASC");

        let rows = sqlx::query_as::<_, Candidate>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>, StoreError> {
        let rows = sqlx::query_as::<_, Idea>(
            "SELECT id, text, status, submitted_at FROM idea ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert_idea(
        &self,
        text: &str,
        status: &str,
        submitted_at: &str,
    ) -> Result<Idea, StoreError> {
        let query = r#"
            INSERT INTO idea (text, status, submitted_at)
            VALUES ($1, $2, $3)
            RETURNING id, text, status, submitted_at
        "#;

        let idea = sqlx::query_as::<_, Idea>(query)
            .bind(text)
            .bind(status)
            .bind(submitted_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(idea)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let rows = sqlx::query_as::<_, Task>(
            "SELECT id, date, task, status, priority FROM task ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert_task(
        &self,
        date: &str,
        task: &str,
        status: &str,
        priority: &str,
    ) -> Result<Task, StoreError> {
        let query = r#"
            INSERT INTO task (date, task, status, priority)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, task, status, priority
        "#;

        let row = sqlx::query_as::<_, Task>(query)
            .bind(date)
            .bind(task)
            .bind(status)
            .bind(priority)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn insert_feedback(
        &self,
        employee_name: &str,
        feedback_text: &str,
    ) -> Result<Feedback, StoreError> {
        let query = r#"
            INSERT INTO feedback (employee_name, feedback_text)
            VALUES ($1, $2)
            RETURNING id, employee_name, feedback_text
        "#;

        let row = sqlx::query_as::<_, Feedback>(query)
            .bind(employee_name)
            .bind(feedback_text)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list_feedback(&self) -> Result<Vec<Feedback>, StoreError> {
        let rows = sqlx::query_as::<_, Feedback>(
            "SELECT id, employee_name, feedback_text FROM feedback ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert_todo(
        &self,
        employee_name: &str,
        task: &str,
        due_date: Option<&str>,
    ) -> Result<Todo, StoreError> {
        let query = r#"
            INSERT INTO todo (employee_name, task, due_date)
            VALUES ($1, $2, $3)
            RETURNING id, employee_name, task, is_completed, due_date
        "#;

        let row = sqlx::query_as::<_, Todo>(query)
            .bind(employee_name)
            .bind(task)
            .bind(due_date)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn list_todos(&self, employee_name: &str) -> Result<Vec<Todo>, StoreError> {
        let query = r#"
            SELECT id, employee_name, task, is_completed, due_date
            FROM todo
            WHERE employee_name = $1
            ORDER BY id ASC
        "#;

        let rows = sqlx::query_as::<_, Todo>(query)
            .bind(employee_name)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn update_todo(&self, id: i64, update: TodoUpdate) -> Result<Option<Todo>, StoreError> {
        let query = r#"
            UPDATE todo SET
                is_completed = COALESCE($2, is_completed),
                task = COALESCE($3, task),
                due_date = CASE WHEN $4 THEN $5 ELSE due_date END
            WHERE id = $1
            RETURNING id, employee_name, task, is_completed, due_date
        "#;

        let (set_due_date, due_date) = match update.due_date {
            Some(value) => (true, value),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, Todo>(query)
            .bind(id)
            .bind(update.is_completed)
            .bind(update.task)
            .bind(set_due_date)
            .bind(due_date)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn delete_todo(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM todo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
