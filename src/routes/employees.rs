use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    AddTodoRequest, FeedbackList, FeedbackSubmitted, MessageResponse, SubmitFeedbackRequest,
    TodoChanged, TodoItem, TodoList, TodoUpdate, UpdateTodoRequest,
};
use super::{bad_request, error_response, storage_error, AppState};

/// Configure feedback and per-employee todo routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/submit_feedback", web::post().to(submit_feedback))
        .route("/get_feedbacks", web::get().to(get_feedbacks))
        .route("/add_todo", web::post().to(add_todo))
        .route("/get_todos/{employee_name}", web::get().to(get_todos))
        .route("/update_todo/{todo_id}", web::put().to(update_todo))
        .route("/delete_todo/{todo_id}", web::delete().to(delete_todo));
}

async fn submit_feedback(
    state: web::Data<AppState>,
    req: web::Json<SubmitFeedbackRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("employee_name and feedback_text are required", &errors);
    }

    match state
        .store
        .insert_feedback(req.employee_name(), req.feedback_text())
        .await
    {
        Ok(feedback) => HttpResponse::Ok().json(FeedbackSubmitted {
            message: "Feedback submitted successfully".to_string(),
            feedback,
        }),
        Err(e) => storage_error("submit_feedback", e),
    }
}

async fn get_feedbacks(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_feedback().await {
        Ok(feedbacks) => HttpResponse::Ok().json(FeedbackList { feedbacks }),
        Err(e) => storage_error("get_feedbacks", e),
    }
}

async fn add_todo(state: web::Data<AppState>, req: web::Json<AddTodoRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("employee_name and task are required", &errors);
    }

    match state
        .store
        .insert_todo(req.employee_name(), req.task(), req.due_date())
        .await
    {
        Ok(todo) => HttpResponse::Created().json(TodoChanged {
            message: "To-Do added successfully.".to_string(),
            todo,
        }),
        Err(e) => storage_error("add_todo", e),
    }
}

async fn get_todos(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let employee_name = path.into_inner();

    match state.store.list_todos(&employee_name).await {
        Ok(todos) => HttpResponse::Ok().json(TodoList {
            employee_name,
            todos: todos.into_iter().map(TodoItem::from).collect(),
        }),
        Err(e) => storage_error("get_todos", e),
    }
}

/// Apply only the fields present in the body
///
/// PUT /update_todo/{todo_id}
async fn update_todo(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<UpdateTodoRequest>,
) -> impl Responder {
    let todo_id = path.into_inner();
    let req = req.into_inner();

    let update = TodoUpdate {
        // An explicit null marks the todo as not completed
        is_completed: req.is_completed.map(|v| v.unwrap_or(false)),
        task: req.task,
        due_date: req.due_date,
    };

    match state.store.update_todo(todo_id, update).await {
        Ok(Some(todo)) => HttpResponse::Ok().json(TodoChanged {
            message: "To-Do updated successfully.".to_string(),
            todo,
        }),
        Ok(None) => todo_not_found(todo_id),
        Err(e) => storage_error("update_todo", e),
    }
}

async fn delete_todo(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let todo_id = path.into_inner();

    match state.store.delete_todo(todo_id).await {
        Ok(true) => HttpResponse::Ok().json(MessageResponse {
            message: format!("To-Do {} deleted successfully.", todo_id),
        }),
        Ok(false) => todo_not_found(todo_id),
        Err(e) => storage_error("delete_todo", e),
    }
}

fn todo_not_found(todo_id: i64) -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        "To-Do not found",
        format!("No to-do with id {}", todo_id),
    )
}
