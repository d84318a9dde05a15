use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::domain::{IDEA_DEFAULT_STATUS, TASK_DEFAULT_PRIORITY, TASK_DEFAULT_STATUS};
use crate::models::{CreateIdeaRequest, CreateTaskRequest};
use super::{bad_request, storage_error, AppState};

/// Configure idea board and task calendar routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ideas")
            .route(web::get().to(list_ideas))
            .route(web::post().to(create_idea)),
    )
    .service(
        web::resource("/tasks")
            .route(web::get().to(list_tasks))
            .route(web::post().to(create_task)),
    );
}

async fn list_ideas(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_ideas().await {
        Ok(ideas) => HttpResponse::Ok().json(ideas),
        Err(e) => storage_error("list_ideas", e),
    }
}

/// Submit an idea, dated today (UTC)
async fn create_idea(
    state: web::Data<AppState>,
    req: web::Json<CreateIdeaRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("text is required", &errors);
    }

    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    match state.store.insert_idea(req.text(), IDEA_DEFAULT_STATUS, &today).await {
        Ok(idea) => HttpResponse::Created().json(idea),
        Err(e) => storage_error("create_idea", e),
    }
}

async fn list_tasks(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_tasks().await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(e) => storage_error("list_tasks", e),
    }
}

async fn create_task(
    state: web::Data<AppState>,
    req: web::Json<CreateTaskRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("date and task are required", &errors);
    }

    let priority = req.priority().unwrap_or(TASK_DEFAULT_PRIORITY);

    match state
        .store
        .insert_task(req.date(), req.task(), TASK_DEFAULT_STATUS, priority)
        .await
    {
        Ok(task) => HttpResponse::Created().json(task),
        Err(e) => storage_error("create_task", e),
    }
}
