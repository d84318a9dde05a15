// Integration tests for the HR onboarding service

use actix_web::{http::StatusCode, test, web, App};
use hr_onboard::core::{default_mentor_specs, Matcher, MentorRegistry};
use hr_onboard::routes::{self, AppState};
use hr_onboard::services::{HrStore, MemoryStore};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

fn app_state(store: Arc<MemoryStore>) -> AppState {
    let registry = MentorRegistry::from_specs(default_mentor_specs()).unwrap();
    AppState {
        store,
        matcher: Matcher::new(Arc::new(registry)),
    }
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(app_state($store.clone())))
                .configure(routes::configure_extractors)
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_add_then_assign_mentor_end_to_end() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({
            "name": "Nur Aisyah",
            "ic_number": "IC-0001",
            "position": "Software Engineer",
            "email_prefix": "nur.aisyah",
            "languages": "Python",
            "skills": "Web, Backend"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["candidate"]["email"], "nur.aisyah@company.com");

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({ "ic_number": "IC-0001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Mentor Alice assigned to Nur Aisyah.");
    assert_eq!(body["candidate"]["mentor"], "Alice");
    assert_eq!(body["candidate"]["mentor_email"], "alice123@npc.com");
    assert_eq!(body["candidate"]["languages"], "Python");
    assert_eq!(body["candidate"]["areaExperts"], "Web, Backend");
    assert_eq!(body["candidate"]["ic"], "IC-0001");

    // The assignment is persisted
    let stored = store.find_candidate_by_ic("IC-0001").await.unwrap().unwrap();
    assert_eq!(stored.mentor.as_deref(), Some("Alice"));
}

#[actix_web::test]
async fn test_assign_mentor_accepts_ic_alias() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({
            "name": "Ken",
            "ic_number": "IC-0002",
            "position": "Data Scientist"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({ "ic": "IC-0002" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    // Role match alone gives Bob two points
    assert_eq!(body["candidate"]["mentor"], "Bob");
    assert_eq!(body["candidate"]["mentor_email"], "bobatea@npc.com");
}

#[actix_web::test]
async fn test_assign_mentor_missing_ic_is_bad_request() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "ic_number is required");
}

#[actix_web::test]
async fn test_assign_mentor_null_ic_is_bad_request() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    for payload in [json!({ "ic_number": null }), json!({ "ic_number": null, "ic": "" })] {
        let req = test::TestRequest::post()
            .uri("/assign_mentor")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "ic_number is required");
    }
}

#[actix_web::test]
async fn test_assign_mentor_empty_ic_number_falls_back_to_ic() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({ "name": "Farah", "ic_number": "IC-1", "position": "Software Engineer" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({ "ic": "IC-1", "ic_number": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["candidate"]["ic"], "IC-1");
    assert_eq!(body["candidate"]["mentor"], "Alice");
}

#[actix_web::test]
async fn test_assign_mentor_empty_registry_is_server_error() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        matcher: Matcher::new(Arc::new(MentorRegistry::default())),
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(routes::configure_extractors)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({ "name": "Omar", "ic_number": "IC-0009", "position": "Designer" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({ "ic_number": "IC-0009" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Configuration error");
    assert_eq!(body["status_code"], 500);

    // Nothing was written
    let stored = store.find_candidate_by_ic("IC-0009").await.unwrap().unwrap();
    assert_eq!(stored.mentor, None);
}

#[actix_web::test]
async fn test_null_required_fields_are_bad_requests() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let cases = [
        ("/verify_candidate", json!({ "name": null, "ic": "IC-0001" })),
        ("/add_candidate", json!({ "name": "Zed", "ic_number": null, "position": "Chef" })),
        ("/ideas", json!({ "text": null })),
        ("/tasks", json!({ "date": "2025-02-03", "task": null })),
        ("/submit_feedback", json!({ "employee_name": null, "feedbackText": "Hi" })),
        ("/add_todo", json!({ "employeeName": "Ana", "task": null })),
    ];

    for (uri, payload) in cases {
        let req = test::TestRequest::post().uri(uri).set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().ends_with("required"), "{}", uri);
    }
}

#[actix_web::test]
async fn test_assign_mentor_unknown_candidate_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .set_json(json!({ "ic_number": "IC-404" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Candidate not found");
}

#[actix_web::test]
async fn test_zero_score_assignment_overwrites_previous_mentor() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({
            "name": "Omar",
            "ic_number": "IC-0003",
            "position": "Chef"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let roster: HashSet<&str> = ["Alice", "Bob", "Charlie", "Default Mentor"].into_iter().collect();

    for _ in 0..10 {
        let req = test::TestRequest::post()
            .uri("/assign_mentor")
            .set_json(json!({ "ic_number": "IC-0003" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let mentor = body["candidate"]["mentor"].as_str().unwrap().to_string();
        assert!(roster.contains(mentor.as_str()));

        // Every call leaves the latest pick on the record
        let stored = store.find_candidate_by_ic("IC-0003").await.unwrap().unwrap();
        assert_eq!(stored.mentor, Some(mentor));
    }
}

#[actix_web::test]
async fn test_add_candidate_duplicate_and_missing_fields() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let payload = json!({
        "name": "Li Wei",
        "ic_number": "IC-0004",
        "position": "Firmware Engineer"
    });

    let req = test::TestRequest::post().uri("/add_candidate").set_json(&payload).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/add_candidate").set_json(&payload).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Candidate already exists");

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({ "name": "No IC" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_verify_candidate() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({ "name": "Sara", "ic_number": "IC-0005", "position": "Product Manager" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/verify_candidate")
        .set_json(json!({ "name": "Sara", "ic": "IC-0005" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Candidate verified successfully.");
    assert_eq!(body["candidate"]["position"], "Product Manager");

    let req = test::TestRequest::post()
        .uri("/verify_candidate")
        .set_json(json!({ "name": "Someone Else", "ic_number": "IC-0005" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_resumes_split_lists() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/add_candidate")
        .set_json(json!({
            "name": "Hana",
            "ic_number": "IC-0006",
            "position": "Data Scientist",
            "skills": "SQL, , Machine Learning",
            "languages": "English, Malay"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/resumes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let resume = &body[0];
    assert_eq!(resume["skills"], json!(["SQL", "Machine Learning"]));
    assert_eq!(resume["languages"], json!(["English", "Malay"]));
    assert_eq!(resume["mentor"], "");
    assert_eq!(resume["yearsExp"], 0);
    assert_eq!(resume["ic"], "IC-0006");
}

#[actix_web::test]
async fn test_ideas_and_tasks() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/ideas")
        .set_json(json!({ "idea": "Buddy lunches for new hires" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let idea: Value = test::read_body_json(resp).await;
    assert_eq!(idea["status"], "Pending Review");
    assert_eq!(idea["submittedAt"].as_str().unwrap().len(), 10);

    let req = test::TestRequest::post().uri("/ideas").set_json(json!({})).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/tasks")
        .set_json(json!({ "date": "2025-02-03", "taskText": "Collect laptop" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let task: Value = test::read_body_json(resp).await;
    assert_eq!(task["priority"], "Medium");
    assert_eq!(task["status"], "Not Started");

    let req = test::TestRequest::get().uri("/tasks").to_request();
    let tasks: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_feedback_and_todos() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/submit_feedback")
        .set_json(json!({ "employeeName": "Ana", "feedbackText": "Smooth onboarding" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/get_feedbacks").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["feedbacks"][0]["employee_name"], "Ana");

    let req = test::TestRequest::post()
        .uri("/add_todo")
        .set_json(json!({ "employee_name": "Ana", "task": "Sign NDA", "dueDate": "2025-02-10" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let todo_id = body["todo"]["id"].as_i64().unwrap();
    assert_eq!(body["todo"]["is_completed"], false);

    let req = test::TestRequest::put()
        .uri(&format!("/update_todo/{}", todo_id))
        .set_json(json!({ "is_completed": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["todo"]["is_completed"], true);
    assert_eq!(body["todo"]["due_date"], "2025-02-10");

    let req = test::TestRequest::get().uri("/get_todos/Ana").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["employee_name"], "Ana");
    assert_eq!(body["todos"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/delete_todo/{}", todo_id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], format!("To-Do {} deleted successfully.", todo_id));

    let req = test::TestRequest::delete()
        .uri(&format!("/delete_todo/{}", todo_id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_json_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::post()
        .uri("/assign_mentor")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_non_numeric_todo_id_is_not_found() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::delete().uri("/delete_todo/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_path");
    assert_eq!(body["status_code"], 404);
}

#[actix_web::test]
async fn test_health_and_ping() {
    let store = Arc::new(MemoryStore::new());
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/ping").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Backend API is running!");
}
