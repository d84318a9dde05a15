use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    AddCandidateRequest, AddCandidateResponse, AddedCandidate, AssignMentorRequest,
    AssignMentorResponse, AssignedCandidate, Resume, VerifiedCandidate,
    VerifyCandidateRequest, VerifyCandidateResponse,
};
use crate::services::{assign_mentor, AssignmentError, StoreError};
use super::{bad_request, error_response, storage_error, AppState};

/// Domain used for emails built from `email_prefix`
const COMPANY_EMAIL_DOMAIN: &str = "company.com";

/// Configure candidate and mentor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assign_mentor", web::post().to(assign_mentor_handler))
        .route("/verify_candidate", web::post().to(verify_candidate))
        .route("/add_candidate", web::post().to(add_candidate))
        .route("/resumes", web::get().to(get_resumes));
}

/// Assign the best-fit mentor to a candidate
///
/// POST /assign_mentor
///
/// Request body:
/// ```json
/// { "ic_number": "IC-0001" }
/// ```
async fn assign_mentor_handler(
    state: web::Data<AppState>,
    req: web::Json<AssignMentorRequest>,
) -> impl Responder {
    let mut rng = rand::rng();
    let outcome = assign_mentor(state.store.as_ref(), &state.matcher, req.ic_number(), &mut rng).await;

    match outcome {
        Ok(assignment) => {
            let candidate = assignment.candidate;
            let mentor = assignment.result.mentor_name;

            HttpResponse::Ok().json(AssignMentorResponse {
                message: format!("Mentor {} assigned to {}.", mentor, candidate.name),
                candidate: AssignedCandidate {
                    name: candidate.name,
                    position: candidate.position,
                    languages: candidate.languages,
                    area_experts: candidate.skills_csv,
                    mentor: candidate.mentor,
                    mentor_email: assignment.mentor_email,
                    ic: candidate.ic_number,
                },
            })
        }
        Err(AssignmentError::InvalidArgument(msg)) => {
            error_response(StatusCode::BAD_REQUEST, &msg, msg.clone())
        }
        Err(AssignmentError::NotFound(ic)) => error_response(
            StatusCode::NOT_FOUND,
            "Candidate not found",
            format!("No candidate with IC number {}", ic),
        ),
        Err(AssignmentError::Configuration(msg)) => {
            tracing::error!("Mentor assignment misconfigured: {}", msg);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Configuration error", msg)
        }
        Err(AssignmentError::Storage(e)) => storage_error("assign_mentor", e),
    }
}

/// Confirm a candidate exists with exactly this name and IC number
///
/// POST /verify_candidate
async fn verify_candidate(
    state: web::Data<AppState>,
    req: web::Json<VerifyCandidateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("name and ic_number are required", &errors);
    }

    match state.store.find_candidate(req.name(), req.ic_number()).await {
        Ok(Some(candidate)) => HttpResponse::Ok().json(VerifyCandidateResponse {
            message: "Candidate verified successfully.".to_string(),
            candidate: VerifiedCandidate {
                name: candidate.name,
                position: candidate.position,
                email: candidate.email,
                ic: candidate.ic_number,
            },
        }),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "Candidate not found",
            format!("No candidate named {} with IC number {}", req.name(), req.ic_number()),
        ),
        Err(e) => storage_error("verify_candidate", e),
    }
}

/// Register a candidate ahead of onboarding
///
/// POST /add_candidate
async fn add_candidate(
    state: web::Data<AppState>,
    req: web::Json<AddCandidateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("name, ic_number, and position are required", &errors);
    }

    match state.store.find_candidate_by_ic(req.ic_number()).await {
        Ok(Some(_)) => return already_exists(req.ic_number()),
        Ok(None) => {}
        Err(e) => return storage_error("add_candidate", e),
    }

    let new_candidate = req.into_inner().into_new_candidate(COMPANY_EMAIL_DOMAIN);

    match state.store.insert_candidate(new_candidate).await {
        Ok(candidate) => {
            tracing::info!("Added candidate {} ({})", candidate.name, candidate.ic_number);
            HttpResponse::Created().json(AddCandidateResponse {
                message: format!("Candidate {} added successfully.", candidate.name),
                candidate: AddedCandidate {
                    name: candidate.name,
                    ic_number: candidate.ic_number,
                    position: candidate.position,
                    email: candidate.email,
                },
            })
        }
        Err(StoreError::Conflict(ic)) => already_exists(&ic),
        Err(e) => storage_error("add_candidate", e),
    }
}

fn already_exists(ic_number: &str) -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        "Candidate already exists",
        format!("A candidate with IC number {} already exists", ic_number),
    )
}

/// List every candidate as a resume
///
/// GET /resumes
async fn get_resumes(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_candidates().await {
        Ok(candidates) => {
            let resumes: Vec<Resume> = candidates.into_iter().map(Resume::from).collect();
            HttpResponse::Ok().json(resumes)
        }
        Err(e) => storage_error("get_resumes", e),
    }
}
