// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, CandidateProfile, Feedback, Idea, MatchResult, MentorProfile, NewCandidate, Task, Todo,
    TodoUpdate,
};
pub use requests::{
    AddCandidateRequest, AddTodoRequest, AssignMentorRequest, CreateIdeaRequest, CreateTaskRequest,
    SubmitFeedbackRequest, UpdateTodoRequest, VerifyCandidateRequest,
};
pub use responses::{
    AddCandidateResponse, AddedCandidate, AssignMentorResponse, AssignedCandidate, ErrorResponse,
    FeedbackList, FeedbackSubmitted, HealthResponse, MessageResponse, Resume, TodoChanged, TodoItem,
    TodoList, VerifiedCandidate, VerifyCandidateResponse,
};
