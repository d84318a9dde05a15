// Service exports
pub mod assignment;
pub mod memory;
pub mod postgres;
pub mod store;

pub use assignment::{assign_mentor, AssignmentError, MentorAssignment};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use store::{HrStore, StoreError};
