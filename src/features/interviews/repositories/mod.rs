pub mod interview_repository;

pub use interview_repository::{InterviewRepository, PgInterviewRepository};
