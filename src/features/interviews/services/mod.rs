pub mod interview_service;

pub use interview_service::InterviewService;
