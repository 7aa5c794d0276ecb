pub mod interview;

pub use interview::{Interview, InterviewChanges, InterviewLevel, NewInterview};
