pub mod interview_handler;

pub use interview_handler::*;
