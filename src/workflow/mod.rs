pub mod submission;

pub use submission::{SubmissionController, SubmissionStatus};
