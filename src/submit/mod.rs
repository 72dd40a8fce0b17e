//! Submission workflow
//!
//! Two sequential calls:
//! 1. Generate - exchange the identity for a webhook URL and access token
//! 2. Submit - post the SQL answer to that webhook

mod execute;
mod progress;

pub use execute::{preview_submission, run_submission};
pub use progress::{NoopProgress, ProgressCallback, Stage};
