//! Progress callback trait for interface-agnostic updates
//!
//! Lets the CLI (or a test) observe a submission run as it moves through its
//! stages.

use crate::error::Error;
use crate::types::{SubmissionReceipt, WebhookGrant};
use async_trait::async_trait;

/// Submission stage
///
/// Runs move strictly forward:
/// `Starting → RequestingGrant → GrantReceived → QueryGenerated →
/// SubmittingSolution → Complete`. A failure in either request ends the run
/// and is reported through [`ProgressCallback::on_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Run started
    Starting,
    /// Generate-webhook call in flight
    RequestingGrant,
    /// Webhook URL and token obtained
    GrantReceived,
    /// SQL answer prepared
    QueryGenerated,
    /// Solution call in flight
    SubmittingSolution,
    /// Solution accepted
    Complete,
}

/// Progress callback trait
///
/// Implement this trait to receive updates during a submission run.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new stage
    async fn on_stage(&self, stage: Stage);

    /// Called before a request is sent
    async fn on_request(&self, stage: Stage, url: &str);

    /// Called once the webhook grant is in hand
    async fn on_grant(&self, grant: &WebhookGrant);

    /// Called with the SQL text about to be submitted
    async fn on_query(&self, sql: &str);

    /// Called with the solution response
    async fn on_receipt(&self, receipt: &SubmissionReceipt);

    /// Called when the run fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_stage(&self, _stage: Stage) {}
    async fn on_request(&self, _stage: Stage, _url: &str) {}
    async fn on_grant(&self, _grant: &WebhookGrant) {}
    async fn on_query(&self, _sql: &str) {}
    async fn on_receipt(&self, _receipt: &SubmissionReceipt) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
