//! Challenge API client
//!
//! The two remote calls of a submission run, behind a trait so the workflow
//! can be driven against a mock.

mod http;

pub use http::{HttpChallengeApi, check_grant_response};

use crate::error::Result;
use crate::types::{IdentityInfo, SolutionPayload, SubmissionReceipt, WebhookGrant};
use async_trait::async_trait;

/// Remote operations used by a submission run
#[async_trait]
pub trait ChallengeApi: Send + Sync {
    /// Request a webhook URL and access token for this identity
    ///
    /// Succeeds only on HTTP 200 with a decodable body.
    async fn generate_webhook(&self, identity: &IdentityInfo) -> Result<WebhookGrant>;

    /// Post the solution to the granted webhook
    ///
    /// The access token is sent as the `Authorization` header unchanged.
    async fn submit_solution(
        &self,
        grant: &WebhookGrant,
        payload: &SolutionPayload,
    ) -> Result<SubmissionReceipt>;

    /// Endpoint the generate call is sent to
    fn generate_webhook_url(&self) -> &str;
}
