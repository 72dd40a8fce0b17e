//! Submission execution
//!
//! Requests the webhook grant, then posts the SQL answer to it.

use crate::api::ChallengeApi;
use crate::error::{Error, Result};
use crate::query::final_query;
use crate::submit::{ProgressCallback, Stage};
use crate::types::{IdentityInfo, SolutionPayload, SubmissionReceipt, WebhookGrant};

/// Run one submission
///
/// The solution call is only made once the generate call has returned a
/// grant with both a webhook URL and an access token. Any failure is passed
/// to [`ProgressCallback::on_error`] and returned.
pub async fn run_submission(
    api: &dyn ChallengeApi,
    identity: &IdentityInfo,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    match execute(api, identity, progress).await {
        Ok(receipt) => Ok(receipt),
        Err(e) => {
            progress.on_error(&e).await;
            Err(e)
        }
    }
}

async fn execute(
    api: &dyn ChallengeApi,
    identity: &IdentityInfo,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionReceipt> {
    progress.on_stage(Stage::Starting).await;

    progress.on_stage(Stage::RequestingGrant).await;
    progress
        .on_request(Stage::RequestingGrant, api.generate_webhook_url())
        .await;
    let grant = api.generate_webhook(identity).await?;
    ensure_complete(&grant)?;

    progress.on_stage(Stage::GrantReceived).await;
    progress.on_grant(&grant).await;

    let payload = SolutionPayload {
        query: final_query().to_string(),
    };
    progress.on_stage(Stage::QueryGenerated).await;
    progress.on_query(&payload.query).await;

    progress.on_stage(Stage::SubmittingSolution).await;
    progress
        .on_request(Stage::SubmittingSolution, &grant.webhook_url)
        .await;
    let receipt = api.submit_solution(&grant, &payload).await?;
    progress.on_receipt(&receipt).await;

    progress.on_stage(Stage::Complete).await;
    Ok(receipt)
}

fn ensure_complete(grant: &WebhookGrant) -> Result<()> {
    if grant.webhook_url.is_empty() {
        return Err(Error::Unexpected(
            "webhook response is missing the webhook URL".to_string(),
        ));
    }
    if grant.access_token.is_empty() {
        return Err(Error::Unexpected(
            "webhook response is missing the access token".to_string(),
        ));
    }
    Ok(())
}

/// Show what a run would send, without making any request
pub async fn preview_submission(
    api: &dyn ChallengeApi,
    identity: &IdentityInfo,
    progress: &dyn ProgressCallback,
) -> Result<()> {
    let payload = SolutionPayload {
        query: final_query().to_string(),
    };
    let identity_json = serde_json::to_string_pretty(identity)
        .map_err(|e| Error::Unexpected(format!("failed to encode identity: {e}")))?;
    let payload_json = serde_json::to_string_pretty(&payload)
        .map_err(|e| Error::Unexpected(format!("failed to encode solution: {e}")))?;

    progress
        .on_message("Dry run - no requests will be sent")
        .await;
    progress
        .on_request(Stage::RequestingGrant, api.generate_webhook_url())
        .await;
    progress.on_message(&identity_json).await;
    progress
        .on_message("Solution body, sent to the returned webhook with Authorization: <accessToken>")
        .await;
    progress.on_message(&payload_json).await;
    Ok(())
}
