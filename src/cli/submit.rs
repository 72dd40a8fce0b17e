//! Run command - request a webhook and submit the answer

use crate::cli::progress::CliProgress;
use tracing::debug;
use webhook_submit::api::HttpChallengeApi;
use webhook_submit::config::Settings;
use webhook_submit::error::Result;
use webhook_submit::submit::{preview_submission, run_submission};

/// Run the submit command
///
/// A failed run has already been reported on stderr by the progress
/// callback, so it does not turn into a failing exit status.
pub async fn run_submit(settings: &Settings, dry_run: bool) -> Result<()> {
    let api = HttpChallengeApi::new(settings)?;
    let progress = CliProgress;

    if dry_run {
        return preview_submission(&api, &settings.identity, &progress).await;
    }

    match run_submission(&api, &settings.identity, &progress).await {
        Ok(receipt) => debug!(status = receipt.status, "submission finished"),
        Err(e) => debug!(error = %e, "submission failed"),
    }

    Ok(())
}
