//! CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, arrow, check, cross, hyperlink_url};
use anstream::{eprintln, println};
use async_trait::async_trait;
use webhook_submit::error::Error;
use webhook_submit::submit::{ProgressCallback, Stage};
use webhook_submit::types::{SubmissionReceipt, WebhookGrant};

/// CLI progress callback that prints to stdout, failures to stderr
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Starting => {
                println!("{}", "Starting webhook submission...".emphasis());
            }
            Stage::Complete => {
                println!("{} {}", check(), "Successfully submitted the solution!".success());
            }
            _ => {}
        }
    }

    async fn on_request(&self, stage: Stage, url: &str) {
        let label = match stage {
            Stage::SubmittingSolution => "Submitting solution to",
            _ => "Sending request to generate webhook at",
        };
        println!(
            "{} {label}: {}",
            arrow(),
            hyperlink_url(Stream::Stdout, url).accent()
        );
    }

    async fn on_grant(&self, grant: &WebhookGrant) {
        println!(
            "{} Successfully generated webhook: {}",
            check(),
            hyperlink_url(Stream::Stdout, &grant.webhook_url).accent()
        );
    }

    async fn on_query(&self, sql: &str) {
        println!("{}", "Generated SQL Query:".emphasis());
        println!("{}", sql.muted());
    }

    async fn on_receipt(&self, receipt: &SubmissionReceipt) {
        println!("Submission response status: {}", receipt.status.accent());
        println!("Submission response body: {}", receipt.body);
    }

    async fn on_error(&self, error: &Error) {
        let label = if error.is_communication() {
            "An error occurred during the API communication"
        } else {
            "An unexpected error occurred"
        };
        eprintln!("{} {}: {error}", cross(), label.error());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
