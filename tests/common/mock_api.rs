//! Mock challenge API for testing
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use webhook_submit::api::ChallengeApi;
use webhook_submit::error::{Error, Result};
use webhook_submit::types::{IdentityInfo, SolutionPayload, SubmissionReceipt, WebhookGrant};

/// Call record for `submit_solution`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCall {
    pub webhook_url: String,
    pub access_token: String,
    pub payload: SolutionPayload,
}

/// Mock challenge API
///
/// Features:
/// - Configurable grant and receipt
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockChallengeApi {
    generate_url: String,
    grant: Mutex<WebhookGrant>,
    receipt: Mutex<SubmissionReceipt>,
    // Call tracking
    generate_calls: Mutex<Vec<IdentityInfo>>,
    submit_calls: Mutex<Vec<SubmitCall>>,
    // Error injection
    error_on_generate: Mutex<Option<Error>>,
    error_on_submit: Mutex<Option<Error>>,
}

impl MockChallengeApi {
    /// Create a mock that hands out the given grant
    pub fn with_grant(webhook_url: &str, access_token: &str) -> Self {
        Self {
            generate_url: "https://example.test/hiring/generateWebhook".to_string(),
            grant: Mutex::new(WebhookGrant {
                webhook_url: webhook_url.to_string(),
                access_token: access_token.to_string(),
            }),
            receipt: Mutex::new(SubmissionReceipt {
                status: 200,
                body: r#"{"success":true}"#.to_string(),
            }),
            generate_calls: Mutex::new(Vec::new()),
            submit_calls: Mutex::new(Vec::new()),
            error_on_generate: Mutex::new(None),
            error_on_submit: Mutex::new(None),
        }
    }

    // === Error injection methods ===

    /// Make `generate_webhook` fail with a communication error
    pub fn fail_generate(&self, status: u16) {
        *self.error_on_generate.lock().unwrap() = Some(Error::communication(
            Some(status),
            "Failed to generate webhook",
        ));
    }

    /// Make `submit_solution` fail with a communication error
    pub fn fail_submit(&self, status: u16, body: &str) {
        *self.error_on_submit.lock().unwrap() = Some(Error::communication(
            Some(status),
            format!("Solution submission rejected: {body}"),
        ));
    }

    /// Set the receipt returned by `submit_solution`
    pub fn set_receipt(&self, status: u16, body: &str) {
        *self.receipt.lock().unwrap() = SubmissionReceipt {
            status,
            body: body.to_string(),
        };
    }

    // === Call verification methods ===

    /// Identities `generate_webhook` was called with
    pub fn get_generate_calls(&self) -> Vec<IdentityInfo> {
        self.generate_calls.lock().unwrap().clone()
    }

    /// Calls made to `submit_solution`
    pub fn get_submit_calls(&self) -> Vec<SubmitCall> {
        self.submit_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChallengeApi for MockChallengeApi {
    async fn generate_webhook(&self, identity: &IdentityInfo) -> Result<WebhookGrant> {
        self.generate_calls.lock().unwrap().push(identity.clone());
        if let Some(err) = self.error_on_generate.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.grant.lock().unwrap().clone())
    }

    async fn submit_solution(
        &self,
        grant: &WebhookGrant,
        payload: &SolutionPayload,
    ) -> Result<SubmissionReceipt> {
        self.submit_calls.lock().unwrap().push(SubmitCall {
            webhook_url: grant.webhook_url.clone(),
            access_token: grant.access_token.clone(),
            payload: payload.clone(),
        });
        if let Some(err) = self.error_on_submit.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.receipt.lock().unwrap().clone())
    }

    fn generate_webhook_url(&self) -> &str {
        &self.generate_url
    }
}
