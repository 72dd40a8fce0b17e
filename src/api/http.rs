//! reqwest implementation of the challenge API

use crate::api::ChallengeApi;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::types::{IdentityInfo, SolutionPayload, SubmissionReceipt, WebhookGrant};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Request, StatusCode};
use tracing::{debug, warn};
use url::Url;

/// Challenge API over HTTP
pub struct HttpChallengeApi {
    client: Client,
    generate_webhook_url: Url,
}

impl HttpChallengeApi {
    /// Create a client from run settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(
            client,
            settings.generate_webhook_url.clone(),
        ))
    }

    /// Use an already configured client
    pub fn with_client(client: Client, generate_webhook_url: Url) -> Self {
        Self {
            client,
            generate_webhook_url,
        }
    }

    /// Build the generate-webhook request
    pub fn generate_request(&self, identity: &IdentityInfo) -> Result<Request> {
        Ok(self
            .client
            .post(self.generate_webhook_url.clone())
            .json(identity)
            .build()?)
    }

    /// Build the solution request for a grant
    pub fn solution_request(
        &self,
        grant: &WebhookGrant,
        payload: &SolutionPayload,
    ) -> Result<Request> {
        let url = Url::parse(&grant.webhook_url).map_err(|e| {
            Error::Unexpected(format!("invalid webhook URL {:?}: {e}", grant.webhook_url))
        })?;
        let token = HeaderValue::from_str(&grant.access_token)
            .map_err(|e| Error::Unexpected(format!("access token is not a valid header: {e}")))?;

        Ok(self
            .client
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, token)
            .json(payload)
            .build()?)
    }
}

/// Decode the generate-webhook response
///
/// Anything but a 200 with a JSON object body is a communication failure.
pub fn check_grant_response(status: StatusCode, body: &str) -> Result<WebhookGrant> {
    if status != StatusCode::OK {
        return Err(Error::communication(
            Some(status.as_u16()),
            "Failed to generate webhook",
        ));
    }

    if body.trim().is_empty() {
        return Err(Error::communication(
            Some(status.as_u16()),
            "Failed to generate webhook: empty response body",
        ));
    }

    let grant: Option<WebhookGrant> = serde_json::from_str(body).map_err(|e| {
        Error::communication(
            Some(status.as_u16()),
            format!("Failed to decode webhook response: {e}"),
        )
    })?;

    grant.ok_or_else(|| {
        Error::communication(
            Some(status.as_u16()),
            "Failed to generate webhook: null response body",
        )
    })
}

#[async_trait]
impl ChallengeApi for HttpChallengeApi {
    async fn generate_webhook(&self, identity: &IdentityInfo) -> Result<WebhookGrant> {
        let request = self.generate_request(identity)?;
        debug!(url = %request.url(), "requesting webhook");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "webhook response received");

        check_grant_response(status, &body)
    }

    async fn submit_solution(
        &self,
        grant: &WebhookGrant,
        payload: &SolutionPayload,
    ) -> Result<SubmissionReceipt> {
        let request = self.solution_request(grant, payload)?;
        debug!(url = %request.url(), "submitting solution");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%status, "solution submission rejected");
            return Err(Error::communication(
                Some(status.as_u16()),
                format!("Solution submission rejected: {body}"),
            ));
        }

        Ok(SubmissionReceipt {
            status: status.as_u16(),
            body,
        })
    }

    fn generate_webhook_url(&self) -> &str {
        self.generate_webhook_url.as_str()
    }
}
