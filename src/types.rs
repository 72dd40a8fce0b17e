//! Core types for webhook-submit

use serde::{Deserialize, Deserializer, Serialize};

/// Identity sent when requesting a webhook
///
/// Passed through verbatim; no field is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityInfo {
    /// Participant name
    pub name: String,
    /// Registration number
    #[serde(rename = "regNo")]
    pub reg_no: String,
    /// Contact email
    pub email: String,
}

/// Webhook URL and access token returned by the generate call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookGrant {
    /// Where the solution must be posted (`webhook` on the wire)
    #[serde(rename = "webhook", default, deserialize_with = "null_as_empty")]
    pub webhook_url: String,
    /// Sent back verbatim as the `Authorization` header
    #[serde(rename = "accessToken", default, deserialize_with = "null_as_empty")]
    pub access_token: String,
}

/// Absent and `null` fields both decode to an empty string
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl WebhookGrant {
    /// Whether both fields are populated
    pub fn is_complete(&self) -> bool {
        !self.webhook_url.is_empty() && !self.access_token.is_empty()
    }
}

/// Body of the solution submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolutionPayload {
    /// SQL text, submitted as-is
    #[serde(rename = "finalQuery")]
    pub query: String,
}

/// Status and raw body of the solution submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// HTTP status code
    pub status: u16,
    /// Response body, unparsed
    pub body: String,
}
