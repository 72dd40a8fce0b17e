//! Run settings
//!
//! Built once at startup and passed into the workflow by reference.

use crate::error::{Error, Result};
use crate::types::IdentityInfo;
use std::time::Duration;
use url::Url;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything a submission run needs from the outside world
#[derive(Debug, Clone)]
pub struct Settings {
    /// Identity sent in the generate call
    pub identity: IdentityInfo,
    /// Endpoint of the generate call
    pub generate_webhook_url: Url,
    /// Per-request timeout for the HTTP client
    pub timeout: Duration,
}

impl Settings {
    /// Create settings, validating the generate-webhook URL
    pub fn new(identity: IdentityInfo, generate_webhook_url: &str) -> Result<Self> {
        let generate_webhook_url = Url::parse(generate_webhook_url)?;
        if !matches!(generate_webhook_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "generate-webhook URL must be http or https: {generate_webhook_url}"
            )));
        }

        Ok(Self {
            identity,
            generate_webhook_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
