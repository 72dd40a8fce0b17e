//! webhook-submit - challenge webhook client
//!
//! Asks the challenge API for a webhook URL and access token, then posts the
//! fixed SQL answer to that webhook.

pub mod api;
pub mod config;
pub mod error;
pub mod query;
pub mod submit;
pub mod types;
