//! Test data factories and a recording progress callback
//!
//! These are test utilities - not every helper is used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use webhook_submit::error::Error;
use webhook_submit::submit::{ProgressCallback, Stage};
use webhook_submit::types::{IdentityInfo, SubmissionReceipt, WebhookGrant};

/// The SQL answer as checked in next to the tests
pub const EXPECTED_QUERY: &str = include_str!("../fixtures/final_query.sql");

/// Create an identity with default values
pub fn make_identity() -> IdentityInfo {
    IdentityInfo {
        name: "Jane Doe".to_string(),
        reg_no: "REG12347".to_string(),
        email: "jane@example.com".to_string(),
    }
}

/// Progress event, as seen by [`RecordingProgress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Stage(Stage),
    Request(Stage, String),
    Grant(WebhookGrant),
    Query(String),
    Receipt(SubmissionReceipt),
    Error { communication: bool, message: String },
    Message(String),
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<Event>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Stages entered, in order
    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Stage(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Errors reported, as (is_communication, message)
    pub fn errors(&self) -> Vec<(bool, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error {
                    communication,
                    message,
                } => Some((communication, message)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_stage(&self, stage: Stage) {
        self.push(Event::Stage(stage));
    }

    async fn on_request(&self, stage: Stage, url: &str) {
        self.push(Event::Request(stage, url.to_string()));
    }

    async fn on_grant(&self, grant: &WebhookGrant) {
        self.push(Event::Grant(grant.clone()));
    }

    async fn on_query(&self, sql: &str) {
        self.push(Event::Query(sql.to_string()));
    }

    async fn on_receipt(&self, receipt: &SubmissionReceipt) {
        self.push(Event::Receipt(receipt.clone()));
    }

    async fn on_error(&self, error: &Error) {
        self.push(Event::Error {
            communication: error.is_communication(),
            message: error.to_string(),
        });
    }

    async fn on_message(&self, message: &str) {
        self.push(Event::Message(message.to_string()));
    }
}
