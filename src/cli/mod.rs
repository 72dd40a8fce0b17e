//! CLI commands
//!
//! Command implementations for the `webhook-submit` binary.

mod progress;
mod query;
mod style;
mod submit;

pub use query::run_query;
pub use submit::run_submit;
