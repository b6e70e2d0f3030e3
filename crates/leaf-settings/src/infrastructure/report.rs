//! Log-backed result reporter.
//!
//! Headless builds have no dialog to show, so a failed operation becomes one
//! `error!` line carrying the context and the full error chain.

use std::error::Error;

use tracing::error;

use crate::application::collaborators::ResultHandler;

/// Reports failures through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogResultHandler;

impl ResultHandler for LogResultHandler {
    fn handle_result(&self, err: &(dyn Error + 'static), context: &str) {
        error!(context, "operation failed: {}", error_chain(err));
    }
}

/// Joins an error and all of its sources with `": "`.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}
