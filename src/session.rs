//! Hand-off point to whatever runs the language model
//!
//! The popover never talks to a model itself. It tells a [`ModelSession`]
//! when the user resets the context or switches models.

use std::fmt::Debug;
use tracing::info;

/// Receiver for model-session requests raised from the popover
pub trait ModelSession: Debug {
    /// Drop the conversation context held for `model`
    fn reset_context(&mut self, model: &str);

    /// The user made `model` the active model
    fn model_selected(&mut self, model: &str) {
        let _ = model;
    }
}

/// Session that only records requests in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSession;

impl ModelSession for LoggingSession {
    fn reset_context(&mut self, model: &str) {
        info!(model, "Resetting context");
    }

    fn model_selected(&mut self, model: &str) {
        info!(model, "Model selected");
    }
}
