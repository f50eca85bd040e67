//! Test doubles shared by handler and state tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use compass_core::{CompassError, Extractor, Result, StructuredModel};

use crate::config::WebConfig;
use crate::state::AppState;

/// Model that answers every call the same way and counts calls.
pub struct FakeModel {
    reply: std::result::Result<Value, (u16, String)>,
    calls: AtomicUsize,
}

impl FakeModel {
    /// Replies with `value` on every call.
    pub fn replying(value: Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(value),
            calls: AtomicUsize::new(0),
        })
    }

    /// Fails every call with a provider error.
    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err((status, message.to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of provider calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructuredModel for FakeModel {
    async fn generate(&self, _prompt: &str, _schema: &Value) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err((status, message)) => Err(CompassError::Provider {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

/// State backed by `model`.
pub fn state_with(model: Arc<FakeModel>) -> AppState {
    AppState::with_extractor(WebConfig::default(), Extractor::new(model)).unwrap()
}
