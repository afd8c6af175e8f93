//! Recording [`ChatClient`] double shared by the use case tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{ClientError, GenerationParams};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub api_key: String,
    pub prompt: String,
    pub model: String,
    pub params: Option<GenerationParams>,
}

#[derive(Default)]
pub struct RecordingFactory {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_when_stopped: bool,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests carrying a stop list fail with HTTP 429.
    pub fn failing_when_stopped() -> Self {
        Self {
            fail_when_stopped: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl ChatClientFactory for RecordingFactory {
    fn create(&self, api_key: &str) -> Result<Arc<dyn ChatClient>, ClientError> {
        Ok(Arc::new(RecordingClient {
            api_key: api_key.to_string(),
            calls: self.calls.clone(),
            fail_when_stopped: self.fail_when_stopped,
        }))
    }
}

struct RecordingClient {
    api_key: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    fail_when_stopped: bool,
}

#[async_trait]
impl ChatClient for RecordingClient {
    async fn send(
        &self,
        prompt: &str,
        model: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            api_key: self.api_key.clone(),
            prompt: prompt.to_string(),
            model: model.to_string(),
            params: params.cloned(),
        });

        if self.fail_when_stopped && params.and_then(|p| p.stop()).is_some() {
            return Err(ClientError::http(429, "rate limited"));
        }
        Ok(format!("reply to {prompt}"))
    }
}
