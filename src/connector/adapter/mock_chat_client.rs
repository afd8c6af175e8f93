use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{build_messages, ClientError, GenerationParams};

/// Offline [`ChatClient`] that echoes a description of the request.
///
/// The reply honours `max_tokens` (counted as words) and is cut at the first
/// stop sequence, so both sides of a comparison differ the way a real model's
/// replies would.
pub struct MockChatClient;

impl MockChatClient {
    pub fn new() -> Self {
        Self
    }

    fn generate_reply(prompt: &str, model: &str, params: Option<&GenerationParams>) -> String {
        let messages = build_messages(prompt, params);
        let roles: Vec<&str> = messages.iter().map(|m| m.role().as_str()).collect();

        let mut reply = format!("[{model}] ({}) {prompt}", roles.join(","));
        if let Some(instruction) = params.and_then(|p| p.format_instruction()) {
            reply.push_str(&format!(" | format: {instruction}"));
        }

        if let Some(stops) = params.and_then(|p| p.stop()) {
            if let Some(cut) = stops
                .iter()
                .filter(|s| !s.is_empty())
                .filter_map(|s| reply.find(s.as_str()))
                .min()
            {
                reply.truncate(cut);
            }
        }

        if let Some(max_tokens) = params.and_then(|p| p.max_tokens()) {
            reply = reply
                .split_whitespace()
                .take(max_tokens as usize)
                .collect::<Vec<_>>()
                .join(" ");
        }

        reply.trim_end().to_string()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn send(
        &self,
        prompt: &str,
        model: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, ClientError> {
        let reply = Self::generate_reply(prompt, model, params);
        debug!("MockChatClient reply: {reply}");
        Ok(reply)
    }
}

/// Hands out [`MockChatClient`]s regardless of the API key.
pub struct MockChatClientFactory;

impl MockChatClientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockChatClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatClientFactory for MockChatClientFactory {
    fn create(&self, _api_key: &str) -> Result<Arc<dyn ChatClient>, ClientError> {
        Ok(Arc::new(MockChatClient::new()))
    }
}
