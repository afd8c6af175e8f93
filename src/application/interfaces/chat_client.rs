use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ClientError, GenerationParams};

/// Model used when the caller does not name one.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Sends one prompt to a chat-completions model and returns the reply text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific API
/// details. Each call is independent: no conversation history is kept and
/// exactly one request is issued, with no retries.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` as the user message, preceded by a system message when
    /// `params` carries a non-empty format instruction.
    async fn send(
        &self,
        prompt: &str,
        model: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, ClientError>;
}

/// Builds [`ChatClient`]s bound to a single API credential.
pub trait ChatClientFactory: Send + Sync {
    fn create(&self, api_key: &str) -> Result<Arc<dyn ChatClient>, ClientError>;
}
