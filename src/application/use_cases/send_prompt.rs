use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{
    ChatClient, ChatClientFactory, CredentialStore, DEFAULT_MODEL,
};
use crate::domain::{ClientError, GenerationParams};

/// Sends a single prompt with optional generation parameters.
pub struct SendPromptUseCase {
    credentials: Arc<dyn CredentialStore>,
    clients: Arc<dyn ChatClientFactory>,
    model: String,
}

impl SendPromptUseCase {
    pub fn new(credentials: Arc<dyn CredentialStore>, clients: Arc<dyn ChatClientFactory>) -> Self {
        Self {
            credentials,
            clients,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn execute(
        &self,
        prompt: &str,
        params: Option<GenerationParams>,
    ) -> Result<String, ClientError> {
        let prompt = require_prompt(prompt)?;
        let params = params.map(|p| p.normalized()).filter(|p| !p.is_empty());
        if let Some(ref params) = params {
            params.validate()?;
        }

        let client = resolve_client(self.credentials.as_ref(), self.clients.as_ref()).await?;

        info!("Sending prompt to {} ({} chars)", self.model, prompt.len());
        let reply = client.send(prompt, &self.model, params.as_ref()).await?;
        debug!("Reply: {} chars", reply.len());

        Ok(reply)
    }
}

/// Trims the prompt and rejects it when nothing is left.
pub(crate) fn require_prompt(prompt: &str) -> Result<&str, ClientError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(ClientError::invalid_input("prompt must not be blank"));
    }
    Ok(trimmed)
}

/// Builds a client for the stored credential, failing before any request
/// when no usable key is stored.
pub(crate) async fn resolve_client(
    credentials: &dyn CredentialStore,
    clients: &dyn ChatClientFactory,
) -> Result<Arc<dyn ChatClient>, ClientError> {
    let api_key = credentials
        .get()
        .await?
        .filter(|key| !key.trim().is_empty())
        .ok_or(ClientError::MissingCredential)?;

    clients.create(api_key.trim())
}
