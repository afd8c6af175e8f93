use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::use_cases::send_prompt::{require_prompt, resolve_client};
use crate::application::{ChatClientFactory, CredentialStore, SettingsStore, DEFAULT_MODEL};
use crate::domain::{ClientError, Comparison, ComparisonMode};

/// Sends the same prompt twice, once per comparison mode, and collects both
/// replies side by side.
pub struct ComparePromptUseCase {
    credentials: Arc<dyn CredentialStore>,
    settings: Arc<dyn SettingsStore>,
    clients: Arc<dyn ChatClientFactory>,
    model: String,
}

impl ComparePromptUseCase {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        settings: Arc<dyn SettingsStore>,
        clients: Arc<dyn ChatClientFactory>,
    ) -> Self {
        Self {
            credentials,
            settings,
            clients,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Fails as a whole only when the run cannot start (blank prompt, no
    /// credential, unreadable or out-of-range settings). Request failures are reported per
    /// side inside the returned [`Comparison`].
    pub async fn execute(&self, prompt: &str) -> Result<Comparison, ClientError> {
        let prompt = require_prompt(prompt)?;
        let settings = self.settings.load().await?;
        settings.validate()?;
        let client = resolve_client(self.credentials.as_ref(), self.clients.as_ref()).await?;

        let unrestricted = settings.params_for(ComparisonMode::Unrestricted);
        let restricted = settings.params_for(ComparisonMode::Restricted);
        let unrestricted_ref = (!unrestricted.is_empty()).then_some(&unrestricted);
        let restricted_ref = (!restricted.is_empty()).then_some(&restricted);

        info!("Comparing replies from {} for one prompt", self.model);
        let start_time = Instant::now();

        let (unrestricted_reply, restricted_reply) = tokio::join!(
            client.send(prompt, &self.model, unrestricted_ref),
            client.send(prompt, &self.model, restricted_ref),
        );

        for (mode, reply) in [
            (ComparisonMode::Unrestricted, &unrestricted_reply),
            (ComparisonMode::Restricted, &restricted_reply),
        ] {
            if let Err(e) = reply {
                warn!("{} request failed: {}", mode, e);
            }
        }
        info!(
            "Both replies settled in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(Comparison::new(unrestricted_reply, restricted_reply, restricted))
    }
}
