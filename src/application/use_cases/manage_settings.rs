use std::sync::Arc;

use tracing::info;

use crate::application::SettingsStore;
use crate::domain::{ClientError, ComparisonMode, ComparisonSettings};

/// Field changes for one comparison mode.
///
/// The outer `Option` says whether the field changes at all; the inner one
/// is the new value, `None` clearing it.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub max_tokens: Option<Option<u32>>,
    pub stop: Option<Option<Vec<String>>>,
    pub temperature: Option<Option<f64>>,
    pub top_p: Option<Option<f64>>,
    pub top_k: Option<Option<u32>>,
    pub frequency_penalty: Option<Option<f64>>,
    pub presence_penalty: Option<Option<f64>>,
    pub seed: Option<Option<i64>>,
    pub format_instruction: Option<Option<String>>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.max_tokens.is_none()
            && self.stop.is_none()
            && self.temperature.is_none()
            && self.top_p.is_none()
            && self.top_k.is_none()
            && self.frequency_penalty.is_none()
            && self.presence_penalty.is_none()
            && self.seed.is_none()
            && self.format_instruction.is_none()
    }

    fn apply(self, settings: &mut ComparisonSettings, mode: ComparisonMode) {
        let params = settings.mode_mut(mode);
        if let Some(v) = self.max_tokens {
            params.set_max_tokens(v);
        }
        if let Some(v) = self.stop {
            params.set_stop(v);
        }
        if let Some(v) = self.temperature {
            params.set_temperature(v);
        }
        if let Some(v) = self.top_p {
            params.set_top_p(v);
        }
        if let Some(v) = self.top_k {
            params.set_top_k(v);
        }
        if let Some(v) = self.frequency_penalty {
            params.set_frequency_penalty(v);
        }
        if let Some(v) = self.presence_penalty {
            params.set_presence_penalty(v);
        }
        if let Some(v) = self.seed {
            params.set_seed(v);
        }
        if let Some(v) = self.format_instruction {
            params.set_format_instruction(v);
        }
    }
}

pub struct ManageSettingsUseCase {
    store: Arc<dyn SettingsStore>,
}

impl ManageSettingsUseCase {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<ComparisonSettings, ClientError> {
        self.store.load().await
    }

    /// Applies `update` to `mode`, validates the result, and persists it.
    /// Nothing is written when validation fails.
    pub async fn update(
        &self,
        mode: ComparisonMode,
        update: SettingsUpdate,
    ) -> Result<ComparisonSettings, ClientError> {
        let mut settings = self.store.load().await?;
        update.apply(&mut settings, mode);
        settings.validate()?;

        self.store.save(&settings).await?;
        info!("Updated {} settings", mode);
        Ok(settings)
    }

    pub async fn reset(&self) -> Result<ComparisonSettings, ClientError> {
        let settings = ComparisonSettings::default();
        self.store.save(&settings).await?;
        info!("Settings reset to defaults");
        Ok(settings)
    }
}
