use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::application::SettingsStore;
use crate::domain::{ClientError, ComparisonSettings};

const SETTINGS_FILE: &str = "settings.json";

/// Keeps [`ComparisonSettings`] as pretty-printed JSON in
/// `<data_dir>/settings.json`. Fields missing from the file take their
/// default values.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonSettingsStore {
    async fn load(&self) -> Result<ComparisonSettings, ClientError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", self.path.display());
                return Ok(ComparisonSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&contents).map_err(|e| {
            ClientError::storage(format!(
                "failed to parse settings at {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save(&self, settings: &ComparisonSettings) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| ClientError::storage(format!("failed to serialize settings: {e}")))?;
        tokio::fs::write(&self.path, json).await?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
