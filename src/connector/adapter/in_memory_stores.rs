use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::{CredentialStore, SettingsStore};
use crate::domain::{ClientError, ComparisonSettings};

/// Process-local credential store; nothing survives a restart.
pub struct InMemoryCredentialStore {
    secret: Arc<Mutex<Option<String>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self {
            secret: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: Arc::new(Mutex::new(Some(secret.into()))),
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self.secret.lock().await.clone())
    }

    async fn put(&self, secret: &str) -> Result<(), ClientError> {
        *self.secret.lock().await = Some(secret.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self.secret.lock().await = None;
        Ok(())
    }
}

/// Process-local settings store starting from the defaults.
pub struct InMemorySettingsStore {
    settings: Arc<Mutex<ComparisonSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::with_settings(ComparisonSettings::default())
    }

    pub fn with_settings(settings: ComparisonSettings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<ComparisonSettings, ClientError> {
        Ok(self.settings.lock().await.clone())
    }

    async fn save(&self, settings: &ComparisonSettings) -> Result<(), ClientError> {
        *self.settings.lock().await = settings.clone();
        Ok(())
    }
}
