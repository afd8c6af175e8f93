use std::sync::Arc;

use tracing::info;

use crate::application::CredentialStore;
use crate::domain::ClientError;

pub struct ManageCredentialUseCase {
    store: Arc<dyn CredentialStore>,
}

impl ManageCredentialUseCase {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Stores the trimmed key, replacing any previous one.
    pub async fn save(&self, api_key: &str) -> Result<(), ClientError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ClientError::invalid_input("API key must not be blank"));
        }
        self.store.put(api_key).await?;
        info!("API key saved");
        Ok(())
    }

    pub async fn exists(&self) -> Result<bool, ClientError> {
        self.store.exists().await
    }

    pub async fn clear(&self) -> Result<(), ClientError> {
        self.store.clear().await?;
        info!("API key removed");
        Ok(())
    }
}
