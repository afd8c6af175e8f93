use async_trait::async_trait;

use crate::domain::ClientError;

/// Persists the provider API key across runs.
///
/// Confidentiality of the stored secret is the implementor's concern.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self) -> Result<Option<String>, ClientError>;

    async fn put(&self, secret: &str) -> Result<(), ClientError>;

    /// True only when a non-blank secret is stored.
    async fn exists(&self) -> Result<bool, ClientError> {
        Ok(self
            .get()
            .await?
            .is_some_and(|secret| !secret.trim().is_empty()))
    }

    async fn clear(&self) -> Result<(), ClientError>;
}
