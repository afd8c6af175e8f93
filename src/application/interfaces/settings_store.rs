use async_trait::async_trait;

use crate::domain::{ClientError, ComparisonSettings};

/// Persists generation parameters for the two comparison modes.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Returns the saved settings, or the defaults when nothing was saved.
    async fn load(&self) -> Result<ComparisonSettings, ClientError>;

    async fn save(&self, settings: &ComparisonSettings) -> Result<(), ClientError>;
}
