use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{
    ChatClientFactory, ComparePromptUseCase, CredentialStore, ManageCredentialUseCase,
    ManageSettingsUseCase, SendPromptUseCase, SettingsStore,
};
use crate::{
    FileCredentialStore, InMemoryCredentialStore, InMemorySettingsStore, JsonSettingsStore,
    MockChatClientFactory, OpenAiChatClientFactory,
};

pub struct ContainerConfig {
    pub data_dir: String,
    /// Base URL of the OpenAI-compatible API, without `/chat/completions`.
    pub base_url: String,
    pub model: String,
    /// Answer locally with [`MockChatClientFactory`] instead of calling the API.
    pub mock_client: bool,
    /// Keep the credential and settings in memory only.
    pub memory_storage: bool,
}

pub struct Container {
    credentials: Arc<dyn CredentialStore>,
    settings: Arc<dyn SettingsStore>,
    clients: Arc<dyn ChatClientFactory>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let data_dir = PathBuf::from(&config.data_dir);

        let (credentials, settings): (Arc<dyn CredentialStore>, Arc<dyn SettingsStore>) =
            if config.memory_storage {
                debug!("Using in-memory credential and settings storage");
                (
                    Arc::new(InMemoryCredentialStore::new()),
                    Arc::new(InMemorySettingsStore::new()),
                )
            } else {
                debug!("Using file storage under {}", data_dir.display());
                (
                    Arc::new(FileCredentialStore::new(&data_dir)),
                    Arc::new(JsonSettingsStore::new(&data_dir)),
                )
            };

        let clients: Arc<dyn ChatClientFactory> = if config.mock_client {
            debug!("Using mock chat client");
            Arc::new(MockChatClientFactory::new())
        } else {
            debug!("Using chat API at {}", config.base_url);
            Arc::new(OpenAiChatClientFactory::new(&config.base_url)?)
        };

        Ok(Self {
            credentials,
            settings,
            clients,
            config,
        })
    }

    pub fn send_use_case(&self) -> SendPromptUseCase {
        SendPromptUseCase::new(self.credentials.clone(), self.clients.clone())
            .with_model(&self.config.model)
    }

    pub fn compare_use_case(&self) -> ComparePromptUseCase {
        ComparePromptUseCase::new(
            self.credentials.clone(),
            self.settings.clone(),
            self.clients.clone(),
        )
        .with_model(&self.config.model)
    }

    pub fn credential_use_case(&self) -> ManageCredentialUseCase {
        ManageCredentialUseCase::new(self.credentials.clone())
    }

    pub fn settings_use_case(&self) -> ManageSettingsUseCase {
        ManageSettingsUseCase::new(self.settings.clone())
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }
}
