pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatClientFactory, ComparePromptUseCase, CredentialStore,
    ManageCredentialUseCase, ManageSettingsUseCase, SendPromptUseCase, SettingsStore,
    SettingsUpdate, DEFAULT_MODEL,
};

pub use cli::{Commands, ParamArgs};

pub use connector::{
    Container, ContainerConfig, FileCredentialStore, InMemoryCredentialStore,
    InMemorySettingsStore, JsonSettingsStore, MockChatClient, MockChatClientFactory,
    OpenAiChatClient, OpenAiChatClientFactory, Router, DEFAULT_BASE_URL,
};

pub use domain::{
    build_messages, ChatMessage, ClientError, Comparison, ComparisonMode, ComparisonSettings,
    GenerationParams, Role,
};
