mod file_credential_store;
mod in_memory_stores;
mod json_settings_store;
mod mock_chat_client;
mod openai_chat_client;

pub use file_credential_store::*;
pub use in_memory_stores::*;
pub use json_settings_store::*;
pub use mock_chat_client::*;
pub use openai_chat_client::*;
