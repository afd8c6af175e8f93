mod chat_client;
mod credential_store;
mod settings_store;

pub use chat_client::*;
pub use credential_store::*;
pub use settings_store::*;
