use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, CompareController, KeyController, SettingsController};

pub struct Router<'a> {
    chat_controller: ChatController<'a>,
    compare_controller: CompareController<'a>,
    key_controller: KeyController<'a>,
    settings_controller: SettingsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            chat_controller: ChatController::new(container),
            compare_controller: CompareController::new(container),
            key_controller: KeyController::new(container),
            settings_controller: SettingsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Chat { prompt, params } => self.chat_controller.chat(prompt, params).await,
            Commands::Compare { prompt } => self.compare_controller.compare(prompt).await,
            Commands::SetKey { key } => self.key_controller.set_key(key).await,
            Commands::KeyStatus => self.key_controller.status().await,
            Commands::ClearKey => self.key_controller.clear().await,
            Commands::Settings {
                mode,
                params,
                unset,
                reset,
            } => {
                self.settings_controller
                    .settings(mode, params, unset, reset)
                    .await
            }
        }
    }
}
