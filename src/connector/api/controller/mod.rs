pub mod chat_controller;
pub mod compare_controller;
pub mod key_controller;
pub mod settings_controller;

pub use chat_controller::ChatController;
pub use compare_controller::CompareController;
pub use key_controller::KeyController;
pub use settings_controller::SettingsController;
