mod compare_prompt;
mod manage_credential;
mod manage_settings;
mod send_prompt;

#[cfg(test)]
pub(crate) mod testing;

pub use compare_prompt::*;
pub use manage_credential::*;
pub use manage_settings::*;
pub use send_prompt::*;
