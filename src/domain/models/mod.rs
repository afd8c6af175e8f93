mod chat_message;
mod comparison;
mod generation_params;

pub use chat_message::*;
pub use comparison::*;
pub use generation_params::*;
