use serde::{Deserialize, Serialize};

use super::GenerationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: Role,
    content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Builds the conversation for a single call: an optional system message
/// carrying the format instruction, then the user prompt.
///
/// The prompt is forwarded as given, blank or not.
pub fn build_messages(prompt: &str, params: Option<&GenerationParams>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);

    if let Some(instruction) = params
        .and_then(|p| p.format_instruction())
        .filter(|i| !i.is_empty())
    {
        messages.push(ChatMessage::system(instruction));
    }
    messages.push(ChatMessage::user(prompt));

    messages
}
