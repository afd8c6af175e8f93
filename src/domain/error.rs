use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("No API key stored; save one with `set-key` first")]
    MissingCredential,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Empty reply from API")]
    EmptyReply,

    #[error("Transport fault: {0}")]
    TransportFault(#[source] BoxError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            body: body.into(),
        }
    }

    pub fn transport(cause: impl Into<BoxError>) -> Self {
        Self::TransportFault(cause.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_empty_reply(&self) -> bool {
        matches!(self, Self::EmptyReply)
    }

    pub fn is_transport_fault(&self) -> bool {
        matches!(self, Self::TransportFault(_))
    }

    /// Status code of an [`ClientError::HttpError`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
