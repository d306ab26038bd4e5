use thiserror::Error;

/// Failures of the DNS wire codec.
///
/// Every variant is terminal for the encode/decode call that produced it;
/// no partial message is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Cannot encode query: {0}")]
    Encoding(String),

    #[error("Truncated message: needed {needed} bytes at offset {offset}, buffer has {len}")]
    TruncatedMessage {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Malformed name: {0}")]
    MalformedName(String),

    #[error("Compression loop at offset {offset}: more than {hops} pointer hops")]
    CompressionLoop { offset: usize, hops: usize },
}

impl WireError {
    pub fn truncated(offset: usize, needed: usize, len: usize) -> Self {
        WireError::TruncatedMessage {
            offset,
            needed,
            len,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, WireError::TruncatedMessage { .. })
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("Invalid resolver endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Response id {received:#06x} does not match query id {expected:#06x}")]
    ResponseIdMismatch { expected: u16, received: u16 },
}

impl DomainError {
    /// True for failures of the network collaborator rather than the message itself.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::Transport { .. }
        )
    }
}
