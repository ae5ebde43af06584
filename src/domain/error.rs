//! Error taxonomy shared by the store and the HTTP boundary.

use thiserror::Error;

/// Failures a request can surface to the caller. The transport layer maps
/// `NotFound` to 404 and `Validation` to 400; chatbot-internal failures are
/// never surfaced (see `domain::chat::responder`).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{what} {id} not found")]
    NotFound { what: &'static str, id: u64 },

    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    pub fn property_not_found(id: u64) -> Self {
        DomainError::NotFound {
            what: "property",
            id,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}
