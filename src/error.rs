//! Error types for the ZIP Demographics client.

use crate::demographics::wire::{ResponseEnvelope, STATUS_ERROR};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Top-level client error.
///
/// None of these variants poison the client; it stays usable for the next call.
#[derive(Error, Debug)]
pub enum ZipDemographicsError {
    /// Bad or missing client configuration. Raised before any network activity.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Request parameters rejected locally.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-success response from the service.
    #[error("Remote error {code}: {message}")]
    Remote { code: u16, message: String },

    /// Response body did not match the envelope schema.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Network-level failures.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Deadline of {0:?} expired")]
    Timeout(Duration),
}

/// Messages collected while validating a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ZipDemographicsError {
    fn from(e: reqwest::Error) -> Self {
        ZipDemographicsError::Transport(TransportError::Request(e))
    }
}

impl From<serde_json::Error> for ZipDemographicsError {
    fn from(e: serde_json::Error) -> Self {
        ZipDemographicsError::Decode(e.to_string())
    }
}

impl ZipDemographicsError {
    /// Numeric code reported by the service, when known.
    pub fn code(&self) -> Option<u16> {
        match self {
            ZipDemographicsError::Remote { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for a per-call deadline expiry or a transport-level timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ZipDemographicsError::Transport(TransportError::Timeout(_)) => true,
            #[cfg(feature = "http")]
            ZipDemographicsError::Transport(TransportError::Request(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// Render the error in the envelope shape the service uses for failures:
    /// `status: "error"`, no data, the error text and the code when known.
    pub fn to_envelope(&self) -> ResponseEnvelope {
        let error = match self {
            ZipDemographicsError::Remote { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ResponseEnvelope {
            status: STATUS_ERROR.to_string(),
            error: Some(error),
            data: None,
            code: self.code(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZipDemographicsError>;
