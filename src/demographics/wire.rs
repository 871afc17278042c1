//! Wire types for API responses (REST).

use crate::demographics::DemographicRecord;
use serde::{Deserialize, Serialize};

/// `status` value of a successful envelope.
pub const STATUS_OK: &str = "ok";

/// `status` value of a failed envelope.
pub const STATUS_ERROR: &str = "error";

// ─── Envelope ───────────────────────────────────────────────────────────────

/// Top-level response wrapper returned by every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<DemographicRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ResponseEnvelope {
    /// True when the service reported success and no error text.
    pub fn is_ok(&self) -> bool {
        self.status != STATUS_ERROR && self.error.is_none()
    }

    /// Take the demographic record out of the envelope.
    pub fn into_data(self) -> Option<DemographicRecord> {
        self.data
    }
}

// ─── Error body ─────────────────────────────────────────────────────────────

/// Loose view of an error body. Failing gateways do not always answer with
/// the envelope shape, so only the message is picked out: `error` first,
/// then `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a body, falling back to treating the raw text as the message.
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) => body,
            Err(_) => {
                let trimmed = text.trim();
                ErrorBody {
                    error: (!trimmed.is_empty()).then(|| trimmed.to_string()),
                    message: None,
                }
            }
        }
    }

    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
