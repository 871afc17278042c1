//! # ZIP Demographics
//!
//! A Rust client for the ZIP Demographics API: population, income, housing,
//! education, employment and race statistics for a US postal code.
//! Works on native and WASM targets.
//!
//! ## Architecture
//!
//! 1. **Core** — Demographic record, response envelope, query parameters,
//!    errors (always available, WASM-safe)
//! 2. **HTTP API** — `ZipDemographicsHttp`, one GET per call
//! 3. **High-Level Client** — `ZipDemographicsClient` with the `execute` call
//!    builder (query, completion callback, per-call deadline)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zipdemographics::prelude::*;
//!
//! let client = ZipDemographicsClient::new(ClientConfig::new("your-api-key"))?;
//!
//! let response = client
//!     .execute(Some(QueryParams::new().with("zip", "90210")))
//!     .await?;
//! if let Some(data) = response.data {
//!     println!("{}: {} residents", data.name, data.population.total);
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Demographic record types and the response envelope.
pub mod demographics;

/// Query parameters and request validation.
pub mod query;

/// Client error types.
pub mod error;

/// Endpoint constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ZipDemographicsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::demographics::wire::ResponseEnvelope;
    pub use crate::demographics::{
        DemographicRecord, Education, Employment, Housing, Income, Population, Race, RaceGroup,
    };

    // Requests
    pub use crate::query::{QueryParams, ZipRequest};

    // Errors
    pub use crate::error::{TransportError, ValidationErrors, ZipDemographicsError};

    // Network
    pub use crate::network::{DEFAULT_API_HOST, ENDPOINT_PATH};

    // HTTP client
    #[cfg(feature = "http")]
    pub use crate::client::{
        Callback, ClientConfig, Execute, ZipDemographicsClient, ZipDemographicsClientBuilder,
    };
}
