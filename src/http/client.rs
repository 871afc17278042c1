//! Low-level HTTP client — `ZipDemographicsHttp`.
//!
//! Sends one request per call and maps the outcome onto the crate's error
//! taxonomy. No retries: every call is exactly one remote attempt.

use crate::demographics::wire::{ErrorBody, ResponseEnvelope};
use crate::error::{Result, TransportError, ZipDemographicsError};
use crate::network::API_KEY_HEADER;
use crate::query::QueryParams;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

const CLIENT_USER_AGENT: &str = concat!("zipdemographics-rust/", env!("CARGO_PKG_VERSION"));

/// Low-level HTTP client for the ZIP Demographics endpoint.
#[derive(Clone)]
pub struct ZipDemographicsHttp {
    endpoint: String,
    client: Client,
    /// Whole-request timeout set on `client`, if any.
    timeout: Option<Duration>,
}

impl ZipDemographicsHttp {
    /// Build the HTTP client with the API key and extra headers as defaults.
    ///
    /// Header names and values are checked here, so a key that cannot travel
    /// in a header fails before any request is sent.
    pub fn new(
        endpoint: String,
        api_key: &str,
        timeout: Option<Duration>,
        extra_headers: &[(String, String)],
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        for (name, value) in extra_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ZipDemographicsError::Configuration(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ZipDemographicsError::Configuration(format!(
                    "Invalid header value for '{}': {}",
                    name, e
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            ZipDemographicsError::Configuration(
                "API key contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let builder = Client::builder().default_headers(headers);
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match timeout {
            Some(limit) => builder.timeout(limit),
            None => builder,
        }
        .pool_max_idle_per_host(10);

        Ok(Self {
            endpoint,
            client: builder.build()?,
            timeout,
        })
    }

    /// Full endpoint URL, scheme included.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch demographics for the given query.
    pub async fn get_demographics(&self, query: Option<&QueryParams>) -> Result<ResponseEnvelope> {
        let pairs = query.map(QueryParams::to_pairs).unwrap_or_default();

        let mut req = self.client.get(&self.endpoint);
        if !pairs.is_empty() {
            req = req.query(&pairs);
        }

        tracing::debug!(
            url = %self.endpoint,
            params = pairs.len(),
            "Dispatching ZIP demographics request"
        );

        let resp = req.send().await.map_err(|e| self.transport_error(e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if !status.is_success() {
            let message = ErrorBody::from_text(&body).into_message().unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
            tracing::warn!(status = status.as_u16(), error = %message, "Remote error");
            return Err(ZipDemographicsError::Remote {
                code: status.as_u16(),
                message,
            });
        }

        let envelope: ResponseEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode response envelope");
            ZipDemographicsError::Decode(format!("Failed to deserialize response: {}", e))
        })?;

        // The service can report failures inside a 2xx envelope.
        if !envelope.is_ok() {
            let code = envelope.code.unwrap_or_else(|| status.as_u16());
            let message = envelope
                .error
                .unwrap_or_else(|| format!("Service returned status '{}'", envelope.status));
            tracing::warn!(code, error = %message, "Remote error in envelope");
            return Err(ZipDemographicsError::Remote { code, message });
        }

        Ok(envelope)
    }

    /// Report the client's own timeout the same way as a call deadline.
    fn transport_error(&self, e: reqwest::Error) -> ZipDemographicsError {
        match self.timeout {
            Some(limit) if e.is_timeout() => {
                tracing::debug!(timeout_ms = limit.as_millis() as u64, "Request timed out");
                TransportError::Timeout(limit).into()
            }
            _ => e.into(),
        }
    }
}

impl std::fmt::Debug for ZipDemographicsHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipDemographicsHttp")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(api_key: &str, headers: &[(String, String)]) -> Result<ZipDemographicsHttp> {
        ZipDemographicsHttp::new(
            "https://api.apiverve.com/v1/zipdemographics".to_string(),
            api_key,
            None,
            headers,
        )
    }

    #[test]
    fn test_new_keeps_endpoint() {
        let http = build("test-key", &[]).unwrap();
        assert_eq!(http.endpoint(), "https://api.apiverve.com/v1/zipdemographics");
    }

    #[test]
    fn test_timeout_is_off_by_default() {
        let http = build("test-key", &[]).unwrap();
        assert_eq!(http.timeout, None);
        assert!(format!("{:?}", http).contains("timeout: None"));
    }

    #[test]
    fn test_api_key_with_newline_is_rejected() {
        let err = build("bad\nkey", &[]).unwrap_err();
        assert!(matches!(err, ZipDemographicsError::Configuration(_)));
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let err = build("test-key", &[("bad header".to_string(), "v".to_string())]).unwrap_err();
        assert!(err.to_string().contains("Invalid header name"));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let http = build("super-secret", &[]).unwrap();
        assert!(!format!("{:?}", http).contains("super-secret"));
    }
}
