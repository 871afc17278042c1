//! High-level client — `ZipDemographicsClient` and its builder.
//!
//! Every call shape (`execute`, `execute_with_callback`, `lookup`, and the
//! [`Execute`] call builder) funnels into one dispatch path. The callback is
//! an observer on that path: it sees the same `Result` that is returned.

use crate::demographics::wire::ResponseEnvelope;
use crate::error::{Result, TransportError, ZipDemographicsError};
use crate::http::ZipDemographicsHttp;
use crate::network::{self, DEFAULT_API_HOST};
use crate::query::{QueryParams, ZipRequest};

use futures_util::future::{select, Either};
use serde::Deserialize;
use std::time::Duration;

/// Completion callback. Receives the call's result by reference.
pub type Callback<'a> = Box<dyn FnOnce(&Result<ResponseEnvelope>) + Send + 'a>;

// ═════════════════════════════════════════════════════════════════════════════
// Config
// ═════════════════════════════════════════════════════════════════════════════

/// Client options: the API key and the transport security flag.
///
/// Deserializes from `{ "api_key": "...", "secure": true }`; `secure`
/// defaults to `true`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_secure")]
    pub secure: bool,
}

fn default_secure() -> bool {
    true
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secure: true,
        }
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("secure", &self.secure)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Client
// ═════════════════════════════════════════════════════════════════════════════

/// Client for the ZIP Demographics API.
///
/// Holds only static configuration. Clones share the connection pool, and
/// concurrent calls on one instance are independent of each other.
#[derive(Debug, Clone)]
pub struct ZipDemographicsClient {
    http: ZipDemographicsHttp,
    secure: bool,
}

impl ZipDemographicsClient {
    /// Create a client from a [`ClientConfig`] with the default host.
    ///
    /// # Errors
    ///
    /// Returns [`ZipDemographicsError::Configuration`] if the API key is
    /// missing or unusable.
    pub fn new(config: ClientConfig) -> Result<Self> {
        ZipDemographicsClientBuilder::new(config.api_key)
            .secure(config.secure)
            .build()
    }

    pub fn builder(api_key: impl Into<String>) -> ZipDemographicsClientBuilder {
        ZipDemographicsClientBuilder::new(api_key)
    }

    /// Full endpoint URL this client calls.
    pub fn endpoint(&self) -> &str {
        self.http.endpoint()
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Start a call with the general call builder.
    pub fn request(&self) -> Execute<'_> {
        Execute {
            client: self,
            query: None,
            deadline: None,
            callback: None,
        }
    }

    /// Send one request with optional query parameters.
    pub async fn execute(&self, query: Option<QueryParams>) -> Result<ResponseEnvelope> {
        self.request().query_opt(query).send().await
    }

    /// Like [`execute`](Self::execute), also handing the result to `callback`
    /// before returning it.
    pub async fn execute_with_callback<'a, F>(
        &'a self,
        query: Option<QueryParams>,
        callback: F,
    ) -> Result<ResponseEnvelope>
    where
        F: FnOnce(&Result<ResponseEnvelope>) + Send + 'a,
    {
        self.request()
            .query_opt(query)
            .on_complete(callback)
            .send()
            .await
    }

    /// Validate `zip` locally, then look it up.
    ///
    /// # Errors
    ///
    /// Returns [`ZipDemographicsError::Validation`] without touching the
    /// network when `zip` is not 5 characters long.
    pub async fn lookup(&self, zip: &str) -> Result<ResponseEnvelope> {
        let request = ZipRequest::new(zip);
        request.validate()?;
        self.execute(Some(request.into())).await
    }

    async fn dispatch(
        &self,
        query: Option<&QueryParams>,
        deadline: Option<Duration>,
    ) -> Result<ResponseEnvelope> {
        let exchange = self.http.get_demographics(query);
        let Some(limit) = deadline else {
            return exchange.await;
        };

        let exchange = std::pin::pin!(exchange);
        match select(exchange, futures_timer::Delay::new(limit)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                tracing::debug!(deadline_ms = limit.as_millis() as u64, "Call deadline expired");
                Err(TransportError::Timeout(limit).into())
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Call builder
// ═════════════════════════════════════════════════════════════════════════════

/// A single pending call: query, deadline and completion callback are all
/// optional.
#[must_use = "a call does nothing until `send` is awaited"]
pub struct Execute<'a> {
    client: &'a ZipDemographicsClient,
    query: Option<QueryParams>,
    deadline: Option<Duration>,
    callback: Option<Callback<'a>>,
}

impl<'a> Execute<'a> {
    pub fn query(mut self, query: impl Into<QueryParams>) -> Self {
        self.query = Some(query.into());
        self
    }

    fn query_opt(mut self, query: Option<QueryParams>) -> Self {
        self.query = query;
        self
    }

    /// Resolve with [`TransportError::Timeout`] if the exchange takes longer
    /// than `deadline`. Other in-flight calls are unaffected.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Observe the result once the call completes.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&Result<ResponseEnvelope>) + Send + 'a,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    pub async fn send(self) -> Result<ResponseEnvelope> {
        let result = self
            .client
            .dispatch(self.query.as_ref(), self.deadline)
            .await;
        if let Some(callback) = self.callback {
            callback(&result);
        }
        result
    }
}

impl std::fmt::Debug for Execute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Execute")
            .field("query", &self.query)
            .field("deadline", &self.deadline)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Builder for configuring [`ZipDemographicsClient`].
#[derive(Clone)]
pub struct ZipDemographicsClientBuilder {
    api_key: String,
    secure: bool,
    host: String,
    timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl ZipDemographicsClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secure: true,
            host: DEFAULT_API_HOST.to_string(),
            timeout: None,
            default_headers: Vec::new(),
        }
    }

    /// Use `https` (true, default) or plain `http`.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Override the API host (`host` or `host:port`, no scheme).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Whole-request timeout applied by the HTTP client (native only).
    ///
    /// Off unless set. Expiry resolves every call with
    /// [`TransportError::Timeout`], the same as a per-call deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<ZipDemographicsClient> {
        let api_key = self.api_key.trim();
        if api_key.is_empty() {
            return Err(ZipDemographicsError::Configuration(
                "API key is required".to_string(),
            ));
        }
        let host = self.host.trim();
        if host.is_empty() {
            return Err(ZipDemographicsError::Configuration(
                "API host cannot be empty".to_string(),
            ));
        }

        let endpoint = network::endpoint_url(host, self.secure);
        let http = ZipDemographicsHttp::new(endpoint, api_key, self.timeout, &self.default_headers)?;

        Ok(ZipDemographicsClient {
            http,
            secure: self.secure,
        })
    }
}

impl std::fmt::Debug for ZipDemographicsClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipDemographicsClientBuilder")
            .field("secure", &self.secure)
            .field("host", &self.host)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
