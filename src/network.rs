//! Network constants for the ZIP Demographics API.

/// Default API host.
pub const DEFAULT_API_HOST: &str = "api.apiverve.com";

/// Path of the ZIP Demographics endpoint on the API host.
pub const ENDPOINT_PATH: &str = "/v1/zipdemographics";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Build the endpoint URL for a host, picking the scheme from `secure`.
pub fn endpoint_url(host: &str, secure: bool) -> String {
    let scheme = if secure { "https" } else { "http" };
    format!(
        "{}://{}{}",
        scheme,
        host.trim_end_matches('/'),
        ENDPOINT_PATH
    )
}
