//! Query parameters for a lookup.
//!
//! [`QueryParams`] is the open key/value mapping sent with a call.
//! [`ZipRequest`] is the typed request the endpoint documents, with the
//! client-side rules for its parameters.

use crate::error::{Result, ValidationErrors, ZipDemographicsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Open mapping of query parameters, ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, Value>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value for `key`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Flatten into query-string pairs.
    ///
    /// Strings are sent verbatim, numbers and booleans in display form,
    /// arrays and objects as compact JSON. `null` values are dropped.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(k, v)| query_value(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

// ─── Typed request ──────────────────────────────────────────────────────────

/// Length rule for a string parameter.
struct StringRule {
    name: &'static str,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringRule {
    fn check(&self, value: &str, errors: &mut Vec<String>) {
        if value.is_empty() {
            if self.required {
                errors.push(format!("Required parameter [{}] is missing", self.name));
            }
            return;
        }
        // Length in bytes, not chars.
        let len = value.len();
        if let Some(min) = self.min_length {
            if len < min {
                errors.push(format!(
                    "Parameter [{}] must be at least {} characters",
                    self.name, min
                ));
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                errors.push(format!(
                    "Parameter [{}] must be at most {} characters",
                    self.name, max
                ));
            }
        }
    }
}

/// 5-digit US ZIP code.
const ZIP_RULE: StringRule = StringRule {
    name: "zip",
    required: true,
    min_length: Some(5),
    max_length: Some(5),
};

/// Typed request for the ZIP Demographics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRequest {
    pub zip: String,
}

impl ZipRequest {
    pub fn new(zip: impl Into<String>) -> Self {
        Self { zip: zip.into() }
    }

    /// Check the parameters against the endpoint's rules.
    ///
    /// Collects every violation rather than stopping at the first one.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        ZIP_RULE.check(&self.zip, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ZipDemographicsError::Validation(ValidationErrors(errors)))
        }
    }

    /// Convert into query parameters. Empty values are left out.
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if !self.zip.is_empty() {
            params.insert("zip", self.zip.as_str());
        }
        params
    }
}

impl From<ZipRequest> for QueryParams {
    fn from(request: ZipRequest) -> Self {
        request.to_query_params()
    }
}
