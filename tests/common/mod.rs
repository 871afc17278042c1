//! Shared helpers for integration tests: a `wiremock` stub of the ZIP
//! Demographics endpoint and a client pointed at it.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zipdemographics::network::{API_KEY_HEADER, ENDPOINT_PATH};
use zipdemographics::prelude::*;

pub const TEST_API_KEY: &str = "test-api-key";

/// Client talking plain HTTP to the stub server.
pub fn client_for(server: &MockServer) -> ZipDemographicsClient {
    ZipDemographicsClient::builder(TEST_API_KEY)
        .secure(false)
        .host(server.address().to_string())
        .build()
        .expect("client should build")
}

/// Demographic record with the given zip and place name.
pub fn record_json(zip: &str, name: &str, total: i64) -> Value {
    json!({
        "zip": zip,
        "name": name,
        "acsYear": 2022,
        "population": {"total": total, "male": total / 2, "female": total - total / 2, "medianAge": 46.4},
        "income": {"medianHousehold": 154740, "perCapita": 108216},
        "housing": {
            "medianHomeValue": 2000001,
            "medianRent": 2964,
            "totalUnits": 14441,
            "occupiedUnits": 12702,
            "vacantUnits": 1739,
            "ownerOccupied": 7646,
            "renterOccupied": 5056,
            "homeOwnershipRate": 60.2
        },
        "education": {
            "collegeEducatedPct": 68.1,
            "bachelors": 8640,
            "masters": 3860,
            "professional": 2534,
            "doctorate": 884
        },
        "employment": {"laborForce": 16511, "unemployed": 1053, "unemploymentRate": 6.4},
        "race": {
            "white": {"count": 25167, "percent": 77.0},
            "black": {"count": 704, "percent": 2.2},
            "asian": {"count": 3006, "percent": 9.2},
            "hispanic": {"count": 2039, "percent": 6.2}
        }
    })
}

/// Successful envelope wrapping `record_json`.
pub fn ok_envelope(zip: &str, name: &str, total: i64) -> Value {
    json!({"status": "ok", "error": null, "data": record_json(zip, name, total)})
}

/// Stub a successful lookup for `zip`, expecting the API key header.
pub async fn mount_zip(server: &MockServer, zip: &str, name: &str, total: i64) {
    Mock::given(method("GET"))
        .and(path(ENDPOINT_PATH))
        .and(header(API_KEY_HEADER, TEST_API_KEY))
        .and(query_param("zip", zip))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(zip, name, total)))
        .mount(server)
        .await;
}
