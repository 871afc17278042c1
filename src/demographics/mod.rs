//! Demographic statistics for one postal code.
//!
//! Field names follow the API's camelCase JSON. Counts and currency amounts are
//! integers; rates, percentages and the median age are floats. Values are
//! snapshots of census data and are never recomputed locally.

pub mod wire;

use serde::{Deserialize, Serialize};

/// Demographic statistics for a single ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicRecord {
    pub zip: String,
    /// Place name, e.g. "Beverly Hills".
    pub name: String,
    /// American Community Survey release year the figures come from.
    pub acs_year: u32,
    pub population: Population,
    pub income: Income,
    pub housing: Housing,
    pub education: Education,
    pub employment: Employment,
    pub race: Race,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Population {
    pub total: i64,
    pub male: i64,
    pub female: i64,
    pub median_age: f64,
}

/// Income figures in US dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub median_household: i64,
    pub per_capita: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Housing {
    pub median_home_value: i64,
    pub median_rent: i64,
    pub total_units: i64,
    pub occupied_units: i64,
    pub vacant_units: i64,
    pub owner_occupied: i64,
    pub renter_occupied: i64,
    /// Percentage of occupied units that are owner-occupied.
    pub home_ownership_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub college_educated_pct: f64,
    pub bachelors: i64,
    pub masters: i64,
    pub professional: i64,
    pub doctorate: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
    pub labor_force: i64,
    pub unemployed: i64,
    pub unemployment_rate: f64,
}

/// Race breakdown. Every group has the same count/percent shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub white: RaceGroup,
    pub black: RaceGroup,
    pub asian: RaceGroup,
    pub hispanic: RaceGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceGroup {
    pub count: i64,
    pub percent: f64,
}
