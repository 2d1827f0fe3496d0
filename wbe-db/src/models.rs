//! Query result model structs for indicator chart data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// A single (year, value) pair for one country's line chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// A (country, year, value) triple for multi-line indicator charts.
///
/// Each point identifies which country the observation belongs to,
/// enabling the chart to draw one line per country.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryYearValue {
    pub country: String,
    pub year: i32,
    pub value: f64,
}

/// Country metadata for selection lists and chart labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryInfo {
    /// Display name (e.g. "Norway"), the dropdown value and join key.
    pub name: String,
    /// ISO3 code (e.g. "NOR").
    pub iso3: String,
    /// World Bank region name.
    pub region: String,
    /// World Bank income level classification.
    pub income_level: String,
}
