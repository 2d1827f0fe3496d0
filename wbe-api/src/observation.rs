use crate::country::{CodedValue, PageInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Errors that can occur when fetching or parsing indicator observations.
#[derive(Debug, PartialEq, Clone, Copy, Hash)]
pub enum ObservationError {
    HttpRequestError,
    HttpResponseParseError,
    ObservationCollectionError,
}

/// One raw row of the `/v2/country/all/indicator/{code}` response.
///
/// `value` is null for country/year combinations the World Bank has no
/// data for; such rows are dropped when converting to [`Observation`].
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorRow {
    pub indicator: CodedValue,
    pub country: CodedValue,
    #[serde(rename = "countryiso3code")]
    pub country_iso3: String,
    pub date: String,
    pub value: Option<f64>,
}

/// A single tidy observation: one (country, year, value) data point.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Country display name (the join key used by the chart apps).
    pub country: String,
    pub iso3: String,
    pub year: i32,
    pub value: f64,
}

impl Observation {
    /// Parse one page of an indicator response: `[PageInfo, [rows]]`.
    pub fn parse_page(body: &str) -> Result<(PageInfo, Vec<IndicatorRow>), ObservationError> {
        serde_json::from_str(body).map_err(|_| ObservationError::HttpResponseParseError)
    }

    /// Convert raw API rows into tidy observations.
    ///
    /// Rows with a null value or a non-integer date (the annual endpoints
    /// only produce plain years) are dropped.
    pub fn rows_to_observations(rows: Vec<IndicatorRow>) -> Vec<Observation> {
        rows.into_iter()
            .filter_map(|row| {
                let value = row.value?;
                let year = row.date.trim().parse::<i32>().ok()?;
                Some(Observation {
                    country: row.country.value,
                    iso3: row.country_iso3,
                    year,
                    value,
                })
            })
            .collect()
    }

    /// Group a vector of observations by country name.
    pub fn by_country(observations: Vec<Observation>) -> HashMap<String, Vec<Observation>> {
        let mut result: HashMap<String, Vec<Observation>> = HashMap::new();
        for obs in observations {
            result.entry(obs.country.clone()).or_default().push(obs);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"[
        {"page": 1, "pages": 1, "per_page": 20000, "total": 4, "sourceid": "2", "lastupdated": "2024-03-28"},
        [
            {"indicator": {"id": "FP.CPI.TOTL.ZG", "value": "Inflation, consumer prices (annual %)"},
             "country": {"id": "NO", "value": "Norway"}, "countryiso3code": "NOR",
             "date": "2001", "value": 3.01, "unit": "", "obs_status": "", "decimal": 1},
            {"indicator": {"id": "FP.CPI.TOTL.ZG", "value": "Inflation, consumer prices (annual %)"},
             "country": {"id": "NO", "value": "Norway"}, "countryiso3code": "NOR",
             "date": "2000", "value": 3.09, "unit": "", "obs_status": "", "decimal": 1},
            {"indicator": {"id": "FP.CPI.TOTL.ZG", "value": "Inflation, consumer prices (annual %)"},
             "country": {"id": "SE", "value": "Sweden"}, "countryiso3code": "SWE",
             "date": "2000", "value": 0.9, "unit": "", "obs_status": "", "decimal": 1},
            {"indicator": {"id": "FP.CPI.TOTL.ZG", "value": "Inflation, consumer prices (annual %)"},
             "country": {"id": "SE", "value": "Sweden"}, "countryiso3code": "SWE",
             "date": "2001", "value": null, "unit": "", "obs_status": "", "decimal": 1}
        ]
    ]"#;

    #[test]
    fn parses_indicator_page() {
        let (info, rows) = Observation::parse_page(PAGE).unwrap();
        assert_eq!(info.total, 4);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].country.value, "Norway");
        assert_eq!(rows[0].date, "2001");
    }

    #[test]
    fn null_values_are_dropped() {
        let (_, rows) = Observation::parse_page(PAGE).unwrap();
        let observations = Observation::rows_to_observations(rows);
        assert_eq!(observations.len(), 3, "the null Sweden 2001 row is dropped");
        assert!(observations
            .iter()
            .all(|o| !o.country.is_empty() && o.year >= 2000));
    }

    #[test]
    fn groups_by_country() {
        let (_, rows) = Observation::parse_page(PAGE).unwrap();
        let grouped = Observation::by_country(Observation::rows_to_observations(rows));
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Norway"].len(), 2);
        assert_eq!(grouped["Sweden"].len(), 1);
    }

    #[test]
    fn parse_error_is_typed() {
        let result = Observation::parse_page("not json");
        assert_eq!(result.unwrap_err(), ObservationError::HttpResponseParseError);
    }
}
