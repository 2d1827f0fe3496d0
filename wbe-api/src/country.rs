use serde::{Deserialize, Serialize};

/// Region value the World Bank assigns to non-country rows
/// (World, Euro area, income groups, ...).
pub const AGGREGATE_REGION: &str = "Aggregates";

/// A coded classification value as returned by the World Bank API,
/// e.g. `{"id": "ECS", "iso2code": "Z7", "value": "Europe & Central Asia"}`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CodedValue {
    #[serde(default)]
    pub id: String,
    pub value: String,
}

/// Country metadata from the `/v2/country` endpoint.
///
/// The endpoint mixes real countries with aggregate rows; the latter carry
/// `"Aggregates"` as their region value and must be excluded before a
/// country can appear in a dropdown.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Country {
    /// ISO3 code (e.g. "NOR").
    pub id: String,
    #[serde(rename = "iso2Code")]
    pub iso2_code: String,
    pub name: String,
    pub region: CodedValue,
    #[serde(rename = "incomeLevel")]
    pub income_level: CodedValue,
}

/// Paging header preceding every World Bank JSON response body.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub pages: u32,
    pub total: u32,
}

impl Country {
    /// True for aggregate rows (World, Euro area, income groups, ...).
    pub fn is_aggregate(&self) -> bool {
        self.region.value.trim() == AGGREGATE_REGION
    }

    /// Parse one page of the `/v2/country` response: `[PageInfo, [rows]]`.
    pub fn parse_page(body: &str) -> anyhow::Result<(PageInfo, Vec<Country>)> {
        let envelope: (PageInfo, Vec<Country>) = serde_json::from_str(body)?;
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"[
        {"page": 1, "pages": 1, "per_page": "300", "total": 3},
        [
            {"id": "NOR", "iso2Code": "NO", "name": "Norway",
             "region": {"id": "ECS", "iso2code": "Z7", "value": "Europe & Central Asia"},
             "adminregion": {"id": "", "iso2code": "", "value": ""},
             "incomeLevel": {"id": "HIC", "iso2code": "XD", "value": "High income"},
             "lendingType": {"id": "LNX", "iso2code": "XX", "value": "Not classified"},
             "capitalCity": "Oslo", "longitude": "10.7387", "latitude": "59.9138"},
            {"id": "SWE", "iso2Code": "SE", "name": "Sweden",
             "region": {"id": "ECS", "iso2code": "Z7", "value": "Europe & Central Asia"},
             "incomeLevel": {"id": "HIC", "iso2code": "XD", "value": "High income"}},
            {"id": "WLD", "iso2Code": "1W", "name": "World",
             "region": {"id": "NA", "iso2code": "NA", "value": "Aggregates"},
             "incomeLevel": {"id": "NA", "iso2code": "NA", "value": "Aggregates"}}
        ]
    ]"#;

    #[test]
    fn parses_page_envelope() {
        let (info, countries) = Country::parse_page(PAGE).unwrap();
        assert_eq!(info.page, 1);
        assert_eq!(info.pages, 1);
        assert_eq!(info.total, 3);
        assert_eq!(countries.len(), 3);
        assert_eq!(countries[0].name, "Norway");
        assert_eq!(countries[0].iso2_code, "NO");
        assert_eq!(countries[0].income_level.value, "High income");
    }

    #[test]
    fn aggregates_are_flagged() {
        let (_, countries) = Country::parse_page(PAGE).unwrap();
        assert!(!countries[0].is_aggregate());
        assert!(!countries[1].is_aggregate());
        assert!(countries[2].is_aggregate(), "World is an aggregate row");
    }

    #[test]
    fn rejects_malformed_body() {
        assert!(Country::parse_page("{\"not\": \"an envelope\"}").is_err());
    }
}
