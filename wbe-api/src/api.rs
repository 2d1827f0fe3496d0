//! Async client for the World Bank API v2.
//!
//! All list endpoints are paged and wrapped in a `[PageInfo, [rows]]`
//! envelope; the fetch methods loop until the reported page count is
//! exhausted. Only compiled for native targets (feature `api`) -- the
//! WASM chart apps consume pre-fetched CSV fixtures instead.

use crate::country::Country;
use crate::observation::{IndicatorRow, Observation};
use crate::year_range::YearRange;
use anyhow::Context;
use log::info;

/// Base URL for the World Bank API.
pub const BASE_URL: &str = "https://api.worldbank.org/v2";

/// Rows per page. The indicator endpoints accept large pages, which keeps
/// a 24-year all-country query to a handful of requests.
const PER_PAGE: u32 = 20_000;

/// Rows per page for the country list (small, a single page in practice).
const COUNTRY_PER_PAGE: u32 = 300;

pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Client against an alternate base URL (used by tests and mirrors).
    pub fn with_base_url(base_url: &str) -> anyhow::Result<Self> {
        let mut client = Self::new()?;
        client.base_url = base_url.trim_end_matches('/').to_string();
        Ok(client)
    }

    /// Fetch the complete country list, aggregates included.
    pub async fn fetch_countries(&self) -> anyhow::Result<Vec<Country>> {
        let mut all = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/country?format=json&per_page={}&page={}",
                self.base_url, COUNTRY_PER_PAGE, page
            );
            let body = self
                .http
                .get(&url)
                .send()
                .await
                .with_context(|| format!("country request failed: {url}"))?
                .text()
                .await?;
            let (info, mut batch) = Country::parse_page(&body)
                .with_context(|| format!("unexpected country response from {url}"))?;
            info!(
                "fetched country page {}/{} ({} rows)",
                info.page,
                info.pages,
                batch.len()
            );
            all.append(&mut batch);
            if page >= info.pages {
                break;
            }
            page += 1;
        }
        Ok(all)
    }

    /// Fetch all observations for one indicator over a year range.
    ///
    /// Rows with null values are dropped during conversion, so the result
    /// contains only real (country, year, value) data points.
    pub async fn fetch_indicator(
        &self,
        code: &str,
        range: &YearRange,
    ) -> anyhow::Result<Vec<Observation>> {
        let mut rows: Vec<IndicatorRow> = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!(
                "{}/country/all/indicator/{}?format=json&date={}&per_page={}&page={}",
                self.base_url,
                code,
                range.as_date_param(),
                PER_PAGE,
                page
            );
            let body = self
                .http
                .get(&url)
                .send()
                .await
                .with_context(|| format!("indicator request failed: {url}"))?
                .text()
                .await?;
            let (info, mut batch) = Observation::parse_page(&body)
                .map_err(|e| anyhow::anyhow!("unexpected indicator response from {url}: {e:?}"))?;
            info!(
                "fetched {} page {}/{} ({} rows)",
                code,
                info.page,
                info.pages,
                batch.len()
            );
            rows.append(&mut batch);
            if page >= info.pages {
                break;
            }
            page += 1;
        }
        Ok(Observation::rows_to_observations(rows))
    }
}
