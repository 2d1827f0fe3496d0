//! Fetch implementations for the `countries` and `query` subcommands.
//!
//! Both write CSV fixtures in the formats the chart apps' loaders expect:
//!
//! - countries (with headers): `ISO3,ISO2,NAME,REGION,INCOME_LEVEL`
//! - observations (no headers): `country,year,value`
//!
//! Aggregate country rows are written out too; the chart apps exclude
//! them at query time with the same region filter the original data
//! pipeline used.

use chrono::{Datelike, Local};
use log::info;
use wbe_api::api::Client;
use wbe_api::indicator;
use wbe_api::year_range::YearRange;

/// Fetch the country list and write the countries fixture CSV.
pub async fn run_countries(output: &str) -> anyhow::Result<()> {
    let client = Client::new()?;
    let countries = client.fetch_countries().await?;

    let aggregates = countries.iter().filter(|c| c.is_aggregate()).count();
    info!(
        "fetched {} rows ({} countries, {} aggregates)",
        countries.len(),
        countries.len() - aggregates,
        aggregates
    );

    let mut wtr = csv::Writer::from_path(output)?;
    wtr.write_record(["ISO3", "ISO2", "NAME", "REGION", "INCOME_LEVEL"])?;
    for country in &countries {
        wtr.write_record([
            country.id.as_str(),
            country.iso2_code.as_str(),
            country.name.as_str(),
            country.region.value.as_str(),
            country.income_level.value.as_str(),
        ])?;
    }
    wtr.flush()?;

    info!("countries written to {}", output);
    Ok(())
}

/// Fetch one indicator over a year range and write the observations CSV.
///
/// `end` defaults to the current year; the API returns nulls for years
/// not yet published and those rows are dropped before writing.
pub async fn run_query(
    indicator_code: &str,
    start: i32,
    end: Option<i32>,
    output: &str,
) -> anyhow::Result<()> {
    let end = end.unwrap_or_else(|| Local::now().year());
    anyhow::ensure!(start <= end, "start year {start} is after end year {end}");
    let range = YearRange(start, end);

    info!(
        "querying {} ({}) for {}",
        indicator_code,
        indicator::display_name(indicator_code),
        range.as_date_param()
    );

    let client = Client::new()?;
    let observations = client.fetch_indicator(indicator_code, &range).await?;
    info!("fetched {} observations", observations.len());

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)?;
    for obs in &observations {
        wtr.write_record([
            obs.country.as_str(),
            obs.year.to_string().as_str(),
            format!("{}", obs.value).as_str(),
        ])?;
    }
    wtr.flush()?;

    info!("observations written to {}", output);
    Ok(())
}
