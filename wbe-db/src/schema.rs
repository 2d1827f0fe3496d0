//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for country metadata and indicator
//! observations. The schema is applied as a single batch when the
//! database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `countries` - Country metadata (name, ISO codes, region, income level).
///   The region column is what separates real countries from World Bank
///   aggregate rows ("Aggregates").
/// - `observations` - Annual indicator values, one row per (country, year).
///   The country column holds the display name, which is also the join key
///   against `countries.name` and the value carried by the dropdown.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS countries (
        name TEXT PRIMARY KEY,
        iso3 TEXT NOT NULL,
        iso2 TEXT,
        region TEXT NOT NULL,
        income_level TEXT
    );

    CREATE TABLE IF NOT EXISTS observations (
        country TEXT NOT NULL,
        year INTEGER NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (country, year)
    );
    CREATE INDEX IF NOT EXISTS idx_obs_country ON observations(country);
    CREATE INDEX IF NOT EXISTS idx_obs_year ON observations(year);

    "#
}
