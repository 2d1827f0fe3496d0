//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. The CSV formats match the fixture files
//! produced by the CLI query tool.
//!
//! # CSV Formats
//!
//! - **Countries** (has headers): `ISO3,ISO2,NAME,REGION,INCOME_LEVEL`
//! - **Observations** (no headers): `country,year,value`

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load country metadata from CSV string.
    ///
    /// Expected format (with headers): `ISO3,ISO2,NAME,REGION,INCOME_LEVEL`
    ///
    /// Aggregate rows (region "Aggregates") are loaded as-is; excluding
    /// them is the job of [`query_countries`](Database::query_countries).
    ///
    /// # Example CSV
    /// ```text
    /// ISO3,ISO2,NAME,REGION,INCOME_LEVEL
    /// NOR,NO,Norway,Europe & Central Asia,High income
    /// ```
    pub fn load_countries(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let iso3 = r.get(0).unwrap_or("").trim();
            let iso2 = r.get(1).unwrap_or("").trim();
            let name = r.get(2).unwrap_or("").trim();
            let region = r.get(3).unwrap_or("").trim();
            let income_level = r.get(4).unwrap_or("").trim();

            if name.is_empty() || region.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO countries (name, iso3, iso2, region, income_level)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![name, iso3, iso2, region, income_level],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} countries, skipped {}", count, skipped);
        Ok(())
    }

    /// Load indicator observations from CSV string.
    ///
    /// Expected format (no headers): `country,year,value`
    ///
    /// Rows with a non-numeric year or value, or an empty country name,
    /// are skipped. The fixture pipeline already drops null API values,
    /// so skips here indicate a hand-edited or truncated file.
    ///
    /// # Example CSV
    /// ```text
    /// Norway,2000,3.09
    /// Norway,2001,3.01
    /// ```
    pub fn load_observations(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let country = r.get(0).unwrap_or("").trim();
            let year_str = r.get(1).unwrap_or("").trim();
            let value_str = r.get(2).unwrap_or("").trim();

            let year: i32 = match year_str.parse() {
                Ok(y) => y,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let value: f64 = match value_str.parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if country.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO observations (country, year, value)
                 VALUES (?1, ?2, ?3)",
                params![country, year, value],
            )?;
            count += 1;
        }
        log::info!(
            "loader: loaded {} observations, skipped {} malformed",
            count,
            skipped
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const COUNTRIES_CSV: &str = "\
ISO3,ISO2,NAME,REGION,INCOME_LEVEL
NOR,NO,Norway,Europe & Central Asia,High income
SWE,SE,Sweden,Europe & Central Asia,High income
WLD,1W,World,Aggregates,Aggregates
";

    #[test]
    fn loads_countries() {
        let db = Database::new().unwrap();
        db.load_countries(COUNTRIES_CSV).unwrap();
        db.load_observations("Norway,2000,3.09\nSweden,2000,0.9\nWorld,2000,4.2\n")
            .unwrap();
        // query_countries filters aggregates; the World row is loaded but hidden
        let countries = db.query_countries().unwrap();
        assert_eq!(countries.len(), 2);
    }

    #[test]
    fn skips_malformed_observation_rows() {
        let db = Database::new().unwrap();
        db.load_observations(
            "Norway,2000,3.09\nNorway,2001,not-a-number\n,2002,1.0\nNorway,20xx,1.0\nNorway,2003,2.5\n",
        )
        .unwrap();
        let series = db
            .query_indicator_series(&["Norway".to_string()])
            .unwrap();
        assert_eq!(series.len(), 2, "only the two well-formed rows survive");
    }

    #[test]
    fn reloading_a_row_replaces_it() {
        let db = Database::new().unwrap();
        db.load_observations("Norway,2000,3.09\n").unwrap();
        db.load_observations("Norway,2000,3.50\n").unwrap();
        let series = db
            .query_indicator_series(&["Norway".to_string()])
            .unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 3.50);
    }
}
