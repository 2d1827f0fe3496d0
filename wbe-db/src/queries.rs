//! Typed query methods for retrieving indicator data from the database.
//!
//! All queries return typed structs from [`crate::models`] that can be
//! serialized to JSON for consumption by D3.js chart components.

use crate::models::{CountryInfo, CountryYearValue};
use crate::Database;
use rusqlite::params_from_iter;

impl Database {
    /// Get the selectable countries for the dropdown.
    ///
    /// A country is selectable when it has at least one observation and is
    /// a real country in the metadata table -- aggregate rows (World,
    /// Euro area, income groups) are excluded by the region filter, the
    /// same inner-join-then-filter the upstream data pipeline applies.
    /// Ordered by name.
    pub fn query_countries(&self) -> anyhow::Result<Vec<CountryInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT c.name, c.iso3, c.region, c.income_level
             FROM countries c
             INNER JOIN observations o ON o.country = c.name
             WHERE c.region != 'Aggregates'
             ORDER BY c.name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryInfo {
                    name: row.get(0)?,
                    iso3: row.get(1)?,
                    region: row.get(2)?,
                    income_level: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("query: query_countries returned {} records", rows.len());
        Ok(rows)
    }

    /// Get observations for a set of countries (for the multi-line chart).
    ///
    /// Membership filter against the full selection; countries absent from
    /// the data simply match nothing. Ordered ascending by year, then by
    /// country for a stable layout of equal-year rows.
    pub fn query_indicator_series(
        &self,
        countries: &[String],
    ) -> anyhow::Result<Vec<CountryYearValue>> {
        if countries.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn.borrow();
        let placeholders = (1..=countries.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT country, year, value FROM observations
             WHERE country IN ({placeholders})
             ORDER BY year, country"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params_from_iter(countries.iter()), |row| {
                Ok(CountryYearValue {
                    country: row.get(0)?,
                    year: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "query: query_indicator_series returned {} records for {} countries",
            rows.len(),
            countries.len()
        );
        Ok(rows)
    }

    /// Get the (min, max) year range over all observations.
    pub fn query_year_range(&self) -> anyhow::Result<(i32, i32)> {
        let conn = self.conn.borrow();
        let (min_year, max_year) =
            conn.query_row("SELECT MIN(year), MAX(year) FROM observations", [], |row| {
                Ok((row.get::<_, i32>(0)?, row.get::<_, i32>(1)?))
            })?;
        log::info!(
            "query: query_year_range returned ({}, {})",
            min_year,
            max_year
        );
        Ok((min_year, max_year))
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    fn test_db() -> Database {
        let db = Database::new().unwrap();
        db.load_countries(
            "ISO3,ISO2,NAME,REGION,INCOME_LEVEL\n\
             NOR,NO,Norway,Europe & Central Asia,High income\n\
             SWE,SE,Sweden,Europe & Central Asia,High income\n\
             WLD,1W,World,Aggregates,Aggregates\n",
        )
        .unwrap();
        db.load_observations(
            "Norway,2001,3.5\nNorway,2000,3.0\nSweden,2000,1.0\nWorld,2000,4.2\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn countries_exclude_aggregates_and_sort_by_name() {
        let db = test_db();
        let countries = db.query_countries().unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Norway", "Sweden"]);
    }

    #[test]
    fn countries_require_observations() {
        let db = Database::new().unwrap();
        db.load_countries(
            "ISO3,ISO2,NAME,REGION,INCOME_LEVEL\nNOR,NO,Norway,Europe & Central Asia,High income\n",
        )
        .unwrap();
        // metadata but no observations -> nothing to chart, nothing to select
        assert!(db.query_countries().unwrap().is_empty());
    }

    #[test]
    fn series_filters_by_membership_and_sorts_by_year() {
        let db = test_db();
        let rows = db
            .query_indicator_series(&["Norway".to_string(), "Atlantis".to_string()])
            .unwrap();
        assert_eq!(rows.len(), 2, "Atlantis matches nothing");
        assert_eq!(rows[0].year, 2000);
        assert_eq!(rows[1].year, 2001);
        assert!(rows.iter().all(|r| r.country == "Norway"));
    }

    #[test]
    fn series_with_empty_selection_is_empty() {
        let db = test_db();
        assert!(db.query_indicator_series(&[]).unwrap().is_empty());
    }

    #[test]
    fn year_range_spans_all_observations() {
        let db = test_db();
        assert_eq!(db.query_year_range().unwrap(), (2000, 2001));
    }
}
