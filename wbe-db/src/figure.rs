//! Line-figure assembly: from a country selection to a chart specification.
//!
//! [`line_figure`] is the single reactive binding behind both dashboards.
//! It takes the immutable database handle and the current [`Selection`],
//! filters and sorts the observations, groups them into one labeled series
//! per selected country, and returns a [`Figure`] that fully determines
//! what D3.js draws -- no state is kept between invocations, so the same
//! selection against the same database always produces the same figure.

use crate::models::CountryYearValue;
use crate::Database;
use serde::Serialize;

/// The user's country selection, as delivered by the dropdown control.
///
/// A single country and a one-element list mean the same thing; the
/// variants exist so callers never have to coerce between the two shapes.
/// Order is preserved (it decides series order in the legend), duplicates
/// are collapsed during normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(String),
    Many(Vec<String>),
}

impl Selection {
    /// Normalize to an ordered, de-duplicated list of country names.
    ///
    /// This runs before any filtering, so the rest of the pipeline only
    /// ever sees a sequence.
    pub fn countries(&self) -> Vec<String> {
        let raw: Vec<&String> = match self {
            Selection::Single(name) => vec![name],
            Selection::Many(names) => names.iter().collect(),
        };
        let mut seen = Vec::new();
        for name in raw {
            if !seen.contains(name) {
                seen.push(name.clone());
            }
        }
        seen
    }
}

impl From<&str> for Selection {
    fn from(name: &str) -> Self {
        Selection::Single(name.to_string())
    }
}

impl From<Vec<String>> for Selection {
    fn from(names: Vec<String>) -> Self {
        Selection::Many(names)
    }
}

/// One (year, value) point of a chart series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

/// One line trace: a country's observations sorted ascending by year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    /// Legend label, equal to the country name.
    pub label: String,
    pub points: Vec<Point>,
}

/// A complete chart specification, serialized to JSON for the D3 bridge.
///
/// `y_range` is `[min, max]` over exactly the filtered rows. When the
/// filtered set is empty there is no defensible range, so the field is
/// omitted from the JSON and the rendering surface auto-scales (or shows
/// its empty-selection placeholder).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub x_title: String,
    pub y_title: String,
    pub show_legend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_range: Option<[f64; 2]>,
    pub series: Vec<Series>,
}

/// Build the line figure for a selection of countries.
///
/// 1. Normalize the selection to an ordered country list.
/// 2. Filter the observations to members of that list, sorted ascending
///    by year (SQL does both; countries absent from the data match
///    nothing and are silently dropped).
/// 3. Group into one series per country, in selection order.
/// 4. Fix the y-axis range to [min, max] of the filtered values.
pub fn line_figure(db: &Database, selection: &Selection, y_title: &str) -> anyhow::Result<Figure> {
    let countries = selection.countries();
    let rows = db.query_indicator_series(&countries)?;

    let y_range = value_range(&rows);

    let mut series = Vec::new();
    for country in &countries {
        let points: Vec<Point> = rows
            .iter()
            .filter(|r| &r.country == country)
            .map(|r| Point {
                year: r.year,
                value: r.value,
            })
            .collect();
        if points.is_empty() {
            continue;
        }
        series.push(Series {
            label: country.clone(),
            points,
        });
    }

    log::info!(
        "figure: {} series from {} selected countries ({} rows)",
        series.len(),
        countries.len(),
        rows.len()
    );

    Ok(Figure {
        x_title: "Year".to_string(),
        y_title: y_title.to_string(),
        show_legend: true,
        y_range,
        series,
    })
}

/// [min, max] of the values, or None for an empty slice.
fn value_range(rows: &[CountryYearValue]) -> Option<[f64; 2]> {
    let mut iter = rows.iter().map(|r| r.value);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    Some([min, max])
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y_TITLE: &str = "Inflation in %";

    fn test_db() -> Database {
        let db = Database::new().unwrap();
        db.load_countries(
            "ISO3,ISO2,NAME,REGION,INCOME_LEVEL\n\
             NOR,NO,Norway,Europe & Central Asia,High income\n\
             SWE,SE,Sweden,Europe & Central Asia,High income\n",
        )
        .unwrap();
        // Years deliberately out of order in the fixture
        db.load_observations("Norway,2001,3.5\nNorway,2000,3.0\nSweden,2000,1.0\n")
            .unwrap();
        db
    }

    #[test]
    fn single_country_yields_one_sorted_series() {
        let db = test_db();
        let figure = line_figure(&db, &"Norway".into(), Y_TITLE).unwrap();
        assert_eq!(figure.series.len(), 1);
        let series = &figure.series[0];
        assert_eq!(series.label, "Norway");
        assert_eq!(
            series.points,
            vec![
                Point { year: 2000, value: 3.0 },
                Point { year: 2001, value: 3.5 },
            ]
        );
        assert_eq!(figure.y_range, Some([3.0, 3.5]));
    }

    #[test]
    fn two_countries_yield_two_series_and_combined_range() {
        let db = test_db();
        let selection = Selection::Many(vec!["Norway".to_string(), "Sweden".to_string()]);
        let figure = line_figure(&db, &selection, Y_TITLE).unwrap();
        assert_eq!(figure.series.len(), 2);
        assert_eq!(figure.series[0].label, "Norway");
        assert_eq!(figure.series[1].label, "Sweden");
        assert_eq!(figure.y_range, Some([1.0, 3.5]));
    }

    #[test]
    fn absent_country_yields_no_series() {
        let db = test_db();
        let figure = line_figure(&db, &"Atlantis".into(), Y_TITLE).unwrap();
        assert!(figure.series.is_empty());
        assert_eq!(figure.y_range, None);
    }

    #[test]
    fn unknown_countries_are_dropped_from_mixed_selections() {
        let db = test_db();
        let selection = Selection::Many(vec!["Atlantis".to_string(), "Sweden".to_string()]);
        let figure = line_figure(&db, &selection, Y_TITLE).unwrap();
        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].label, "Sweden");
        assert_eq!(figure.y_range, Some([1.0, 1.0]));
    }

    #[test]
    fn scalar_and_singleton_list_agree() {
        let db = test_db();
        let scalar = line_figure(&db, &Selection::Single("Norway".to_string()), Y_TITLE).unwrap();
        let list = line_figure(
            &db,
            &Selection::Many(vec!["Norway".to_string()]),
            Y_TITLE,
        )
        .unwrap();
        assert_eq!(scalar, list);
    }

    #[test]
    fn duplicate_selection_entries_collapse() {
        let db = test_db();
        let selection = Selection::Many(vec!["Norway".to_string(), "Norway".to_string()]);
        let figure = line_figure(&db, &selection, Y_TITLE).unwrap();
        assert_eq!(figure.series.len(), 1);
    }

    #[test]
    fn figure_is_idempotent() {
        let db = test_db();
        let selection = Selection::Many(vec!["Norway".to_string(), "Sweden".to_string()]);
        let first = line_figure(&db, &selection, Y_TITLE).unwrap();
        let second = line_figure(&db, &selection, Y_TITLE).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn selection_order_decides_series_order() {
        let db = test_db();
        let selection = Selection::Many(vec!["Sweden".to_string(), "Norway".to_string()]);
        let figure = line_figure(&db, &selection, Y_TITLE).unwrap();
        let labels: Vec<&str> = figure.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Sweden", "Norway"]);
    }

    #[test]
    fn empty_selection_yields_empty_figure() {
        let db = test_db();
        let figure = line_figure(&db, &Selection::Many(Vec::new()), Y_TITLE).unwrap();
        assert!(figure.series.is_empty());
        assert_eq!(figure.y_range, None);
        assert_eq!(figure.x_title, "Year");
        assert!(figure.show_legend);
    }

    #[test]
    fn empty_range_is_omitted_from_json() {
        let db = test_db();
        let empty = line_figure(&db, &Selection::Many(Vec::new()), Y_TITLE).unwrap();
        let json = serde_json::to_string(&empty).unwrap();
        assert!(!json.contains("yRange"), "range must be absent, not null");

        let full = line_figure(&db, &"Norway".into(), Y_TITLE).unwrap();
        let json = serde_json::to_string(&full).unwrap();
        assert!(json.contains("\"yRange\":[3.0,3.5]"));
        assert!(json.contains("\"xTitle\":\"Year\""));
    }

    #[test]
    fn normalization_preserves_order_and_dedups() {
        let selection = Selection::Many(vec![
            "Sweden".to_string(),
            "Norway".to_string(),
            "Sweden".to_string(),
        ]);
        assert_eq!(selection.countries(), vec!["Sweden", "Norway"]);
        assert_eq!(
            Selection::Single("Norway".to_string()).countries(),
            vec!["Norway"]
        );
    }
}
