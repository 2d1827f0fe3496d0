//! Inflation Around the World
//!
//! Displays consumer price inflation (annual %) as a multi-line chart,
//! one line per selected country. The user builds a selection with a
//! dropdown (plus removable chips); the chart re-renders on every change.
//!
//! Data flow:
//! 1. The `wbe-cli` tool fetches CPI data from the World Bank API into
//!    `fixtures/cpi.csv` (and `fixtures/countries.csv`).
//! 2. `build.rs` copies both CSVs into `OUT_DIR`.
//! 3. `include_str!` embeds the CSVs into the WASM binary.
//! 4. On mount, the CSVs are loaded into an in-memory SQLite database and
//!    the country dropdown is populated (aggregates excluded).
//! 5. Whenever the selection changes, `line_figure()` builds a chart
//!    specification and hands it to the D3.js bridge.

use dioxus::prelude::*;
use wbe_chart_ui::components::{
    ChartContainer, ChartHeader, CountrySelector, ErrorDisplay, LoadingSpinner,
};
use wbe_chart_ui::js_bridge;
use wbe_chart_ui::state::AppState;
use wbe_db::figure::{line_figure, Selection};
use wbe_db::Database;

/// Country metadata for the dropdown, aggregates included.
const COUNTRIES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/countries.csv"));
/// Annual CPI observations for all countries.
const OBSERVATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/cpi.csv"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "inflation-chart";

/// Pre-selected country on first load.
const DEFAULT_COUNTRY: &str = "Norway";

/// Y-axis title for the CPI figure.
const Y_TITLE: &str = "Inflation in %";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("inflation-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Initialize database on mount
    use_effect(move || {
        match Database::new() {
            Ok(db) => {
                if let Err(e) = db.load_countries(COUNTRIES_CSV) {
                    log::error!("Failed to load countries: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load country data: {}", e)));
                    state.loading.set(false);
                    return;
                }
                if let Err(e) = db.load_observations(OBSERVATIONS_CSV) {
                    log::error!("Failed to load observations: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load observations: {}", e)));
                    state.loading.set(false);
                    return;
                }

                // Populate the dropdown and pick the default selection
                if let Ok(countries) = db.query_countries() {
                    if !countries.is_empty() {
                        let default = if countries.iter().any(|c| c.name == DEFAULT_COUNTRY) {
                            DEFAULT_COUNTRY.to_string()
                        } else {
                            countries[0].name.clone()
                        };
                        state.selected_countries.set(vec![default]);
                    }
                    state.countries.set(countries);
                }

                if let Ok((min_year, max_year)) = db.query_year_range() {
                    log::info!("observations span {}..{}", min_year, max_year);
                }

                state.db.set(Some(db));
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Re-render chart whenever the selection changes
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let selected = (state.selected_countries)();

        // Initialize D3.js chart scripts
        js_bridge::init_charts();

        let figure = match line_figure(&db, &Selection::Many(selected), Y_TITLE) {
            Ok(figure) => figure,
            Err(e) => {
                log::error!("Failed to build figure: {}", e);
                return;
            }
        };

        let figure_json = serde_json::to_string(&figure).unwrap_or_default();
        js_bridge::render_line_figure(CHART_ID, &figure_json);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Inflation around the world".to_string(),
                subtitle: "Comparison between chosen countries".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                CountrySelector {}
                ChartContainer {
                    id: CHART_ID.to_string(),
                    loading: false,
                    min_height: 420,
                }
            }
        }
    }
}
