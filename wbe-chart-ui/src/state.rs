//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wbe_db::models::CountryInfo;
use wbe_db::Database;

/// Shared application state for the indicator chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected countries, in selection order
    pub selected_countries: Signal<Vec<String>>,
    /// Selectable countries (the option catalog)
    pub countries: Signal<Vec<CountryInfo>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_countries: Signal::new(Vec::new()),
            countries: Signal::new(Vec::new()),
        }
    }
}
