//! Reusable Dioxus RSX components for the indicator chart apps.

mod chart_container;
mod chart_header;
mod country_selector;
mod error_display;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
