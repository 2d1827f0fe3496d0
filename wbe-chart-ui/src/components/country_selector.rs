//! Dropdown selector for choosing countries to chart.

use crate::state::AppState;
use dioxus::prelude::*;

/// Multi-country selector: a dropdown that adds a country to the selection
/// plus one removable chip per selected country.
///
/// Reads the option catalog from AppState and updates selected_countries
/// on change; the chart effect re-runs off that signal.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.countries.read().clone();
    let selected = (state.selected_countries)();

    let on_add = move |evt: Event<FormData>| {
        let value = evt.value();
        if value.is_empty() {
            return;
        }
        let mut current = (state.selected_countries)();
        if !current.contains(&value) {
            current.push(value);
            state.selected_countries.set(current);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "country-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Select countries: "
            }
            select {
                id: "country-select",
                onchange: on_add,
                // Controlled to the placeholder so the dropdown resets after each add
                value: "",
                option {
                    value: "",
                    disabled: true,
                    "Add a country..."
                }
                for country in countries.iter() {
                    option {
                        value: "{country.name}",
                        "{country.name}"
                    }
                }
            }
            div {
                style: "margin-top: 8px; display: flex; flex-wrap: wrap; gap: 6px;",
                for name in selected.iter() {
                    {
                        let label = name.clone();
                        let target = name.clone();
                        rsx! {
                            button {
                                style: "padding: 2px 8px; border: 1px solid #90CAF9; border-radius: 12px; background: #E3F2FD; color: #1565C0; font-size: 12px; cursor: pointer;",
                                onclick: move |_| {
                                    let mut current = (state.selected_countries)();
                                    current.retain(|n| n != &target);
                                    state.selected_countries.set(current);
                                },
                                "{label} ✕"
                            }
                        }
                    }
                }
            }
        }
    }
}
