//! World Bank indicator codes used by the chart apps.

/// Inflation, consumer prices (annual %).
pub const CPI_ANNUAL_PCT: &str = "FP.CPI.TOTL.ZG";

/// CO2 emissions (metric tons per capita).
pub const CO2_TONS_PER_CAPITA: &str = "EN.ATM.CO2E.PC";

/// Human-readable name for a known indicator code, falling back to the
/// code itself for anything we have no label for.
pub fn display_name(code: &str) -> &str {
    match code {
        CPI_ANNUAL_PCT => "Inflation, consumer prices (annual %)",
        CO2_TONS_PER_CAPITA => "CO2 emissions (metric tons per capita)",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(
            display_name(CPI_ANNUAL_PCT),
            "Inflation, consumer prices (annual %)"
        );
        assert_eq!(
            display_name(CO2_TONS_PER_CAPITA),
            "CO2 emissions (metric tons per capita)"
        );
    }

    #[test]
    fn unknown_codes_fall_back_to_code() {
        assert_eq!(display_name("SP.POP.TOTL"), "SP.POP.TOTL");
    }
}
