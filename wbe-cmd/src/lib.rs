//! Command implementations for the WBE CLI.
//!
//! Provides subcommands for fetching World Bank country metadata and
//! indicator observations, writing the CSV fixtures the chart apps embed.

use clap::Subcommand;

pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch World Bank country metadata and write the countries fixture
    Countries {
        /// Output path for the countries CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Fetch observations for one indicator over a year range
    Query {
        /// World Bank indicator code
        #[arg(short = 'i', long, default_value = wbe_api::indicator::CPI_ANNUAL_PCT)]
        indicator: String,

        /// First year of the range
        #[arg(long, default_value_t = 2000)]
        start: i32,

        /// Last year of the range (defaults to the current year)
        #[arg(long)]
        end: Option<i32>,

        /// Output path for the observations CSV
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Countries { output } => query::run_countries(&output).await,
        Command::Query {
            indicator,
            start,
            end,
            output,
        } => query::run_query(&indicator, start, end, &output).await,
    }
}
