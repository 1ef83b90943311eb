use crate::core::HighlightScope;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimewatch
/// CLI application to keep remaining/exceeded times of a deadline sheet up to date
#[derive(Parser)]
#[command(
    name = "rtimewatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Deadline monitor: recompute remaining and exceeded time in a spreadsheet and highlight expired rows",
    long_about = None
)]
pub struct Cli {
    /// Override the monitored table path (.xlsx or .csv)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the reference timezone (IANA name, e.g. America/Sao_Paulo)
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Pin the reference instant (RFC 3339), used by tests
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Only log errors on stderr
    #[arg(global = true, long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty table
    Init,

    /// Run one update cycle on the table
    Run {
        #[arg(long, value_enum, help = "Highlight only the cell or the whole row")]
        highlight: Option<HighlightScope>,
    },

    /// Run update cycles on a fixed cadence
    Watch {
        #[arg(long, value_name = "SECONDS", help = "Seconds between cycles")]
        interval: Option<u64>,

        #[arg(long, value_name = "N", help = "Stop after N cycles")]
        cycles: Option<u32>,

        #[arg(long, value_enum, help = "Highlight only the cell or the whole row")]
        highlight: Option<HighlightScope>,
    },

    /// Show the table as last written, without recomputing
    Show {
        #[arg(long, help = "Print records as JSON")]
        json: bool,
    },

    /// Replace the monitored table with another file
    Load {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Copy the monitored table to another file
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },
}
