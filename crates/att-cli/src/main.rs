//! attendance - period accounting from the command line
//!
//! # Commands
//!
//! - `attendance periods --from <date> --to <date>` - periods held in a range
//! - `attendance required-date --attended N --total N` - date the threshold is reached
//! - `attendance report --attended N --total N --start <date> --end <date>` - report after attending a range
//! - `attendance simulate --attended N --total N --mode <mode> --unit <unit> --amount N` - leave scenario
//! - `attendance advise --attended N --total N` - rule-based recommendation
//! - `attendance holidays --year Y` - configured holidays in a year
//!
//! Dates are `YYYY-MM-DD` and default to today.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use att_accounting::AttendanceConfig;
use att_time::Date;

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::{ModeArg, StateArgs, UnitArg};

/// Attendance period accounting
#[derive(Parser)]
#[command(name = "attendance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (TOML); built-in defaults when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the periods held between two dates, both inclusive
    Periods {
        /// First date
        #[arg(long)]
        from: Option<Date>,

        /// Last date
        #[arg(long)]
        to: Option<Date>,
    },

    /// Find the first date on which full attendance reaches the threshold
    RequiredDate {
        #[command(flatten)]
        state: StateArgs,

        /// Date the search starts on
        #[arg(long)]
        from: Option<Date>,
    },

    /// Report after attending every period in a range
    Report {
        #[command(flatten)]
        state: StateArgs,

        /// First attended date
        #[arg(long)]
        start: Option<Date>,

        /// Last attended date
        #[arg(long)]
        end: Option<Date>,
    },

    /// Simulate taking leave
    Simulate {
        #[command(flatten)]
        state: StateArgs,

        /// Reference date of the leave
        #[arg(long)]
        reference: Option<Date>,

        /// Leave already taken or still to come
        #[arg(short, long, value_enum)]
        mode: ModeArg,

        /// Unit of the amount
        #[arg(short, long, value_enum, default_value = "days")]
        unit: UnitArg,

        /// Number of days or periods
        #[arg(short, long)]
        amount: u32,
    },

    /// Recommend what to do next
    Advise {
        #[command(flatten)]
        state: StateArgs,
    },

    /// List the configured holidays in a year
    Holidays {
        /// Calendar year
        #[arg(short, long)]
        year: Option<u16>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = match &cli.config {
        Some(path) => AttendanceConfig::load(path)?,
        None => AttendanceConfig::default(),
    };
    debug!(?config, "configuration in force");
    let today = commands::today()?;

    match cli.command {
        Commands::Periods { from, to } => {
            commands::periods::run(&config, from.unwrap_or(today), to.unwrap_or(today))
        }
        Commands::RequiredDate { state, from } => {
            commands::required_date::run(&config, state, from.unwrap_or(today))
        }
        Commands::Report { state, start, end } => {
            commands::report::run(
            &config,
            state,
            start.unwrap_or(today),
            end.unwrap_or(today),
        )
        }
        Commands::Simulate {
            state,
            reference,
            mode,
            unit,
            amount,
        } => commands::simulate::run(
            &config,
            state,
            reference.unwrap_or(today),
            mode,
            unit,
            amount,
        ),
        Commands::Advise { state } => commands::advise::run(&config, state),
        Commands::Holidays { year } => commands::holidays::run(&config, year.unwrap_or(today.year())),
    }
}
