use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftpay
/// CLI application to track work shifts and estimate bi-weekly net pay
#[derive(Parser)]
#[command(
    name = "shiftpay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work shifts, clock in/out, and estimate bi-weekly net pay",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override state file path (useful for tests)
    #[arg(global = true, long = "state", hide = true)]
    pub state: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Clock in (start a work session)
    In,

    /// Clock out (end the running session and record the shift)
    Out,

    /// Show the clock state and the next payday
    Status,

    /// Add a shift manually
    Add {
        /// Shift date (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM); an end before the start crosses midnight
        end: String,
    },

    /// Delete a shift by id
    Del {
        /// Shift id as shown by `list`
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List shifts and aggregated views
    List {
        #[arg(long, help = "Group by calendar week (Mon–Sun)")]
        weekly: bool,

        #[arg(
            long,
            help = "Group by bi-weekly pay period (requires a payday anchor)"
        )]
        periods: bool,
    },

    /// Estimate pay for a bi-weekly period
    Pay {
        /// Period offset: 0 = current, -1 = previous, 1 = next
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        period: i64,
    },

    /// Show or set the payday anchor (a known Friday payday)
    Payday {
        #[arg(
            long,
            value_name = "DATE",
            help = "Set the anchor payday (YYYY-MM-DD, must be a Friday)"
        )]
        set: Option<String>,

        #[arg(long, help = "Clear the anchor")]
        clear: bool,
    },

    /// Export all shifts to CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal audit table")]
        print: bool,
    },
}
