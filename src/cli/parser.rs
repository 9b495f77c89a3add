use crate::export::{CsvQuoting, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimesheet
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fill a week of worked hours by hand or from an uploaded document, then export payroll CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start a new blank period
    New {
        /// Any date of the period (YYYY-MM-DD or "today"); defaults to today
        date: Option<String>,

        /// Number of days (1-7) starting exactly at DATE instead of the Mon-Fri week
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        days: Option<u8>,

        /// Discard a draft that already holds entered data
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Set the employee identity used for extraction and export
    Employee {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long = "id")]
        employee_id: Option<String>,
    },

    /// Edit one day of the current period
    Set {
        /// Date (YYYY-MM-DD) inside the current period
        date: String,

        /// Start time (HH:MM); requires --out
        #[arg(long = "in", requires = "end")]
        start: Option<String>,

        /// End time (HH:MM); requires --in
        #[arg(long = "out", requires = "start")]
        end: Option<String>,

        /// Total hours worked (takes precedence over start/end)
        #[arg(long)]
        total: Option<String>,

        /// Break in minutes
        #[arg(long = "break")]
        break_minutes: Option<String>,

        /// Kilometers travelled
        #[arg(long)]
        km: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,

        /// Clear every field of the day before applying the options
        #[arg(long)]
        clear: bool,
    },

    /// Extract hours from a document or photo via the configured provider
    Extract {
        /// Image, PDF, text or CSV file (max 20 MB by default)
        file: String,
    },

    /// Apply a captured extraction payload (JSON) to the current period
    Apply {
        /// JSON file as answered by the extraction model
        file: String,
    },

    /// Show the current period with derived hours and confidence flags
    Show,

    /// Export the current period
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file; defaults to timesheet_<start>_<Employee_Name>.csv
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Quote handling, overriding the configuration
        #[arg(long, value_enum)]
        quoting: Option<CsvQuoting>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
