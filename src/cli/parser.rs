use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time tracker: start/end work intervals, weekly reports and remaining hours",
    long_about = None
)]
pub struct Cli {
    /// Override the work log path (useful for tests or a second log)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pretend the current time is "YYYY-MM-DD HH:MM:SS"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty work log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Start a work interval now
    Start,

    /// End the running work interval now
    End,

    /// Show the tracker state and today's hours
    Status,

    /// Write the report of the current ISO week to a text file
    Report {
        #[arg(long = "dir", value_name = "DIR", help = "Directory for the report file")]
        dir: Option<String>,

        #[arg(long = "print", help = "Also print the report")]
        print: bool,
    },

    /// Show the hours left to reach the weekly target
    Remaining {
        #[arg(long = "target", help = "Weekly target in hours (default from config)")]
        target: Option<f64>,
    },

    /// Show the work log as a table
    List {
        #[arg(long = "week", help = "Show only the current ISO week")]
        week: bool,
    },

    /// Add a closed interval to a day
    Add {
        /// Date of the interval (YYYY-MM-DD)
        date: String,

        #[arg(long = "start", help = "Start time (HH:MM:SS AM/PM)")]
        start: String,

        #[arg(long = "end", help = "End time (HH:MM:SS AM/PM)")]
        end: String,
    },

    /// Edit an interval of a day
    Edit {
        /// Date of the interval (YYYY-MM-DD)
        date: String,

        #[arg(long = "index", help = "Interval number as shown by `list`")]
        index: usize,

        #[arg(long = "start", help = "New start time (HH:MM:SS AM/PM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end time (HH:MM:SS AM/PM)")]
        end: Option<String>,
    },

    /// Delete an interval of a day
    Del {
        /// Date of the interval (YYYY-MM-DD)
        date: String,

        #[arg(long = "index", help = "Interval number as shown by `list`")]
        index: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export all intervals
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the work log
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Commands {
    /// Commands that still run on a broken config file, since they rewrite it.
    pub fn repairs_config(&self) -> bool {
        matches!(
            self,
            Commands::Init
                | Commands::Config {
                    edit_config: true,
                    ..
                }
        )
    }
}
