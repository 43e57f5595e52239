use crate::interchange::InterchangeFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timecheck
#[derive(Parser)]
#[command(
    name = "timecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record check-in/check-out times and sum your monthly work hours",
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check in (start a work session)
    In {
        #[arg(
            long = "at",
            value_name = "TIME",
            help = "Check-in time (RFC 3339 or 'YYYY-MM-DD HH:MM'), default now"
        )]
        at: Option<String>,
    },

    /// Check out (close the open work session)
    Out {
        #[arg(
            long = "at",
            value_name = "TIME",
            help = "Check-out time (RFC 3339 or 'YYYY-MM-DD HH:MM'), default now"
        )]
        at: Option<String>,
    },

    /// Show whether you are currently checked in
    Status,

    /// List work sessions (default: current month)
    List {
        #[arg(long = "id", help = "Show a single session", conflicts_with_all = ["date", "month", "range", "all"])]
        id: Option<i64>,

        #[arg(long = "date", value_name = "YYYY-MM-DD", conflicts_with_all = ["month", "range", "all"])]
        date: Option<String>,

        #[arg(long = "month", value_name = "YYYY-MM", conflicts_with_all = ["range", "all"])]
        month: Option<String>,

        #[arg(
            long = "range",
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same shape",
            conflicts_with = "all"
        )]
        range: Option<String>,

        #[arg(long = "all", help = "List every stored session")]
        all: bool,
    },

    /// Edit the check-in and/or check-out of a session
    Edit {
        id: i64,

        #[arg(long = "in", value_name = "TIME", help = "New check-in time")]
        check_in: Option<String>,

        #[arg(long = "out", value_name = "TIME", help = "New check-out time")]
        check_out: Option<String>,
    },

    /// Delete a session by id, or every session with --all
    Del {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Delete every session")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Total hours worked in a month
    Total {
        #[arg(long = "month", value_name = "YYYY-MM", help = "Month to sum (default: current)")]
        month: Option<String>,
    },

    /// Day-by-day hours for a month
    Calendar {
        #[arg(long = "month", value_name = "YYYY-MM", help = "Month to show (default: current)")]
        month: Option<String>,

        #[arg(long = "details", help = "List the sessions of each day")]
        details: bool,
    },

    /// Export every session to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: InterchangeFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace every session with the content of a file
    Import {
        #[arg(long, value_enum, default_value = "csv")]
        format: InterchangeFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "keep-ids", help = "Keep the ids found in the file")]
        keep_ids: bool,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Write a timestamped CSV backup
    Backup {
        #[arg(long, value_name = "DIR", help = "Target directory (default: <config dir>/backups)")]
        dir: Option<String>,

        #[arg(long)]
        compress: bool,
    },
}
