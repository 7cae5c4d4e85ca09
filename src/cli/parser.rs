use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to take student attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: register students, mark them by id or QR token, export daily reports",
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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing backup without asking")]
        force: bool,
    },

    /// Register a student, or overwrite an existing registration
    Register {
        /// Student id (primary key)
        id: String,

        /// Full name
        name: String,

        #[arg(long, help = "Course the student attends")]
        course: Option<String>,

        #[arg(long = "pass-id", help = "Secondary identifier printed on the student pass")]
        pass_id: Option<String>,

        #[arg(long, value_name = "FILE", help = "Also write the QR token as PNG")]
        token: Option<String>,

        #[arg(long, value_name = "FILE", help = "Also write a printable PDF pass")]
        pass: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite existing artifacts without asking")]
        force: bool,
    },

    /// List registered students
    Students,

    /// Mark attendance by typed identifier
    Mark {
        /// Student id (or pass id, depending on `lookup`)
        id: String,

        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Mark as absent instead of present")]
        absent: bool,
    },

    /// Mark attendance from an image containing a QR token
    Scan {
        /// Image file (PNG)
        image: String,

        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Mark as absent instead of present")]
        absent: bool,
    },

    /// Mark every student not yet marked on the date as absent
    CloseDay {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Show attendance for one date
    List {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Export the attendance report of one date
    Report {
        #[arg(long, help = "Date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ReportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write the QR token of a registered student as PNG
    Token {
        id: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Write the printable PDF pass of a registered student
    Pass {
        id: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
