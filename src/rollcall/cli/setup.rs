use clap::{Args, Parser, Subcommand};
use rollcall::logging::Verbosity;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rollcall", bin_name = "rollcall", version)]
#[command(about = "Manage student records from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the records, session and config
    #[arg(long, global = true, env = "ROLLCALL_HOME", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Suppress diagnostics except errors
    #[arg(short, long, global = true, conflicts_with = "verbose", help_heading = "Options")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an admin session
    Login {
        username: String,
        password: String,
    },

    /// End the admin session
    Logout,

    /// List students
    #[command(alias = "ls")]
    List {
        /// Only show students whose name, roll number or email contains TERM
        #[arg(short, long, value_name = "TERM")]
        search: Option<String>,
    },

    /// Search students by name, roll number or email
    Search { term: String },

    /// Show one student
    #[command(alias = "v")]
    Show { id: i64 },

    /// Register a new student
    #[command(alias = "add")]
    Register(RegisterArgs),

    /// Update a student's record; omitted fields keep their current value
    #[command(alias = "edit")]
    Update {
        id: i64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete { id: i64 },

    /// Copy a student's record to the clipboard as JSON
    Copy { id: i64 },

    /// List the courses students can enroll in
    Courses,

    /// Get or set configuration
    Config {
        /// Configuration key (courses, strict-update-roll-no)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Omitted fields are submitted empty so they are reported by the validators.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub roll_no: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub course: String,

    #[arg(long, default_value = "")]
    pub address: String,
}

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    #[arg(long)]
    pub roll_no: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub course: Option<String>,

    #[arg(long)]
    pub address: Option<String>,
}
