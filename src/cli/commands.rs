use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "tasklist",
    version = VERSION,
    about = "Local task list with due dates and completion tracking",
    after_help = "\
NOTE:
  Tasks are stored in a SQLite key-value file, by default .tasklist/tasklist.db
  under the current directory. Override with --store or TASKLIST_STORE.

EXIT CODES:
  0  Success
  1  Error (validation, unknown task, storage, etc.)

BEHAVIOR NOTES:
  Descriptions longer than 14 characters are stored truncated with \"...\".
  Task IDs may be abbreviated to any unique prefix.
  Set TASKLIST_LOG (e.g. `debug`) to see diagnostic logs on stderr."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the task store database
    #[arg(long, global = true, env = "TASKLIST_STORE")]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Task(TaskCommands),

    /// Show or set the display theme
    Theme {
        /// light or dark; omit to show the current theme
        name: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task description
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// List tasks
    List {
        /// One of: all, pending, completed
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Show task details
    Show {
        /// Task ID or prefix
        id: String,
    },
    /// Replace a task's description
    Edit {
        /// Task ID or prefix
        id: String,
        /// New description
        description: String,
    },
    /// Flip a task between pending and completed
    Toggle {
        /// Task ID or prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID or prefix
        id: String,
    },
    /// Delete every task
    Clear,
}
