pub mod commands;
pub mod task;
pub mod theme;

pub use commands::*;

use std::path::{Path, PathBuf};

use crate::error::TasklistError;
use crate::format::Formatter;
use crate::output::{self, Renderer};
use crate::storage::{sqlite, SqliteStorage};
use crate::store::TaskStore;

pub fn open_storage(store_flag: Option<&Path>) -> Result<SqliteStorage, TasklistError> {
    let path: PathBuf = match store_flag {
        Some(p) => p.to_path_buf(),
        None => sqlite::default_store_path()?,
    };
    SqliteStorage::open(&path)
}

pub fn open_store(store_flag: Option<&Path>) -> Result<TaskStore<SqliteStorage>, TasklistError> {
    TaskStore::open(open_storage(store_flag)?, Formatter::new())
}

/// Run a command body, rendering any error and mapping the outcome to an exit code.
pub fn finish(result: Result<(), TasklistError>, json_output: bool) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            output::renderer(json_output).error(&e);
            1
        }
    }
}
