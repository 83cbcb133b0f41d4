pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::TasklistError;

/// Durable string key-value storage the task list persists into.
///
/// `set` replaces any prior value for the key and must be durable when it returns.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TasklistError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), TasklistError>;
}
