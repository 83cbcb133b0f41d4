pub mod cli;
pub mod error;
pub mod format;
pub mod models;
pub mod output;
pub mod storage;
pub mod store;
pub mod theme;

pub use error::{ErrorCode, TasklistError};
pub use format::Formatter;
pub use models::{Filter, Task, Theme};
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
pub use store::{TaskStore, TaskSummary};
