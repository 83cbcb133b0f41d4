pub mod task;
pub mod theme;

pub use task::*;
pub use theme::*;
