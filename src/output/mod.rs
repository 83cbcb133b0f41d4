pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::error::TasklistError;
use crate::models::{Filter, Task, Theme};
use crate::store::TaskSummary;

/// Presents command results. The store never depends on a renderer.
pub trait Renderer {
    fn task_added(&self, task: &Task);
    fn task_list(&self, filter: Filter, tasks: &[Task], summary: &TaskSummary);
    fn task_detail(&self, task: &Task);
    fn task_edited(&self, task: &Task);
    fn task_toggled(&self, task: &Task);
    fn task_deleted(&self, task: &Task);
    fn cleared(&self, removed: usize);
    fn theme(&self, theme: Theme, changed: bool);
    fn error(&self, err: &TasklistError);
}

pub fn renderer(json_output: bool) -> Box<dyn Renderer> {
    if json_output {
        Box::new(JsonRenderer::default())
    } else {
        Box::new(TextRenderer::default())
    }
}
