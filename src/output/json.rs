use serde_json::{json, Value};

use crate::error::TasklistError;
use crate::format::Formatter;
use crate::models::{Filter, Task, Theme};
use crate::store::TaskSummary;

use super::Renderer;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &TasklistError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn task_json(t: &Task, formatter: &Formatter) -> Value {
    json!({
        "id": t.id,
        "description": t.description,
        "due_date": t.due_date,
        "completed": t.completed,
        "status": formatter.format_status(t.completed)
    })
}

pub fn summary_json(s: &TaskSummary) -> Value {
    json!({
        "total": s.total,
        "pending": s.pending,
        "completed": s.completed,
        "percentage": (s.percentage * 10.0).round() / 10.0
    })
}

fn emit(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error: failed to encode output: {e}"),
    }
}

#[derive(Debug, Default)]
pub struct JsonRenderer {
    formatter: Formatter,
}

impl Renderer for JsonRenderer {
    fn task_added(&self, task: &Task) {
        emit(&success(json!({ "task": task_json(task, &self.formatter) })));
    }

    fn task_list(&self, filter: Filter, tasks: &[Task], summary: &TaskSummary) {
        let tasks_json: Vec<_> = tasks.iter().map(|t| task_json(t, &self.formatter)).collect();
        emit(&success(json!({
            "filter": filter.as_str(),
            "tasks": tasks_json,
            "summary": summary_json(summary)
        })));
    }

    fn task_detail(&self, task: &Task) {
        emit(&success(json!({ "task": task_json(task, &self.formatter) })));
    }

    fn task_edited(&self, task: &Task) {
        emit(&success(json!({ "edited": task_json(task, &self.formatter) })));
    }

    fn task_toggled(&self, task: &Task) {
        emit(&success(json!({ "toggled": task_json(task, &self.formatter) })));
    }

    fn task_deleted(&self, task: &Task) {
        emit(&success(json!({
            "deleted": { "id": task.id, "description": task.description }
        })));
    }

    fn cleared(&self, removed: usize) {
        emit(&success(json!({ "removed": removed })));
    }

    fn theme(&self, theme: Theme, changed: bool) {
        emit(&success(json!({ "theme": theme.as_str(), "changed": changed })));
    }

    fn error(&self, err: &TasklistError) {
        emit(&error(err));
    }
}
