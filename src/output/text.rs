use crate::error::TasklistError;
use crate::format::Formatter;
use crate::models::{Filter, Task, Theme};
use crate::store::TaskSummary;

use super::Renderer;

/// First eight characters of `id`, cut on a character boundary.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

#[derive(Debug, Default)]
pub struct TextRenderer {
    formatter: Formatter,
}

impl TextRenderer {
    fn row(&self, t: &Task) -> String {
        format!(
            "  [{}] {} ({}) due: {}",
            self.formatter.format_status(t.completed),
            t.description,
            short_id(&t.id),
            self.formatter.format_due_date(Some(&t.due_date))
        )
    }
}

impl Renderer for TextRenderer {
    fn task_added(&self, task: &Task) {
        println!("Added task: {} ({})", task.description, task.id);
    }

    fn task_list(&self, filter: Filter, tasks: &[Task], summary: &TaskSummary) {
        if tasks.is_empty() {
            println!("No tasks found.");
        } else {
            for t in tasks {
                println!("{}", self.row(t));
            }
        }
        if filter != Filter::All || summary.total > 0 {
            println!(
                "\nProgress: {:.1}% ({}/{}) pending={}",
                summary.percentage, summary.completed, summary.total, summary.pending
            );
        }
    }

    fn task_detail(&self, t: &Task) {
        println!("Task: {} ({})", t.description, t.id);
        println!("  Due: {}", self.formatter.format_due_date(Some(&t.due_date)));
        println!("  Status: {}", self.formatter.format_status(t.completed));
    }

    fn task_edited(&self, task: &Task) {
        println!("Edited task {}: {}", task.id, task.description);
    }

    fn task_toggled(&self, task: &Task) {
        println!(
            "Task {} → {}",
            task.id,
            self.formatter.format_status(task.completed)
        );
    }

    fn task_deleted(&self, task: &Task) {
        println!("Deleted task: {} ({})", task.description, task.id);
    }

    fn cleared(&self, removed: usize) {
        if removed == 0 {
            println!("No tasks to clear.");
        } else {
            println!("Cleared {removed} task(s).");
        }
    }

    fn theme(&self, theme: Theme, changed: bool) {
        if changed {
            println!("Theme set to {}", theme.as_str());
        } else {
            println!("Theme: {}", theme.as_str());
        }
    }

    fn error(&self, err: &TasklistError) {
        eprintln!("Error: {}", err.message);
    }
}
