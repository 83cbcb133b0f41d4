use std::path::Path;

use chrono::NaiveDate;

use crate::cli::commands::TaskCommands;
use crate::cli::{finish, open_store};
use crate::error::TasklistError;
use crate::models::Filter;
use crate::output::{self, Renderer};

pub fn run(cmd: TaskCommands, json_output: bool, store_flag: Option<&Path>) -> i32 {
    let renderer = output::renderer(json_output);
    let renderer = renderer.as_ref();
    let result = match cmd {
        TaskCommands::Add { description, due } => run_add(&description, due.as_deref(), renderer, store_flag),
        TaskCommands::List { filter } => run_list(&filter, renderer, store_flag),
        TaskCommands::Show { id } => run_show(&id, renderer, store_flag),
        TaskCommands::Edit { id, description } => run_edit(&id, &description, renderer, store_flag),
        TaskCommands::Toggle { id } => run_toggle(&id, renderer, store_flag),
        TaskCommands::Delete { id } => run_delete(&id, renderer, store_flag),
        TaskCommands::Clear => run_clear(renderer, store_flag),
    };
    finish(result, json_output)
}

fn validate_description(description: &str) -> Result<(), TasklistError> {
    if description.trim().is_empty() {
        return Err(TasklistError::validation("Task description must not be empty"));
    }
    Ok(())
}

fn validate_due_date(due: Option<&str>) -> Result<(), TasklistError> {
    match due {
        Some(d) if !d.is_empty() => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(|_| ())
            .map_err(|_| TasklistError::validation(format!("Invalid due date '{d}'. Expected YYYY-MM-DD"))),
        _ => Ok(()),
    }
}

fn run_add(
    description: &str,
    due: Option<&str>,
    renderer: &dyn Renderer,
    store_flag: Option<&Path>,
) -> Result<(), TasklistError> {
    // Validate before touching storage
    validate_description(description)?;
    validate_due_date(due)?;

    let mut store = open_store(store_flag)?;
    let task = store.create(description, due)?;
    renderer.task_added(&task);
    Ok(())
}

fn run_list(criterion: &str, renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let filter = Filter::from_str(criterion).ok_or_else(|| TasklistError::invalid_filter(criterion))?;
    let store = open_store(store_flag)?;
    let tasks = store.filter_by(filter);
    renderer.task_list(filter, &tasks, &store.summary());
    Ok(())
}

fn run_show(id: &str, renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let store = open_store(store_flag)?;
    let task = store.resolve(id)?;
    renderer.task_detail(task);
    Ok(())
}

fn run_edit(
    id: &str,
    description: &str,
    renderer: &dyn Renderer,
    store_flag: Option<&Path>,
) -> Result<(), TasklistError> {
    validate_description(description)?;

    let mut store = open_store(store_flag)?;
    let task_id = store.resolve(id)?.id.clone();
    let task = store
        .edit(&task_id, description)?
        .ok_or_else(|| TasklistError::task_not_found(id))?;
    renderer.task_edited(&task);
    Ok(())
}

fn run_toggle(id: &str, renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let mut store = open_store(store_flag)?;
    let task_id = store.resolve(id)?.id.clone();
    let task = store
        .toggle_completion(&task_id)?
        .ok_or_else(|| TasklistError::task_not_found(id))?;
    renderer.task_toggled(&task);
    Ok(())
}

fn run_delete(id: &str, renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let mut store = open_store(store_flag)?;
    let task = store.resolve(id)?.clone();
    store.delete(&task.id)?;
    renderer.task_deleted(&task);
    Ok(())
}

fn run_clear(renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let mut store = open_store(store_flag)?;
    let removed = store.tasks().len();
    store.clear_all()?;
    renderer.cleared(removed);
    Ok(())
}
