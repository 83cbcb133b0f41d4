use std::path::Path;

use crate::cli::{finish, open_storage};
use crate::error::TasklistError;
use crate::models::Theme;
use crate::output::{self, Renderer};
use crate::theme::ThemePreference;

pub fn run(name: Option<&str>, json_output: bool, store_flag: Option<&Path>) -> i32 {
    let renderer = output::renderer(json_output);
    let result = run_inner(name, renderer.as_ref(), store_flag);
    finish(result, json_output)
}

fn run_inner(name: Option<&str>, renderer: &dyn Renderer, store_flag: Option<&Path>) -> Result<(), TasklistError> {
    let Some(name) = name else {
        let storage = open_storage(store_flag)?;
        renderer.theme(ThemePreference::load(&storage)?, false);
        return Ok(());
    };

    let theme = Theme::from_str(name)
        .ok_or_else(|| TasklistError::validation(format!("Unknown theme '{name}'. Expected light or dark")))?;
    let mut storage = open_storage(store_flag)?;
    ThemePreference::save(&mut storage, theme)?;
    renderer.theme(theme, true);
    Ok(())
}
