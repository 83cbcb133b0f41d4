use tracing::warn;

use crate::error::TasklistError;
use crate::models::Theme;
use crate::storage::KeyValueStorage;

/// Storage key holding the last selected theme name.
pub const THEME_KEY: &str = "theme";

/// The remembered visual theme, stored beside the task list under its own key.
pub struct ThemePreference;

impl ThemePreference {
    /// Stored theme, or the default when none is stored or the name is unknown.
    pub fn load<S: KeyValueStorage>(storage: &S) -> Result<Theme, TasklistError> {
        let Some(name) = storage.get(THEME_KEY)? else {
            return Ok(Theme::default());
        };
        match Theme::from_str(&name) {
            Some(theme) => Ok(theme),
            None => {
                warn!(theme = %name, "unknown stored theme; using default");
                Ok(Theme::default())
            }
        }
    }

    pub fn save<S: KeyValueStorage>(storage: &mut S, theme: Theme) -> Result<(), TasklistError> {
        storage.set(THEME_KEY, theme.as_str())
    }
}
