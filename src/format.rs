//! Presentation rules shared by the store and the renderers.

/// Longest description kept verbatim; anything longer is cut to this many characters.
pub const MAX_DESCRIPTION_CHARS: usize = 14;
pub const ELLIPSIS: &str = "...";
pub const NO_DUE_DATE: &str = "No due date";

/// Stateless text, date, and status formatting.
///
/// The store receives one by injection and uses it to normalize task text;
/// renderers use it to label rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Self
    }

    /// Truncates `text` to [`MAX_DESCRIPTION_CHARS`] characters plus [`ELLIPSIS`].
    ///
    /// Counts Unicode scalar values, so multi-byte text is never split mid-character.
    pub fn format_description(&self, text: &str) -> String {
        match text.char_indices().nth(MAX_DESCRIPTION_CHARS) {
            Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
            None => text.to_string(),
        }
    }

    pub fn format_due_date(&self, date: Option<&str>) -> String {
        match date {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DUE_DATE.to_string(),
        }
    }

    pub fn format_status(&self, completed: bool) -> &'static str {
        if completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}
