use serde::{Deserialize, Serialize};

/// Value written to the legacy `status` field when a task is created.
pub const INITIAL_STATUS: &str = "Pending";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// One entry of the task list, in its persisted shape.
///
/// `status` is carried for storage compatibility only; `completed` is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "task")]
    pub description: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    pub completed: bool,
    #[serde(default)]
    pub status: String,
}
