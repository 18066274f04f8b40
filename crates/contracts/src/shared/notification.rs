use serde::{Deserialize, Serialize};

/// Visual flavour of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS modifier used by the toast markup
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast--success",
            NotificationKind::Error => "toast--error",
        }
    }

    /// Icon name from the shared icon set
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "alert-triangle",
        }
    }
}
