use contracts::shared::{NotificationKind, SyncError};

/// Label shown while the profile is being saved
pub const BUSY_LABEL: &str = "Syncing...";
pub const SAVED_MESSAGE: &str = "Profile Updated Successfully";

/// Observable state of the form's submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Switch to the busy state and return the state to restore afterwards.
    /// `None` while a submission is already running.
    pub fn begin(&mut self) -> Option<SubmitControl> {
        if self.disabled {
            return None;
        }
        let snapshot = self.clone();
        self.label = BUSY_LABEL.to_string();
        self.disabled = true;
        Some(snapshot)
    }

    /// Restore the state taken by [`SubmitControl::begin`].
    pub fn finish(&mut self, snapshot: SubmitControl) {
        *self = snapshot;
    }
}

/// Toast for a finished submission
pub fn outcome_toast(result: &Result<(), SyncError>) -> (NotificationKind, String) {
    match result {
        Ok(()) => (NotificationKind::Success, SAVED_MESSAGE.to_string()),
        Err(e) => (
            NotificationKind::Error,
            e.user_message("Update Failed", "Network Sync Error"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Same order as the profile view model: busy, response, restore, toast.
    fn submit_with(
        control: &mut SubmitControl,
        result: Result<(), SyncError>,
    ) -> (NotificationKind, String) {
        let snapshot = control.begin().unwrap();
        assert_eq!(control.label, "Syncing...");
        assert!(control.disabled);
        control.finish(snapshot);
        outcome_toast(&result)
    }

    #[test]
    fn test_restored_after_rejection() {
        let mut control = SubmitControl::idle("Save Changes");
        let toast = submit_with(
            &mut control,
            Err(SyncError::Application(Some("Mobile already registered".into()))),
        );
        assert_eq!(control, SubmitControl::idle("Save Changes"));
        assert_eq!(
            toast,
            (NotificationKind::Error, "Mobile already registered".to_string())
        );
    }

    #[test]
    fn test_rejection_without_message() {
        let mut control = SubmitControl::idle("Save Changes");
        let toast = submit_with(&mut control, Err(SyncError::Application(None)));
        assert_eq!(control, SubmitControl::idle("Save Changes"));
        assert_eq!(toast.1, "Update Failed");
    }

    #[test]
    fn test_restored_after_transport_error() {
        let mut control = SubmitControl::idle("Update Profile");
        let toast = submit_with(&mut control, Err(SyncError::transport("connection reset")));
        assert_eq!(control.label, "Update Profile");
        assert!(!control.disabled);
        assert_eq!(toast, (NotificationKind::Error, "Network Sync Error".to_string()));
    }

    #[test]
    fn test_restored_after_success() {
        let mut control = SubmitControl::idle("Save Changes");
        let toast = submit_with(&mut control, Ok(()));
        assert_eq!(control, SubmitControl::idle("Save Changes"));
        assert_eq!(toast.0, NotificationKind::Success);
        assert_eq!(toast.1, "Profile Updated Successfully");
    }

    #[test]
    fn test_second_submit_while_busy_is_ignored() {
        let mut control = SubmitControl::idle("Save Changes");
        let snapshot = control.begin().unwrap();
        assert_eq!(control.begin(), None);
        assert_eq!(control.label, "Syncing...");

        control.finish(snapshot);
        assert!(control.begin().is_some());
    }

    #[test]
    fn test_begin_on_disabled_control_keeps_it() {
        let mut control = SubmitControl {
            label: "Locked".to_string(),
            disabled: true,
        };
        assert_eq!(control.begin(), None);
        assert_eq!(control.label, "Locked");
    }
}
