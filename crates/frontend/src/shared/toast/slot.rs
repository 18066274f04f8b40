use contracts::shared::NotificationKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub fading: bool,
}

/// Holds at most one toast. Timers carry the id of the toast they were
/// started for and are ignored once that toast has been replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<ToastEntry>,
    next_id: u64,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&ToastEntry> {
        self.current.as_ref()
    }

    /// Show a toast, dropping whatever was visible. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        self.current = Some(ToastEntry {
            id: self.next_id,
            message: message.into(),
            kind,
            fading: false,
        });
        self.next_id
    }

    pub fn begin_fade(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(entry) if entry.id == id => {
                entry.fading = true;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|entry| entry.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_toast_replaces_first() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Document Analyzed", NotificationKind::Success);
        let second = slot.show("Server Connection Lost", NotificationKind::Error);

        let current = slot.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "Server Connection Lost");
        assert_eq!(current.kind, NotificationKind::Error);

        // timers of the replaced toast do nothing
        assert!(!slot.begin_fade(first));
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|t| t.id), Some(second));
    }

    #[test]
    fn test_fade_then_dismiss() {
        let mut slot = ToastSlot::default();
        let id = slot.show("Profile Updated Successfully", NotificationKind::Success);
        assert!(!slot.current().unwrap().fading);

        assert!(slot.begin_fade(id));
        assert!(slot.current().unwrap().fading);

        assert!(slot.dismiss(id));
        assert!(slot.current().is_none());
        assert!(!slot.dismiss(id));
    }
}
