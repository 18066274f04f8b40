use leptos::prelude::*;

/// Visibility of one modal dialog
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    /// Reactive: re-renders the caller when the modal opens or closes
    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}
