use crate::layout::ModalService;
use crate::shared::dom_binding::{Selector, ViewBinding};
use crate::shared::toast::ToastService;
use crate::system::profile::api;
use crate::system::profile::context::ProfileContext;
use crate::system::profile::submit::{outcome_toast, SubmitControl};
use contracts::system::profile::{ProfileDisplay, ProfileDto, UpdateProfileDto};
use leptos::prelude::*;
use std::collections::BTreeMap;

pub const SUBMIT_LABEL: &str = "Save Changes";

/// Profile displays rendered by the server outside this app
const HOST_DISPLAYS: &[(&str, Selector)] = &[
    ("name", Selector::Class("user-name-display")),
    ("phone", Selector::Id("sidebar-mobile-display")),
    ("address", Selector::Id("sidebar-address-display")),
];

/// ViewModel for the profile edit form
#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub form: RwSignal<ProfileDto>,
    pub submit: RwSignal<SubmitControl>,
    pub modal: ModalService,
    profile: ProfileContext,
    toast: ToastService,
    profile_url: StoredValue<String>,
    form_extras: StoredValue<BTreeMap<String, String>>,
    host: StoredValue<ViewBinding, LocalStorage>,
}

impl ProfileViewModel {
    pub fn new(
        profile: ProfileContext,
        toast: ToastService,
        profile_url: String,
        form_extras: BTreeMap<String, String>,
    ) -> Self {
        Self {
            form: RwSignal::new(profile.profile.get_untracked()),
            submit: RwSignal::new(SubmitControl::idle(SUBMIT_LABEL)),
            modal: ModalService::new(),
            profile,
            toast,
            profile_url: StoredValue::new(profile_url),
            form_extras: StoredValue::new(form_extras),
            host: StoredValue::new_local(ViewBinding::resolve(HOST_DISPLAYS)),
        }
    }

    /// Open the edit dialog with the saved profile
    pub fn open_editor(&self) {
        self.form.set(self.profile.profile.get_untracked());
        self.modal.show();
    }

    pub fn close_editor(&self) {
        self.modal.hide();
    }

    /// Send the form in the background.
    ///
    /// The submit control shows a busy label until the response arrives and
    /// then returns to exactly the state it had before. The page may be gone
    /// by then, so the continuation only touches its state through `try_*`.
    pub fn submit_profile_edit(&self) {
        let mut snapshot = None;
        self.submit.update(|control| snapshot = control.begin());
        let Some(snapshot) = snapshot else {
            return;
        };

        let dto = UpdateProfileDto {
            profile: self.form.get_untracked(),
            extra: self.form_extras.get_value(),
        };
        let this = *self;
        let profile_url = self.profile_url.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::update_profile(&profile_url, &dto).await;
            this.submit.try_update(|control| control.finish(snapshot));

            match &result {
                Ok(()) => {
                    let display = this.profile.apply(dto.profile);
                    if !patch_host(this.host, &display) {
                        log::debug!("profile page closed before the update finished");
                    }
                    this.modal.hide();
                }
                Err(e) => log::warn!("profile update failed: {}", e),
            }
            let (kind, message) = outcome_toast(&result);
            this.toast.notify(message, kind);
        });
    }
}

/// Write the saved profile into the host page displays. `false` when the
/// binding's owner has already been disposed.
fn patch_host(host: StoredValue<ViewBinding, LocalStorage>, display: &ProfileDisplay) -> bool {
    host.try_with_value(|host| {
        host.set_text("name", &display.name);
        host.set_text("phone", &display.phone);
        host.set_text("address", &display.address);
    })
    .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> ProfileDisplay {
        ProfileDisplay {
            name: "Asha Rao".to_string(),
            phone: "+91 9876543210".to_string(),
            address: "12 MG Road, Pune".to_string(),
        }
    }

    #[test]
    fn test_patch_host_while_page_is_alive() {
        let owner = Owner::new();
        let host = owner.with(|| StoredValue::new_local(ViewBinding::default()));
        assert!(patch_host(host, &display()));
    }

    #[test]
    fn test_patch_host_after_page_is_disposed() {
        let owner = Owner::new();
        let host = owner.with(|| StoredValue::new_local(ViewBinding::default()));
        owner.cleanup();
        assert!(!patch_host(host, &display()));
    }
}
