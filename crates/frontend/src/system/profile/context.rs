use crate::shared::config::AppConfig;
use contracts::system::profile::{ProfileDisplay, ProfileDto};
use leptos::prelude::*;

/// Saved customer profile, shared by the header and the profile page
#[derive(Clone, Copy)]
pub struct ProfileContext {
    pub profile: RwSignal<ProfileDto>,
    pub display: RwSignal<ProfileDisplay>,
    phone_prefix: StoredValue<String>,
}

impl ProfileContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            profile: RwSignal::new(config.profile.clone()),
            display: RwSignal::new(config.profile.display(&config.phone_prefix)),
            phone_prefix: StoredValue::new(config.phone_prefix.clone()),
        }
    }

    /// Store a profile the backend accepted and return its display texts.
    pub fn apply(&self, saved: ProfileDto) -> ProfileDisplay {
        let display = saved.display(&self.phone_prefix.get_value());
        self.profile.set(saved);
        self.display.set(display.clone());
        display
    }
}
