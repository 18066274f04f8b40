//! Toast notifications.
//!
//! One toast at a time: it stays for `visible_ms`, fades for `fade_ms` and is
//! removed. A new toast replaces the current one immediately.

mod slot;

pub use slot::{ToastEntry, ToastSlot};

use crate::shared::icons::icon;
use contracts::shared::NotificationKind;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    slot: RwSignal<ToastSlot>,
    visible_ms: u32,
    fade_ms: u32,
}

impl ToastService {
    pub fn new(visible_ms: u32, fade_ms: u32) -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
            visible_ms,
            fade_ms,
        }
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        log::debug!("toast {:?}: {}", kind, message);

        let mut id = 0;
        self.slot.update(|slot| id = slot.show(message, kind));

        let slot = self.slot;
        let (visible_ms, fade_ms) = (self.visible_ms, self.fade_ms);
        spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            let still_shown = slot
                .try_update(|s| s.begin_fade(id))
                .unwrap_or(false);
            if !still_shown {
                return;
            }
            TimeoutFuture::new(fade_ms).await;
            slot.try_update(|s| s.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    move || {
        toast.slot.with(|slot| slot.current().cloned()).map(|entry| {
            let class = format!(
                "toast {}{}",
                entry.kind.css_modifier(),
                if entry.fading { " toast--fading" } else { "" }
            );
            view! {
                <div class=class role="status" aria-live="polite">
                    {icon(entry.kind.icon())}
                    <span class="toast__message">{entry.message}</span>
                </div>
            }
        })
    }
}
