use super::model;
use crate::shared::toast::ToastService;
use contracts::domain::a001_order::{OrderSession, UploadTicket};
use leptos::prelude::*;

/// ViewModel for the document order page
#[derive(Clone, Copy)]
pub struct OrderHubViewModel {
    pub session: RwSignal<OrderSession>,
    toast: ToastService,
    upload_url: StoredValue<String>,
}

impl OrderHubViewModel {
    pub fn new(toast: ToastService, upload_url: String) -> Self {
        Self {
            session: RwSignal::new(OrderSession::new()),
            toast,
            upload_url: StoredValue::new(upload_url),
        }
    }

    pub fn page_count(&self) -> Signal<u32> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.page_count()))
    }

    /// Handle a change of the file input.
    ///
    /// No file resets the order to zero pages. A file is sent for analysis;
    /// its response is applied only if no newer upload or reset happened in
    /// the meantime.
    pub fn on_file_selected(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.session.update(|s| s.reset());
            return;
        };

        let file_name = file.name();
        let mut ticket = UploadTicket(0);
        self.session.update(|s| ticket = s.begin_upload(&file_name));
        log::debug!("analyzing '{}' (upload #{})", file_name, ticket.0);

        let session = self.session;
        let toast = self.toast;
        let upload_url = self.upload_url.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::analyze_document(&upload_url, &file).await;

            let applied = session
                .try_update(|s| s.apply(ticket, &outcome))
                .unwrap_or(false);
            if !applied {
                log::warn!(
                    "dropping stale analysis of '{}' (upload #{})",
                    file_name,
                    ticket.0
                );
                return;
            }

            match outcome {
                Ok(pages) => toast.success(format!("{} Pages Analyzed", pages)),
                Err(e) => {
                    log::warn!("analysis of '{}' failed: {}", file_name, e);
                    toast.error(e.user_message("Invalid PDF format", "Server Connection Lost"));
                }
            }
        });
    }
}
