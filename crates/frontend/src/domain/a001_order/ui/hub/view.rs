use super::view_model::OrderHubViewModel;
use crate::domain::a001_order::ui::pricing::PricingForm;
use crate::shared::components::ui::Badge;
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::domain::a001_order::upload::DOCUMENT_FIELD;
use contracts::domain::a001_order::{FileStatus, PricingMode};
use contracts::domain::a002_service::ServiceCatalog;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

#[component]
pub fn OrderHub() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let catalog = use_context::<ServiceCatalog>().expect("ServiceCatalog not provided in context");

    let vm = OrderHubViewModel::new(use_toast(), config.upload_url.clone());
    let service_name = catalog.default_theme().name.clone();

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        vm.on_file_selected(file);
    };

    let status_icon = move || {
        vm.session.with(|s| match s.status() {
            FileStatus::Idle => icon("file"),
            FileStatus::Analyzing { .. } => icon("loader"),
            FileStatus::Ready { .. } => icon("check-circle"),
            FileStatus::Failed => icon("alert-triangle"),
        })
    };
    let status_class = move || {
        vm.session.with(|s| match s.status() {
            FileStatus::Failed => "file-status file-status--error",
            FileStatus::Ready { .. } => "file-status file-status--ready",
            _ => "file-status",
        })
    };

    view! {
        <div id="order--hub" class="page order-hub">
            <div class="page__header">
                <h1>"Print Your Documents"</h1>
                <p>"Upload a PDF, pick paper and sides, and see the price instantly."</p>
            </div>
            <div class="page__content">
                <PricingForm
                    mode=PricingMode::PerPage
                    base_rate=0.0
                    page_count=vm.page_count()
                    service_name=service_name
                >
                    <div class="upload-zone">
                        <label for="document-input" class="upload-zone__label">
                            {icon("upload")}
                            <span>"Choose a PDF"</span>
                        </label>
                        <input
                            id="document-input"
                            class="upload-zone__input"
                            type="file"
                            name=DOCUMENT_FIELD
                            accept="application/pdf,.pdf"
                            on:change=on_change
                        />
                        <p id="file-status-text" class=status_class>
                            {status_icon}
                            <span>{move || vm.session.with(|s| s.status().text())}</span>
                        </p>
                        {move || vm.session.with(|s| s.badge_text()).map(|text| view! {
                            <Badge id="page-count-badge" variant="primary">{text}</Badge>
                        })}
                    </div>
                </PricingForm>
            </div>
        </div>
    }
}
