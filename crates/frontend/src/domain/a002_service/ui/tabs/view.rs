use super::view_model::ServiceTabsViewModel;
use crate::domain::a001_order::ui::pricing::PricingForm;
use contracts::domain::a001_order::PricingMode;
use contracts::domain::a002_service::ServiceCatalog;
use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let catalog = use_context::<ServiceCatalog>().expect("ServiceCatalog not provided in context");
    let vm = ServiceTabsViewModel::new(catalog);

    let theme = Memo::new(move |_| vm.active_theme());
    let base_rate = Signal::derive(move || theme.with(|t| t.base_rate));
    let service_name = Signal::derive(move || theme.with(|t| t.name.clone()));

    view! {
        <div id="services--page" class="page services-page">
            <div class="service-tabs">
                {vm
                    .services()
                    .into_iter()
                    .map(|service| {
                        let slug = service.slug.clone();
                        let name = service.name.clone();
                        view! {
                            <button
                                id=format!("btn-{}", service.slug)
                                class=move || {
                                    if vm.is_active(&slug) {
                                        "service-tab active-tab"
                                    } else {
                                        "service-tab"
                                    }
                                }
                                on:click=move |_| vm.select_service(&name)
                            >
                                {service.name.clone()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                id="form-header"
                class="service-form__header"
                style=move || theme.with(|t| format!("background-color: {}", t.color))
            >
                <h2 id="active-service-title">{move || theme.with(|t| t.name.clone())}</h2>
                <p class="service-form__description">
                    {move || theme.with(|t| t.description.clone())}
                </p>
            </div>

            <div class="page__content">
                <PricingForm
                    mode=PricingMode::PerItem
                    base_rate=base_rate
                    page_count=0u32
                    service_name=service_name
                />
            </div>
        </div>
    }
}
