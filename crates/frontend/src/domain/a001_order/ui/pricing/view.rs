use super::view_model::PricingViewModel;
use crate::shared::api_utils::csrf_token;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::domain::a001_order::delivery::{estimate_delivery, format_delivery};
use contracts::domain::a001_order::PricingMode;
use contracts::domain::a002_service::ServiceCatalog;
use contracts::system::profile::CSRF_FIELD;
use leptos::prelude::*;

#[component]
pub fn PricingForm(
    mode: PricingMode,
    /// Service base rate; only used in per-item mode
    #[prop(into)]
    base_rate: Signal<f64>,
    /// Pages of the analyzed document; only used in per-page mode
    #[prop(into)]
    page_count: Signal<u32>,
    /// Service name submitted with the order
    #[prop(into)]
    service_name: Signal<String>,
    /// Extra controls rendered at the top of the form (file upload)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let catalog = use_context::<ServiceCatalog>().expect("ServiceCatalog not provided in context");
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");

    let vm = PricingViewModel::new(mode, &catalog, base_rate, page_count);

    Effect::new(move |_| {
        log::debug!("price recomputed: {}", vm.total());
    });

    let delivery = format_delivery(estimate_delivery(
        Local::now().naive_local(),
        &config.public_holidays,
    ));
    let paper_label = match mode {
        PricingMode::PerPage => "Paper",
        PricingMode::PerItem => "Print Type",
    };

    view! {
        <form
            class="order-form"
            method="post"
            enctype="multipart/form-data"
            action=config.order_url.clone()
        >
            <input type="hidden" name=CSRF_FIELD value=csrf_token() />
            <input type="hidden" name="service_name" prop:value=move || service_name.get() />

            {children.map(|c| c())}

            <div class="order-form__grid">
                <Select
                    id="pType"
                    name="paper_type"
                    label=paper_label
                    value=vm.paper
                    options=Signal::derive(move || vm.paper_options.get_value())
                    on_change=Callback::new(move |v| vm.paper.set(v))
                />
                <Select
                    id="sType"
                    name="side_type"
                    label="Sides"
                    value=vm.side
                    options=Signal::derive(move || vm.side_options.get_value())
                    on_change=Callback::new(move |v| vm.side.set(v))
                />
                <Input
                    id="copies"
                    name="copies"
                    label="Copies"
                    input_type="number"
                    min="1"
                    value=vm.copies
                    on_input=Callback::new(move |v| vm.copies.set(v))
                />
            </div>

            // The visible <select> text is not submitted, so mirror it
            <input type="hidden" id="p-label-hidden" name="paper_label" prop:value=move || vm.paper_label() />
            <input type="hidden" id="s-label-hidden" name="side_label" prop:value=move || vm.side_label() />
            <input type="hidden" id="total-price-hidden" name="total_price" prop:value=move || vm.total().to_string() />

            <div class="order-form__total">
                <span class="order-form__total-label">"Total"</span>
                <span id="price-display" class="price-display">{move || vm.total()}</span>
            </div>

            <div class="order-form__delivery">
                {icon("truck")}
                <span>"Estimated delivery: " {delivery}</span>
            </div>

            <Button button_type="submit" class="order-form__submit">
                "Add to Cart"
            </Button>
        </form>
    }
}
