use crate::domain::a001_order::ui::hub::OrderHub;
use crate::domain::a002_service::ui::tabs::ServicesPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::shared::config::{load_catalog, load_config};
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::profile::context::ProfileContext;
use crate::system::profile::ui::ProfilePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let catalog = load_catalog();

    provide_context(ToastService::new(config.toast_visible_ms, config.toast_fade_ms));
    provide_context(ProfileContext::new(&config));
    provide_context(catalog);
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.page.get() {
                Page::Order => view! { <OrderHub /> }.into_any(),
                Page::Services => view! { <ServicesPage /> }.into_any(),
                Page::Profile => view! { <ProfilePage /> }.into_any(),
            }}
        </Shell>
        <ToastHost />
    }
}
