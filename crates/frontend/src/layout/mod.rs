pub mod global_context;
pub mod modal_service;
pub mod top_header;

pub use modal_service::ModalService;

use leptos::prelude::*;
use top_header::TopHeader;

/// Storefront shell.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (brand, page nav, customer)   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
        </div>
    }
}
