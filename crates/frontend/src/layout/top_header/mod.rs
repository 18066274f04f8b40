//! TopHeader component - storefront navigation bar.
//!
//! Contains:
//! - Shop title
//! - Page navigation
//! - Customer name

use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::profile::context::ProfileContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let profile =
        leptos::context::use_context::<ProfileContext>().expect("ProfileContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("printer")}
                <span class="top-header__title">"Fast Copy"</span>
            </div>

            <nav class="top-header__nav">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class=move || {
                                    if ctx.page.get() == page {
                                        "top-header__nav-item top-header__nav-item--active"
                                    } else {
                                        "top-header__nav-item"
                                    }
                                }
                                on:click=move |_| ctx.open(page)
                            >
                                {icon(page.icon())}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="top-header__user">
                {icon("user")}
                <span class="profile-name">
                    {move || {
                        let name = profile.display.get().name;
                        if name.is_empty() { "Guest".to_string() } else { name }
                    }}
                </span>
            </div>
        </div>
    }
}
