use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// ID for the badge element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span id=move || id.get() class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}
