use contracts::domain::a002_service::ChoiceOption;
use leptos::prelude::*;

/// Select bound to a list of catalog options
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Form field name
    #[prop(into)]
    name: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<ChoiceOption>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                name=name
                class=move || format!("form__select {}", additional_class())
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|option| option.value.clone()
                    children=move |option| {
                        let val = option.value.clone();
                        let is_selected = move || value.get() == val;
                        view! {
                            <option value=option.value selected=is_selected>
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
