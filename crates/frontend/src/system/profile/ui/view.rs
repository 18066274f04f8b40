use super::view_model::ProfileViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::profile::context::ProfileContext;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig not provided in context");
    let profile = use_context::<ProfileContext>().expect("ProfileContext not provided in context");

    let vm = ProfileViewModel::new(
        profile,
        use_toast(),
        config.profile_url.clone(),
        config.profile_form_extras.clone(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_profile_edit();
    };

    view! {
        <div id="profile--page" class="page profile-page">
            <div class="profile-card">
                <div class="profile-card__header">
                    {icon("user")}
                    <h2 class="profile-name">{move || profile.display.with(|d| d.name.clone())}</h2>
                </div>
                <dl class="profile-card__details">
                    <dt>"Mobile"</dt>
                    <dd class="profile-phone">{move || profile.display.with(|d| d.phone.clone())}</dd>
                    <dt>"Address"</dt>
                    <dd class="profile-address">{move || profile.display.with(|d| d.address.clone())}</dd>
                </dl>
                <Button variant="secondary" on_click=Callback::new(move |_| vm.open_editor())>
                    {icon("edit")}
                    " Edit Profile"
                </Button>
            </div>

            <Show when=move || vm.modal.is_open()>
                <Modal title="Edit Profile" on_close=Callback::new(move |_| vm.close_editor())>
                    <form class="profile-form" on:submit=on_submit>
                        <Input
                            id="profile-name"
                            name="name"
                            label="Full Name"
                            required=true
                            value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.name = v))
                        />
                        <Input
                            id="profile-mobile"
                            name="mobile"
                            label="Mobile"
                            input_type="tel"
                            value=Signal::derive(move || vm.form.with(|f| f.mobile.clone()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.mobile = v))
                        />
                        <Textarea
                            id="profile-address"
                            name="address"
                            label="Address"
                            value=Signal::derive(move || vm.form.with(|f| f.address.clone()))
                            on_input=Callback::new(move |v| vm.form.update(|f| f.address = v))
                        />
                        <div class="modal-footer">
                            <Button
                                button_type="submit"
                                disabled=Signal::derive(move || vm.submit.with(|s| s.disabled))
                            >
                                {move || vm.submit.with(|s| s.label.clone())}
                            </Button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
