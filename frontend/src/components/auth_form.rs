use pressdesk_shared::{
    credentials::{Credentials, FIELD_PASSWORD, FIELD_USERNAME},
    FieldErrors,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::i18n::current::auth as t;

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub submitting: bool,
    pub on_submit: Callback<Credentials>,
    #[prop_or_default]
    pub footer: Html,
}

/// Username/password card shared by login and both registration pages.
/// Empty fields are flagged locally and never submitted.
#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let credentials = use_state(Credentials::default);
    let errors = use_state(FieldErrors::new);

    let on_username = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*credentials).clone();
                next.username = target.value();
                credentials.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear(FIELD_USERNAME);
                errors.set(cleared);
            }
        })
    };

    let on_password = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*credentials).clone();
                next.password = target.value();
                credentials.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear(FIELD_PASSWORD);
                errors.set(cleared);
            }
        })
    };

    let on_submit = {
        let credentials = credentials.clone();
        let errors = errors.clone();
        let submit = props.on_submit.clone();
        let submitting = props.submitting;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if submitting {
                return;
            }
            let found = credentials.validate();
            if found.is_empty() {
                submit.emit((*credentials).clone());
            }
            errors.set(found);
        })
    };

    let field_error = |field: &str| match errors.get(field) {
        Some(message) => html! { <p class="text-xs text-red-600 mt-1">{ message.to_string() }</p> },
        None => Html::default(),
    };

    html! {
        <div class="max-w-md mx-auto mt-16 rounded-2xl bg-[var(--surface)] shadow p-8">
            <h1 class="text-2xl font-bold mb-6 text-center">{ props.title.clone() }</h1>
            <form class="space-y-4" onsubmit={on_submit} novalidate={true}>
                <label class="block">
                    <span class="text-sm font-medium">{ t::USERNAME }</span>
                    <input
                        type="text"
                        class="input w-full"
                        autocomplete="username"
                        value={credentials.username.clone()}
                        oninput={on_username}
                    />
                    { field_error(FIELD_USERNAME) }
                </label>
                <label class="block">
                    <span class="text-sm font-medium">{ t::PASSWORD }</span>
                    <input
                        type="password"
                        class="input w-full"
                        autocomplete="current-password"
                        value={credentials.password.clone()}
                        oninput={on_password}
                    />
                    { field_error(FIELD_PASSWORD) }
                </label>
                <button type="submit" class="btn-primary w-full" disabled={props.submitting}>
                    { if props.submitting { AttrValue::from(t::SUBMITTING) } else { props.submit_label.clone() } }
                </button>
            </form>
            <div class="mt-6 text-center text-sm">{ props.footer.clone() }</div>
        </div>
    }
}
