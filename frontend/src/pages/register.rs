use pressdesk_shared::{credentials::Credentials, Role};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{auth_form::AuthForm, notification::use_notifier},
    i18n::current::{auth as t, header as header_text},
    router::Route,
    session_context::use_session,
};

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub role: Role,
}

/// Account creation. Never signs the visitor in; success leads to the
/// login page.
#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let submitting = use_state(|| false);

    let on_submit = {
        let store = session.store.clone();
        let submitting = submitting.clone();
        let role = props.role;
        Callback::from(move |credentials: Credentials| {
            let store = store.clone();
            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = store
                    .register(credentials.username(), &credentials.password, role)
                    .await;
                submitting.set(false);
                match result {
                    Ok(()) => {
                        notifier.success(t::REGISTER_SUCCESS);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    },
                    Err(failure) => notifier.error(failure.message),
                }
            });
        })
    };

    let title = match props.role {
        Role::Admin => t::ADMIN_REGISTER_TITLE,
        Role::User => t::REGISTER_TITLE,
    };

    let footer = html! {
        <>
            { t::HAVE_ACCOUNT }{ " " }
            <Link<Route> to={Route::Home} classes={classes!("text-[var(--primary)]")}>
                { header_text::NAV_LOGIN }
            </Link<Route>>
        </>
    };

    html! {
        <AuthForm
            title={title}
            submit_label={t::REGISTER_SUBMIT}
            submitting={*submitting}
            on_submit={on_submit}
            footer={footer}
        />
    }
}
