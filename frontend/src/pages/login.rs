use pressdesk_shared::{credentials::Credentials, Landing, SessionStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{auth_form::AuthForm, notification::use_notifier},
    i18n::current::{auth as t, header as header_text},
    router::Route,
    session_context::use_session,
};

/// Anonymous landing page. Signed-in visitors are sent to their role's
/// article list.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let submitting = use_state(|| false);

    {
        let navigator = navigator.clone();
        let landing = match session.state.status {
            SessionStatus::Authenticated => session.state.role().map(Landing::for_role),
            _ => None,
        };
        use_effect_with(landing, move |landing| {
            if let (Some(landing), Some(navigator)) = (landing, navigator) {
                navigator.replace(&Route::from(*landing));
            }
            || ()
        });
    }

    let on_submit = {
        let store = session.store.clone();
        let submitting = submitting.clone();
        Callback::from(move |credentials: Credentials| {
            let store = store.clone();
            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = store.login(credentials.username(), &credentials.password).await;
                submitting.set(false);
                match result {
                    Ok(success) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::from(success.landing));
                        }
                    },
                    Err(failure) => notifier.error(failure.message),
                }
            });
        })
    };

    let footer = html! {
        <>
            { t::NO_ACCOUNT }{ " " }
            <Link<Route> to={Route::Register} classes={classes!("text-[var(--primary)]")}>
                { header_text::NAV_REGISTER }
            </Link<Route>>
        </>
    };

    html! {
        <AuthForm
            title={t::LOGIN_TITLE}
            submit_label={t::LOGIN_SUBMIT}
            submitting={*submitting}
            on_submit={on_submit}
            footer={footer}
        />
    }
}
