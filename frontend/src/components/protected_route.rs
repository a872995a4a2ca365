use pressdesk_shared::{
    guard::{evaluate, GuardDecision},
    Role,
};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    router::Route,
    session_context::use_session,
};

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub allowed: &'static [Role],
    #[prop_or_default]
    pub children: Html,
}

/// Renders `children` only once the session is resolved and its role is
/// allowed. Children (and the fetches they start on mount) never exist
/// before that.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let decision = evaluate(&session.state, props.allowed);

    use_effect_with(decision, move |decision| {
        if let GuardDecision::Redirect(landing) = decision {
            if let Some(navigator) = navigator {
                navigator.replace(&Route::from(*landing));
            }
        }
        || ()
    });

    match decision {
        GuardDecision::Pending => html! { <LoadingSpinner size={SpinnerSize::Large} /> },
        GuardDecision::Allow => props.children.clone(),
        GuardDecision::Redirect(_) => Html::default(),
    }
}
