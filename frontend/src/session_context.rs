use std::rc::Rc;

use pressdesk_shared::{ApiError, SessionState};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Navigator};

use crate::{
    api::{new_session, Client, Session},
    router::Route,
};

/// The shared session store plus the last state it published.
#[derive(Clone)]
pub struct SessionContext {
    pub store: Rc<Session>,
    pub state: SessionState,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.state == other.state
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

/// Owns the one session store of the app and resolves the persisted token
/// once on mount.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_memo((), |_| new_session());
    let state = use_state(|| store.state());

    {
        let store = store.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |next| state.set(next.clone()));
            let initializing = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                initializing.initialize().await;
            });
            move || store.unsubscribe(subscription)
        });
    }

    let context = SessionContext {
        store,
        state: (*state).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Session context of the surrounding [`SessionProvider`]. Outside a
/// provider a detached, never-initialized session is returned.
#[hook]
pub fn use_session() -> SessionContext {
    let provided = use_context::<SessionContext>();
    let detached = use_memo((), |_| new_session());
    provided.unwrap_or_else(|| {
        web_sys::console::error_1(&"use_session called outside SessionProvider".into());
        SessionContext {
            state: detached.state(),
            store: detached,
        }
    })
}

/// The API client shared with the session store.
#[hook]
pub fn use_client() -> Rc<Client> {
    use_session().store.client()
}

/// Ends the session when the server stops accepting its token.
#[derive(Clone)]
pub struct SessionExpiry {
    store: Rc<Session>,
    navigator: Option<Navigator>,
}

impl SessionExpiry {
    /// On an authentication failure, clear the session and navigate to the
    /// anonymous landing. Returns whether `err` was one.
    pub fn check(&self, err: &ApiError) -> bool {
        let Some(landing) = self.store.expire_if_unauthorized(err) else {
            return false;
        };
        if let Some(navigator) = &self.navigator {
            navigator.push(&Route::from(landing));
        }
        true
    }
}

/// [`SessionExpiry`] bound to the current session and router.
#[hook]
pub fn use_session_expiry() -> SessionExpiry {
    SessionExpiry {
        store: use_session().store,
        navigator: use_navigator(),
    }
}
