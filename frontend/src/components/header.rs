use pressdesk_shared::{Role, SessionStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common as common_text, header as t},
    router::Route,
    session_context::use_session,
};

const LINK_CLASSES: &str = "px-3 py-2 rounded-md text-sm font-medium hover:bg-white/15 transition-colors";

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_logout = {
        let store = session.store.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            menu_open.set(false);
            let landing = store.logout();
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::from(landing));
            }
        })
    };

    let principal = match session.state.status {
        SessionStatus::Authenticated => session.state.principal.clone(),
        _ => None,
    };

    let nav_items = match &principal {
        Some(principal) => {
            let admin_links = if principal.role == Role::Admin {
                html! {
                    <>
                        <Link<Route> to={Route::AdminArticles} classes={classes!(LINK_CLASSES)}>
                            { t::NAV_ARTICLES }
                        </Link<Route>>
                        <Link<Route> to={Route::AdminCategories} classes={classes!(LINK_CLASSES)}>
                            { t::NAV_CATEGORIES }
                        </Link<Route>>
                    </>
                }
            } else {
                html! {
                    <Link<Route> to={Route::UserArticles} classes={classes!(LINK_CLASSES)}>
                        { t::NAV_ARTICLES }
                    </Link<Route>>
                }
            };
            let initial = principal
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();

            html! {
                <>
                    { admin_links }
                    <div class="relative ml-4">
                        <button
                            type="button"
                            class="flex items-center gap-2"
                            aria-label={t::ACCOUNT_MENU_ARIA}
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            <span class="w-8 h-8 rounded-full bg-white/25 flex items-center justify-center font-semibold">
                                { initial }
                            </span>
                            <span class="text-left">
                                <span class="block text-sm font-medium">{ principal.username.clone() }</span>
                                <span class="block text-xs opacity-80">{ principal.role.as_str().to_lowercase() }</span>
                            </span>
                        </button>
                        if *menu_open {
                            <div class="absolute right-0 mt-2 w-40 rounded-md bg-[var(--surface)] text-[var(--text)] shadow-lg py-1 z-50">
                                <button
                                    type="button"
                                    class="w-full text-left px-4 py-2 text-sm hover:bg-black/5"
                                    onclick={on_logout}
                                >
                                    { t::LOGOUT }
                                </button>
                            </div>
                        }
                    </div>
                </>
            }
        },
        None => html! {
            <>
                <Link<Route> to={Route::Home} classes={classes!(LINK_CLASSES)}>{ t::NAV_LOGIN }</Link<Route>>
                <Link<Route> to={Route::Register} classes={classes!(LINK_CLASSES)}>{ t::NAV_REGISTER }</Link<Route>>
            </>
        },
    };

    html! {
        <header class="sticky top-0 z-40 h-16 bg-[var(--primary)] text-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 h-full flex items-center justify-between">
                <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold")}>
                    { common_text::APP_NAME }
                </Link<Route>>
                <nav class="flex items-center gap-2">
                    { nav_items }
                </nav>
            </div>
        </header>
    }
}
