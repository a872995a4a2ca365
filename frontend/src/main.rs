//! Browser front end: role-gated article and category management.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod router;
mod session_context;
mod storage;

use yew::prelude::*;

use crate::{
    components::notification::NotificationProvider, router::AppRouter,
    session_context::SessionProvider,
};

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <NotificationProvider>
                <AppRouter />
            </NotificationProvider>
        </SessionProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
