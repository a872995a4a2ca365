use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="max-w-xl mx-auto px-4 py-16 text-center space-y-4">
            <h2 class="text-3xl font-bold">{ "404" }</h2>
            <p class="text-lg font-semibold">{ t::TITLE }</p>
            <p class="text-[var(--muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>
                { t::HOME }
            </Link<Route>>
        </main>
    }
}
