use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::admin_menu as t, router::Route};

fn is_article_route(route: &Route) -> bool {
    matches!(
        route,
        Route::AdminArticles
            | Route::AdminArticleCreate
            | Route::AdminArticleEdit { .. }
            | Route::AdminArticleDetail { .. }
    )
}

#[function_component(AdminMenu)]
pub fn admin_menu() -> Html {
    let route = use_route::<Route>();
    let articles_active = route.as_ref().is_some_and(is_article_route);
    let categories_active = route.is_some() && !articles_active;

    let item = |active: bool| {
        classes!(
            "block",
            "px-4",
            "py-2",
            "rounded-lg",
            "text-sm",
            "font-medium",
            if active {
                "bg-[var(--primary)] text-white"
            } else {
                "hover:bg-black/5"
            }
        )
    };

    html! {
        <aside class="w-full md:w-56 shrink-0">
            <p class="px-4 pb-2 text-xs uppercase tracking-wide text-[var(--muted)]">{ t::TITLE }</p>
            <nav class="flex md:flex-col gap-1">
                <Link<Route> to={Route::AdminArticles} classes={item(articles_active)}>
                    { t::ARTICLES }
                </Link<Route>>
                <Link<Route> to={Route::AdminCategories} classes={item(categories_active)}>
                    { t::CATEGORIES }
                </Link<Route>>
            </nav>
        </aside>
    }
}
