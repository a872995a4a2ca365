use pressdesk_shared::{config::USER_ARTICLE_LIMIT, Article};
use yew::prelude::*;

use crate::{
    components::{
        article_card::ArticleCard,
        article_filters::ArticleFilters,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        notification::use_notifier,
        pagination::Pagination,
    },
    hooks::{use_category_options, use_list_controller},
    i18n::current::{admin_articles as list_text, article_table as table_text, user_articles as t},
    pages::{ARTICLE_FILTERS, FILTER_CATEGORY, FILTER_TITLE},
    router::Route,
    session_context::use_client,
};

/// Reader view: card grid of nine articles per page.
#[function_component(UserArticlesPage)]
pub fn user_articles_page() -> Html {
    let client = use_client();
    let notifier = use_notifier();
    let categories = use_category_options();

    let list = use_list_controller::<Article, _, _>(USER_ARTICLE_LIMIT, ARTICLE_FILTERS, move |query| {
        let client = client.clone();
        async move { client.list_articles(&query).await }
    });

    {
        let message = list.error_message(list_text::FETCH_FAILED);
        use_effect_with(message, move |message| {
            if let Some(message) = message {
                notifier.error(message.clone());
            }
            || ()
        });
    }

    let on_title = {
        let list = list.clone();
        Callback::from(move |value: String| list.set_filter(FILTER_TITLE, value))
    };
    let on_category = {
        let list = list.clone();
        Callback::from(move |value: String| list.set_filter(FILTER_CATEGORY, value))
    };
    let on_reset = {
        let list = list.clone();
        Callback::from(move |_| list.clear_filters())
    };
    let on_page_change = {
        let list = list.clone();
        Callback::from(move |page: u32| list.set_page(page))
    };

    let articles = list.items();
    let body = if list.is_loading() && articles.is_empty() {
        html! { <LoadingSpinner size={SpinnerSize::Large} label={table_text::LOADING} /> }
    } else if articles.is_empty() {
        html! { <p class="text-center py-12 text-[var(--muted)]">{ table_text::EMPTY }</p> }
    } else {
        html! {
            <div class={classes!(
                "grid", "grid-cols-1", "md:grid-cols-2", "lg:grid-cols-3", "gap-6",
                list.is_loading().then_some("opacity-60")
            )}>
                { for articles.into_iter().map(|article| {
                    let detail_route = Route::UserArticleDetail {
                        id: article.id.clone(),
                    };
                    let key = article.id.clone();
                    html! { <ArticleCard key={key} article={article} detail_route={detail_route} /> }
                }) }
            </div>
        }
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 py-6">
            <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
            <ArticleFilters
                title={list.filter(FILTER_TITLE)}
                category={list.filter(FILTER_CATEGORY)}
                categories={(*categories).clone()}
                on_title={on_title}
                on_category={on_category}
                on_reset={on_reset}
            />
            { body }
            <Pagination state={list.pagination()} on_page_change={on_page_change} />
        </div>
    }
}
