use pressdesk_shared::{config::ADMIN_ARTICLE_LIMIT, ApiError, Article};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        admin_menu::AdminMenu, article_filters::ArticleFilters, article_table::ArticleTable,
        confirm_dialog::ConfirmDialog, notification::use_notifier, pagination::Pagination,
    },
    hooks::{use_category_options, use_list_controller},
    i18n::current::admin_articles as t,
    pages::{ARTICLE_FILTERS, FILTER_CATEGORY, FILTER_TITLE},
    router::Route,
    session_context::use_client,
};

#[function_component(AdminArticlesPage)]
pub fn admin_articles_page() -> Html {
    let client = use_client();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let categories = use_category_options();

    let list = {
        let client = client.clone();
        use_list_controller::<Article, _, _>(ADMIN_ARTICLE_LIMIT, ARTICLE_FILTERS, move |query| {
            let client = client.clone();
            async move { client.list_articles(&query).await }
        })
    };

    {
        let notifier = notifier.clone();
        let message = list.error_message(t::FETCH_FAILED);
        use_effect_with(message, move |message| {
            if let Some(message) = message {
                notifier.error(message.clone());
            }
            || ()
        });
    }

    let go = {
        let navigator = navigator.clone();
        move |make: fn(String) -> Route| {
            let navigator = navigator.clone();
            Callback::from(move |id: String| {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&make(id));
                }
            })
        }
    };
    let on_detail = go(|id| Route::AdminArticleDetail {
        id,
    });
    let on_edit = go(|id| Route::AdminArticleEdit {
        id,
    });

    let on_delete = {
        let list = list.clone();
        Callback::from(move |id: String| list.request_delete(id))
    };
    let on_cancel_delete = {
        let list = list.clone();
        Callback::from(move |_| list.cancel_delete())
    };
    let on_confirm_delete = {
        let list = list.clone();
        let client = client.clone();
        let notifier = notifier.clone();
        Callback::from(move |_| {
            let client = client.clone();
            let success = notifier.clone();
            let failure = notifier.clone();
            list.confirm_delete(
                move |id| async move {
                    let result = client.delete_article(&id).await;
                    if result.is_ok() {
                        success.success(t::DELETED);
                    }
                    result
                },
                Callback::from(move |err: ApiError| {
                    failure.error(err.message_or(t::DELETE_FAILED))
                }),
            );
        })
    };

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

    let pagination = list.pagination();
    let offset = u64::from(pagination.page.saturating_sub(1)) * u64::from(pagination.limit);

    html! {
        <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col md:flex-row gap-6">
            <AdminMenu />
            <section class="flex-1 min-w-0">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
                    <Link<Route> to={Route::AdminArticleCreate} classes={classes!("btn-primary")}>
                        { t::CREATE }
                    </Link<Route>>
                </div>
                <ArticleFilters
                    title={list.filter(FILTER_TITLE)}
                    category={list.filter(FILTER_CATEGORY)}
                    categories={(*categories).clone()}
                    on_title={on_title}
                    on_category={on_category}
                    on_reset={on_reset}
                />
                <ArticleTable
                    articles={list.items()}
                    loading={list.is_loading()}
                    offset={offset}
                    on_detail={on_detail}
                    on_edit={on_edit}
                    on_delete={on_delete}
                />
                <Pagination state={pagination} on_page_change={on_page_change} />
            </section>
            <ConfirmDialog
                open={list.pending_delete().is_some()}
                title={t::CONFIRM_TITLE}
                body={t::CONFIRM_BODY}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}
