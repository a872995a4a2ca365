use pressdesk_shared::{config::CATEGORY_LIMIT, ApiError, Category};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        admin_menu::AdminMenu, categories_table::CategoriesTable, confirm_dialog::ConfirmDialog,
        notification::use_notifier, pagination::Pagination,
    },
    hooks::use_list_controller,
    i18n::current::categories as t,
    pages::{CATEGORY_FILTERS, FILTER_SEARCH},
    router::Route,
    session_context::use_client,
};

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let client = use_client();
    let navigator = use_navigator();
    let notifier = use_notifier();

    let list = {
        let client = client.clone();
        use_list_controller::<Category, _, _>(CATEGORY_LIMIT, CATEGORY_FILTERS, move |query| {
            let client = client.clone();
            async move { client.list_categories(&query).await }
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

    let on_search = {
        let list = list.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                list.set_filter(FILTER_SEARCH, target.value());
            }
        })
    };
    let on_edit = Callback::from(move |id: String| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::AdminCategoryEdit {
                id,
            });
        }
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
        Callback::from(move |_| {
            let client = client.clone();
            let success = notifier.clone();
            let failure = notifier.clone();
            list.confirm_delete(
                move |id| async move {
                    let result = client.delete_category(&id).await;
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
    let on_page_change = {
        let list = list.clone();
        Callback::from(move |page: u32| list.set_page(page))
    };

    let pagination = list.pagination();
    let offset = u64::from(pagination.page.saturating_sub(1)) * u64::from(pagination.limit);

    html! {
        <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col md:flex-row gap-6">
            <AdminMenu />
            <section class="flex-1 min-w-0 space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
                    <Link<Route> to={Route::AdminCategoryCreate} classes={classes!("btn-primary")}>
                        { t::CREATE }
                    </Link<Route>>
                </div>
                <input
                    type="search"
                    class="w-full md:w-80 rounded border px-3 py-2"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={list.filter(FILTER_SEARCH)}
                    oninput={on_search}
                />
                <CategoriesTable
                    categories={list.items()}
                    loading={list.is_loading()}
                    offset={offset}
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
