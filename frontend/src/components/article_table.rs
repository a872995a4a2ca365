use pressdesk_shared::{models::display_date, Article};
use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::current::article_table as t,
};

#[derive(Properties, PartialEq)]
pub struct ArticleTableProps {
    pub articles: Vec<Article>,
    pub loading: bool,
    /// Row number of the first row minus one.
    pub offset: u64,
    pub on_detail: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(ArticleTable)]
pub fn article_table(props: &ArticleTableProps) -> Html {
    if props.loading && props.articles.is_empty() {
        return html! { <LoadingSpinner size={SpinnerSize::Medium} label={t::LOADING} /> };
    }
    if props.articles.is_empty() {
        return html! { <p class="text-center py-8 text-[var(--muted)]">{ t::EMPTY }</p> };
    }

    let action = |label: &'static str, tone: &'static str, callback: &Callback<String>, id: &str| {
        let callback = callback.clone();
        let id = id.to_string();
        html! {
            <button
                type="button"
                class={classes!("btn-icon", tone)}
                onclick={Callback::from(move |_: MouseEvent| callback.emit(id.clone()))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="overflow-x-auto">
            <table class="w-full border rounded">
                <thead>
                    <tr class="bg-[var(--primary)] text-white">
                        <th class="p-2">{ t::COL_NO }</th>
                        <th class="p-2 text-start">{ t::COL_TITLE }</th>
                        <th class="p-2">{ t::COL_AUTHOR }</th>
                        <th class="p-2">{ t::COL_CATEGORY }</th>
                        <th class="p-2">{ t::COL_DATE }</th>
                        <th class="p-2 w-48">{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody class={classes!(props.loading.then_some("opacity-60"))}>
                    { for props.articles.iter().enumerate().map(|(index, article)| html! {
                        <tr key={article.id.clone()} class="text-center border-t hover:bg-black/5">
                            <td class="p-2">{ props.offset + index as u64 + 1 }</td>
                            <td class="p-2 text-start">{ article.title.clone() }</td>
                            <td class="p-2">{ article.author_name().to_string() }</td>
                            <td class="p-2">{ article.category_name().to_string() }</td>
                            <td class="p-2">{ display_date(&article.created_at) }</td>
                            <td class="p-2">
                                <div class="flex justify-center gap-2">
                                    { action(t::DETAIL, "btn-neutral", &props.on_detail, &article.id) }
                                    { action(t::EDIT, "btn-primary", &props.on_edit, &article.id) }
                                    { action(t::DELETE, "btn-danger", &props.on_delete, &article.id) }
                                </div>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
