use pressdesk_shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::i18n::current::article_filters as t;

#[derive(Properties, PartialEq)]
pub struct ArticleFiltersProps {
    pub title: String,
    pub category: String,
    pub categories: Vec<Category>,
    pub on_title: Callback<String>,
    pub on_category: Callback<String>,
    pub on_reset: Callback<()>,
}

/// Title search box, category dropdown and the "All" reset.
#[function_component(ArticleFilters)]
pub fn article_filters(props: &ArticleFiltersProps) -> Html {
    let on_input = {
        let on_title = props.on_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                on_title.emit(target.value());
            }
        })
    };

    let on_change = {
        let on_category = props.on_category.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                on_category.emit(target.value());
            }
        })
    };

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <div class="flex flex-col md:flex-row gap-3 py-4">
            <input
                type="search"
                class="input flex-1"
                placeholder={t::SEARCH_PLACEHOLDER}
                value={props.title.clone()}
                oninput={on_input}
            />
            <select class="input md:w-56" onchange={on_change}>
                <option value="" selected={props.category.is_empty()}>{ t::CATEGORY_ALL }</option>
                { for props.categories.iter().map(|category| html! {
                    <option
                        key={category.id.clone()}
                        value={category.id.clone()}
                        selected={category.id == props.category}
                    >
                        { category.name.clone() }
                    </option>
                }) }
            </select>
            <button type="button" class="btn-secondary" onclick={on_reset}>
                { t::RESET }
            </button>
        </div>
    }
}
