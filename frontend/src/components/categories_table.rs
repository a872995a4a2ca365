use pressdesk_shared::{models::display_date, Category};
use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::current::{categories as t, common as common_text},
};

#[derive(Properties, PartialEq)]
pub struct CategoriesTableProps {
    pub categories: Vec<Category>,
    pub loading: bool,
    pub offset: u64,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(CategoriesTable)]
pub fn categories_table(props: &CategoriesTableProps) -> Html {
    if props.loading && props.categories.is_empty() {
        return html! { <LoadingSpinner size={SpinnerSize::Medium} label={common_text::LOADING} /> };
    }
    if props.categories.is_empty() {
        return html! { <p class="text-center py-8 text-[var(--muted)]">{ t::EMPTY }</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="w-full border rounded">
                <thead>
                    <tr class="bg-[var(--primary)] text-white">
                        <th class="p-2 w-16">{ t::COL_NO }</th>
                        <th class="p-2 text-start">{ t::COL_NAME }</th>
                        <th class="p-2">{ t::COL_CREATED }</th>
                        <th class="p-2 w-40">{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody class={classes!(props.loading.then_some("opacity-60"))}>
                    { for props.categories.iter().enumerate().map(|(index, category)| {
                        let on_edit = {
                            let on_edit = props.on_edit.clone();
                            let id = category.id.clone();
                            Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
                        };
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let id = category.id.clone();
                            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                        };
                        html! {
                            <tr key={category.id.clone()} class="text-center border-t hover:bg-black/5">
                                <td class="p-2">{ props.offset + index as u64 + 1 }</td>
                                <td class="p-2 text-start">{ category.name.clone() }</td>
                                <td class="p-2">{ display_date(&category.created_at) }</td>
                                <td class="p-2">
                                    <div class="flex justify-center gap-2">
                                        <button type="button" class="btn-icon btn-primary" onclick={on_edit}>
                                            { t::EDIT }
                                        </button>
                                        <button type="button" class="btn-icon btn-danger" onclick={on_delete}>
                                            { t::DELETE }
                                        </button>
                                    </div>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}
