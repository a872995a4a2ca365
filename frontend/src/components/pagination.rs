use pressdesk_shared::listing::Pagination as PageState;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one, fill_three};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub state: PageState,
    pub on_page_change: Callback<u32>,
}

/// Range label plus one button per page. Hidden while nothing matched.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let state = props.state;
    let Some((start, end)) = state.range() else {
        return Html::default();
    };

    let total_pages = state.total_pages();
    let current_page = state.page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "text-sm",
        "font-semibold",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <div class="flex flex-wrap items-center justify-between gap-3 py-4">
            <p class="text-sm text-[var(--muted)]">
                { fill_three(t::RANGE_TEMPLATE, start, end, state.total) }
            </p>
            <nav class="flex flex-wrap items-center gap-2" aria-label={t::ARIA_NAV}>
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={!state.has_previous()}
                    onclick={prev_onclick}
                    aria-label={t::ARIA_PREV}
                >
                    {"<"}
                </button>
                { for state.page_numbers().into_iter().map(|page| {
                    let is_current = page == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        is_current.then_some("bg-[var(--primary)] text-white border-transparent")
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };
                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={is_current.then(|| AttrValue::from("page"))}
                            disabled={is_current}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }) }
                <button
                    type="button"
                    class={base_btn_classes.clone()}
                    disabled={!state.has_next()}
                    onclick={next_onclick}
                    aria-label={t::ARIA_NEXT}
                >
                    {">"}
                </button>
            </nav>
        </div>
    }
}
