use pressdesk_shared::{
    config::{RELATED_MAX, RELATED_POOL_LIMIT},
    listing::ListQuery,
    models::{display_date, related_articles},
    Article,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        notification::use_notifier,
        raw_html::RawHtml,
    },
    config::PLACEHOLDER_IMAGE,
    i18n::current::article_detail as t,
    router::Route,
    session_context::{use_client, use_session_expiry},
};

#[derive(Properties, PartialEq)]
pub struct ArticleDetailPageProps {
    pub id: String,
    /// List route this detail view belongs to; also decides where related
    /// article links point.
    pub back: Route,
}

fn detail_route(back: &Route, id: String) -> Route {
    match back {
        Route::AdminArticles => Route::AdminArticleDetail {
            id,
        },
        _ => Route::UserArticleDetail {
            id,
        },
    }
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailPageProps) -> Html {
    let client = use_client();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let expiry = use_session_expiry();
    let article = use_state(|| None::<Article>);
    let related = use_state(Vec::<Article>::new);
    let loading = use_state(|| true);
    // Request sequence guard: a slow response for a previous id must not
    // replace the article of the current one.
    let load_seq = use_mut_ref(|| 0_u64);

    {
        let article = article.clone();
        let related = related.clone();
        let loading = loading.clone();
        let back = props.back.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            let request_id = {
                let mut seq = load_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.get_article(&id).await {
                    Ok(current) => {
                        let pool = client
                            .list_articles(&ListQuery::new(1, RELATED_POOL_LIMIT))
                            .await
                            .map(|page| page.items)
                            .unwrap_or_default();
                        if *load_seq.borrow() != request_id {
                            return;
                        }
                        related.set(related_articles(&current, &pool, RELATED_MAX));
                        article.set(Some(current));
                        loading.set(false);
                    },
                    Err(err) => {
                        if *load_seq.borrow() != request_id || expiry.check(&err) {
                            return;
                        }
                        notifier.error(err.message_or(t::LOAD_FAILED));
                        loading.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&back);
                        }
                    },
                }
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
    }
    let Some(current) = (*article).clone() else {
        return html! {
            <div class="max-w-3xl mx-auto px-4 py-8 text-center">
                <Link<Route> to={props.back.clone()} classes={classes!("text-[var(--primary)]")}>
                    { t::BACK_TO_LIST }
                </Link<Route>>
            </div>
        };
    };

    let image = current
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let author = current.author_name().to_string();
    let initial = author
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8 grid grid-cols-1 lg:grid-cols-3 gap-8">
            <article class="lg:col-span-2 rounded-2xl bg-[var(--surface)] shadow overflow-hidden">
                <img src={image} alt={t::IMAGE_ALT} class="w-full h-64 lg:h-[350px] object-cover" />
                <div class="p-6 space-y-4">
                    <div class="flex justify-between items-start text-sm text-[var(--muted)]">
                        <div>
                            <div>{ display_date(&current.created_at) }</div>
                            <div class="text-xs">
                                { t::UPDATED_PREFIX }{ display_date(&current.updated_at) }
                            </div>
                        </div>
                        <span class="inline-block bg-[var(--primary-soft)] text-xs px-2 py-1 rounded-full uppercase font-semibold">
                            { current.category_name().to_string() }
                        </span>
                    </div>
                    <h1 class="text-2xl font-bold">{ current.title.clone() }</h1>
                    <RawHtml
                        html={AttrValue::from(current.content.clone())}
                        class={classes!("prose", "max-w-none", "border-y-2", "border-dashed", "py-4")}
                    />
                    <div>
                        <p class="font-bold mb-2">{ t::AUTHOR }</p>
                        <div class="flex items-center gap-3">
                            <span class="w-10 h-10 rounded-full bg-black/10 flex items-center justify-center">
                                { initial }
                            </span>
                            <span class="font-medium">{ author }</span>
                        </div>
                    </div>
                    <Link<Route> to={props.back.clone()} classes={classes!("text-[var(--primary)]")}>
                        { t::BACK_TO_LIST }
                    </Link<Route>>
                </div>
            </article>
            <aside class="space-y-4">
                <h2 class="text-lg font-semibold">{ t::RELATED }</h2>
                if related.is_empty() {
                    <p class="text-sm text-[var(--muted)]">{ t::NO_RELATED }</p>
                } else {
                    { for related.iter().map(|item| html! {
                        <Link<Route>
                            key={item.id.clone()}
                            to={detail_route(&props.back, item.id.clone())}
                            classes={classes!("block", "rounded-xl", "bg-[var(--surface)]", "shadow", "p-4", "hover:shadow-lg")}
                        >
                            <p class="text-xs text-[var(--muted)]">{ display_date(&item.created_at) }</p>
                            <p class="font-semibold">{ item.title.clone() }</p>
                        </Link<Route>>
                    }) }
                }
            </aside>
        </div>
    }
}
