use pressdesk_shared::{models::display_date, Article};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{config::PLACEHOLDER_IMAGE, i18n::current::user_articles as t, router::Route};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    pub detail_route: Route,
}

/// Strip tags from editor HTML for a short plain-text excerpt.
fn excerpt(html: &str, max_chars: usize) -> String {
    let text = ammonia::Builder::empty().clean(html).to_string();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let image = article
        .image_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    html! {
        <article class="article-card rounded-2xl bg-[var(--surface)] shadow overflow-hidden flex flex-col">
            <Link<Route> to={props.detail_route.clone()} classes={classes!("featured-image")}>
                <img src={image} alt={article.title.clone()} loading="lazy" class="w-full h-48 object-cover" />
            </Link<Route>>
            <div class="p-4 flex flex-col gap-2 flex-1">
                <div class="flex justify-between text-xs text-[var(--muted)]">
                    <span>{ display_date(&article.created_at) }</span>
                    <span class="uppercase font-semibold">{ article.category_name().to_string() }</span>
                </div>
                <h3 class="text-lg font-bold">
                    <Link<Route> to={props.detail_route.clone()}>{ article.title.clone() }</Link<Route>>
                </h3>
                <p class="text-sm text-[var(--muted)] flex-1">{ excerpt(&article.content, 140) }</p>
                <Link<Route> to={props.detail_route.clone()} classes={classes!("text-sm", "text-[var(--primary)]")}>
                    { t::READ_MORE }
                </Link<Route>>
            </div>
        </article>
    }
}
