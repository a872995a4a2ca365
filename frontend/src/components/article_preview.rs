use pressdesk_shared::article_form::{ArticlePreview as PreviewModel, PreviewImage};
use yew::prelude::*;

use crate::{
    components::raw_html::RawHtml,
    config::PLACEHOLDER_IMAGE,
    i18n::current::{article_detail as detail_text, article_form as t, common as common_text},
};

#[derive(Properties, PartialEq)]
pub struct ArticlePreviewProps {
    pub preview: PreviewModel,
    /// Object URL of the selected, not yet uploaded file.
    #[prop_or_default]
    pub selected_src: Option<String>,
    pub submit_label: AttrValue,
    pub submitting: bool,
    pub on_back: Callback<()>,
    pub on_submit: Callback<()>,
}

/// The article as it would be published.
#[function_component(ArticlePreview)]
pub fn article_preview(props: &ArticlePreviewProps) -> Html {
    let preview = &props.preview;
    let image_src = match &preview.image {
        PreviewImage::Selected(_) => props
            .selected_src
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        PreviewImage::Existing(url) => url.clone(),
        PreviewImage::Placeholder => PLACEHOLDER_IMAGE.to_string(),
    };

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="space-y-6">
            <article class="rounded-2xl bg-[var(--surface)] shadow overflow-hidden">
                <img src={image_src} alt={detail_text::IMAGE_ALT} class="w-full h-64 lg:h-[350px] object-cover" />
                <div class="p-6 space-y-4">
                    <span class="inline-block bg-[var(--primary-soft)] text-xs px-2 py-1 rounded-full uppercase font-semibold">
                        { preview.category_label.clone() }
                    </span>
                    <h2 class="text-2xl font-bold">{ preview.title.clone() }</h2>
                    <RawHtml
                        html={AttrValue::from(preview.content_html.clone())}
                        class={classes!("prose", "max-w-none", "border-y-2", "border-dashed", "py-4")}
                    />
                </div>
            </article>
            <div class="flex justify-end gap-2">
                <button type="button" class="btn-secondary" disabled={props.submitting} onclick={back}>
                    { t::BACK_TO_EDIT }
                </button>
                <button type="button" class="btn-primary" disabled={props.submitting} onclick={submit}>
                    { if props.submitting { AttrValue::from(common_text::SAVING) } else { props.submit_label.clone() } }
                </button>
            </div>
        </div>
    }
}
