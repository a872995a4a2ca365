use std::{cell::RefCell, rc::Rc};

use pressdesk_shared::article_form::{
    execute_submit, ArticleForm, FormMode, ImageFile, SubmitBlocked, SubmitTarget, FIELD_CATEGORY,
    FIELD_CONTENT, FIELD_TITLE,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::BrowserFile,
    components::{
        admin_menu::AdminMenu,
        article_preview::ArticlePreview,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        notification::use_notifier,
    },
    hooks::use_category_options,
    i18n::current::{article_form as t, common as common_text},
    router::Route,
    session_context::{use_client, use_session_expiry},
};

type FormRef = Rc<RefCell<ArticleForm<BrowserFile>>>;

#[derive(Properties, PartialEq)]
pub struct ArticleEditorPageProps {
    /// Article to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

fn replace_object_url(slot: &RefCell<Option<String>>, next: Option<String>) {
    if let Some(previous) = slot.replace(next) {
        let _ = web_sys::Url::revoke_object_url(&previous);
    }
}

fn field_error(form: &ArticleForm<BrowserFile>, field: &str) -> Option<String> {
    form.errors().get(field).map(str::to_string)
}

fn error_line(error: Option<String>) -> Html {
    match error {
        Some(error) => html! { <span class="block mt-1 text-sm text-red-600">{ error }</span> },
        None => Html::default(),
    }
}

fn input_classes(error: &Option<String>) -> Classes {
    classes!("w-full", "rounded", "border", "px-3", "py-2", error.is_some().then_some("border-red-500"))
}

/// Create and edit screen with preview. Saving uploads the selected image
/// first, then writes the article.
#[function_component(ArticleEditorPage)]
pub fn article_editor_page(props: &ArticleEditorPageProps) -> Html {
    let client = use_client();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let expiry = use_session_expiry();
    let categories = use_category_options();
    let form: FormRef = use_mut_ref(ArticleForm::create);
    let object_url = use_mut_ref(|| None::<String>);
    let from_preview = use_mut_ref(|| false);
    let redraw = use_force_update();
    let loading = use_state(|| props.id.is_some());

    {
        let object_url = object_url.clone();
        use_effect_with((), move |_| move || replace_object_url(&object_url, None));
    }

    {
        let client = client.clone();
        let navigator = navigator.clone();
        let notifier = notifier.clone();
        let expiry = expiry.clone();
        let form = form.clone();
        let object_url = object_url.clone();
        let loading = loading.clone();
        let redraw = redraw.clone();
        use_effect_with(props.id.clone(), move |id| {
            replace_object_url(&object_url, None);
            match id.clone() {
                Some(id) => {
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match client.get_article(&id).await {
                            Ok(article) => {
                                *form.borrow_mut() = ArticleForm::edit(&article);
                                loading.set(false);
                                redraw.force_update();
                            },
                            Err(err) => {
                                if expiry.check(&err) {
                                    return;
                                }
                                notifier.error(err.message_or(t::LOAD_FAILED));
                                if let Some(navigator) = navigator {
                                    navigator.push(&Route::AdminArticles);
                                }
                            },
                        }
                    });
                },
                None => {
                    *form.borrow_mut() = ArticleForm::create();
                    loading.set(false);
                    redraw.force_update();
                },
            }
            || ()
        });
    }

    let on_title = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().set_title(target.value());
                redraw.force_update();
            }
        })
    };
    let on_category = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                form.borrow_mut().set_category(target.value());
                redraw.force_update();
            }
        })
    };
    let on_content = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form.borrow_mut().set_content(target.value());
                redraw.force_update();
            }
        })
    };
    let on_image = {
        let form = form.clone();
        let object_url = object_url.clone();
        let notifier = notifier.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let image = ImageFile {
                name: file.name(),
                mime: file.type_(),
                size: file.size() as u64,
                data: BrowserFile(file),
            };
            let url = image.data.object_url();
            match form.borrow_mut().select_image(image) {
                Ok(()) => replace_object_url(&object_url, url),
                Err(rejection) => {
                    if let Some(url) = url {
                        let _ = web_sys::Url::revoke_object_url(&url);
                    }
                    input.set_value("");
                    notifier.error(rejection.to_string());
                },
            }
            redraw.force_update();
        })
    };
    let on_clear_image = {
        let form = form.clone();
        let object_url = object_url.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            form.borrow_mut().clear_selected_image();
            replace_object_url(&object_url, None);
            redraw.force_update();
        })
    };

    let on_preview = {
        let form = form.clone();
        let from_preview = from_preview.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            let entered = form.borrow_mut().preview().is_ok();
            *from_preview.borrow_mut() = entered;
            redraw.force_update();
        })
    };
    let on_back = {
        let form = form.clone();
        let from_preview = from_preview.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            form.borrow_mut().back_to_edit();
            *from_preview.borrow_mut() = false;
            redraw.force_update();
        })
    };

    let submit = {
        let form = form.clone();
        let from_preview = from_preview.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            let plan = form.borrow_mut().begin_submit();
            let plan = match plan {
                Ok(plan) => plan,
                Err(SubmitBlocked::Invalid(_)) => {
                    form.borrow_mut().back_to_edit();
                    *from_preview.borrow_mut() = false;
                    redraw.force_update();
                    return;
                },
                Err(SubmitBlocked::Busy) => return,
            };
            redraw.force_update();
            let created = plan.target == SubmitTarget::Create;
            let client = client.clone();
            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let expiry = expiry.clone();
            let form = form.clone();
            let from_preview = from_preview.clone();
            let redraw = redraw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = execute_submit(&client, plan).await;
                let expired = result.as_ref().err().is_some_and(|err| expiry.check(err));
                let outcome = form.borrow_mut().finish_submit(result);
                if outcome.is_err() {
                    *from_preview.borrow_mut() = false;
                }
                redraw.force_update();
                match outcome {
                    Ok(()) => {
                        notifier.success(if created { t::CREATED } else { t::UPDATED });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminArticles);
                        }
                    },
                    Err(_) if expired => {},
                    Err(message) => notifier.error(message),
                }
            });
        })
    };
    let on_submit = {
        let submit = submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            submit.emit(());
        })
    };

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
    }

    let form = form.borrow();
    let is_edit = *form.target() != SubmitTarget::Create;
    let heading = if is_edit { t::EDIT_TITLE } else { t::CREATE_TITLE };
    let submit_label = if is_edit { t::UPDATE } else { t::PUBLISH };
    let submitting = form.is_submitting();
    let selected_src = object_url.borrow().clone();

    // A submit started from the preview keeps the preview on screen.
    let body = if matches!(form.mode(), FormMode::Previewing | FormMode::Submitting)
        && *from_preview.borrow()
    {
        html! {
            <ArticlePreview
                preview={form.preview_model(&categories)}
                selected_src={selected_src}
                submit_label={submit_label}
                submitting={submitting}
                on_back={on_back}
                on_submit={submit}
            />
        }
    } else {
        let fields = form.fields().clone();
        let title_error = field_error(&form, FIELD_TITLE);
        let category_error = field_error(&form, FIELD_CATEGORY);
        let content_error = field_error(&form, FIELD_CONTENT);
        let current_image = selected_src.or_else(|| fields.image_url.clone());

        html! {
            <form class="space-y-4" onsubmit={on_submit} novalidate={true}>
                <label class="block">
                    <span class="block mb-1 font-medium">{ t::TITLE_LABEL }</span>
                    <input
                        type="text"
                        class={input_classes(&title_error)}
                        value={fields.title.clone()}
                        disabled={submitting}
                        oninput={on_title}
                    />
                    { error_line(title_error) }
                </label>
                <label class="block">
                    <span class="block mb-1 font-medium">{ t::CATEGORY_LABEL }</span>
                    <select class={input_classes(&category_error)} disabled={submitting} onchange={on_category}>
                        <option value="" selected={fields.category_id.is_empty()}>
                            { t::CATEGORY_PLACEHOLDER }
                        </option>
                        { for categories.iter().map(|category| html! {
                            <option
                                key={category.id.clone()}
                                value={category.id.clone()}
                                selected={category.id == fields.category_id}
                            >
                                { category.name.clone() }
                            </option>
                        }) }
                    </select>
                    { error_line(category_error) }
                </label>
                <label class="block">
                    <span class="block mb-1 font-medium">{ t::CONTENT_LABEL }</span>
                    <textarea
                        class={classes!(input_classes(&content_error), "min-h-[240px]", "font-mono")}
                        value={fields.content.clone()}
                        disabled={submitting}
                        oninput={on_content}
                    />
                    { error_line(content_error) }
                </label>
                <div class="block space-y-2">
                    <span class="block font-medium">{ t::IMAGE_LABEL }</span>
                    if let Some(src) = current_image {
                        <img src={src} alt={t::IMAGE_LABEL} class="h-40 rounded object-cover" />
                    }
                    <div class="flex items-center gap-2">
                        <input type="file" accept="image/*" disabled={submitting} onchange={on_image} />
                        if form.selected_image().is_some() {
                            <button type="button" class="btn-secondary" onclick={on_clear_image}>
                                { common_text::CANCEL }
                            </button>
                        }
                    </div>
                    <span class="block text-xs text-[var(--muted)]">{ t::IMAGE_HINT }</span>
                </div>
                <div class="flex justify-end gap-2">
                    <Link<Route> to={Route::AdminArticles} classes={classes!("btn-secondary")}>
                        { common_text::CANCEL }
                    </Link<Route>>
                    <button type="button" class="btn-secondary" disabled={submitting} onclick={on_preview}>
                        { t::PREVIEW }
                    </button>
                    <button type="submit" class="btn-primary" disabled={submitting}>
                        { if submitting { common_text::SAVING } else { submit_label } }
                    </button>
                </div>
            </form>
        }
    };
    drop(form);

    html! {
        <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col md:flex-row gap-6">
            <AdminMenu />
            <section class="flex-1 min-w-0 max-w-3xl">
                <h1 class="text-2xl font-bold mb-4">{ heading }</h1>
                { body }
            </section>
        </div>
    }
}
