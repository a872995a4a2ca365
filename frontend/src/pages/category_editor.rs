use pressdesk_shared::category_form::{CategoryForm, FIELD_NAME};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        admin_menu::AdminMenu,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        notification::use_notifier,
    },
    i18n::current::{category_form as t, common as common_text},
    router::Route,
    session_context::{use_client, use_session_expiry},
};

#[derive(Properties, PartialEq)]
pub struct CategoryEditorPageProps {
    /// Category to edit; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(CategoryEditorPage)]
pub fn category_editor_page(props: &CategoryEditorPageProps) -> Html {
    let client = use_client();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let expiry = use_session_expiry();
    let form = use_mut_ref(CategoryForm::create);
    let redraw = use_force_update();
    let loading = use_state(|| props.id.is_some());

    {
        let client = client.clone();
        let navigator = navigator.clone();
        let notifier = notifier.clone();
        let expiry = expiry.clone();
        let form = form.clone();
        let loading = loading.clone();
        let redraw = redraw.clone();
        use_effect_with(props.id.clone(), move |id| {
            match id.clone() {
                Some(id) => {
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match client.get_category(&id).await {
                            Ok(category) => {
                                *form.borrow_mut() = CategoryForm::edit(&category);
                                loading.set(false);
                                redraw.force_update();
                            },
                            Err(err) => {
                                if expiry.check(&err) {
                                    return;
                                }
                                notifier.error(err.message_or(t::LOAD_FAILED));
                                if let Some(navigator) = navigator {
                                    navigator.push(&Route::AdminCategories);
                                }
                            },
                        }
                    });
                },
                None => {
                    *form.borrow_mut() = CategoryForm::create();
                    loading.set(false);
                    redraw.force_update();
                },
            }
            || ()
        });
    }

    let on_input = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                form.borrow_mut().set_name(target.value());
                redraw.force_update();
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let redraw = redraw.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let started = form.borrow_mut().begin_submit();
            redraw.force_update();
            if !started {
                return;
            }
            let snapshot = form.borrow().clone();
            let client = client.clone();
            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let expiry = expiry.clone();
            let form = form.clone();
            let redraw = redraw.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = snapshot.save(&client).await;
                let expired = result.as_ref().err().is_some_and(|err| expiry.check(err));
                let outcome = form.borrow_mut().finish_submit(result);
                redraw.force_update();
                match outcome {
                    Ok(()) => {
                        notifier.success(if snapshot.is_edit() { t::UPDATED } else { t::CREATED });
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::AdminCategories);
                        }
                    },
                    Err(_) if expired => {},
                    Err(message) => notifier.error(message),
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} /> };
    }

    let (name, error, submitting, title) = {
        let form = form.borrow();
        (
            form.name().to_string(),
            form.errors().get(FIELD_NAME).map(str::to_string),
            form.is_submitting(),
            if form.is_edit() { t::EDIT_TITLE } else { t::CREATE_TITLE },
        )
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 py-6 flex flex-col md:flex-row gap-6">
            <AdminMenu />
            <section class="flex-1 min-w-0 max-w-xl">
                <h1 class="text-2xl font-bold mb-4">{ title }</h1>
                <form class="space-y-4" onsubmit={on_submit} novalidate={true}>
                    <label class="block">
                        <span class="block mb-1 font-medium">{ t::NAME_LABEL }</span>
                        <input
                            type="text"
                            class={classes!("w-full", "rounded", "border", "px-3", "py-2", error.is_some().then_some("border-red-500"))}
                            placeholder={t::NAME_PLACEHOLDER}
                            value={name}
                            disabled={submitting}
                            oninput={on_input}
                        />
                        if let Some(error) = error {
                            <span class="block mt-1 text-sm text-red-600">{ error }</span>
                        }
                    </label>
                    <div class="flex gap-2">
                        <Link<Route> to={Route::AdminCategories} classes={classes!("btn-secondary")}>
                            { common_text::CANCEL }
                        </Link<Route>>
                        <button type="submit" class="btn-primary" disabled={submitting}>
                            { if submitting { common_text::SAVING } else { common_text::SAVE } }
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
