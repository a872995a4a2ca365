use yew::prelude::*;

use crate::i18n::current::{common as common_text, confirm_dialog as t};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub body: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40" role="dialog" aria-modal="true">
            <div class="w-full max-w-sm rounded-2xl bg-[var(--surface)] p-6 shadow-xl space-y-4">
                <h2 class="text-lg font-semibold">{ props.title.clone() }</h2>
                <p class="text-sm text-[var(--muted)]">{ props.body.clone() }</p>
                <div class="flex justify-end gap-2">
                    <button type="button" class="btn-secondary" onclick={cancel}>
                        { common_text::CANCEL }
                    </button>
                    <button type="button" class="btn-danger" onclick={confirm}>
                        { t::CONFIRM }
                    </button>
                </div>
            </div>
        </div>
    }
}
