use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{config::NOTIFICATION_DISMISS_MS, i18n::current::notification as t};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Clone, PartialEq, Debug)]
struct Notice {
    seq: u64,
    kind: NoticeKind,
    message: String,
}

/// Raises transient notifications from anywhere below
/// [`NotificationProvider`].
#[derive(Clone, PartialEq, Default)]
pub struct Notifier(Callback<(NoticeKind, String)>);

impl Notifier {
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&message.clone().into());
        self.0.emit((NoticeKind::Error, message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.0.emit((NoticeKind::Success, message.into()));
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Html,
}

/// Shows one notification at a time; a newer one replaces the current.
/// Notifications survive route changes.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let current = use_state(|| None::<Notice>);
    let seq = use_mut_ref(|| 0_u64);

    let notifier = {
        let current = current.clone();
        use_memo((), move |_| {
            Notifier(Callback::from(move |(kind, message): (NoticeKind, String)| {
                let next_seq = {
                    let mut seq = seq.borrow_mut();
                    *seq += 1;
                    *seq
                };
                current.set(Some(Notice {
                    seq: next_seq,
                    kind,
                    message,
                }));
            }))
        })
    };

    let on_close = {
        let current = current.clone();
        Callback::from(move |closed_seq: u64| {
            if (*current).as_ref().map(|notice| notice.seq) == Some(closed_seq) {
                current.set(None);
            }
        })
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            {props.children.clone()}
            <div class="fixed top-20 inset-x-0 z-50 flex justify-center px-4 pointer-events-none">
                {
                    if let Some(notice) = (*current).clone() {
                        html! {
                            <NotificationBanner
                                key={notice.seq}
                                seq={notice.seq}
                                kind={notice.kind}
                                message={notice.message}
                                on_close={on_close}
                            />
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationBannerProps {
    seq: u64,
    kind: NoticeKind,
    message: String,
    on_close: Callback<u64>,
}

#[function_component(NotificationBanner)]
fn notification_banner(props: &NotificationBannerProps) -> Html {
    let dismiss = {
        let on_close = props.on_close.clone();
        let seq = props.seq;
        Callback::from(move |_: ()| on_close.emit(seq))
    };

    {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), NOTIFICATION_DISMISS_MS);
    }

    let (icon, title, tone) = match props.kind {
        NoticeKind::Error => ("⚠️", t::ERROR_TITLE, "border-red-300 bg-red-50 text-red-800"),
        NoticeKind::Success => ("✓", t::SUCCESS_TITLE, "border-green-300 bg-green-50 text-green-800"),
    };

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "pointer-events-auto",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "border",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "w-full",
                "max-w-2xl",
                tone
            )}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ title }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full hover:bg-black/10"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
