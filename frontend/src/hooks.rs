use std::{cell::RefCell, future::Future, rc::Rc};

use futures::{future::LocalBoxFuture, FutureExt};
use gloo_timers::callback::Timeout;
use pressdesk_shared::{
    config::{CATEGORY_OPTIONS_LIMIT, DEBOUNCE_DELAY},
    debounce::Ticket,
    listing::{AfterDelete, ListController, ListQuery, Pagination},
    ApiError, Category, Page,
};
use yew::prelude::*;

use crate::{
    components::notification::use_notifier,
    i18n::current::categories::FETCH_FAILED as FAILED_CATEGORIES,
    session_context::{use_client, use_session_expiry, SessionExpiry},
};

type Fetcher<T> = Rc<dyn Fn(ListQuery) -> LocalBoxFuture<'static, Result<Page<T>, ApiError>>>;

/// Handle to a list screen's controller. Cloning shares the same state.
///
/// Filter and page changes arm a [`DEBOUNCE_DELAY`] timer; only the latest
/// timer turns into a request, and responses arriving after a newer request
/// started (or after unmount) are dropped by the controller.
pub struct ListHandle<T> {
    controller: Rc<RefCell<ListController<T>>>,
    timer: Rc<RefCell<Option<Timeout>>>,
    fetch: Fetcher<T>,
    expiry: SessionExpiry,
    redraw: UseForceUpdateHandle,
}

impl<T> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            timer: self.timer.clone(),
            fetch: self.fetch.clone(),
            expiry: self.expiry.clone(),
            redraw: self.redraw.clone(),
        }
    }
}

impl<T: Clone + 'static> ListHandle<T> {
    pub fn items(&self) -> Vec<T> {
        self.controller.borrow().items().to_vec()
    }

    pub fn pagination(&self) -> Pagination {
        self.controller.borrow().pagination()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.borrow().is_loading()
    }

    pub fn filter(&self, field: &str) -> String {
        self.controller.borrow().filter(field).to_string()
    }

    /// Message of the last failed fetch, server text preferred.
    pub fn error_message(&self, fallback: &str) -> Option<String> {
        self.controller
            .borrow()
            .last_error()
            .map(|err| err.message_or(fallback))
    }

    pub fn set_filter(&self, field: &str, value: String) {
        let ticket = self.controller.borrow_mut().set_filter(field, value);
        if let Some(ticket) = ticket {
            self.arm(ticket);
        }
    }

    pub fn clear_filters(&self) {
        let ticket = self.controller.borrow_mut().clear_filters();
        if let Some(ticket) = ticket {
            self.arm(ticket);
        }
    }

    pub fn set_page(&self, page: u32) {
        let ticket = self.controller.borrow_mut().set_page(page);
        if let Some(ticket) = ticket {
            self.arm(ticket);
        }
    }

    pub fn pending_delete(&self) -> Option<String> {
        self.controller.borrow().pending_delete().map(str::to_string)
    }

    pub fn request_delete(&self, id: String) {
        self.controller.borrow_mut().request_delete(id);
        self.redraw.force_update();
    }

    pub fn cancel_delete(&self) {
        self.controller.borrow_mut().cancel_delete();
        self.redraw.force_update();
    }

    /// Delete the armed id with `delete`, then step back or refetch.
    /// Failures go to `on_error` and leave the list as it is; a rejected
    /// token ends the session instead.
    pub fn confirm_delete<F, Fut>(&self, delete: F, on_error: Callback<ApiError>)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Some(id) = self.controller.borrow_mut().confirm_delete() else {
            return;
        };
        self.redraw.force_update();
        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match delete(id).await {
                Ok(()) => {
                    let next = handle.controller.borrow_mut().after_delete();
                    match next {
                        AfterDelete::Scheduled(ticket) => handle.arm(ticket),
                        AfterDelete::Immediate(query) => handle.run(query),
                    }
                },
                Err(err) => {
                    if !handle.expiry.check(&err) {
                        on_error.emit(err);
                    }
                },
            }
        });
    }

    fn arm(&self, ticket: Ticket) {
        let handle = self.clone();
        let delay = u32::try_from(DEBOUNCE_DELAY.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(delay, move || handle.fire(ticket));
        // Dropping the previous timeout cancels it.
        *self.timer.borrow_mut() = Some(timeout);
        self.redraw.force_update();
    }

    fn fire(&self, ticket: Ticket) {
        let query = self.controller.borrow_mut().fire(ticket);
        if let Some(query) = query {
            self.run(query);
        }
    }

    fn run(&self, query: ListQuery) {
        self.redraw.force_update();
        let handle = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = (handle.fetch)(query.clone()).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("list fetch failed: {err}").into());
                handle.expiry.check(err);
            }
            let applied = handle.controller.borrow_mut().apply(query.generation, result);
            if applied {
                handle.redraw.force_update();
            }
        });
    }
}

/// Drive a [`ListController`] from a component: schedules the initial load
/// on mount and detaches on unmount.
///
/// `fetch` is captured on first render; it should only close over values
/// that never change, such as the shared API client.
#[hook]
pub fn use_list_controller<T, F, Fut>(
    limit: u32,
    filter_fields: &'static [&'static str],
    fetch: F,
) -> ListHandle<T>
where
    T: Clone + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let controller = use_mut_ref(|| ListController::new(limit, filter_fields));
    let timer = use_mut_ref(|| None::<Timeout>);
    let fetch = use_memo((), move |_| {
        let fetcher: Fetcher<T> = Rc::new(move |query: ListQuery| fetch(query).boxed_local());
        fetcher
    });
    let expiry = use_session_expiry();
    let redraw = use_force_update();

    let handle = ListHandle {
        controller,
        timer,
        fetch: (*fetch).clone(),
        expiry,
        redraw,
    };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            let ticket = handle.controller.borrow_mut().schedule_initial();
            handle.arm(ticket);
            move || {
                handle.controller.borrow_mut().detach();
                handle.timer.borrow_mut().take();
            }
        });
    }

    handle
}

/// Category options for dropdowns, loaded once from the first page of up
/// to [`CATEGORY_OPTIONS_LIMIT`] categories.
#[hook]
pub fn use_category_options() -> UseStateHandle<Vec<Category>> {
    let client = use_client();
    let notifier = use_notifier();
    let expiry = use_session_expiry();
    let options = use_state(Vec::<Category>::new);

    {
        let options = options.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let query = ListQuery::new(1, CATEGORY_OPTIONS_LIMIT);
                match client.list_categories(&query).await {
                    Ok(page) => options.set(page.items),
                    Err(err) => {
                        if !expiry.check(&err) {
                            notifier.error(err.message_or(FAILED_CATEGORIES));
                        }
                    },
                }
            });
            || ()
        });
    }

    options
}
