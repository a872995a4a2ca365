//! Filter + pagination + debounced fetch state shared by every list screen.
//!
//! The controller never performs I/O. Callers drive it:
//!
//! 1. a filter or page change returns a [`Ticket`]; arm a timer of
//!    [`DEBOUNCE_DELAY`](crate::config::DEBOUNCE_DELAY) for it;
//! 2. when the timer elapses call [`ListController::fire`]; a `Some` query
//!    means "fetch now";
//! 3. hand the result to [`ListController::apply`] together with the
//!    query's generation. Responses of superseded generations are dropped.

use std::collections::BTreeMap;

use crate::{
    debounce::{Debouncer, Ticket},
    error::ApiError,
    models::Page,
};

/// Pagination as last confirmed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// One-based current page.
    pub page: u32,
    /// Page size, always positive.
    pub limit: u32,
    /// Total matching rows.
    pub total: u64,
}

impl Pagination {
    /// First page of an unknown total.
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
        }
    }

    /// `max(1, ceil(total / limit))`.
    pub fn total_pages(&self) -> u32 {
        let limit = u64::from(self.limit.max(1));
        let pages = self.total.div_ceil(limit).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether pagination controls should be shown at all.
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }

    /// Every page number as its own button. Empty when nothing matched.
    pub fn page_numbers(&self) -> Vec<u32> {
        if !self.is_visible() {
            return Vec::new();
        }
        (1..=self.total_pages()).collect()
    }

    /// Whether a "previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a "next" control is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// One-based inclusive row range shown on this page, `None` when empty.
    pub fn range(&self) -> Option<(u64, u64)> {
        if !self.is_visible() {
            return None;
        }
        let limit = u64::from(self.limit.max(1));
        let start = u64::from(self.page.max(1) - 1) * limit + 1;
        let end = (u64::from(self.page.max(1)) * limit).min(self.total);
        Some((start, end))
    }
}

/// Parameters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Requested page.
    pub page: u32,
    /// Requested page size.
    pub limit: u32,
    /// Filter fields; blank values are not sent.
    pub filters: BTreeMap<String, String>,
    /// Request generation used to discard stale responses.
    pub generation: u64,
}

impl ListQuery {
    /// Query with no filters and generation 0.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            filters: BTreeMap::new(),
            generation: 0,
        }
    }

    /// Builder-style filter setter.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// `page`, `limit`, then every non-blank filter (trimmed) in field order.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .map(|(field, value)| (field, value.trim()))
                .filter(|(_, value)| !value.is_empty())
                .map(|(field, value)| (field.clone(), value.to_string())),
        );
        pairs
    }

    /// Same request parameters, ignoring generation and blank filters.
    pub fn same_params(&self, other: &ListQuery) -> bool {
        self.to_query_pairs() == other.to_query_pairs()
    }
}

/// What to do after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterDelete {
    /// The page stepped back; arm the debounce timer for this ticket.
    Scheduled(Ticket),
    /// Refetch the current page right away.
    Immediate(ListQuery),
}

/// State of one list screen.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    filters: BTreeMap<String, String>,
    pagination: Pagination,
    items: Vec<T>,
    loading: bool,
    last_error: Option<ApiError>,
    debouncer: Debouncer,
    generation: u64,
    in_flight: Option<ListQuery>,
    pending_delete: Option<String>,
    detached: bool,
}

impl<T: Clone> ListController<T> {
    /// Controller for the given page size and filter fields, all blank.
    pub fn new(limit: u32, filter_fields: &[&str]) -> Self {
        Self {
            filters: filter_fields
                .iter()
                .map(|field| ((*field).to_string(), String::new()))
                .collect(),
            pagination: Pagination::new(limit),
            items: Vec::new(),
            loading: true,
            last_error: None,
            debouncer: Debouncer::new(),
            generation: 0,
            in_flight: None,
            pending_delete: None,
            detached: false,
        }
    }

    /// Current filter values.
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// One filter value, empty if unset.
    pub fn filter(&self, field: &str) -> &str {
        self.filters.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Pagination state.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Rows of the last applied page.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether a fetch is pending or in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the last failed fetch, cleared by the next success.
    pub fn last_error(&self) -> Option<&ApiError> {
        self.last_error.as_ref()
    }

    /// Schedule the first load of the screen.
    pub fn schedule_initial(&mut self) -> Ticket {
        self.loading = true;
        self.debouncer.schedule()
    }

    /// Change one filter. Resets to page 1. `None` if the value is
    /// unchanged.
    pub fn set_filter(&mut self, field: &str, value: impl Into<String>) -> Option<Ticket> {
        let value = value.into();
        if self.filters.get(field) == Some(&value) {
            return None;
        }
        self.filters.insert(field.to_string(), value);
        Some(self.filters_changed())
    }

    /// Replace every filter at once, e.g. the "All" reset.
    pub fn replace_filters(&mut self, filters: BTreeMap<String, String>) -> Option<Ticket> {
        if self.filters == filters {
            return None;
        }
        self.filters = filters;
        Some(self.filters_changed())
    }

    /// Blank every filter.
    pub fn clear_filters(&mut self) -> Option<Ticket> {
        let cleared = self
            .filters
            .keys()
            .map(|field| (field.clone(), String::new()))
            .collect();
        self.replace_filters(cleared)
    }

    fn filters_changed(&mut self) -> Ticket {
        self.pagination.page = 1;
        self.loading = true;
        self.debouncer.schedule()
    }

    /// Move to `page` (clamped to at least 1). `None` if already there.
    pub fn set_page(&mut self, page: u32) -> Option<Ticket> {
        let page = page.max(1);
        if page == self.pagination.page {
            return None;
        }
        self.pagination.page = page;
        self.loading = true;
        Some(self.debouncer.schedule())
    }

    /// Called when the debounce timer for `ticket` elapses. Returns the
    /// query to send, or `None` when the ticket was superseded, the
    /// controller was detached, or an identical request is already in
    /// flight.
    pub fn fire(&mut self, ticket: Ticket) -> Option<ListQuery> {
        if self.detached || !self.debouncer.fire(ticket) {
            return None;
        }
        let candidate = self.query_with(self.generation);
        if let Some(in_flight) = &self.in_flight {
            if in_flight.same_params(&candidate) {
                tracing::debug!(ticket = ticket.sequence(), "identical list fetch already in flight");
                return None;
            }
        }
        Some(self.begin_fetch())
    }

    /// Cancel any pending debounce and fetch the current state now.
    pub fn refetch_now(&mut self) -> ListQuery {
        self.debouncer.cancel();
        self.begin_fetch()
    }

    fn begin_fetch(&mut self) -> ListQuery {
        self.generation += 1;
        self.loading = true;
        let query = self.query_with(self.generation);
        self.in_flight = Some(query.clone());
        query
    }

    fn query_with(&self, generation: u64) -> ListQuery {
        ListQuery {
            page: self.pagination.page,
            limit: self.pagination.limit,
            filters: self.filters.clone(),
            generation,
        }
    }

    /// Snapshot of the current parameters without issuing anything. Used by
    /// one-shot callers such as the CLI.
    pub fn current_query(&self) -> ListQuery {
        self.query_with(self.generation)
    }

    /// Apply a fetch result. Returns `false` (and changes nothing) when the
    /// result belongs to a superseded request or the controller is
    /// detached.
    pub fn apply(&mut self, generation: u64, result: Result<Page<T>, ApiError>) -> bool {
        if self.detached || generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale list response");
            return false;
        }
        self.in_flight = None;
        self.loading = self.debouncer.is_pending();
        match result {
            Ok(page) => {
                self.items = page.items;
                self.pagination = Pagination {
                    page: page.page.max(1),
                    limit: page.limit.max(1),
                    total: page.total,
                };
                self.last_error = None;
            },
            Err(err) => {
                tracing::warn!(error = %err, "list fetch failed");
                self.last_error = Some(err);
            },
        }
        true
    }

    /// Arm the confirmation step for deleting `id`.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    /// Id awaiting confirmation.
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Drop the armed delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the armed delete; returns the id to send to the server.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Follow-up after the server confirmed a delete. Deleting the last row
    /// of a page beyond the first steps back one page instead of showing
    /// an empty page.
    pub fn after_delete(&mut self) -> AfterDelete {
        if self.items.len() == 1 && self.pagination.page > 1 {
            let previous = self.pagination.page - 1;
            match self.set_page(previous) {
                Some(ticket) => AfterDelete::Scheduled(ticket),
                None => AfterDelete::Immediate(self.refetch_now()),
            }
        } else {
            AfterDelete::Immediate(self.refetch_now())
        }
    }

    /// Stop accepting results, e.g. when the screen is torn down.
    pub fn detach(&mut self) {
        self.detached = true;
        self.debouncer.cancel();
        self.generation += 1;
        self.in_flight = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::*;
    use crate::config::DEBOUNCE_DELAY;

    fn page_of(ids: &[&str], page: u32, limit: u32, total: u64) -> Page<String> {
        Page {
            items: ids.iter().map(|id| (*id).to_string()).collect(),
            page,
            limit,
            total,
        }
    }

    fn controller() -> ListController<String> {
        ListController::new(10, &["title", "category"])
    }

    #[test]
    fn burst_of_filter_changes_fires_once_with_final_values() {
        let mut list = controller();
        let tickets: Vec<_> = ["r", "ru", "rus", "rust"]
            .iter()
            .filter_map(|value| list.set_filter("title", *value))
            .collect();
        assert_eq!(tickets.len(), 4);

        let fired: Vec<_> = tickets.iter().filter_map(|ticket| list.fire(*ticket)).collect();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].filters["title"], "rust");
    }

    #[test]
    fn filter_change_resets_page() {
        let mut list = controller();
        let ticket = list.set_page(3).expect("page change");
        let query = list.fire(ticket).expect("fire");
        list.apply(query.generation, Ok(page_of(&["a"], 3, 10, 30)));

        list.set_filter("category", "c1").expect("filter change");
        assert_eq!(list.pagination().page, 1);
    }

    #[test]
    fn unchanged_values_do_not_schedule() {
        let mut list = controller();
        assert!(list.set_filter("title", "").is_none());
        assert!(list.set_page(1).is_none());
        assert!(list.clear_filters().is_none());
    }

    #[test]
    fn server_pagination_overrides_requested_values() {
        let mut list = controller();
        let ticket = list.set_page(9).expect("page change");
        let query = list.fire(ticket).expect("fire");
        assert_eq!(query.page, 9);

        assert!(list.apply(query.generation, Ok(page_of(&["x"], 3, 10, 25))));
        assert_eq!(
            list.pagination(),
            Pagination {
                page: 3,
                limit: 10,
                total: 25
            }
        );
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut list = controller();
        let first = list.set_filter("title", "old").expect("first change");
        let old_query = list.fire(first).expect("first fire");
        let second = list.set_filter("title", "new").expect("second change");
        let new_query = list.fire(second).expect("second fire");

        assert!(list.apply(new_query.generation, Ok(page_of(&["new"], 1, 10, 1))));
        assert!(!list.apply(old_query.generation, Ok(page_of(&["old"], 1, 10, 1))));
        assert_eq!(list.items(), ["new".to_string()]);
    }

    #[test]
    fn identical_request_in_flight_is_not_duplicated() {
        let mut list = controller();
        let ticket = list.set_filter("title", "rust").expect("change");
        let in_flight = list.fire(ticket).expect("fire");

        list.set_filter("title", "rusty").expect("change");
        let back = list.set_filter("title", "rust").expect("change back");
        assert!(list.fire(back).is_none());

        assert!(list.apply(in_flight.generation, Ok(page_of(&["a"], 1, 10, 1))));
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut list = controller();
        let ticket = list.schedule_initial();
        let query = list.fire(ticket).expect("fire");
        list.apply(query.generation, Ok(page_of(&["a", "b"], 1, 10, 2)));

        let query = list.refetch_now();
        list.apply(query.generation, Err(ApiError::Network("offline".to_string())));
        assert_eq!(list.items().len(), 2);
        assert!(list.last_error().is_some());
    }

    #[test]
    fn deleting_sole_row_on_later_page_steps_back() {
        let mut list = controller();
        let ticket = list.set_page(3).expect("page change");
        let query = list.fire(ticket).expect("fire");
        list.apply(query.generation, Ok(page_of(&["only"], 3, 10, 21)));

        list.request_delete("only");
        assert_eq!(list.confirm_delete().as_deref(), Some("only"));

        let ticket = match list.after_delete() {
            AfterDelete::Scheduled(ticket) => ticket,
            other => panic!("expected step back, got {other:?}"),
        };
        let query = list.fire(ticket).expect("fire");
        assert_eq!(query.page, 2);
    }

    #[test]
    fn deleting_on_first_page_refetches_same_page() {
        let mut list = controller();
        let ticket = list.schedule_initial();
        let query = list.fire(ticket).expect("fire");
        list.apply(query.generation, Ok(page_of(&["only"], 1, 10, 1)));

        match list.after_delete() {
            AfterDelete::Immediate(query) => assert_eq!(query.page, 1),
            other => panic!("expected immediate refetch, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_delete_yields_nothing() {
        let mut list = controller();
        list.request_delete("a1");
        list.cancel_delete();
        assert!(list.confirm_delete().is_none());
    }

    #[test]
    fn detached_controller_ignores_everything() {
        let mut list = controller();
        let ticket = list.set_filter("title", "rust").expect("change");
        let query = list.fire(ticket).expect("fire");
        list.detach();
        assert!(!list.apply(query.generation, Ok(page_of(&["a"], 1, 10, 1))));

        let ticket = list.set_page(2).expect("page");
        assert!(list.fire(ticket).is_none());
    }

    #[test]
    fn pagination_buttons_enumerate_every_page() {
        let pagination = Pagination {
            page: 2,
            limit: 10,
            total: 31,
        };
        assert_eq!(pagination.page_numbers(), vec![1, 2, 3, 4]);
        assert_eq!(pagination.range(), Some((11, 20)));
        assert!(pagination.has_previous());
        assert!(pagination.has_next());

        let empty = Pagination::new(10);
        assert!(empty.page_numbers().is_empty());
        assert_eq!(empty.total_pages(), 1);
        assert_eq!(empty.range(), None);
    }

    #[test]
    fn query_pairs_skip_blank_filters() {
        let query = ListQuery::new(1, 9)
            .with_filter("title", "  ")
            .with_filter("category", "c7");
        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "9".to_string()),
                ("category".to_string(), "c7".to_string()),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn timers_inside_window_collapse_into_one_fetch() {
        let list = Rc::new(RefCell::new(controller()));
        let issued = Rc::new(RefCell::new(Vec::<ListQuery>::new()));
        let local = tokio::task::LocalSet::new();

        local
            .run_until(async {
                for value in ["a", "ab", "abc"] {
                    let ticket = list.borrow_mut().set_filter("title", value).expect("change");
                    let list = list.clone();
                    let issued = issued.clone();
                    tokio::task::spawn_local(async move {
                        tokio::time::sleep(DEBOUNCE_DELAY).await;
                        if let Some(query) = list.borrow_mut().fire(ticket) {
                            issued.borrow_mut().push(query);
                        }
                    });
                    tokio::time::sleep(Duration::from_millis(120)).await;
                }
                tokio::time::sleep(DEBOUNCE_DELAY * 2).await;
            })
            .await;

        let issued = issued.borrow();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].filters["title"], "abc");
    }
}
