//! List / filter / paginate controller.
//!
//! The controller owns one list view's criteria, its current result page and
//! the clear-all confirmation flow. It performs no I/O: every method returns
//! the [`Effect`]s the view must carry out, and results are fed back with
//! [`ListController::receive`] and [`ListController::clear_finished`].

use crate::common::{PaginationMeta, Paginated};
use crate::error::AppError;
use crate::filters::{apply_filters, to_query_string, Criteria};
use crate::load::{LoadState, RequestSequence, Ticket};

pub const CLEAR_SUCCESS_MESSAGE: &str = "All records cleared";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Work the view performs on the controller's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<C> {
    /// Fetch the page for `criteria` and hand the result back with `ticket`.
    Fetch { ticket: Ticket, criteria: C, query: String },
    /// Issue the irreversible clear-all call.
    ClearAll,
    Notify(Notice),
}

/// State of one list view.
#[derive(Debug, Clone)]
pub struct ListController<C, T, S = ()> {
    criteria: C,
    requests: RequestSequence,
    page: LoadState<Paginated<T, S>>,
    confirm_open: bool,
    clearing: bool,
}

impl<C: Criteria, T, S> Default for ListController<C, T, S> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Criteria, T, S> ListController<C, T, S> {
    pub fn new(criteria: C) -> Self {
        Self {
            criteria,
            requests: RequestSequence::default(),
            page: LoadState::Idle,
            confirm_open: false,
            clearing: false,
        }
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn page(&self) -> &LoadState<Paginated<T, S>> {
        &self.page
    }

    pub fn pagination(&self) -> Option<&PaginationMeta> {
        self.page.value().map(|p| &p.pagination)
    }

    pub fn has_next(&self) -> bool {
        self.pagination().is_some_and(|m| m.has_next)
    }

    pub fn has_prev(&self) -> bool {
        self.pagination().is_some_and(|m| m.has_prev)
    }

    pub fn is_confirm_open(&self) -> bool {
        self.confirm_open
    }

    pub fn is_clearing(&self) -> bool {
        self.clearing
    }

    /// Fetch the current criteria again.
    pub fn refresh(&mut self) -> Effect<C> {
        let ticket = self.requests.issue();
        self.page.start();
        Effect::Fetch {
            ticket,
            criteria: self.criteria.clone(),
            query: to_query_string(&self.criteria),
        }
    }

    /// Apply a patch; fetches only if the criteria actually changed.
    pub fn apply(&mut self, patch: C::Patch) -> Option<Effect<C>> {
        let next = apply_filters(&self.criteria, patch);
        if next == self.criteria {
            return None;
        }
        self.criteria = next;
        Some(self.refresh())
    }

    /// Restore default criteria and fetch.
    pub fn reset(&mut self) -> Effect<C> {
        self.criteria = C::default();
        self.refresh()
    }

    /// Deliver a fetch result. Results for superseded tickets are dropped and
    /// `false` is returned.
    pub fn receive(&mut self, ticket: Ticket, result: Result<Paginated<T, S>, AppError>) -> bool {
        if !self.requests.is_current(ticket) {
            return false;
        }
        self.page.resolve(result.map_err(|e| e.user_message()))
    }

    pub fn open_clear_dialog(&mut self) {
        if !self.clearing {
            self.confirm_open = true;
        }
    }

    pub fn cancel_clear(&mut self) {
        self.confirm_open = false;
    }

    /// Confirm the open dialog. Without an open dialog nothing happens.
    pub fn confirm_clear(&mut self) -> Option<Effect<C>> {
        if !self.confirm_open || self.clearing {
            return None;
        }
        self.confirm_open = false;
        self.clearing = true;
        Some(Effect::ClearAll)
    }

    /// Deliver the clear-all outcome. Success notifies and refetches once;
    /// failure notifies and keeps the current page.
    pub fn clear_finished(&mut self, result: Result<(), AppError>) -> Vec<Effect<C>> {
        self.clearing = false;
        match result {
            Ok(()) => vec![
                Effect::Notify(Notice::success(CLEAR_SUCCESS_MESSAGE)),
                self.refresh(),
            ],
            Err(e) => vec![Effect::Notify(Notice::error(e.user_message()))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity_log::{ActivityLogFilters, ActivityLogPatch, Severity};
    use crate::error::GENERIC_ERROR_MESSAGE;
    use pretty_assertions::assert_eq;

    type Logs = ListController<ActivityLogFilters, u32>;

    fn page(items: Vec<u32>, has_next: bool) -> Paginated<u32, ()> {
        Paginated {
            pagination: PaginationMeta {
                current_page: 1,
                total_pages: if has_next { 2 } else { 1 },
                total_items: items.len() as i64,
                has_next,
                has_prev: false,
            },
            items,
            stats: None,
        }
    }

    fn ticket_of(effect: &Effect<ActivityLogFilters>) -> Ticket {
        match effect {
            Effect::Fetch { ticket, .. } => *ticket,
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    fn count_fetches(effects: &[Effect<ActivityLogFilters>]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Fetch { .. }))
            .count()
    }

    #[test]
    fn every_change_fetches_once_and_unchanged_patch_does_not() {
        let mut c = Logs::default();
        let effect = c.apply(ActivityLogPatch::Severity(Some(Severity::High)));
        match effect {
            Some(Effect::Fetch { query, criteria, .. }) => {
                assert_eq!(criteria.severity, Some(Severity::High));
                assert!(query.starts_with("severity=high&"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(c.apply(ActivityLogPatch::Severity(Some(Severity::High))).is_none());
        assert!(c.page().is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut c = Logs::default();
        let first = ticket_of(&c.refresh());
        let second = ticket_of(&c.apply(ActivityLogPatch::Search("login".into())).unwrap());

        assert!(c.receive(second, Ok(page(vec![2], false))));
        assert!(!c.receive(first, Ok(page(vec![1], true))));
        assert_eq!(c.page().value().map(|p| p.items.clone()), Some(vec![2]));
        assert!(!c.has_next());
    }

    #[test]
    fn navigation_comes_from_backend_meta() {
        let mut c = Logs::default();
        let t = ticket_of(&c.refresh());
        assert!(!c.has_next());
        c.receive(t, Ok(page(vec![1, 2, 3], true)));
        assert!(c.has_next());
        assert!(!c.has_prev());
    }

    #[test]
    fn failure_is_terminal_with_backend_message() {
        let mut c = Logs::default();
        let t = ticket_of(&c.refresh());
        c.receive(t, Err(AppError::upstream("Database offline")));
        assert_eq!(c.page().error(), Some("Database offline"));
    }

    #[test]
    fn reset_restores_defaults_and_fetches() {
        let mut c = Logs::default();
        c.apply(ActivityLogPatch::Action("LOGIN".into()));
        c.apply(ActivityLogPatch::Page(3));
        let effect = c.reset();
        assert_eq!(c.criteria(), &ActivityLogFilters::default());
        assert!(matches!(effect, Effect::Fetch { .. }));
    }

    #[test]
    fn cancelled_clear_issues_nothing() {
        let mut c = Logs::default();
        let t = ticket_of(&c.refresh());
        c.receive(t, Ok(page(vec![1, 2], false)));

        c.open_clear_dialog();
        assert!(c.is_confirm_open());
        c.cancel_clear();
        assert!(!c.is_confirm_open());
        assert_eq!(c.confirm_clear(), None);
        assert_eq!(c.page().value().map(|p| p.items.len()), Some(2));
    }

    #[test]
    fn confirmed_clear_deletes_once_then_refetches_once() {
        let mut c = Logs::default();
        c.open_clear_dialog();
        assert_eq!(c.confirm_clear(), Some(Effect::ClearAll));
        assert_eq!(c.confirm_clear(), None);
        assert!(c.is_clearing());

        let effects = c.clear_finished(Ok(()));
        assert_eq!(
            effects[0],
            Effect::Notify(Notice::success(CLEAR_SUCCESS_MESSAGE))
        );
        assert_eq!(count_fetches(&effects), 1);
        assert!(!c.is_clearing());
    }

    #[test]
    fn failed_clear_keeps_data_and_reports() {
        let mut c = Logs::default();
        let t = ticket_of(&c.refresh());
        c.receive(t, Ok(page(vec![7], false)));
        c.open_clear_dialog();
        c.confirm_clear();

        let effects = c.clear_finished(Err(AppError::forbidden("Not allowed")));
        assert_eq!(effects, vec![Effect::Notify(Notice::error("Not allowed"))]);
        assert_eq!(c.page().value().map(|p| p.items.clone()), Some(vec![7]));

        c.open_clear_dialog();
        c.confirm_clear();
        let effects = c.clear_finished(Err(AppError::network("")));
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::error(GENERIC_ERROR_MESSAGE))]
        );
    }
}
