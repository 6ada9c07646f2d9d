//! View-side drivers for the pure state machines in `shared_types`.

use dioxus::prelude::*;
use shared_types::{AppError, Criteria, Effect, ListController, LoadState, NoticeKind, Paginated};
use shared_ui::{use_toast, ToastOptions, Toasts};
use std::future::Future;
use std::marker::PhantomData;

/// Load one value when the view mounts.
///
/// Failures are logged and kept as `LoadState::Failed` with a displayable
/// message; nothing is retried.
pub fn use_load<T, F, Fut>(fetch: F) -> Signal<LoadState<T>>
where
    T: 'static,
    F: Fn() -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let mut state = use_signal(|| LoadState::Idle);
    use_effect(move || {
        state.write().start();
        spawn(async move {
            let result = fetch().await.map_err(|e| AppError::recover(&e));
            if let Err(e) = &result {
                tracing::error!(error = %e, "Load failed");
            }
            state.write().resolve(result.map_err(|e| e.user_message()));
        });
    });
    state
}

/// A paginated backend list the controller can drive.
pub trait ListSource: 'static {
    type Criteria: Criteria + 'static;
    type Item: Clone + 'static;
    type Stats: Clone + 'static;

    fn fetch(
        criteria: Self::Criteria,
    ) -> impl Future<Output = Result<Paginated<Self::Item, Self::Stats>, ServerFnError>>;

    /// Delete every record. Lists without a clear action keep the default.
    fn clear_all() -> impl Future<Output = Result<(), ServerFnError>> {
        async { Err(ServerFnError::new("Clearing is not supported for this list")) }
    }
}

type Controller<L> = ListController<
    <L as ListSource>::Criteria,
    <L as ListSource>::Item,
    <L as ListSource>::Stats,
>;

/// Handle to a mounted list controller.
pub struct ListHandle<L: ListSource> {
    pub state: Signal<Controller<L>>,
    toasts: Toasts,
    _source: PhantomData<fn() -> L>,
}

impl<L: ListSource> Clone for ListHandle<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ListSource> Copy for ListHandle<L> {}

impl<L: ListSource> ListHandle<L> {
    pub fn apply(&self, patch: <L::Criteria as Criteria>::Patch) {
        let mut state = self.state;
        let effect = state.write().apply(patch);
        self.run(effect.into_iter().collect());
    }

    pub fn reset(&self) {
        let mut state = self.state;
        let effect = state.write().reset();
        self.run(vec![effect]);
    }

    pub fn refresh(&self) {
        let mut state = self.state;
        let effect = state.write().refresh();
        self.run(vec![effect]);
    }

    pub fn open_clear_dialog(&self) {
        let mut state = self.state;
        state.write().open_clear_dialog();
    }

    pub fn cancel_clear(&self) {
        let mut state = self.state;
        state.write().cancel_clear();
    }

    pub fn confirm_clear(&self) {
        let mut state = self.state;
        let effect = state.write().confirm_clear();
        self.run(effect.into_iter().collect());
    }

    fn run(&self, effects: Vec<Effect<L::Criteria>>) {
        let handle = *self;
        let mut state = self.state;
        for effect in effects {
            match effect {
                Effect::Fetch {
                    ticket, criteria, ..
                } => {
                    spawn(async move {
                        let result = L::fetch(criteria).await.map_err(|e| AppError::recover(&e));
                        if let Err(e) = &result {
                            tracing::error!(error = %e, "List fetch failed");
                        }
                        if !state.write().receive(ticket, result) {
                            tracing::debug!(ticket = ticket.0, "Discarded stale list response");
                        }
                    });
                }
                Effect::ClearAll => {
                    spawn(async move {
                        let result = L::clear_all().await.map_err(|e| AppError::recover(&e));
                        if let Err(e) = &result {
                            tracing::error!(error = %e, "Clear all failed");
                        }
                        let follow_up = state.write().clear_finished(result);
                        handle.run(follow_up);
                    });
                }
                Effect::Notify(notice) => match notice.kind {
                    NoticeKind::Success => self.toasts.success(notice.message, ToastOptions::new()),
                    NoticeKind::Error => self.toasts.error(notice.message, ToastOptions::new()),
                },
            }
        }
    }
}

/// Mount a list controller and fetch its first page.
pub fn use_list_controller<L: ListSource>() -> ListHandle<L> {
    let state = use_signal(|| ListController::new(L::Criteria::default()));
    let toasts = use_toast();
    let handle = ListHandle::<L> {
        state,
        toasts,
        _source: PhantomData,
    };
    // First fetch after mount; effects never run during SSR
    use_effect(move || handle.refresh());
    handle
}
