use serde::{Deserialize, Serialize};

/// Per-view fetch state.
///
/// Starting a fetch moves any state back to `Loading` and drops the previous
/// value; only `Loading` resolves to `Loaded` or `Failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn start(&mut self) {
        *self = LoadState::Loading;
    }

    /// Resolve an outstanding fetch. Ignored unless the state is `Loading`.
    pub fn resolve<E: ToString>(&mut self, result: Result<T, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(v) => LoadState::Loaded(v),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }
}

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(pub u64);

/// Hands out increasing [`Ticket`]s; only the most recent one is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_resolves_once() {
        let mut state: LoadState<u32> = LoadState::Idle;
        assert!(!state.resolve::<String>(Ok(1)));
        assert_eq!(state, LoadState::Idle);

        state.start();
        assert!(state.resolve::<String>(Ok(7)));
        assert_eq!(state.value(), Some(&7));
        assert!(!state.resolve(Err("late")));
        assert_eq!(state.value(), Some(&7));
    }

    #[test]
    fn new_fetch_drops_previous_value() {
        let mut state = LoadState::Loaded(vec![1, 2]);
        state.start();
        assert!(state.is_loading());
        assert!(state.value().is_none());
        state.resolve(Err("boom"));
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
