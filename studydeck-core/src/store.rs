//! Centralized state store with reducer pattern

use std::fmt::Debug;
use std::marker::PhantomData;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions describe user intent: "toggle this destination", "set the sort
/// key", "dismiss that menu". They are the only way state changes.
pub trait Action: Clone + Debug + Send + 'static {
    /// Short name for logging and assertions.
    fn name(&self) -> &'static str;
}

/// A reducer handles one action against the state.
///
/// Returns `true` if the state changed and a re-render is needed.
pub type Reducer<S, A> = fn(&mut S, A) -> bool;

/// Holds the application state and funnels every mutation through
/// [`Store::dispatch`]. There is exactly one store per running app; views
/// never mutate state directly.
///
/// Every dispatch is traced with the action name and whether it changed
/// anything, which is usually all the action log you need.
pub struct Store<S, A: Action> {
    state: S,
    reducer: Reducer<S, A>,
    _marker: PhantomData<A>,
}

impl<S, A: Action> Store<S, A> {
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Run the reducer for one action.
    ///
    /// Returns `true` if the state changed and a re-render is needed.
    pub fn dispatch(&mut self, action: A) -> bool {
        let name = action.name();
        let changed = (self.reducer)(&mut self.state, action);
        tracing::debug!(action = name, changed, "dispatch");
        changed
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Escape hatch for initialization; prefer dispatching actions.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestState {
        counter: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Add(i32),
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Add(_) => "Add",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> bool {
        match action {
            TestAction::Add(n) => {
                state.counter += n;
                true
            }
            TestAction::NoOp => false,
        }
    }

    #[test]
    fn dispatch_mutates_through_reducer() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(store.dispatch(TestAction::Add(2)));
        assert!(store.dispatch(TestAction::Add(-1)));
        assert_eq!(store.state().counter, 1);
    }

    #[test]
    fn noop_reports_unchanged() {
        let mut store = Store::new(TestState::default(), test_reducer);

        assert!(!store.dispatch(TestAction::NoOp));
        assert_eq!(store.state().counter, 0);
    }
}
