//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//!
//! The console composes the session reducer with page reducers that also
//! react to session actions (e.g. dropping loaded items on sign-out), so a
//! combined reducer is the root of every store that spans features.

use crate::effect::Effect;
use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence, and all effects are collected and
/// concatenated. This is useful when you want to split reducer logic across
/// multiple implementations.
///
/// # Examples
///
/// ```
/// use brewdesk_core::{Effect, Reducer, SmallVec, smallvec};
/// use brewdesk_core::composition::combine_reducers;
///
/// #[derive(Clone)]
/// struct AppState {
///     counter: i32,
///     logged: bool,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Increment,
///     Log,
/// }
///
/// struct CounterReducer;
/// struct LoggingReducer;
///
/// impl Reducer for CounterReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) -> SmallVec<[Effect<Self::Action>; 4]> {
///         if matches!(action, AppAction::Increment) {
///             state.counter += 1;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// impl Reducer for LoggingReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) -> SmallVec<[Effect<Self::Action>; 4]> {
///         if matches!(action, AppAction::Log) {
///             state.logged = true;
///         }
///         smallvec![Effect::None]
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(LoggingReducer)]);
///
/// let mut state = AppState { counter: 0, logged: false };
/// let _effects = combined.reduce(&mut state, AppAction::Increment, &());
/// assert_eq!(state.counter, 1);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> smallvec::SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = smallvec::SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects);
        }

        all_effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct State {
        a: u32,
        b: u32,
    }

    #[derive(Clone, Debug)]
    enum Action {
        Tick,
    }

    struct IncA;
    struct IncB;

    impl Reducer for IncA {
        type State = State;
        type Action = Action;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            _action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            state.a += 1;
            smallvec![Effect::None]
        }
    }

    impl Reducer for IncB {
        type State = State;
        type Action = Action;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            _action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            state.b += 1;
            smallvec![Effect::None]
        }
    }

    #[test]
    fn combined_reducer_runs_all_in_order() {
        let combined = combine_reducers(vec![
            Box::new(IncA) as Box<dyn Reducer<State = State, Action = Action, Environment = ()>>,
            Box::new(IncB),
        ]);

        let mut state = State::default();
        let effects = combined.reduce(&mut state, Action::Tick, &());

        assert_eq!(state.a, 1);
        assert_eq!(state.b, 1);
        assert_eq!(effects.len(), 2);
    }
}
