//! # Brewdesk Core
//!
//! Core traits and types for the brewdesk client architecture.
//!
//! This crate provides the fundamental abstractions behind every feature of
//! the admin console: the session state machine and each management page are
//! built as reducers over owned state, with all I/O expressed as effect
//! values executed by the store runtime.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (session, a page's item list)
//! - **Action**: All possible inputs to a reducer (user intents, API results)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment (no module-level singletons)
//!
//! ## Example
//!
//! ```ignore
//! use brewdesk_core::*;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CatalogState {
//!     items: Vec<CoffeeItem>,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CatalogAction {
//!     Load,
//!     Loaded(Vec<CoffeeItem>),
//! }
//!
//! impl Reducer for CatalogReducer {
//!     type State = CatalogState;
//!     type Action = CatalogAction;
//!     type Environment = CatalogEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CatalogState,
//!         action: CatalogAction,
//!         env: &CatalogEnvironment,
//!     ) -> SmallVec<[Effect<CatalogAction>; 4]> {
//!         // Feature logic goes here
//!         smallvec![]
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};

pub use effect::Effect;
pub use reducer::Reducer;

/// Reducer composition utilities
pub mod composition;

/// Reducer module - The core trait for feature logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all feature logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for feature logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for SessionReducer {
    ///     type State = SessionState;
    ///     type Action = SessionAction;
    ///     type Environment = SessionEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut SessionState,
    ///         action: SessionAction,
    ///         env: &SessionEnvironment,
    ///     ) -> SmallVec<[Effect<SessionAction>; 4]> {
    ///         match action {
    ///             SessionAction::SignOut => {
    ///                 // transition state, describe I/O as effects
    ///                 smallvec![Effect::None]
    ///             }
    ///             _ => smallvec![Effect::None],
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most actions produce zero
        /// or one effect; the inline capacity of four avoids heap allocation
        /// for every common case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
///
/// There is deliberately no cancellation variant: within one page
/// controller a later-triggered fetch is not guaranteed to resolve after an
/// earlier one, and rapid repeated triggers race with last-response-wins
/// semantics.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Wrap an async computation as an effect
        ///
        /// Convenience for the most common effect shape: an async block that
        /// resolves to the next action (or `None` to stop the feedback loop).
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. Feature crates define their own provider
/// traits (auth gateway, credential store, resource clients); only the
/// dependencies shared by every feature live here.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use brewdesk_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// assert!(now.timestamp() > 0);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Fixed clock for deterministic tests
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock {
        /// The instant this clock always reports
        pub time: DateTime<Utc>,
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::reducer::Reducer;
    use smallvec::{SmallVec, smallvec};

    #[derive(Clone, Debug, Default)]
    struct TestState {
        seen: Vec<&'static str>,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Record(&'static str),
        Noop,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Record(tag) => {
                    state.seen.push(tag);
                    smallvec![Effect::None]
                },
                TestAction::Noop => smallvec![],
            }
        }
    }

    #[test]
    fn reducer_mutates_state_in_place() {
        let mut state = TestState::default();
        let effects = TestReducer.reduce(&mut state, TestAction::Record("a"), &());
        assert_eq!(state.seen, vec!["a"]);
        assert!(matches!(effects.as_slice(), [Effect::None]));
    }

    #[test]
    fn effect_future_helper_boxes_the_future() {
        let effect: Effect<TestAction> = Effect::future(async { Some(TestAction::Noop) });
        assert!(matches!(effect, Effect::Future(_)));
    }

    #[test]
    fn effect_debug_formatting() {
        let effect: Effect<TestAction> = Effect::merge(vec![Effect::None]);
        assert_eq!(format!("{effect:?}"), "Effect::Parallel([Effect::None])");
    }
}
