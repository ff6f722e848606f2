//! Centralized state store with effect-emitting reducers
//!
//! A reducer takes the state and an action and returns a [`DispatchResult`]:
//! whether the state changed (so the UI re-renders) and any effects the
//! runtime should carry out.
//!
//! ```ignore
//! fn reducer(state: &mut State, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::Refresh => {
//!             state.loading = true;
//!             DispatchResult::changed_with(Effect::FetchItems)
//!         }
//!         Action::Noop => DispatchResult::unchanged(),
//!     }
//! }
//!
//! let mut store = Store::new(State::default(), reducer);
//! let result = store.dispatch(Action::Refresh);
//! assert!(result.changed);
//! ```

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action
    pub changed: bool,
    /// Effects to be processed after dispatch
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect, no state change
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed, plus one effect
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// State changed, plus several effects
    #[inline]
    pub fn changed_with_many(effects: Vec<E>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    /// Add an effect to this result
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Fold another result into this one
    ///
    /// Used by composed reducers: the combined result is changed if either
    /// part changed, and carries both sets of effects in order.
    pub fn merge(mut self, other: DispatchResult<E>) -> Self {
        self.changed |= other.changed;
        self.effects.extend(other.effects);
        self
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function that can emit effects
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Holds the application state and routes every mutation through the reducer
pub struct Store<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> Store<S, A, E>
where
    A: Action,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state
    ///
    /// Use sparingly; prefer dispatching actions. Mainly for initialization.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Store that runs middleware hooks around each dispatch
pub struct StoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: Store<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> StoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    /// Dispatch through `before`, the reducer, then `after`
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, &result);
        result
    }
}

/// Hooks that observe every dispatched action
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer with its change flag and effect count
    fn after<E>(&mut self, action: &A, result: &DispatchResult<E>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after<E>(&mut self, _action: &A, _result: &DispatchResult<E>) {}
}

/// Logs every action through `tracing`: the payload summary at trace level,
/// the outcome at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMiddleware;

impl TracingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<A: Action> Middleware<A> for TracingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(action = %action.name(), payload = %action.summary(), "Dispatching action");
    }

    fn after<E>(&mut self, action: &A, result: &DispatchResult<E>) {
        tracing::debug!(
            action = %action.name(),
            state_changed = result.changed,
            effects = result.effects.len(),
            "Action processed"
        );
    }
}
