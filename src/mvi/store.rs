//! Reactive state container.
//!
//! A [`Store`] owns exactly one state value. Every update replaces that value
//! whole and broadcasts the new snapshot to all observers before the next
//! update is applied, so observers always see a strictly ordered sequence.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Weak};

use parking_lot::ReentrantMutex;
use tokio::sync::watch;

use super::reducer::Reducer;
use super::state::UiState;

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;
type Mutator<S> = Box<dyn FnOnce(S) -> S + Send>;

struct StoreCore<S> {
    state: S,
    observers: BTreeMap<u64, Observer<S>>,
    next_id: u64,
    /// True while a mutator or an observer round is running.
    delivering: bool,
    /// Updates issued from inside a round, applied once it completes.
    pending: VecDeque<Mutator<S>>,
}

struct StoreInner<S> {
    core: ReentrantMutex<RefCell<StoreCore<S>>>,
    latest: watch::Sender<S>,
}

impl<S> StoreInner<S> {
    fn remove_observer(&self, id: u64) {
        let guard = self.core.lock();
        guard.borrow_mut().observers.remove(&id);
    }
}

/// Single-owner holder of a screen's current state.
///
/// Cloning a `Store` yields another handle to the same state. All methods
/// are synchronous and safe to call from any thread: updates are serialised,
/// and an update arriving from another thread waits for the in-progress
/// notification round to finish.
#[derive(Clone)]
pub struct Store<S: UiState> {
    inner: Arc<StoreInner<S>>,
}

impl<S: UiState> Store<S> {
    /// Create a store holding `initial`.
    pub fn new(initial: S) -> Self {
        let (latest, _) = watch::channel(initial.clone());
        let core = StoreCore {
            state: initial,
            observers: BTreeMap::new(),
            next_id: 0,
            delivering: false,
            pending: VecDeque::new(),
        };
        Self {
            inner: Arc::new(StoreInner {
                core: ReentrantMutex::new(RefCell::new(core)),
                latest,
            }),
        }
    }

    /// Latest state snapshot.
    pub fn current_state(&self) -> S {
        let guard = self.inner.core.lock();
        let state = guard.borrow().state.clone();
        state
    }

    /// Register `observer`.
    ///
    /// The observer is called right away with the current state, then once
    /// per subsequent update, in order. Delivery stops when the returned
    /// [`Subscription`] is cancelled or dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let observer: Observer<S> = Arc::new(observer);
        let guard = self.inner.core.lock();
        let (id, current) = {
            let mut core = guard.borrow_mut();
            let id = core.next_id;
            core.next_id += 1;
            core.observers.insert(id, Arc::clone(&observer));
            (id, core.state.clone())
        };
        observer(&current);
        drop(guard);

        tracing::trace!(subscription = id, "observer registered");

        let inner: Weak<StoreInner<S>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner.remove_observer(id);
                }
            })),
        }
    }

    /// Replace the state with `mutator(current)` and notify every observer.
    ///
    /// When called from inside an observer (or from inside another
    /// mutator) the update is queued and applied after the current round,
    /// preserving chronological order.
    pub fn update<F>(&self, mutator: F)
    where
        F: FnOnce(S) -> S + Send + 'static,
    {
        let guard = self.inner.core.lock();
        {
            let mut core = guard.borrow_mut();
            if core.delivering {
                core.pending.push_back(Box::new(mutator));
                return;
            }
            core.delivering = true;
        }
        let _round = scopeguard::guard((), |_| {
            guard.borrow_mut().delivering = false;
        });

        let mut next: Mutator<S> = Box::new(mutator);
        loop {
            let current = guard.borrow().state.clone();
            let state = next(current);

            let observers: Vec<(u64, Observer<S>)> = {
                let mut core = guard.borrow_mut();
                core.state = state.clone();
                core.observers
                    .iter()
                    .map(|(id, observer)| (*id, Arc::clone(observer)))
                    .collect()
            };
            self.inner.latest.send_replace(state.clone());

            tracing::trace!(observers = observers.len(), "state updated");

            for (id, observer) in observers {
                // An observer earlier in this round may have cancelled it.
                let registered = guard.borrow().observers.contains_key(&id);
                if registered {
                    observer(&state);
                }
            }

            let queued = guard.borrow_mut().pending.pop_front();
            match queued {
                Some(mutator) => next = mutator,
                None => break,
            }
        }
    }

    /// Fold `event` into the state with reducer `R`.
    pub fn reduce<R>(&self, event: R::Event)
    where
        R: Reducer<State = S>,
    {
        self.update(move |state| R::reduce(state, event));
    }

    /// Latest-value stream of the state for async consumers.
    ///
    /// A slow reader may skip intermediate values but never observes
    /// them out of order.
    pub fn watch(&self) -> watch::Receiver<S> {
        self.inner.latest.subscribe()
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        let guard = self.inner.core.lock();
        let count = guard.borrow().observers.len();
        count
    }
}

impl<S: UiState> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Handle to a registered observer.
///
/// Dropping the handle unregisters the observer. Once [`cancel`](Self::cancel)
/// or the drop returns, the observer is never called again.
#[must_use = "dropping a Subscription unregisters the observer"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Unregister the observer.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Keep the observer registered for as long as the store lives.
    pub fn detach(mut self) {
        self.cancel = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
