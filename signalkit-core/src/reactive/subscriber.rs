//! Subscriber: the per-subscription event gate.
//!
//! A Subscriber sits between a producer and the consumer's [`Observer`].
//! Producers push events into it from any thread; it forwards them to the
//! observer until the subscription reaches its terminal state.
//!
//! # State Machine
//!
//! ```text
//!   Active ──put_error / put_completion──────────────▶ Terminated
//!          ──mark_terminated_without_disposal───────▶ (no callback)
//! ```
//!
//! The first terminal transition wins. It drops the observer and hands the
//! producer's disposable off for release, so both happen exactly once.
//!
//! # Locking
//!
//! All state lives behind one re-entrant lock, which is held while a
//! callback runs. Events for one subscriber are therefore serialized, and a
//! cancellation that returns has waited out any callback that was already
//! in flight. The lock is re-entrant so a callback may cancel its own
//! subscription or push further events into it from the same thread.
//! Disposables are released after the lock is dropped.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tracing::trace;

use super::disposable::Disposable;
use super::observer::Observer;
use crate::error::TerminatedError;

/// Unique identifier for a subscriber.
///
/// Every `Signal::start` creates a subscriber with a fresh ID. The ID is
/// the correlation key in trace and debug logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl SubscriberId {
    /// Generate a new unique subscriber ID.
    ///
    /// Uses an atomic counter to ensure uniqueness across threads.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

struct State<T, E> {
    terminated: bool,
    /// `None` once terminated.
    observer: Option<Arc<Observer<T, E>>>,
    /// The producer's in-flight work, once the generator has returned.
    disposable: Option<Arc<dyn Disposable>>,
}

/// What a terminal transition hands back to its caller.
struct Terminal<T, E> {
    observer: Arc<Observer<T, E>>,
    disposable: Option<Arc<dyn Disposable>>,
}

/// Receives events from a producer and forwards them to an [`Observer`].
pub struct Subscriber<T, E> {
    id: SubscriberId,
    state: ReentrantMutex<RefCell<State<T, E>>>,
}

impl<T, E> Subscriber<T, E> {
    /// Create an active subscriber that delivers to `observer`.
    pub fn new(observer: Observer<T, E>) -> Self {
        Self {
            id: SubscriberId::new(),
            state: ReentrantMutex::new(RefCell::new(State {
                terminated: false,
                observer: Some(Arc::new(observer)),
                disposable: None,
            })),
        }
    }

    /// Get the subscriber's unique ID.
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Whether a terminal transition has happened.
    pub fn is_terminated(&self) -> bool {
        self.state.lock().borrow().terminated
    }

    /// Deliver a value unless the subscriber has terminated.
    pub fn put_value(&self, value: T) {
        let _ = self.try_put_value(value);
    }

    /// Deliver an error and terminate, unless already terminated.
    ///
    /// With no error callback registered the error is dropped silently.
    pub fn put_error(&self, error: E) {
        let _ = self.try_put_error(error);
    }

    /// Signal completion and terminate, unless already terminated.
    pub fn put_completion(&self) {
        let _ = self.try_put_completion();
    }

    /// Deliver a value, or hand it back if the subscriber has terminated.
    pub fn try_put_value(&self, value: T) -> Result<(), TerminatedError<T>> {
        let guard = self.state.lock();
        let observer = guard.borrow().observer.clone();
        match observer {
            Some(observer) => {
                observer.value(value);
                Ok(())
            }
            None => Err(TerminatedError(value)),
        }
    }

    /// Deliver an error and terminate, or hand the error back if the
    /// subscriber has already terminated.
    pub fn try_put_error(&self, error: E) -> Result<(), TerminatedError<E>> {
        let disposable = {
            let guard = self.state.lock();
            let Some(terminal) = Self::terminate(&guard) else {
                return Err(TerminatedError(error));
            };
            trace!(subscriber = ?self.id, "terminated with error");
            terminal.observer.error(error);
            terminal.disposable
        };
        if let Some(disposable) = disposable {
            disposable.dispose();
        }
        Ok(())
    }

    /// Signal completion and terminate, or fail if the subscriber has
    /// already terminated.
    pub fn try_put_completion(&self) -> Result<(), TerminatedError<()>> {
        let disposable = {
            let guard = self.state.lock();
            let Some(terminal) = Self::terminate(&guard) else {
                return Err(TerminatedError(()));
            };
            trace!(subscriber = ?self.id, "terminated with completion");
            terminal.observer.completion();
            terminal.disposable
        };
        if let Some(disposable) = disposable {
            disposable.dispose();
        }
        Ok(())
    }

    /// Terminate without running any callback.
    ///
    /// This is the consumer giving up, not the producer finishing: the
    /// stored disposable is released from the subscriber but not disposed,
    /// since the cancellation handle disposes it right after.
    pub fn mark_terminated_without_disposal(&self) {
        let detached = {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            if state.terminated {
                return;
            }
            state.terminated = true;
            trace!(subscriber = ?self.id, "terminated without disposal");
            (state.observer.take(), state.disposable.take())
        };
        // Captured callback state is dropped outside the lock.
        drop(detached);
    }

    /// Record the producer's disposable.
    ///
    /// On a terminated subscriber the disposable is disposed at once: a
    /// producer that finished synchronously inside its generator must
    /// still have its resource released. Assigning over an earlier
    /// disposable disposes the earlier one.
    pub fn assign_disposable(&self, disposable: Arc<dyn Disposable>) {
        let rejected = {
            let guard = self.state.lock();
            let mut state = guard.borrow_mut();
            if state.terminated {
                trace!(subscriber = ?self.id, "disposable assigned after termination");
                Some(disposable)
            } else {
                state.disposable.replace(disposable)
            }
        };
        if let Some(disposable) = rejected {
            disposable.dispose();
        }
    }

    /// Flip to terminated. Returns `None` if some other transition won.
    fn terminate(state: &RefCell<State<T, E>>) -> Option<Terminal<T, E>> {
        let mut state = state.borrow_mut();
        if state.terminated {
            return None;
        }
        state.terminated = true;
        let observer = state.observer.take()?;
        Some(Terminal {
            observer,
            disposable: state.disposable.take(),
        })
    }
}

impl<T, E> std::fmt::Debug for Subscriber<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("terminated", &self.is_terminated())
            .finish()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
