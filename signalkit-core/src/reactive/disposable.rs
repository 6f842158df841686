//! Disposables
//!
//! A Disposable is a handle to work in progress that can be torn down.
//! Every implementation must be idempotent: `dispose` may be called any
//! number of times, from any number of threads, and releases the underlying
//! resource at most once.
//!
//! # Kinds
//!
//! - [`EmptyDisposable`]: nothing to release. Producers that finish their
//!   work synchronously return this.
//! - [`ActionDisposable`]: runs a release closure once, on the first call.
//! - `SubscriberDisposable`: the handle handed out by `Signal::start`. It
//!   silences the subscriber first and only then releases the producer's
//!   resource, so no callback fires once cancellation has returned.
//!
//! Dropping a disposable does not dispose it. Cancellation is always an
//! explicit call.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use super::subscriber::Subscriber;

/// A cancellable resource.
///
/// Implementations must tolerate repeated and concurrent calls to
/// [`dispose`](Disposable::dispose); only the first one may release.
pub trait Disposable: Send + Sync {
    /// Release the resource, or do nothing if it was already released.
    fn dispose(&self);
}

/// A disposable with nothing to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDisposable;

impl Disposable for EmptyDisposable {
    fn dispose(&self) {}
}

/// Shared no-op disposable.
pub fn empty() -> Arc<dyn Disposable> {
    Arc::new(EmptyDisposable)
}

type Action = Box<dyn FnOnce() + Send>;

/// A disposable that runs a closure the first time it is disposed.
///
/// # Example
///
/// ```rust
/// use signalkit_core::reactive::{ActionDisposable, Disposable};
///
/// let disposable = ActionDisposable::new(|| println!("released"));
/// disposable.dispose(); // prints once
/// disposable.dispose(); // no-op
/// assert!(disposable.is_disposed());
/// ```
pub struct ActionDisposable {
    action: Mutex<Option<Action>>,
}

impl ActionDisposable {
    /// Create a disposable that runs `action` on first disposal.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            action: Mutex::new(Some(Box::new(action))),
        }
    }

    /// Same as [`ActionDisposable::new`], already wrapped for returning from
    /// a generator.
    pub fn shared<F>(action: F) -> Arc<dyn Disposable>
    where
        F: FnOnce() + Send + 'static,
    {
        Arc::new(Self::new(action))
    }

    /// Whether the release action has been taken.
    pub fn is_disposed(&self) -> bool {
        self.action.lock().is_none()
    }
}

impl Disposable for ActionDisposable {
    fn dispose(&self) {
        // Take under the lock, run outside it: the action may dispose
        // other resources or block on a producer thread.
        let action = self.action.lock().take();
        if let Some(action) = action {
            action();
        }
    }
}

impl std::fmt::Debug for ActionDisposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionDisposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Cancellation handle returned from `Signal::start`.
///
/// Disposing it first marks the subscriber terminated without running any
/// callback, then disposes the producer's resource.
pub(crate) struct SubscriberDisposable<T, E> {
    subscriber: Arc<Subscriber<T, E>>,
    disposable: Arc<dyn Disposable>,
    disposed: AtomicBool,
}

impl<T, E> SubscriberDisposable<T, E> {
    pub(crate) fn new(subscriber: Arc<Subscriber<T, E>>, disposable: Arc<dyn Disposable>) -> Self {
        Self {
            subscriber,
            disposable,
            disposed: AtomicBool::new(false),
        }
    }
}

impl<T, E> Disposable for SubscriberDisposable<T, E> {
    fn dispose(&self) {
        // Every caller goes through the subscriber's lock, so no caller
        // returns while a callback is still running on another thread.
        self.subscriber.mark_terminated_without_disposal();

        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        trace!(subscriber = ?self.subscriber.id(), "subscription cancelled");
        self.disposable.dispose();
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
