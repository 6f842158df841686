//! Signal Implementation
//!
//! A Signal is a cold producer. It holds a generator function and does
//! nothing until started. Each call to [`Signal::start`] runs the generator
//! again with a fresh [`Subscriber`], so two consumers of the same signal
//! never share in-flight work.
//!
//! # How Start Works
//!
//! 1. A subscriber is built from the consumer's [`Observer`].
//!
//! 2. The generator runs. It may push events synchronously, hand work off
//!    to another thread, or both, and returns a [`Disposable`] for that work.
//!
//! 3. The disposable is assigned to the subscriber. If the generator already
//!    pushed a terminal event, the subscriber disposes it on the spot.
//!
//! 4. The consumer gets back a handle which, when disposed, silences the
//!    subscriber and then disposes the producer's work.
//!
//! # Failure
//!
//! Neither construction nor `start` can fail. Producer failures arrive as
//! error events, and are dropped if the observer registered no error
//! callback.

use std::fmt::Debug;
use std::sync::Arc;

use tracing::{debug, trace};

use super::disposable::{self, Disposable, SubscriberDisposable};
use super::observer::Observer;
use super::subscriber::Subscriber;

type Generator<T, E> = dyn Fn(Arc<Subscriber<T, E>>) -> Arc<dyn Disposable> + Send + Sync;

/// A cold, push-based producer of values of type `T` and errors of type `E`.
///
/// Use [`NoValue`](super::NoValue) or [`NoError`](super::NoError) for a
/// channel that can never carry anything.
///
/// # Example
///
/// ```rust
/// use signalkit_core::reactive::{disposable, Disposable, Observer, Signal};
///
/// let signal = Signal::<i32, String>::new(|subscriber| {
///     subscriber.put_value(1);
///     subscriber.put_value(2);
///     subscriber.put_completion();
///     disposable::empty()
/// });
///
/// let handle = signal.start(Observer::new().on_value(|v| println!("{v}")));
/// handle.dispose();
/// ```
pub struct Signal<T, E> {
    generator: Arc<Generator<T, E>>,
}

impl<T: 'static, E: 'static> Signal<T, E> {
    /// Create a signal from a generator.
    ///
    /// The generator runs once per `start`. It must return a disposable
    /// for whatever work it leaves running; return [`disposable::empty`]
    /// if there is none.
    pub fn new<F>(generator: F) -> Self
    where
        F: Fn(Arc<Subscriber<T, E>>) -> Arc<dyn Disposable> + Send + Sync + 'static,
    {
        Self {
            generator: Arc::new(generator),
        }
    }

    /// Run the producer, delivering events to `observer`.
    ///
    /// The returned handle cancels the subscription: once its `dispose`
    /// returns no callback of `observer` runs again, and neither the error
    /// nor the completion callback is invoked on account of cancelling.
    /// Dropping the handle without disposing it leaves the subscription
    /// running.
    pub fn start(&self, observer: Observer<T, E>) -> Arc<dyn Disposable> {
        let subscriber = Arc::new(Subscriber::new(observer));
        trace!(subscriber = ?subscriber.id(), "signal started");

        let disposable = (self.generator)(Arc::clone(&subscriber));
        // Assign only after the generator returned. A terminal event pushed
        // during the generator makes this dispose `disposable` right away.
        subscriber.assign_disposable(Arc::clone(&disposable));

        Arc::new(SubscriberDisposable::new(subscriber, disposable))
    }

    /// A signal that completes immediately without a value.
    pub fn complete() -> Self {
        Self::new(|subscriber| {
            subscriber.put_completion();
            disposable::empty()
        })
    }

    /// A signal that never emits and never terminates on its own.
    pub fn never() -> Self {
        Self::new(|_| disposable::empty())
    }
}

impl<T, E> Signal<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: 'static,
{
    /// A signal that emits `value` once, then completes.
    pub fn single(value: T) -> Self {
        Self::new(move |subscriber| {
            subscriber.put_value(value.clone());
            subscriber.put_completion();
            disposable::empty()
        })
    }
}

impl<T, E> Signal<T, E>
where
    T: 'static,
    E: Clone + Send + Sync + 'static,
{
    /// A signal that fails immediately with `error`.
    pub fn fail(error: E) -> Self {
        Self::new(move |subscriber| {
            subscriber.put_error(error.clone());
            disposable::empty()
        })
    }
}

impl<T, E> Signal<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// `Ok(v)` behaves like [`Signal::single`], `Err(e)` like [`Signal::fail`].
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::single(value),
            Err(error) => Self::fail(error),
        }
    }
}

impl<T, E> Signal<T, E>
where
    T: Debug + 'static,
    E: Debug + 'static,
{
    /// Log every event under `tag` before passing it on unchanged.
    ///
    /// Events are emitted through `tracing` at `DEBUG` level with target
    /// `signalkit::debug`. Ordering, termination and disposal are exactly
    /// those of the wrapped signal.
    pub fn debug(&self, tag: impl Into<String>) -> Self {
        let source = self.clone();
        let tag: Arc<str> = Arc::from(tag.into());

        Self::new(move |subscriber| {
            let id = subscriber.id();
            let (value_tag, error_tag, completion_tag) =
                (Arc::clone(&tag), Arc::clone(&tag), Arc::clone(&tag));
            let (on_value, on_error, on_completion) =
                (Arc::clone(&subscriber), Arc::clone(&subscriber), subscriber);

            source.start(
                Observer::new()
                    .on_value(move |value| {
                        debug!(target: "signalkit::debug", tag = %value_tag, subscriber = ?id, ?value, "next event");
                        on_value.put_value(value);
                    })
                    .on_error(move |error| {
                        debug!(target: "signalkit::debug", tag = %error_tag, subscriber = ?id, ?error, "error event");
                        on_error.put_error(error);
                    })
                    .on_completion(move || {
                        debug!(target: "signalkit::debug", tag = %completion_tag, subscriber = ?id, "completed event");
                        on_completion.put_completion();
                    }),
            )
        })
    }
}

impl<T, E> Clone for Signal<T, E> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<T, E> Debug for Signal<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal").finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
