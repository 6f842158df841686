//! Observer: the consumer's bundle of callbacks.
//!
//! Each of the three slots defaults to a closure that does nothing, so the
//! subscriber can dispatch without checking whether a callback is present.
//! An unset error slot means errors are dropped silently: a consumer that
//! cares about failures must register `on_error`.

type ValueFn<T> = Box<dyn Fn(T) + Send + Sync>;
type ErrorFn<E> = Box<dyn Fn(E) + Send + Sync>;
type CompletionFn = Box<dyn Fn() + Send + Sync>;

/// Callbacks invoked by a subscription.
///
/// # Example
///
/// ```rust
/// use signalkit_core::reactive::{Observer, Signal, NoError};
///
/// let observer = Observer::<i32, NoError>::new()
///     .on_value(|v| println!("value: {v}"))
///     .on_completion(|| println!("done"));
///
/// Signal::single(1).start(observer);
/// ```
pub struct Observer<T, E> {
    on_value: ValueFn<T>,
    on_error: ErrorFn<E>,
    on_completion: CompletionFn,
}

impl<T: 'static, E: 'static> Observer<T, E> {
    /// An observer that ignores every event.
    pub fn new() -> Self {
        Self {
            on_value: Box::new(|_: T| {}),
            on_error: Box::new(|_: E| {}),
            on_completion: Box::new(|| {}),
        }
    }

    /// Set the value callback.
    pub fn on_value<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.on_value = Box::new(f);
        self
    }

    /// Set the error callback.
    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.on_error = Box::new(f);
        self
    }

    /// Set the completion callback.
    pub fn on_completion<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_completion = Box::new(f);
        self
    }
}

impl<T, E> Observer<T, E> {
    pub(crate) fn value(&self, value: T) {
        (self.on_value)(value);
    }

    pub(crate) fn error(&self, error: E) {
        (self.on_error)(error);
    }

    pub(crate) fn completion(&self) {
        (self.on_completion)();
    }
}

impl<T: 'static, E: 'static> Default for Observer<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for Observer<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer").finish_non_exhaustive()
    }
}
