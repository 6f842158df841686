//! Futures as signals.
//!
//! [`Signal::spawn_on`] runs a future on a tokio runtime once per
//! subscription. Cancelling the subscription aborts the task.

use std::future::Future;

use tokio::runtime::Handle;
use tracing::trace;

use super::disposable::ActionDisposable;
use super::signal::Signal;

impl<T, E> Signal<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// A signal that spawns `task()` on `handle` each time it is started.
    ///
    /// `Ok(v)` is delivered as a value followed by completion, `Err(e)` as
    /// an error. The runtime handle is passed explicitly so that `start`
    /// does not depend on being called from inside a runtime.
    pub fn spawn_on<F, Fut>(handle: Handle, task: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::new(move |subscriber| {
            let future = task();
            let id = subscriber.id();
            let join = handle.spawn(async move {
                match future.await {
                    Ok(value) => {
                        subscriber.put_value(value);
                        subscriber.put_completion();
                    }
                    Err(error) => subscriber.put_error(error),
                }
            });

            ActionDisposable::shared(move || {
                trace!(subscriber = ?id, "aborting spawned task");
                join.abort();
            })
        })
    }
}
