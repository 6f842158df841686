//! SignalKit Core
//!
//! This crate provides cold, push-based signals with explicit, idempotent
//! cancellation. It implements:
//!
//! - Signals: producers that run once per subscription
//! - Subscribers: per-subscription gates that allow at most one terminal
//!   event and nothing after it
//! - Disposables: cancellation handles that release a resource exactly once
//!
//! The core has no scheduler of its own. Producers may emit synchronously
//! from inside `start` or from any other thread; with the `tokio` feature
//! a future can be turned into a signal directly.
//!
//! # Architecture
//!
//! - `reactive`: signals, subscribers, observers and disposables
//! - `error`: the rejected-delivery error returned by `try_put_*`
//!
//! # Example
//!
//! ```rust
//! use signalkit_core::reactive::{Disposable, NoError, Observer, Signal};
//!
//! // Create a signal
//! let greeting = Signal::<&str, NoError>::single("hello");
//!
//! // Start it
//! let handle = greeting.start(
//!     Observer::new()
//!         .on_value(|v| println!("got {v}"))
//!         .on_completion(|| println!("done")),
//! );
//!
//! // Cancel (no-op here, the signal already completed)
//! handle.dispose();
//! ```

pub mod error;
pub mod reactive;

pub use error::TerminatedError;
