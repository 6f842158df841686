//! Reactive Primitives
//!
//! This module implements the signal core: cold producers, the subscribers
//! that gate their events, and the disposables that cancel them.
//!
//! # Concepts
//!
//! ## Signals
//!
//! A [`Signal`] describes work that may emit values, then at most one
//! terminal event: an error or a completion. Nothing runs until the signal
//! is started, and every start runs the work again from scratch.
//!
//! ## Subscribers
//!
//! A [`Subscriber`] is created per start. Producers push events into it;
//! it forwards them to the consumer's [`Observer`] until the first
//! terminal event or until the consumer cancels, and drops everything
//! after that.
//!
//! ## Disposables
//!
//! A [`Disposable`] tears down work in progress. Disposing is idempotent
//! and safe from any thread. `start` returns one that cancels the whole
//! subscription.
//!
//! # Implementation Notes
//!
//! Each subscriber serializes its events through a single re-entrant lock.
//! Delivery, termination and cancellation never interleave for one
//! subscriber, so an event can never follow a terminal event or a
//! completed cancellation.

pub mod disposable;
mod empty;
mod observer;
mod pipe;
mod signal;
mod subscriber;
#[cfg(feature = "tokio")]
mod task;

pub use disposable::{ActionDisposable, Disposable, EmptyDisposable};
pub use empty::{NoError, NoValue};
pub use observer::Observer;
pub use pipe::{identity, Pipe};
pub use signal::Signal;
pub use subscriber::{Subscriber, SubscriberId};
