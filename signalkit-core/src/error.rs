//! Error types.
//!
//! Starting a signal never fails, and producer failures travel as error
//! events. The only error surfaced by the API itself is a rejected delivery:
//! a producer pushed an event into a subscriber that had already terminated.

use thiserror::Error;

/// An event was pushed into a subscriber that had already terminated.
///
/// Carries the rejected payload back to the producer, the same way a
/// channel's `SendError` hands back the message that could not be sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("subscriber already terminated")]
pub struct TerminatedError<P>(pub P);

impl<P> TerminatedError<P> {
    /// Recover the payload that was not delivered.
    pub fn into_inner(self) -> P {
        self.0
    }
}
