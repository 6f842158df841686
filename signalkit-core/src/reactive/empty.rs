//! Uninhabited channel types.
//!
//! `Signal<NoValue, E>` can only terminate; `Signal<T, NoError>` can never
//! fail. Neither type has a value, so the compiler rules out the impossible
//! event and `absurd` discharges it in a `match`.

use std::fmt;

/// Value type of a signal that never emits a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoValue {}

impl NoValue {
    /// Convert an impossible value into any type.
    pub fn absurd<A>(self) -> A {
        match self {}
    }
}

/// Error type of a signal that never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoError {}

impl NoError {
    /// Convert an impossible error into any type.
    pub fn absurd<A>(self) -> A {
        match self {}
    }
}

impl fmt::Display for NoError {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for NoError {}
