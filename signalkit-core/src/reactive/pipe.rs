//! Left-to-right function application.
//!
//! `value.pipe(f)` is `f(value)`; chains read in the order they run:
//!
//! ```rust
//! use signalkit_core::reactive::{NoError, Pipe, Signal};
//!
//! let signal = Signal::<i32, NoError>::single(1)
//!     .pipe(|s| s.debug("first"))
//!     .pipe(|s| s.debug("second"));
//! # let _ = signal;
//! ```

/// Blanket extension providing [`pipe`](Pipe::pipe) on every sized type.
pub trait Pipe: Sized {
    /// Apply `f` to `self`.
    fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Returns its argument.
pub fn identity<A>(a: A) -> A {
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_applies_left_to_right() {
        let result = 3.pipe(|x| x + 1).pipe(|x| x * 10);
        assert_eq!(result, 40);
    }

    #[test]
    fn pipe_identity_is_a_no_op() {
        assert_eq!("same".pipe(identity), "same");
    }
}
