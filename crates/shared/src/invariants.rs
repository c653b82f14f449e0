//! Compile-time proof of validated input.

/// Proof wrapper indicating a value has passed validation.
///
/// Only validation entry points construct this wrapper, so downstream code
/// that accepts a `Validated<T>` cannot be handed unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Wrap a validated value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Transform the inner value while keeping the proof.
    pub fn map<U>(self, op: impl FnOnce(T) -> U) -> Validated<U> {
        Validated(op(self.0))
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
