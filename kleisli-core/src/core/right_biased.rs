//! The success-biased combinator contract.
//!
//! A right-biased container has a success arm holding a value and a failure
//! arm. The combinators only ever look at the success arm: on the failure arm
//! they return the container unchanged, which is what makes a chain of
//! `bind` calls stop at the first failure.

/// Shared `bind`/`fmap`/`tee` over a container with a success arm.
pub trait RightBiased: Sized {
    /// The value held by the success arm.
    type Value;

    /// The same container holding a `U` on the success arm.
    type Rebind<U>;

    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool { !self.is_success() }

    /// Apply `f` to the success value. `f` returns an already wrapped value,
    /// which becomes the result as is.
    fn bind<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> Self::Rebind<U>;

    /// Apply `f` to the success value and wrap the raw result.
    fn fmap<U, F>(self, f: F) -> Self::Rebind<U>
    where
        F: FnOnce(Self::Value) -> U;

    /// Run `f` as a check on the success value. A successful check keeps the
    /// original value, a failed one replaces it with the failure.
    fn tee<U, F>(self, f: F) -> Self
    where
        F: FnOnce(&Self::Value) -> Self::Rebind<U>;
}

impl<T> RightBiased for Option<T> {
    type Value = T;
    type Rebind<U> = Option<U>;

    fn is_success(&self) -> bool { self.is_some() }

    fn bind<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    fn fmap<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        self.map(f)
    }

    fn tee<U, F>(self, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> Option<U>,
    {
        self.and_then(|value| f(&value).map(|_| value))
    }
}
