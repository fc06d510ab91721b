//! The right-biased `Either` type.
//!
//! `Right` carries the result of a computation that succeeded and `Left` the
//! reason it did not. Combinators act on `Right` and hand a `Left` back
//! untouched, so a chain stops doing work at the first failure.

use std::{
    any::{type_name, Any},
    fmt,
};

use kleisli_macros::Equalizer;

use crate::{
    core::{nullable::Nullable, right_biased::RightBiased},
    support::error::{TraverseError, TraverseResult},
};

#[derive(Debug, Clone, Copy, Equalizer)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub fn is_right(&self) -> bool { matches!(self, Either::Right(_)) }

    pub fn is_left(&self) -> bool { matches!(self, Either::Left(_)) }

    pub fn is_success(&self) -> bool { self.is_right() }

    pub fn is_failure(&self) -> bool { self.is_left() }

    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            _ => None,
        }
    }

    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Right(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Eliminate the `Either` by applying exactly one of the two functions.
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    pub fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Either::Right(r) => f(r),
            Either::Left(l) => Either::Left(l),
        }
    }

    pub fn fmap<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Either::Right(r) => Either::Right(f(r)),
            Either::Left(l) => Either::Left(l),
        }
    }

    /// Check the right value with `f`, keeping it if the check passes.
    pub fn tee<U, F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce(&R) -> Either<L, U>,
    {
        match self {
            Either::Right(r) => match f(&r) {
                Either::Right(_) => Either::Right(r),
                Either::Left(l) => Either::Left(l),
            },
            Either::Left(l) => Either::Left(l),
        }
    }

    /// The right value, or `default` on a `Left`.
    ///
    /// This is the `unwrap_or` of `Either`: the fallback has the right type,
    /// so a `Right` simply yields its own value. Use [`Either::either`] to
    /// produce a value of some other type from either arm.
    pub fn or(self, default: R) -> R {
        match self {
            Either::Right(r) => r,
            Either::Left(_) => default,
        }
    }

    /// The right value, or `f` applied to the left value.
    pub fn or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Right(r) => r,
            Either::Left(l) => f(l),
        }
    }

    /// Recover from a `Left` by mapping it into a `Right`. A `Right` is
    /// returned as is.
    pub fn or_fmap<F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Either::Right(r) => Either::Right(r),
            Either::Left(l) => Either::Right(f(l)),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Right(r) => Ok(r),
            Either::Left(l) => Err(l),
        }
    }

    /// Convert into an `Option`, dropping the left value.
    ///
    /// A `Right` holding a null value (see [`Nullable`]) becomes `None`, and a
    /// warning is logged since the caller most likely meant a `Left`.
    pub fn to_maybe(self) -> Option<R>
    where
        R: Nullable,
    {
        match self {
            Either::Right(r) if r.is_null() => {
                log::warn!("`Right` holds a null value, converting it into `None`");
                None
            }
            Either::Right(r) => Some(r),
            Either::Left(_) => None,
        }
    }

    /// Turn a collection of `Either` into an `Either` of a collection.
    ///
    /// The right values are mapped through `f` and collected in order. The
    /// first `Left` stops the traversal and is returned; elements after it are
    /// never looked at and `f` is not called for them.
    pub fn traverse<I, U, F>(items: I, mut f: F) -> Either<L, Vec<U>>
    where
        I: IntoIterator<Item = Either<L, R>>,
        F: FnMut(R) -> U,
    {
        let items = items.into_iter();
        let mut values = Vec::with_capacity(items.size_hint().0);
        for (index, item) in items.enumerate() {
            match item {
                Either::Right(r) => values.push(f(r)),
                Either::Left(l) => {
                    log::trace!("traverse stopped at element {}", index);
                    return Either::Left(l);
                }
            }
        }
        Either::Right(values)
    }

    /// [`Either::traverse`] without a transform.
    pub fn sequence<I>(items: I) -> Either<L, Vec<R>>
    where
        I: IntoIterator<Item = Either<L, R>>,
    {
        Self::traverse(items, |r| r)
    }

    /// [`Either::traverse`] over type-erased elements.
    ///
    /// Every element is checked to be an `Either<L, R>` when it is reached,
    /// and the first one that is not aborts the traversal.
    pub fn try_traverse<I, U, F>(items: I, mut f: F) -> TraverseResult<Either<L, Vec<U>>>
    where
        L: 'static,
        R: 'static,
        I: IntoIterator<Item = Box<dyn Any>>,
        F: FnMut(R) -> U,
    {
        let mut values = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            let item = item
                .downcast::<Either<L, R>>()
                .map_err(|_| TraverseError::TypeMismatch {
                    index,
                    expected: type_name::<Either<L, R>>(),
                })?;
            match *item {
                Either::Right(r) => values.push(f(r)),
                Either::Left(l) => {
                    log::trace!("traverse stopped at element {}", index);
                    return Ok(Either::Left(l));
                }
            }
        }
        Ok(Either::Right(values))
    }
}

impl<T> Either<T, T> {
    /// The held value, whichever arm holds it.
    pub fn value(self) -> T {
        match self {
            Either::Left(v) | Either::Right(v) => v,
        }
    }
}

impl<L, R> RightBiased for Either<L, R> {
    type Value = R;
    type Rebind<U> = Either<L, U>;

    fn is_success(&self) -> bool { self.is_right() }

    fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        Either::bind(self, f)
    }

    fn fmap<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        Either::fmap(self, f)
    }

    fn tee<U, F>(self, f: F) -> Either<L, R>
    where
        F: FnOnce(&R) -> Either<L, U>,
    {
        Either::tee(self, f)
    }
}

impl<L, R> FromIterator<Either<L, R>> for Either<L, Vec<R>> {
    fn from_iter<I: IntoIterator<Item = Either<L, R>>>(iter: I) -> Self { Either::sequence(iter) }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self { either.into_result() }
}

impl<L, R> fmt::Display for Either<L, R>
where
    L: fmt::Display,
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({})", l),
            Either::Right(r) => write!(f, "Right({})", r),
        }
    }
}
