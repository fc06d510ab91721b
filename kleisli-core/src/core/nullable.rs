use std::collections::VecDeque;

use crate::{Either, List};

/// Values that may stand for "nothing".
///
/// `Either::to_maybe` consults this to avoid wrapping an absent value in
/// `Some`.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

/// Implement [`Nullable`] for types that are never null.
#[macro_export]
macro_rules! impl_nullable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Nullable for $ty {
                fn is_null(&self) -> bool { false }
            }
        )*
    };
}

impl_nullable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl Nullable for () {
    fn is_null(&self) -> bool { true }
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool { self.is_none() }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool { (**self).is_null() }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool { (**self).is_null() }
}

impl<T> Nullable for Vec<T> {
    fn is_null(&self) -> bool { false }
}

impl<T> Nullable for VecDeque<T> {
    fn is_null(&self) -> bool { false }
}

impl<T> Nullable for List<T> {
    fn is_null(&self) -> bool { false }
}

impl<L, R> Nullable for Either<L, R> {
    fn is_null(&self) -> bool { false }
}
