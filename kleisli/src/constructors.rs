//! Shorthand constructors.

use kleisli_core::{Either, IntoList, List};

pub fn right<L, R>(value: R) -> Either<L, R> { Either::Right(value) }

pub fn left<L, R>(value: L) -> Either<L, R> { Either::Left(value) }

/// Coerce `value` into a [`List`], see [`List::coerce`].
pub fn list<T, V>(value: V) -> List<T>
where
    V: IntoList<T>,
{
    List::coerce(value)
}

/// Build a [`List`] from its elements.
///
/// ```
/// use kleisli::{list, List};
///
/// assert_eq!(list![1, 2, 3], List::of([1, 2, 3]));
/// assert_eq!(list![], List::<i32>::EMPTY);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::EMPTY
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::of([$($value),+])
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(right::<&str, _>(1), Either::Right(1));
        assert_eq!(left::<_, i32>("no"), Either::Left("no"));
        assert_eq!(list(vec![1, 2]), List::of([1, 2]));
        assert_eq!(list::<i32, _>(()), List::EMPTY);
        assert_eq!(crate::list![1, 2,], List::of([1, 2]));
    }
}
