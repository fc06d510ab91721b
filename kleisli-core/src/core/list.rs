use std::{
    any::Any,
    collections::VecDeque,
    fmt,
    ops::{Add, Index},
};

use kleisli_macros::Equalizer;

use crate::support::error::{ListError, ListResult};

/// An immutable ordered sequence with list-monad combinators.
///
/// Every operation consumes or borrows the list and returns a new one; no
/// method mutates a list that anyone else can observe.
#[derive(Debug, Clone, Equalizer)]
#[equalizer(values)]
pub struct List<T> {
    values: Vec<T>,
}

/// Conversion into a [`List`].
///
/// Absent values (`None`, `()`) convert into the empty list, sequences wrap
/// their elements in order.
pub trait IntoList<T> {
    fn into_list(self) -> List<T>;
}

impl<T> IntoList<T> for List<T> {
    fn into_list(self) -> List<T> { self }
}

impl<T> IntoList<T> for Vec<T> {
    fn into_list(self) -> List<T> { List { values: self } }
}

impl<T, const N: usize> IntoList<T> for [T; N] {
    fn into_list(self) -> List<T> { List { values: Vec::from(self) } }
}

impl<T: Clone> IntoList<T> for &[T] {
    fn into_list(self) -> List<T> { List { values: self.to_vec() } }
}

impl<T> IntoList<T> for Box<[T]> {
    fn into_list(self) -> List<T> { List { values: self.into_vec() } }
}

impl<T> IntoList<T> for VecDeque<T> {
    fn into_list(self) -> List<T> { List { values: Vec::from(self) } }
}

impl<T, V> IntoList<T> for Option<V>
where
    V: IntoList<T>,
{
    fn into_list(self) -> List<T> {
        match self {
            Some(values) => values.into_list(),
            None => List::EMPTY,
        }
    }
}

impl<T> IntoList<T> for () {
    fn into_list(self) -> List<T> { List::EMPTY }
}

/// Move the value out of an `Option<S>` slot if the slot holds an `S`.
fn take_slot<S: Any>(any: &mut dyn Any) -> Option<S> {
    any.downcast_mut::<Option<S>>().and_then(Option::take)
}

impl<T> List<T> {
    /// The empty list. Using it never allocates.
    pub const EMPTY: List<T> = List { values: Vec::new() };

    pub fn of<const N: usize>(values: [T; N]) -> Self { values.into_list() }

    pub fn coerce<V>(value: V) -> Self
    where
        V: IntoList<T>,
    {
        value.into_list()
    }

    /// Coerce a value whose type is only known at runtime.
    ///
    /// Accepted are `()`, `Vec<T>`, `VecDeque<T>`, `List<T>`, `Box<[T]>`
    /// and arrays `[T; N]` up to `N = 32`, each also wrapped in an `Option`,
    /// plus `None::<T>`. `None` of any accepted type is the empty list.
    /// Anything else is an error naming the value.
    pub fn try_coerce<V>(value: V) -> ListResult<Self>
    where
        T: 'static,
        V: Any + fmt::Debug,
    {
        // the downcasts go through an `Option` slot so that a match can move
        // the value out while a mismatch keeps it around for the error.
        let mut slot = Some(value);
        let any = &mut slot as &mut dyn Any;

        if any.is::<Option<()>>() {
            return Ok(List::EMPTY);
        }
        if let Some(Some(None)) = any.downcast_ref::<Option<Option<T>>>() {
            return Ok(List::EMPTY);
        }

        macro_rules! coerce_from {
            ($($ty:ty),* $(,)?) => {
                $(
                    if let Some(values) = take_slot::<$ty>(any) {
                        return Ok(values.into_list());
                    }
                    if let Some(values) = take_slot::<Option<$ty>>(any) {
                        return Ok(values.into_list());
                    }
                )*
            };
        }

        coerce_from!(
            Vec<T>, VecDeque<T>, List<T>, Box<[T]>,
            [T; 0], [T; 1], [T; 2], [T; 3], [T; 4], [T; 5], [T; 6], [T; 7], [T; 8],
            [T; 9], [T; 10], [T; 11], [T; 12], [T; 13], [T; 14], [T; 15], [T; 16],
            [T; 17], [T; 18], [T; 19], [T; 20], [T; 21], [T; 22], [T; 23], [T; 24],
            [T; 25], [T; 26], [T; 27], [T; 28], [T; 29], [T; 30], [T; 31], [T; 32],
        );

        Err(ListError::Coercion {
            value: slot
                .as_ref()
                .map(|value| format!("{:?}", value))
                .unwrap_or_default(),
        })
    }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn size(&self) -> usize { self.values.len() }

    pub fn len(&self) -> usize { self.size() }

    pub fn first(&self) -> Option<&T> { self.values.first() }

    pub fn last(&self) -> Option<&T> { self.values.last() }

    pub fn head(&self) -> Option<&T> { self.first() }

    /// The list without its first element. The tail of an empty list is empty.
    pub fn tail(self) -> Self { self.values.into_iter().skip(1).collect() }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.values.iter() }

    pub fn as_slice(&self) -> &[T] { &self.values }

    pub fn into_vec(self) -> Vec<T> { self.values }

    /// Map every element to a list and concatenate the results in order.
    pub fn bind<U, I, F>(self, mut f: F) -> List<U>
    where
        I: IntoList<U>,
        F: FnMut(T) -> I,
    {
        let mut values = Vec::with_capacity(self.values.len());
        for value in self.values {
            values.extend(f(value).into_list().values);
        }
        List { values }
    }

    pub fn fmap<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        self.values.into_iter().map(f).collect()
    }

    pub fn map<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        self.fmap(f)
    }

    pub fn concat(self, other: List<T>) -> Self {
        let mut values = self.values;
        values.extend(other.values);
        List { values }
    }

    /// Reduce from the first element to the last, calling `f(acc, element)`.
    pub fn fold_left<A, F>(self, initial: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.values.into_iter().fold(initial, f)
    }

    /// Reduce from the last element to the first, calling `f(element, acc)`.
    pub fn fold_right<A, F>(self, initial: A, mut f: F) -> A
    where
        F: FnMut(T, A) -> A,
    {
        self.values
            .into_iter()
            .rev()
            .fold(initial, |acc, value| f(value, acc))
    }

    pub fn filter<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.values
            .into_iter()
            .filter(|value| predicate(value))
            .collect()
    }

    pub fn select<F>(self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.filter(predicate)
    }

    pub fn sort(self) -> Self
    where
        T: Ord,
    {
        let mut values = self.values;
        values.sort();
        List { values }
    }

    pub fn sort_by<F>(self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        let mut values = self.values;
        values.sort_by(compare);
        List { values }
    }

    pub fn reverse(self) -> Self {
        let mut values = self.values;
        values.reverse();
        List { values }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self { List::EMPTY }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(values: Vec<T>) -> Self { List { values } }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for List<T> {
    type IntoIter = std::vec::IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter { self.values.into_iter() }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.values.iter() }
}

impl<T> Add for List<T> {
    type Output = List<T>;

    fn add(self, other: List<T>) -> List<T> { self.concat(other) }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T { &self.values[index] }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod test {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    #[test]
    fn test_list_ops() {
        let list = List::of([3, 1, 2]);
        assert_eq!(list.size(), 3);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert_eq!(list.first(), Some(&3));
        assert_eq!(list.last(), Some(&2));
        assert_eq!(list.head(), Some(&3));
        assert_eq!(list[1], 1);

        assert_eq!(list.clone().sort(), List::of([1, 2, 3]));
        assert_eq!(list.clone().reverse(), List::of([2, 1, 3]));
        assert_eq!(
            list.clone().sort_by(|a, b| b.cmp(a)),
            List::of([3, 2, 1])
        );
        assert_eq!(list.clone().tail(), List::of([1, 2]));
        // the original is untouched by all of the above.
        assert_eq!(list, List::of([3, 1, 2]));

        let empty = List::<i32>::EMPTY;
        assert!(empty.is_empty());
        assert_eq!(empty.head(), None);
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
        assert_eq!(empty.tail(), List::EMPTY);
        assert_eq!(List::<i32>::default(), List::EMPTY);
    }

    #[test]
    fn test_list_coerce() {
        assert_eq!(List::<i32>::coerce(()), List::EMPTY);
        assert_eq!(List::<i32>::coerce(None::<Vec<i32>>), List::EMPTY);
        assert_eq!(List::coerce(Some(vec![1, 2])), List::of([1, 2]));
        assert_eq!(List::coerce(vec![1, 2]), List::of([1, 2]));
        assert_eq!(List::coerce(&[1, 2][..]), List::of([1, 2]));
        assert_eq!(List::coerce(VecDeque::from(vec![1, 2])), List::of([1, 2]));
        assert_eq!(List::coerce(List::of([1, 2])), List::of([1, 2]));
    }

    #[test]
    fn test_list_try_coerce() {
        assert_eq!(List::<i32>::try_coerce(()).unwrap(), List::EMPTY);
        assert_eq!(
            List::<i32>::try_coerce(None::<Vec<i32>>).unwrap(),
            List::EMPTY
        );
        assert_eq!(
            List::try_coerce(vec![1, 2]).unwrap(),
            List::of([1, 2])
        );
        assert_eq!(
            List::try_coerce(VecDeque::from(vec![1, 2])).unwrap(),
            List::of([1, 2])
        );
        assert_eq!(
            List::try_coerce(List::of([1, 2])).unwrap(),
            List::of([1, 2])
        );

        assert_eq!(List::try_coerce([1, 2]).unwrap(), List::of([1, 2]));
        assert_eq!(List::<i32>::try_coerce([0_i32; 0]).unwrap(), List::EMPTY);
        assert_eq!(
            List::try_coerce(vec![1, 2].into_boxed_slice()).unwrap(),
            List::of([1, 2])
        );
        assert_eq!(
            List::try_coerce(Some(VecDeque::from(vec![1, 2]))).unwrap(),
            List::of([1, 2])
        );
        assert_eq!(
            List::try_coerce(Some(List::of([1, 2]))).unwrap(),
            List::of([1, 2])
        );
        assert_eq!(List::try_coerce(Some([3])).unwrap(), List::of([3]));

        // absent values of every accepted shape are the empty list.
        assert_eq!(List::<i32>::try_coerce(None::<i32>).unwrap(), List::EMPTY);
        assert_eq!(
            List::<i32>::try_coerce(None::<VecDeque<i32>>).unwrap(),
            List::EMPTY
        );
        assert_eq!(
            List::<i32>::try_coerce(None::<List<i32>>).unwrap(),
            List::EMPTY
        );
        assert_eq!(
            List::<i32>::try_coerce(None::<[i32; 2]>).unwrap(),
            List::EMPTY
        );

        // a present scalar is not a sequence.
        assert!(List::<i32>::try_coerce(Some(42)).is_err());

        let err = List::<i32>::try_coerce(42).unwrap_err();
        assert!(matches!(&err, ListError::Coercion { value } if value == "42"));
        assert_eq!(err.to_string(), "can't coerce `42` into a list");

        // a sequence of the wrong element type is not a list of `T`.
        assert!(List::<i32>::try_coerce(vec!["a"]).is_err());
    }

    #[test]
    fn test_list_bind() {
        assert_eq!(
            List::of([1, 2]).bind(|x| [x, x + 1]),
            List::of([1, 2, 2, 3])
        );
        assert_eq!(
            List::of([1, 2, 3]).bind(|x| if x == 2 { None } else { Some(vec![x]) }),
            List::of([1, 3])
        );
        // only one level is flattened.
        assert_eq!(
            List::of([1, 2]).bind(|x| vec![vec![x]]),
            List::of([vec![1], vec![2]])
        );
        assert_eq!(List::<i32>::EMPTY.bind(|x| [x]), List::EMPTY);
    }

    #[test]
    fn test_list_fmap() {
        assert_eq!(List::of([1, 2, 3]).fmap(|x| x * 2), List::of([2, 4, 6]));
        assert_eq!(
            List::of([1, 2]).map(|x| vec![x]),
            List::of([vec![1], vec![2]])
        );
    }

    #[test]
    fn test_list_fold() {
        assert_eq!(List::of([1, 2, 3]).fold_left(0, |a, b| a - b), -6);
        assert_eq!(List::of([1, 2, 3]).fold_right(0, |a, b| a - b), 2);

        let order = List::of(["a", "b", "c"]);
        assert_eq!(
            order.clone().fold_left(String::new(), |acc, s| acc + s),
            "abc"
        );
        assert_eq!(
            order.fold_right(String::new(), |s, acc| acc + s),
            "cba"
        );
    }

    #[test]
    fn test_list_filter_concat() {
        let list = List::of([1, 2, 3, 4]);
        assert_eq!(list.clone().filter(|x| x % 2 == 0), List::of([2, 4]));
        assert_eq!(list.select(|x| *x > 2), List::of([3, 4]));
        assert_eq!(List::of([1, 2]) + List::of([3]), List::of([1, 2, 3]));
        assert_eq!(List::EMPTY + List::of([3]), List::of([3]));
    }

    #[test]
    fn test_list_equality() {
        assert_eq!(List::of([1, 2]), List::of([1, 2]));
        assert_ne!(List::of([1, 2]), List::of([2, 1]));
        assert_ne!(List::of([1, 2]), List::of([1, 2, 3]));

        let set = [List::of([1, 2]), List::of([1, 2]), List::of([2, 1])]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_list_iter() {
        let list = (1..=5).collect::<List<_>>();
        let mut iter = list.iter();
        for i in 1..=5 {
            assert_eq!(iter.next(), Some(&i));
        }
        assert!(iter.next().is_none());

        assert_eq!((&list).into_iter().sum::<i32>(), 15);
        assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(list.clone().into_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(List::from(vec![1]), List::of([1]));
    }

    #[test]
    fn test_list_display() {
        assert_eq!(List::of([1, 2, 3]).to_string(), "List[1, 2, 3]");
        assert_eq!(List::<i32>::EMPTY.to_string(), "List[]");
    }
}
