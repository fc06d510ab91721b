//! Algebraic containers for composing computations that may fail or fan out.
//!
//! [`Either`] holds the result of a computation that either succeeded
//! (`Right`) or failed (`Left`); [`List`] is an ordered sequence whose `bind`
//! maps and flattens. Both chain through `bind`/`fmap`, and
//! [`Either::traverse`] turns many results into one.
//!
//! ```
//! use kleisli::{list, right, Either, List};
//!
//! let parsed = Either::traverse(
//!     ["1", "2", "3"].map(|s| Either::from(s.parse::<i32>())),
//!     |n| n * 2,
//! );
//! assert_eq!(parsed, right(vec![2, 4, 6]));
//!
//! let pairs = list![1, 2].bind(|x| [x, x + 1]);
//! assert_eq!(pairs, List::of([1, 2, 2, 3]));
//! ```

pub mod constructors;

pub use kleisli_core::*;
pub use kleisli_macros::Equalizer;

pub use crate::constructors::{left, list, right};
