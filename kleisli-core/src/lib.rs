pub(crate) mod core;
pub(crate) mod support;

pub use crate::core::{
    either::Either,
    list::{IntoList, List},
    nullable::Nullable,
    right_biased::RightBiased,
};

pub use crate::support::error::{ListError, ListResult, TraverseError, TraverseResult};
