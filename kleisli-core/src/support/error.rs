use thiserror::Error;

/// Contract violations raised while traversing a heterogeneous collection.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// The element at `index` is not an `Either` of the expected type.
    #[error("element {index} is not an `{expected}`")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },
}

pub type TraverseResult<T> = Result<T, TraverseError>;

#[derive(Debug, Error)]
pub enum ListError {
    /// The value is neither absent nor a sequence.
    #[error("can't coerce `{value}` into a list")]
    Coercion { value: String },
}

pub type ListResult<T> = Result<T, ListError>;
