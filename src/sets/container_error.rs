use std::fmt;

/// Invalid-argument conditions raised by the containers in [`crate::sets`].
///
/// A container that returns one of these has not been modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerError {
    /// The load factor must be a finite, strictly positive number.
    InvalidLoadFactor(f64),
    /// `update_priority` was called for an element that is not in the heap.
    AbsentElement,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLoadFactor(lf) => write!(f, "illegal load factor: {lf}"),
            Self::AbsentElement => write!(f, "element does not exist in the heap"),
        }
    }
}

impl std::error::Error for ContainerError {}
