//! Error types for sequence operations.
//!
//! Index-bearing operations such as `cut`, `trim` and `delete` clamp their
//! arguments and never fail. The failures below are the only ones a caller
//! has to handle.

/// Represents errors that can occur while operating on a sequence or view.
///
/// # Examples
///
/// ```rust
/// use slicekit::SequenceError;
///
/// let error = SequenceError::IndexOutOfBounds { index: 7, length: 3 };
/// assert_eq!(format!("{error}"), "index 7 out of bounds for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A runtime-typed operand was neither an element nor a collection of elements.
    TypeMismatch {
        /// The element type the operation expected.
        expected: &'static str,
    },
    /// A position lies outside the permitted range.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length the index was checked against.
        length: usize,
    },
    /// A view was used after its source sequence reallocated.
    StaleView {
        /// Generation the view was taken at.
        view_generation: u64,
        /// Current generation of the source.
        current_generation: u64,
    },
}

impl SequenceError {
    pub(crate) fn type_mismatch<T>() -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<T>(),
        }
    }
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { expected } => write!(
                formatter,
                "type mismatch: expected {expected} or a collection of {expected}"
            ),
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::StaleView {
                view_generation,
                current_generation,
            } => write!(
                formatter,
                "stale view: taken at generation {view_generation}, source is at generation {current_generation}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display() {
        let error = SequenceError::type_mismatch::<f32>();
        assert_eq!(
            format!("{error}"),
            "type mismatch: expected f32 or a collection of f32"
        );
    }

    #[test]
    fn test_stale_view_display() {
        let error = SequenceError::StaleView {
            view_generation: 1,
            current_generation: 3,
        };
        assert_eq!(
            format!("{error}"),
            "stale view: taken at generation 1, source is at generation 3"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(SequenceError::IndexOutOfBounds { index: 0, length: 0 });
        assert_eq!(error.to_string(), "index 0 out of bounds for length 0");
    }
}
