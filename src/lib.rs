//! # slicekit
//!
//! Growable sequences of primitive values with Lisp- and Ruby-flavoured bulk
//! operations.
//!
//! ## Overview
//!
//! One generic container, [`Sequence<T>`], serves every element type through
//! the [`Element`] trait:
//!
//! - **Capacity management**: explicit `reallocate`, exact-fit `extend_by`
//!   and `expand`, amortised `append`
//! - **Mutation**: `prepend`, `insert`, `delete`, `cut`, `trim`,
//!   `block_copy`, `block_clear`, `overwrite`, `replace`, `reverse`, `repeat`
//! - **Filtering**: in-place `keep_if`/`delete_if`/`uniq`, `select`,
//!   `find_n`, `values_at`
//! - **Set algebra**: `set_intersection`, `set_union`, `set_difference`
//! - **List emulation**: `car`, `cdr`, `rplaca`, `rplacd`
//! - **Ordering and arithmetic**: three-way comparisons, `sort`, `shuffle`,
//!   element-wise `add`/`subtract`/... for [`Numeric`] elements
//!
//! Sub-ranges are exposed as [`View`]s that alias the owner's storage and
//! report [`SequenceError::StaleView`] once the owner has moved to a new
//! region.
//!
//! ## Feature Flags
//!
//! - `fxhash` (default): hash membership sets with `rustc-hash`
//! - `ahash`: hash membership sets with `ahash` (takes precedence)
//!
//! ## Diagnostics
//!
//! Every storage reallocation emits a `tracing` event at `TRACE` level with
//! target `slicekit::storage`.
//!
//! ## Example
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let mut numbers: I32Sequence = sequence![4, 1, 3, 1];
//! numbers.uniq();
//! numbers.sort();
//! assert_eq!(numbers, [1, 3, 4]);
//!
//! let evens = numbers.select(|element| element % 2 == 0);
//! assert_eq!(evens, [4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use slicekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::*;
    pub use crate::error::SequenceError;
    pub use crate::sequence;
    pub use crate::sequence::{Dynamic, MatchLimit, Operand, Sequence, View};
}

pub mod element;
pub mod error;
pub mod sequence;

pub use element::{
    BoolSequence, CharSequence, Element, F32Sequence, F64Sequence, I8Sequence, I16Sequence,
    I32Sequence, I64Sequence, I128Sequence, IsizeSequence, Numeric, Signed, StrSequence,
    U8Sequence, U16Sequence, U32Sequence, U64Sequence, U128Sequence, UsizeSequence,
};
pub use error::SequenceError;
pub use sequence::{Sequence, View};
