//! Element capabilities shared by every sequence instantiation.
//!
//! A [`Sequence`](crate::sequence::Sequence) can hold any type implementing
//! [`Element`]: a `Copy` value with equality, a partial order, a zero value
//! (its `Default`), and a hashable membership key used by the set algebra and
//! by [`uniq`](crate::sequence::Sequence::uniq).
//!
//! The crate implements [`Element`] for every primitive integer, both float
//! widths, `bool`, `char` and `&str`, and exports one alias per type
//! (`F32Sequence`, `I64Sequence`, `StrSequence`, ...).
//!
//! # Examples
//!
//! ```rust
//! use slicekit::element::Element;
//! use slicekit::F32Sequence;
//!
//! assert_eq!(f32::zero(), 0.0);
//! // Positive and negative zero share one membership key.
//! assert_eq!((-0.0_f32).membership_key(), 0.0_f32.membership_key());
//!
//! let sequence: F32Sequence = [1.5, 2.5].into();
//! assert_eq!(sequence.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::sequence::Sequence;

/// Capabilities required of a sequence element.
///
/// `PartialOrd` drives the three-way comparisons, where incomparable values
/// (NaN) compare as the same. [`Element::total_order`] drives sorting and
/// must be a total order.
pub trait Element: Copy + PartialEq + PartialOrd + Default + fmt::Debug + fmt::Display {
    /// Hashable stand-in for the element inside membership sets.
    type Key: Copy + Eq + Hash;

    /// Returns the membership key of the element.
    ///
    /// Two elements that compare equal must produce the same key.
    fn membership_key(self) -> Self::Key;

    /// Total order used by [`Sequence::sort`].
    fn total_order(&self, other: &Self) -> Ordering;

    /// The zero value of the type.
    #[inline]
    #[must_use]
    fn zero() -> Self {
        Self::default()
    }

    /// Three-way comparison following `PartialOrd`; incomparable pairs are `Equal`.
    #[inline]
    fn three_way(&self, other: &Self) -> Ordering {
        if self < other {
            Ordering::Less
        } else if self > other {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Elements supporting in-place arithmetic.
///
/// Integer implementations wrap on overflow in every build profile. Float
/// implementations are the plain IEEE operators.
pub trait Numeric:
    Element + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// The multiplicative identity, used by increment and decrement.
    fn one() -> Self;

    /// `self + other`, wrapping at the type's bounds.
    fn wrapping_add(self, other: Self) -> Self;

    /// `self - other`, wrapping at the type's bounds.
    fn wrapping_sub(self, other: Self) -> Self;

    /// `self * other`, wrapping at the type's bounds.
    fn wrapping_mul(self, other: Self) -> Self;

    /// `self / other`, wrapping at the type's bounds (`MIN / -1 == MIN`).
    ///
    /// # Panics
    ///
    /// Integer implementations panic when `other` is zero.
    fn wrapping_div(self, other: Self) -> Self;
}

/// Numeric elements that can be negated.
pub trait Signed: Numeric + Neg<Output = Self> {
    /// `-self`, wrapping at the type's bounds (`-MIN == MIN`).
    fn wrapping_neg(self) -> Self;
}

macro_rules! integer_elements {
    ($($element:ty => $alias:ident),* $(,)?) => {
        $(
            impl Element for $element {
                type Key = Self;

                #[inline]
                fn membership_key(self) -> Self::Key {
                    self
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            impl Numeric for $element {
                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    <$element>::wrapping_add(self, other)
                }

                #[inline]
                fn wrapping_sub(self, other: Self) -> Self {
                    <$element>::wrapping_sub(self, other)
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    <$element>::wrapping_mul(self, other)
                }

                #[inline]
                fn wrapping_div(self, other: Self) -> Self {
                    <$element>::wrapping_div(self, other)
                }
            }

            paste::paste! {
                #[doc = concat!("A [`Sequence`] of `", stringify!($element), "`.")]
                pub type [<$alias Sequence>] = Sequence<$element>;
            }
        )*
    };
}

macro_rules! signed {
    ($($element:ty),* $(,)?) => {
        $(
            impl Signed for $element {
                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$element>::wrapping_neg(self)
                }
            }
        )*
    };
}

macro_rules! float_elements {
    ($($element:ty => $alias:ident as $bits:ty),* $(,)?) => {
        $(
            impl Element for $element {
                type Key = $bits;

                // -0.0 and 0.0 compare equal, so they must share a key.
                #[inline]
                fn membership_key(self) -> Self::Key {
                    let normalized = if self == 0.0 { 0.0 } else { self };
                    normalized.to_bits()
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }

            impl Numeric for $element {
                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn wrapping_add(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn wrapping_sub(self, other: Self) -> Self {
                    self - other
                }

                #[inline]
                fn wrapping_mul(self, other: Self) -> Self {
                    self * other
                }

                #[inline]
                fn wrapping_div(self, other: Self) -> Self {
                    self / other
                }
            }

            impl Signed for $element {
                #[inline]
                fn wrapping_neg(self) -> Self {
                    -self
                }
            }

            paste::paste! {
                #[doc = concat!("A [`Sequence`] of `", stringify!($element), "`.")]
                pub type [<$alias Sequence>] = Sequence<$element>;
            }
        )*
    };
}

macro_rules! ordinal_elements {
    ($($element:ty => $alias:ident),* $(,)?) => {
        $(
            impl Element for $element {
                type Key = Self;

                #[inline]
                fn membership_key(self) -> Self::Key {
                    self
                }

                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            paste::paste! {
                #[doc = concat!("A [`Sequence`] of `", stringify!($element), "`.")]
                pub type [<$alias Sequence>] = Sequence<$element>;
            }
        )*
    };
}

integer_elements!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
);

signed!(i8, i16, i32, i64, i128, isize);

float_elements!(f32 => F32 as u32, f64 => F64 as u64);

ordinal_elements!(bool => Bool, char => Char);

impl<'a> Element for &'a str {
    type Key = &'a str;

    #[inline]
    fn membership_key(self) -> Self::Key {
        self
    }

    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

/// A [`Sequence`] of string slices.
pub type StrSequence<'a> = Sequence<&'a str>;
