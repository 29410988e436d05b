//! Arguments that are "an element or a collection of elements".
//!
//! Statically typed operands are resolved at compile time and cannot
//! mismatch. [`Dynamic`] carries a runtime-typed value and reports
//! [`SequenceError::TypeMismatch`] when it holds anything else.

use std::any::Any;

use smallvec::SmallVec;

use super::{Sequence, View};
use crate::element::Element;
use crate::error::SequenceError;

/// Elements gathered from an operand before the target is mutated.
///
/// Gathering first means an operand may alias the sequence it is written
/// into (for example a view of that sequence).
pub type OperandBuffer<T> = SmallVec<[T; 8]>;

/// A value usable where an operation accepts an element or a collection.
///
/// Implemented for a single element `T`, `&[T]`, `Vec<T>`, `[T; N]`,
/// [`Sequence<T>`], [`View<T>`] (and references to them) and [`Dynamic`].
///
/// # Examples
///
/// ```rust
/// use slicekit::sequence::Sequence;
///
/// let tail: Sequence<i32> = [3, 4].into();
/// let mut sequence: Sequence<i32> = Sequence::new();
/// sequence.append(1).unwrap();
/// sequence.append(&[2][..]).unwrap();
/// sequence.append(&tail).unwrap();
/// assert_eq!(sequence, [1, 2, 3, 4]);
/// ```
pub trait Operand<T: Element> {
    /// Pushes the operand's elements onto `buffer` in order.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] for a runtime-typed operand of
    /// the wrong shape and [`SequenceError::StaleView`] for a stale view.
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError>;

    /// Returns the operand as a single element, if it is one.
    fn scalar(&self) -> Option<T> {
        None
    }
}

pub(crate) fn gathered<T: Element, O: Operand<T> + ?Sized>(
    operand: &O,
) -> Result<OperandBuffer<T>, SequenceError> {
    let mut buffer = OperandBuffer::new();
    operand.gather(&mut buffer)?;
    Ok(buffer)
}

pub(crate) fn scalar_of<T: Element, O: Operand<T> + ?Sized>(
    operand: &O,
) -> Result<T, SequenceError> {
    operand.scalar().ok_or_else(SequenceError::type_mismatch::<T>)
}

impl<T: Element> Operand<T> for T {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.push(*self);
        Ok(())
    }

    fn scalar(&self) -> Option<T> {
        Some(*self)
    }
}

impl<T: Element> Operand<T> for &[T] {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend_from_slice(self);
        Ok(())
    }
}

impl<T: Element, const N: usize> Operand<T> for [T; N] {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend_from_slice(self);
        Ok(())
    }
}

impl<T: Element> Operand<T> for Vec<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend_from_slice(self);
        Ok(())
    }
}

impl<T: Element> Operand<T> for &Vec<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend_from_slice(self);
        Ok(())
    }
}

impl<T: Element> Operand<T> for Sequence<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend(self.iter());
        Ok(())
    }
}

impl<T: Element> Operand<T> for &Sequence<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        (*self).gather(buffer)
    }
}

impl<T: Element> Operand<T> for View<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        buffer.extend(self.iter()?);
        Ok(())
    }
}

impl<T: Element> Operand<T> for &View<T> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        (*self).gather(buffer)
    }
}

/// A runtime-typed operand.
///
/// Accepts a `T`, `Vec<T>`, `Sequence<T>` or `View<T>` behind `&dyn Any`;
/// anything else is a [`SequenceError::TypeMismatch`].
///
/// # Examples
///
/// ```rust
/// use slicekit::SequenceError;
/// use slicekit::sequence::{Dynamic, Sequence};
///
/// let mut sequence: Sequence<f32> = Sequence::new();
/// sequence.append(Dynamic(&1.5_f32)).unwrap();
/// sequence.append(Dynamic(&vec![2.5_f32])).unwrap();
/// assert_eq!(sequence, [1.5, 2.5]);
///
/// let error = sequence.append(Dynamic(&"text")).unwrap_err();
/// assert!(matches!(error, SequenceError::TypeMismatch { expected: "f32" }));
/// ```
#[derive(Clone, Copy)]
pub struct Dynamic<'a>(pub &'a dyn Any);

impl<T: Element + 'static> Operand<T> for Dynamic<'_> {
    fn gather(&self, buffer: &mut OperandBuffer<T>) -> Result<(), SequenceError> {
        let value = self.0;
        if let Some(element) = value.downcast_ref::<T>() {
            buffer.push(*element);
        } else if let Some(elements) = value.downcast_ref::<Vec<T>>() {
            buffer.extend_from_slice(elements);
        } else if let Some(sequence) = value.downcast_ref::<Sequence<T>>() {
            sequence.gather(buffer)?;
        } else if let Some(view) = value.downcast_ref::<View<T>>() {
            view.gather(buffer)?;
        } else {
            return Err(SequenceError::type_mismatch::<T>());
        }
        Ok(())
    }

    fn scalar(&self) -> Option<T> {
        self.0.downcast_ref::<T>().copied()
    }
}
