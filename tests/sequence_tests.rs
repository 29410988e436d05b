//! Integration tests for `Sequence` and `View`.
//!
//! Covers the documented worked examples, the aliasing contract between a
//! sequence and its views, runtime-typed operands, and storage diagnostics.

use std::any::Any;
use std::io;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use slicekit::prelude::*;
use tracing_subscriber::layer::SubscriberExt;

// =============================================================================
// Worked Examples
// =============================================================================

#[rstest]
fn test_uniq_example() {
    let mut sequence: I32Sequence = sequence![3, 1, 2, 1];
    sequence.uniq();
    assert_eq!(sequence, [3, 1, 2]);
}

#[rstest]
fn test_cut_example() {
    let mut sequence: I32Sequence = sequence![1, 2, 3, 4, 5];
    sequence.cut(1, 3);
    assert_eq!(sequence, [1, 4, 5]);
}

#[rstest]
fn test_expand_example() {
    let mut sequence: I32Sequence = sequence![1, 2, 3];
    sequence.expand(1, 2);
    assert_eq!(sequence.len(), 5);
    assert_eq!(sequence.get(0), Some(1));
    assert_eq!(sequence.restrict_to(3, 5), [2, 3]);
}

#[rstest]
fn test_append_example() {
    let mut sequence = F32Sequence::new();
    sequence.append(5.0_f32).unwrap();
    assert_eq!(sequence, [5.0]);
    sequence.append([1.0_f32, 2.0]).unwrap();
    assert_eq!(sequence, [5.0, 1.0, 2.0]);
}

#[rstest]
fn test_reallocate_example() {
    let mut sequence = F64Sequence::with_capacity(4);
    sequence.reallocate(10, 4);
    assert_eq!(sequence.len(), 4);
    assert_eq!(sequence.capacity(), 4);
}

// =============================================================================
// Element Families
// =============================================================================

#[rstest]
fn test_string_sequences() {
    let mut words: StrSequence<'_> = sequence!["pear", "apple", "fig", "apple"];
    words.uniq();
    words.sort();
    assert_eq!(words, ["apple", "fig", "pear"]);
    assert_eq!(format!("{words}"), "(apple fig pear)");
    assert_eq!(words.find("fig"), Some(1));
}

#[rstest]
fn test_bool_sequences() {
    let mut flags: BoolSequence = sequence![true, false, true];
    flags.delete_if_eq(false);
    assert_eq!(flags, [true, true]);
    flags.block_clear(0, 1);
    assert_eq!(flags, [false, true]);
}

#[rstest]
fn test_char_sequences() {
    let mut letters: CharSequence = "hello".chars().collect();
    letters.reverse();
    assert_eq!(letters.iter().collect::<String>(), "olleh");
    assert_eq!(letters.find_n('l', MatchLimit::All), [1, 2]);
}

#[rstest]
fn test_unsigned_arithmetic() {
    let mut counters: U64Sequence = sequence![0, 10];
    counters.increment(0);
    counters.add(1, 0);
    assert_eq!(counters, [1, 11]);
}

// =============================================================================
// Views
// =============================================================================

#[rstest]
fn test_view_survives_in_place_operations() {
    let mut sequence: I32Sequence = sequence![5, 4, 3, 2, 1];
    let view = sequence.restrict_to(0, 5);

    sequence.reverse();
    sequence.block_copy(0, 3, 2);
    sequence.replace_if_eq(5, 50);

    assert!(!view.is_stale());
    assert_eq!(view, sequence);
    assert_eq!(view, [4, 50, 3, 4, 50]);
}

#[rstest]
#[case::prepend(|sequence: &mut I32Sequence| sequence.prepend(0).unwrap())]
#[case::insert(|sequence: &mut I32Sequence| sequence.insert(1, 0).unwrap())]
#[case::replace(|sequence: &mut I32Sequence| sequence.replace([9, 9]).unwrap())]
#[case::append_past_capacity(|sequence: &mut I32Sequence| sequence.append(4).unwrap())]
#[case::extend_by(|sequence: &mut I32Sequence| sequence.extend_by(1))]
#[case::expand(|sequence: &mut I32Sequence| sequence.expand(0, 1))]
#[case::shrink(|sequence: &mut I32Sequence| sequence.reallocate(1, 1))]
fn test_reallocating_operations_stale_views(#[case] operation: fn(&mut I32Sequence)) {
    let mut sequence: I32Sequence = sequence![1, 2, 3];
    let view = sequence.cdr();
    let before = sequence.generation();

    operation(&mut sequence);

    assert_eq!(sequence.generation(), before + 1);
    assert!(view.is_stale());
    assert!(matches!(
        view.get(0),
        Err(SequenceError::StaleView {
            view_generation,
            current_generation,
        }) if view_generation == before && current_generation == before + 1
    ));
    assert!(sequence.restrict_to(0, 1).get(0).is_ok());
}

#[rstest]
fn test_stale_view_as_operand_is_rejected() {
    let mut source: I32Sequence = sequence![1, 2];
    let view = source.restrict_to(0, 2);
    source.prepend(0).unwrap();

    let mut target = I32Sequence::new();
    assert!(matches!(
        target.append(&view),
        Err(SequenceError::StaleView { .. })
    ));
    assert!(target.is_empty());
}

#[rstest]
fn test_clone_does_not_alias_views() {
    let sequence: I32Sequence = sequence![1, 2, 3];
    let copy = sequence.clone();
    let view = sequence.cdr();
    view.set(0, 20).unwrap();
    assert_eq!(sequence, [1, 20, 3]);
    assert_eq!(copy, [1, 2, 3]);
}

// =============================================================================
// Runtime-Typed Operands
// =============================================================================

#[rstest]
fn test_dynamic_operand_accepts_elements_and_collections() {
    let mut sequence = F32Sequence::new();
    let scalar: Box<dyn Any> = Box::new(1.0_f32);
    let collection: Box<dyn Any> = Box::new(vec![2.0_f32, 3.0]);

    sequence.append(Dynamic(scalar.as_ref())).unwrap();
    sequence.append(Dynamic(collection.as_ref())).unwrap();
    sequence.rplaca(Dynamic(&7.0_f32)).unwrap();

    assert_eq!(sequence, [7.0, 2.0, 3.0]);
}

#[rstest]
fn test_dynamic_operand_type_mismatch() {
    let mut sequence: F32Sequence = sequence![1.0];
    let wrong: Box<dyn Any> = Box::new("not a float");

    let error = sequence.append(Dynamic(wrong.as_ref())).unwrap_err();
    assert_eq!(error, SequenceError::TypeMismatch { expected: "f32" });
    assert_eq!(
        error.to_string(),
        "type mismatch: expected f32 or a collection of f32"
    );

    assert!(sequence.insert(0, Dynamic(&1.0_f64)).is_err());
    assert!(sequence.prepend(Dynamic(&1_i32)).is_err());
    assert!(sequence.replace(Dynamic(&'x')).is_err());
    assert!(sequence.rplacd(Dynamic(&[1.0_f32])).is_err());
    assert_eq!(sequence, [1.0]);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn test_reallocation_emits_storage_event() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("slicekit::storage=trace"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        );

    tracing::subscriber::with_default(subscriber, || {
        let mut sequence: I32Sequence = sequence![1, 2];
        sequence.prepend(0).unwrap();
        sequence.cut(0, 1);
    });

    let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
    assert_eq!(logged.matches("installed storage region").count(), 1);
    assert!(logged.contains("old_capacity=2"));
    assert!(logged.contains("new_capacity=3"));
    assert!(logged.contains("generation=1"));
}
