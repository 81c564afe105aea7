//! Sort-merge difference of two position multisets.
//!
//! Both inputs are sorted in place and then scanned together. An element of
//! the subtrahend removes every equal element of the minuend; values the
//! subtrahend never mentions survive, duplicates included.

use std::cmp::Ordering;

use crate::error::SetupError;

/// Appends `minuend - subtrahend` to `result` in ascending order.
///
/// Sorts both `minuend` and `subtrahend`. Fails with `InvalidState` if
/// `result` is not empty on entry.
pub fn subtract_into<T: Ord + Copy>(
    result: &mut Vec<T>,
    minuend: &mut [T],
    subtrahend: &mut [T],
) -> Result<(), SetupError> {
    if !result.is_empty() {
        return Err(SetupError::InvalidState {
            what: "set difference result",
        });
    }

    minuend.sort_unstable();
    subtrahend.sort_unstable();
    merge_difference(result, minuend, subtrahend);
    Ok(())
}

/// Returns `minuend - subtrahend`, sorted ascending.
pub fn subtract<T: Ord + Copy>(mut minuend: Vec<T>, mut subtrahend: Vec<T>) -> Vec<T> {
    minuend.sort_unstable();
    subtrahend.sort_unstable();
    let mut result = Vec::with_capacity(minuend.len());
    merge_difference(&mut result, &minuend, &subtrahend);
    result
}

/// Merge step over two ascending slices.
fn merge_difference<T: Ord + Copy>(result: &mut Vec<T>, minuend: &[T], subtrahend: &[T]) {
    let (mut i, mut j) = (0, 0);
    while i < minuend.len() && j < subtrahend.len() {
        match minuend[i].cmp(&subtrahend[j]) {
            Ordering::Equal => i += 1,
            Ordering::Less => {
                result.push(minuend[i]);
                i += 1;
            }
            Ordering::Greater => j += 1,
        }
    }
    result.extend_from_slice(&minuend[i..]);
}
