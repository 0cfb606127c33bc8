//! The three sorters under test.
//!
//! Insertion sort works in place. Merge sort and hybrid sort are non-destructive and
//! return a freshly allocated, sorted `Vec`. All three are stable.

use std::cmp::Ordering;

/// Sorts a slice in place using shift-based insertion sort.
///
/// This is a convenience wrapper around [`insertion_sort_by`] for types that implement `Ord`.
///
/// # Example
///
/// ```
/// use hybridsort::insertion_sort;
///
/// let mut arr = vec![5, 3, 4, 1, 2];
/// insertion_sort(&mut arr);
/// assert_eq!(arr, vec![1, 2, 3, 4, 5]);
/// ```
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    insertion_sort_by(arr, T::cmp)
}

/// Sorts a slice in place using shift-based insertion sort and a custom comparator.
///
/// For each position `i`, every predecessor that compares `Greater` than the key is
/// shifted one slot right and the key drops into the gap. Equal elements are never
/// passed over, so the sort is stable.
///
/// Best case O(n) on sorted input, worst case O(n²) on reverse-sorted input.
pub fn insertion_sort_by<T, F>(arr: &mut [T], cmp: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    for i in 1..arr.len() {
        let mut slot = i;
        while slot > 0 && cmp(&arr[slot - 1], &arr[i]) == Ordering::Greater {
            slot -= 1;
        }
        move_element(arr, i, slot);
    }
}

/// Moves the element at `from` left to `to`, shifting the values in between right.
#[inline]
fn move_element<T>(arr: &mut [T], from: usize, to: usize) {
    if from != to {
        arr[to..=from].rotate_right(1);
    }
}

/// Returns a sorted copy of `arr` using top-down merge sort.
///
/// # Example
///
/// ```
/// use hybridsort::merge_sort;
///
/// let arr = vec![5, 3, 4, 1, 2];
/// assert_eq!(merge_sort(&arr), vec![1, 2, 3, 4, 5]);
/// // Input is left untouched
/// assert_eq!(arr, vec![5, 3, 4, 1, 2]);
/// ```
pub fn merge_sort<T: Ord + Clone>(arr: &[T]) -> Vec<T> {
    merge_sort_by(arr, T::cmp)
}

/// Returns a sorted copy of `arr` using top-down merge sort and a custom comparator.
///
/// The slice is split at `len / 2`, so an odd-length right half carries the extra
/// element. Slices of length 0 or 1 are returned as-is.
pub fn merge_sort_by<T, F>(arr: &[T], cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    hybrid_sort_by(arr, 0, cmp)
}

/// Returns a sorted copy of `arr`, falling back to insertion sort for runs of at most
/// `threshold` elements.
///
/// # Arguments
///
/// * `arr` - The sequence to sort
/// * `threshold` - Largest subsequence length handed to insertion sort. `0` behaves
///   exactly like [`merge_sort`]; a value `>= arr.len()` behaves like [`insertion_sort`].
///
/// # Example
///
/// ```
/// use hybridsort::hybrid_sort;
///
/// let arr = vec![5, 3, 4, 1, 2];
/// assert_eq!(hybrid_sort(&arr, 3), vec![1, 2, 3, 4, 5]);
/// ```
pub fn hybrid_sort<T: Ord + Clone>(arr: &[T], threshold: usize) -> Vec<T> {
    hybrid_sort_by(arr, threshold, T::cmp)
}

/// Comparator variant of [`hybrid_sort`].
pub fn hybrid_sort_by<T, F>(arr: &[T], threshold: usize, cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    sort_recursive(arr, threshold, &cmp)
}

fn sort_recursive<T, F>(arr: &[T], threshold: usize, cmp: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    // Length 1 is always a base case, otherwise threshold 0 would recurse forever
    if arr.len() <= threshold.max(1) {
        let mut run = arr.to_vec();
        insertion_sort_by(&mut run, cmp);
        return run;
    }

    let mid = arr.len() / 2;
    let left = sort_recursive(&arr[..mid], threshold, cmp);
    let right = sort_recursive(&arr[mid..], threshold, cmp);

    merge(left, right, cmp)
}

/// Merges two sorted runs. On ties the left run wins, which keeps the merge stable.
fn merge<T, F>(left: Vec<T>, right: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            _ => break,
        };
        if take_left {
            result.extend(left.next());
        } else {
            result.extend(right.next());
        }
    }

    result.extend(left);
    result.extend(right);
    result
}
