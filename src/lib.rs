//! # insertion_rs
//!
//! Comparator-driven, stable, in-place insertion sort over any sub-range of a slice,
//! plus a loader for whitespace-separated integer datasets.
//!
//! ```
//! let mut v = insertion_rs::dataset::parse_dataset("3 1 2\n").unwrap();
//! insertion_rs::sort_range_by(&mut v, 0, 3, |a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(v, [1, 2, 3]);
//! ```
use std::{cmp::Ordering, mem::size_of, ops::Range};

use tracing::trace;
use util::check_range;

pub mod cli;
pub mod dataset;
mod insertion_sort;
mod slice_ext;
mod util;

pub use slice_ext::InsertionSortExt;

/// A total order over `T` supplied from outside the type.
///
/// Implemented for every `Fn(&T, &T) -> Ordering`, so closures and `Ord::cmp` work as is.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `T`'s own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the order of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Something that can order a sub-range of a slice in place with an external comparator.
pub trait Sorter {
    /// Sorts `v[range]` ascending under `compare`, leaving the rest of `v` untouched.
    /// If `compare` is not a total order the result is still a permutation of the
    /// input, in an unspecified order.
    ///
    /// # Panics
    ///
    /// If `range` does not lie within `v`.
    fn sort_range<T, C>(&self, v: &mut [T], range: Range<usize>, compare: C)
    where
        C: Compare<T>;

    /// Sorts all of `v` ascending under `compare`. Never panics on its own; a
    /// comparator that is not a total order only leaves the order unspecified.
    fn sort_by<T, C>(&self, v: &mut [T], compare: C)
    where
        C: Compare<T>,
    {
        let len = v.len();
        self.sort_range(v, 0..len, compare);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSorter;

impl Sorter for InsertionSorter {
    #[track_caller]
    fn sort_range<T, C>(&self, v: &mut [T], range: Range<usize>, compare: C)
    where
        C: Compare<T>,
    {
        check_range(range.start, range.end, v.len());
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        if size_of::<T>() == 0 || range.len() < 2 {
            return;
        }
        trace!(from = range.start, to = range.end, "insertion sort");
        insertion_sort::insertion_sort(&mut v[range], &compare);
    }
}

/// Sorts `v[from..to]` in place, ascending under `compare`.
///
/// # Panics
///
/// If `from > to` or `to > v.len()`.
#[inline]
#[track_caller]
pub fn sort_range_by<T, C>(v: &mut [T], from: usize, to: usize, compare: C)
where
    C: Compare<T>,
{
    InsertionSorter.sort_range(v, from..to, compare);
}

#[inline]
pub fn sort<T: Ord>(v: &mut [T]) {
    InsertionSorter.sort_by(v, Natural);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    InsertionSorter.sort_by(v, compare);
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], f: F)
where
    F: Fn(&T) -> K,
    K: Ord,
{
    InsertionSorter.sort_by(v, |a: &T, b: &T| f(a).cmp(&f(b)));
}
