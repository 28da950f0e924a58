use std::{cmp::Ordering, mem, ptr};

use crate::Compare;

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) on
/// already sorted input.
///
/// Stable: an element only ever moves past predecessors that compare strictly greater.
pub(crate) fn insertion_sort<T, C>(v: &mut [T], compare: &C)
where
    C: Compare<T>,
{
    for i in 1..v.len() {
        shift_tail(&mut v[..=i], compare);
    }
}

/// When dropped, copies from `src` into `dest`.
struct Hole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for Hole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points at the saved element and `dest` at the slot it was lifted
        // out of or shifted into. The two never overlap, see `shift_tail`.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

#[inline]
fn is_greater<T, C: Compare<T>>(compare: &C, a: &T, b: &T) -> bool {
    compare.compare(a, b) == Ordering::Greater
}

/// Moves the last element left past every predecessor that compares strictly greater
/// and writes it into the slot that opens up.
fn shift_tail<T, C>(v: &mut [T], compare: &C)
where
    C: Compare<T>,
{
    let len = v.len();
    if len < 2 || !is_greater(compare, &v[len - 2], &v[len - 1]) {
        return;
    }
    // SAFETY:
    // a. Indexing: `len >= 2` was checked above and every offset below is `< len`.
    // b. Copies: source and destination always refer to different indices of the same
    //    slice, or to `tmp` on the stack, so `copy_nonoverlapping` holds.
    // c. Panics: if `compare` unwinds, `hole` drops and writes `tmp` back into the single
    //    duplicated slot, so the slice is again a permutation of its input and no
    //    element is dropped twice.
    unsafe {
        let tmp = mem::ManuallyDrop::new(ptr::read(v.get_unchecked(len - 1)));
        let v = v.as_mut_ptr();
        let mut hole = Hole {
            src: &*tmp,
            dest: v.add(len - 2),
        };
        ptr::copy_nonoverlapping(v.add(len - 2), v.add(len - 1), 1);

        for i in (0..len - 2).rev() {
            if !is_greater(compare, &*v.add(i), &*tmp) {
                break;
            }
            ptr::copy_nonoverlapping(v.add(i), v.add(i + 1), 1);
            hole.dest = v.add(i);
        }
        // `hole` drops here and fills the final slot with `tmp`.
    }
}
