/// Panics unless `from..to` is a valid range into a sequence of `len` elements.
#[inline]
#[track_caller]
pub(crate) fn check_range(from: usize, to: usize, len: usize) {
    assert!(
        from <= to && to <= len,
        "invalid sort range {from}..{to} for sequence of length {len}"
    );
}
