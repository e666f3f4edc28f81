//! In-place division of contiguous buffers, one lane vector at a time.

use crate::lanes::{LaneInt, Lanes};

/// Walk `buf` in blocks of `N` lanes, applying `f` to each block. The final
/// incomplete block goes through a stack scratch vector: copy in, evaluate,
/// copy the live prefix back.
pub(crate) fn apply_in_place<T: LaneInt, const N: usize>(
    buf: &mut [T],
    f: impl Fn(Lanes<T, N>) -> Lanes<T, N>,
) {
    let mut blocks = buf.chunks_exact_mut(N);
    for block in blocks.by_ref() {
        f(Lanes::read(block)).write(block);
    }
    let tail = blocks.into_remainder();
    if !tail.is_empty() {
        let mut scratch = [T::zero(); N];
        scratch[..tail.len()].copy_from_slice(tail);
        let out = f(Lanes::from_array(scratch)).into_array();
        tail.copy_from_slice(&out[..tail.len()]);
    }
}

/// Divide every element of `buf` in place by `divisor`, truncating toward
/// zero. The divisor is derived once and applied in lane-count strides.
///
/// # Panics
///
/// A zero divisor is a precondition violation and panics.
pub fn divide_slice<T: LaneInt>(buf: &mut [T], divisor: T) {
    T::divide_slice(buf, divisor)
}

/// Divide every element of `buf` in place by `divisor`, rounding toward
/// negative infinity. Identical to [`divide_slice`] for unsigned elements.
///
/// # Panics
///
/// A zero divisor is a precondition violation and panics.
pub fn floor_divide_slice<T: LaneInt>(buf: &mut [T], divisor: T) {
    T::floor_divide_slice(buf, divisor)
}
