//! Bit-twiddling helpers for parameter derivation.

use num_traits::{PrimInt, Unsigned};

/// True when `x` is a power of two. Signed callers pass `|x|`.
pub(crate) fn is_pow2<T: PrimInt + Unsigned>(x: T) -> bool {
    !x.is_zero() && (x & (x - T::one())).is_zero()
}

/// Low 64 bits of `(high * 2^64) / divisor`.
///
/// Only the 64-bit derivations need a 128-by-64 division. The quotient can
/// exceed 64 bits when `high >= divisor`; it is truncated.
pub(crate) fn div_hi_by(high: u64, divisor: u64) -> u64 {
    debug_assert_ne!(divisor, 0);
    (((high as u128) << 64) / divisor as u128) as u64
}
