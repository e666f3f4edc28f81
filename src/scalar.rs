//! Scalar reference semantics. Not on the hot path; these two functions
//! define the contract the lane evaluators are tested against.

use num_integer::Integer;
use num_traits::PrimInt;

/// C-style truncating division (quotient rounded toward zero).
///
/// `divisor` must be non-zero. Signed `MIN / -1` overflows exactly like the
/// hardware instruction; callers that sweep full ranges skip that pair.
pub fn trunc_div<T: PrimInt>(dividend: T, divisor: T) -> T {
    dividend / divisor
}

/// Flooring division (Python/NumPy semantics, quotient rounded toward
/// negative infinity). Identical to [`trunc_div`] for unsigned types.
///
/// Signed `MIN / -1` returns `MIN` by convention, matching the saturating
/// lane evaluators.
pub fn floor_div<T: PrimInt + Integer>(dividend: T, divisor: T) -> T {
    if T::min_value() != T::zero()
        && dividend == T::min_value()
        && divisor == T::zero() - T::one()
    {
        return T::min_value();
    }
    Integer::div_floor(&dividend, &divisor)
}
