//! Fast bulk division of integers by a divisor that is only known at
//! runtime but reused across many dividends.
//!
//! Hardware integer division is 20-100x slower than multiplication. When the
//! same divisor is applied to a whole buffer, it pays to precompute a "magic"
//! multiplier and a pair of shifts that turn every division into a widening
//! multiply plus a few shifts and adds (T. Granlund and P. L. Montgomery,
//! "Division by invariant integers using multiplication", PLDI 1994,
//! <https://gmplib.org/~tege/divcnst-pldi94.pdf>).
//!
//! A divisor is derived once into an [`UnsignedDivider`] or [`SignedDivider`]
//! and then applied to [`Lanes`] bundles, which evaluate every lane in
//! lockstep, or to whole slices in place:
//!
//! ```
//! use lanediv::{Lanes, SignedDivider};
//!
//! let divider = SignedDivider::new(3i32);
//! let lanes = Lanes::from_array([-100, -7, -1, 0]);
//! assert_eq!((lanes / &divider).into_array(), [-33, -2, 0, 0]);
//! assert_eq!(divider.apply_floor(lanes).into_array(), [-34, -3, -1, 0]);
//!
//! let mut buf = vec![7u32, 21, 4_000_000_000];
//! lanediv::divide_slice(&mut buf, 7);
//! assert_eq!(buf, [1, 3, 571_428_571]);
//! ```
//!
//! Both C-style truncating and Python/NumPy-style flooring quotients are
//! supported for all eight fixed-width integer types. The only special case
//! is signed `MIN / -1`, whose true quotient is unrepresentable: it saturates
//! to `MIN` instead of overflowing.

mod bits;
mod divider;
mod lanes;
mod scalar;
mod slice;

pub use divider::{SignedDivider, SignedLane, UnsignedDivider, UnsignedLane};
pub use lanes::{LaneInt, Lanes, Mask};
pub use scalar::{floor_div, trunc_div};
pub use slice::{divide_slice, floor_divide_slice};

/// Errors reported by fallible divider construction.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DividerError {
    /// Dividers cannot be built for a zero divisor.
    #[error("divider must be != 0")]
    Zero,
}
