//! Divisor parameter derivation and the lane-parallel evaluators.
//!
//! A divisor is derived once into an immutable parameter record; the record
//! is then applied to any number of lane vectors. Non-power-of-two divisors
//! go through the Granlund-Montgomery multiply-high form; powers of two
//! reduce to a shift (with a bias for signed truncation).

use core::ops::Div;

use num_traits::{Signed, Unsigned};

use crate::bits;
use crate::lanes::{LaneInt, Lanes};
use crate::DividerError;

/// Precomputed parameters for dividing unsigned lanes by one divisor.
///
/// Immutable once derived; freely copied and shared.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct UnsignedDivider<T: LaneInt> {
    divisor: T,
    multiplier: T::Mul,
    shift1: u32,
    shift2: u32,
    is_pow2: bool,
    pow2_shift: u32,
}

/// Precomputed parameters for dividing signed lanes by one divisor.
///
/// The multiplier is derived from `|divisor|`; the divisor's sign is read
/// back from the stored divisor at evaluation time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SignedDivider<T: LaneInt> {
    divisor: T,
    multiplier: T::Mul,
    shift: u32,
    is_pow2: bool,
    pow2_shift: u32,
}

/// Unsigned lane element; provides derivation for [`UnsignedDivider`].
pub trait UnsignedLane: LaneInt + Unsigned {
    #[doc(hidden)]
    fn derive(divisor: Self) -> Result<UnsignedDivider<Self>, DividerError>;
}

/// Signed lane element; provides derivation for [`SignedDivider`].
pub trait SignedLane: LaneInt + Signed {
    #[doc(hidden)]
    fn derive(divisor: Self) -> Result<SignedDivider<Self>, DividerError>;
}

impl<T: UnsignedLane> UnsignedDivider<T> {
    /// Derive division parameters for `divisor`.
    pub fn try_new(divisor: T) -> Result<Self, DividerError> {
        T::derive(divisor)
    }

    /// Derive division parameters for `divisor`.
    ///
    /// # Panics
    ///
    /// A zero divisor is a precondition violation and panics.
    pub fn new(divisor: T) -> Self {
        match T::derive(divisor) {
            Ok(divider) => divider,
            Err(err) => panic!("{err}"),
        }
    }

    /// The divisor these parameters were derived from.
    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// The shift replacing the whole evaluation when the divisor is a power
    /// of two.
    pub fn pow2_shift(&self) -> Option<u32> {
        self.is_pow2.then_some(self.pow2_shift)
    }

    /// Truncating division of every lane by the divisor.
    #[inline]
    pub fn apply_trunc<const N: usize>(&self, v: Lanes<T, N>) -> Lanes<T, N> {
        if self.is_pow2 {
            return v.shift_right(self.pow2_shift);
        }
        if self.multiplier == T::MUL_ONE && self.shift1 == 0 && self.shift2 == 0 {
            return v;
        }
        // q = (t + ((a - t) >> s1)) >> s2 with t = mul_hi(a, m).
        let t = v.mul_hi(self.multiplier);
        let shifted = v.wrapping_sub(t).shift_right(self.shift1);
        t.wrapping_add(shifted).shift_right(self.shift2)
    }

    /// Flooring division; identical to truncation for unsigned lanes.
    #[inline]
    pub fn apply_floor<const N: usize>(&self, v: Lanes<T, N>) -> Lanes<T, N> {
        self.apply_trunc(v)
    }
}

impl<T: SignedLane> SignedDivider<T> {
    /// Derive division parameters for `divisor`.
    pub fn try_new(divisor: T) -> Result<Self, DividerError> {
        T::derive(divisor)
    }

    /// Derive division parameters for `divisor`.
    ///
    /// # Panics
    ///
    /// A zero divisor is a precondition violation and panics.
    pub fn new(divisor: T) -> Self {
        match T::derive(divisor) {
            Ok(divider) => divider,
            Err(err) => panic!("{err}"),
        }
    }

    /// The divisor these parameters were derived from.
    pub fn divisor(&self) -> T {
        self.divisor
    }

    /// The shift used by the fast path when `|divisor|` is a power of two.
    pub fn pow2_shift(&self) -> Option<u32> {
        self.is_pow2.then_some(self.pow2_shift)
    }

    /// Truncating division of every lane by the divisor.
    ///
    /// `MIN / -1` saturates to `MIN` instead of overflowing.
    #[inline]
    pub fn apply_trunc<const N: usize>(&self, v: Lanes<T, N>) -> Lanes<T, N> {
        if self.is_pow2 {
            // Truncation toward zero must not form |MIN|: bias negative
            // lanes by 2^k - 1, then shift arithmetically.
            let mask = T::one().wrapping_shl(self.pow2_shift).wrapping_sub(&T::one());
            let bias = v.shift_right(T::BITS - 1).and(Lanes::splat(mask));
            let q = v.wrapping_add(bias).shift_right(self.pow2_shift);
            return if self.divisor.is_negative() {
                q.wrapping_neg()
            } else {
                q
            };
        }
        if self.multiplier == T::MUL_ONE && self.shift == 0 {
            // d == 1 or -1; Neg(MIN) wraps back to MIN, the documented
            // saturation.
            return if self.divisor.is_negative() {
                v.wrapping_neg()
            } else {
                v
            };
        }
        let q = v.wrapping_add(v.mul_hi(self.multiplier)).shift_right(self.shift);
        let q = q.wrapping_sub(v.shift_right(T::BITS - 1));
        if self.divisor.is_negative() {
            // Two's-complement negate: (q ^ -1) - (-1).
            let neg_one = Lanes::splat(T::zero().wrapping_sub(&T::one()));
            q.xor(neg_one).wrapping_sub(neg_one)
        } else {
            q
        }
    }

    /// Flooring division (quotient rounded toward negative infinity).
    ///
    /// `MIN / -1` saturates to `MIN`, as in the truncating path.
    #[inline]
    pub fn apply_floor<const N: usize>(&self, v: Lanes<T, N>) -> Lanes<T, N> {
        let q = self.apply_trunc(v);
        // q - 1 exactly where the remainder is non-zero and the signs
        // differ. The wrapping product can only alias `v` when the quotient
        // is exact.
        let d = Lanes::splat(self.divisor);
        let rem_nonzero = v.ne(q.wrapping_mul(d));
        let signs_differ = v.lt_zero().xor(d.lt_zero());
        let adjust = rem_nonzero
            .and(signs_differ)
            .select(Lanes::splat(T::one()), Lanes::splat(T::zero()));
        q.wrapping_sub(adjust)
    }
}

impl<T: UnsignedLane> From<T> for UnsignedDivider<T> {
    fn from(divisor: T) -> Self {
        Self::new(divisor)
    }
}

impl<T: SignedLane> From<T> for SignedDivider<T> {
    fn from(divisor: T) -> Self {
        Self::new(divisor)
    }
}

impl<T: UnsignedLane, const N: usize> Div<&UnsignedDivider<T>> for Lanes<T, N> {
    type Output = Lanes<T, N>;

    #[inline]
    fn div(self, divider: &UnsignedDivider<T>) -> Lanes<T, N> {
        divider.apply_trunc(self)
    }
}

impl<T: SignedLane, const N: usize> Div<&SignedDivider<T>> for Lanes<T, N> {
    type Output = Lanes<T, N>;

    #[inline]
    fn div(self, divider: &SignedDivider<T>) -> Lanes<T, N> {
        divider.apply_trunc(self)
    }
}

macro_rules! unsigned_divider {
    ($T:ty, lanes = $N:expr, mul = $Mul:ty, wide = $Wide:ty,
     magic = |$num:ident, $d:ident| $magic:expr) => {
        impl LaneInt for $T {
            const BITS: u32 = <$T>::BITS;
            type Mul = $Mul;
            const MUL_ONE: $Mul = 1;

            #[inline]
            fn mul_hi(self, multiplier: $Mul) -> $T {
                ((self as $Wide).wrapping_mul(multiplier as $Wide) >> <$T>::BITS) as $T
            }

            fn divide_slice(buf: &mut [$T], divisor: $T) {
                let divider = UnsignedDivider::new(divisor);
                crate::slice::apply_in_place::<$T, $N>(buf, |v| divider.apply_trunc(v));
            }

            fn floor_divide_slice(buf: &mut [$T], divisor: $T) {
                let divider = UnsignedDivider::new(divisor);
                crate::slice::apply_in_place::<$T, $N>(buf, |v| divider.apply_floor(v));
            }
        }

        impl UnsignedLane for $T {
            fn derive(divisor: $T) -> Result<UnsignedDivider<$T>, DividerError> {
                if divisor == 0 {
                    return Err(DividerError::Zero);
                }
                if bits::is_pow2(divisor) {
                    return Ok(UnsignedDivider {
                        divisor,
                        multiplier: 1,
                        shift1: 0,
                        shift2: 0,
                        is_pow2: true,
                        pow2_shift: divisor.trailing_zeros(),
                    });
                }
                if divisor == 1 {
                    return Ok(UnsignedDivider {
                        divisor,
                        multiplier: 1,
                        shift1: 0,
                        shift2: 0,
                        is_pow2: false,
                        pow2_shift: 0,
                    });
                }
                // 2^(l-1) < divisor <= 2^l
                let l = <$T>::BITS - (divisor - 1).leading_zeros();
                // 2^l - divisor; wraps to -divisor mod 2^BITS when l == BITS.
                let num = if l == <$T>::BITS {
                    (0 as $T).wrapping_sub(divisor)
                } else {
                    ((1 as $T) << l).wrapping_sub(divisor)
                };
                let multiplier = {
                    let $num = num;
                    let $d = divisor;
                    $magic
                };
                Ok(UnsignedDivider {
                    divisor,
                    multiplier,
                    shift1: 1,
                    shift2: l - 1,
                    is_pow2: false,
                    pow2_shift: 0,
                })
            }
        }

        impl Div<&UnsignedDivider<$T>> for $T {
            type Output = $T;

            #[inline]
            fn div(self, divider: &UnsignedDivider<$T>) -> $T {
                divider.apply_trunc(Lanes::<$T, 1>::splat(self)).into_array()[0]
            }
        }
    };
}

macro_rules! signed_divider {
    ($T:ty, unsigned = $U:ty, lanes = $N:expr, mul = $Mul:ty, wide = $Wide:ty,
     magic = |$sh:ident, $u:ident| $magic:expr) => {
        impl LaneInt for $T {
            const BITS: u32 = <$T>::BITS;
            type Mul = $Mul;
            const MUL_ONE: $Mul = 1;

            #[inline]
            fn mul_hi(self, multiplier: $Mul) -> $T {
                ((self as $Wide).wrapping_mul(multiplier as $Wide) >> <$T>::BITS) as $T
            }

            fn divide_slice(buf: &mut [$T], divisor: $T) {
                let divider = SignedDivider::new(divisor);
                crate::slice::apply_in_place::<$T, $N>(buf, |v| divider.apply_trunc(v));
            }

            fn floor_divide_slice(buf: &mut [$T], divisor: $T) {
                let divider = SignedDivider::new(divisor);
                crate::slice::apply_in_place::<$T, $N>(buf, |v| divider.apply_floor(v));
            }
        }

        impl SignedLane for $T {
            fn derive(divisor: $T) -> Result<SignedDivider<$T>, DividerError> {
                if divisor == 0 {
                    return Err(DividerError::Zero);
                }
                // |divisor| in the unsigned domain; |MIN| wraps to
                // 2^(BITS-1), itself a power of two.
                let abs_d = divisor.wrapping_abs() as $U;
                if bits::is_pow2(abs_d) {
                    return Ok(SignedDivider {
                        divisor,
                        multiplier: 1,
                        shift: 0,
                        is_pow2: true,
                        pow2_shift: abs_d.trailing_zeros(),
                    });
                }
                if abs_d == 1 {
                    return Ok(SignedDivider {
                        divisor,
                        multiplier: 1,
                        shift: 0,
                        is_pow2: false,
                        pow2_shift: 0,
                    });
                }
                if divisor == <$T>::MIN {
                    // The general formula holds for the wrapped magnitude
                    // with sh pinned to BITS - 2; it evaluates to the bit
                    // pattern of 2^(BITS-1) + 1.
                    let sh = <$T>::BITS - 2;
                    let multiplier = {
                        let $sh = sh;
                        let $u = abs_d;
                        $magic
                    };
                    return Ok(SignedDivider {
                        divisor,
                        multiplier,
                        shift: sh,
                        is_pow2: false,
                        pow2_shift: 0,
                    });
                }
                let sh = (<$T>::BITS - 1) - (abs_d - 1).leading_zeros();
                let multiplier = {
                    let $sh = sh;
                    let $u = abs_d;
                    $magic
                };
                Ok(SignedDivider {
                    divisor,
                    multiplier,
                    shift: sh,
                    is_pow2: false,
                    pow2_shift: 0,
                })
            }
        }

        impl Div<&SignedDivider<$T>> for $T {
            type Output = $T;

            #[inline]
            fn div(self, divider: &SignedDivider<$T>) -> $T {
                divider.apply_trunc(Lanes::<$T, 1>::splat(self)).into_array()[0]
            }
        }
    };
}

unsigned_divider!(u8, lanes = 16, mul = u16, wide = u16,
    magic = |num, d| ((((num as u32) << 8) / d as u32) + 1) as u16);
unsigned_divider!(u16, lanes = 8, mul = u32, wide = u32,
    magic = |num, d| (((num as u32) << 16) / d as u32) + 1);
unsigned_divider!(u32, lanes = 4, mul = u32, wide = u64,
    magic = |num, d| ((((num as u64) << 32) / d as u64) + 1) as u32);
unsigned_divider!(u64, lanes = 2, mul = u64, wide = u128,
    magic = |num, d| bits::div_hi_by(num, d) + 1);

signed_divider!(i8, unsigned = u8, lanes = 16, mul = i16, wide = i16,
    magic = |sh, u| (((256u32 << sh) / u as u32) + 1) as u8 as i8 as i16);
signed_divider!(i16, unsigned = u16, lanes = 8, mul = i32, wide = i32,
    magic = |sh, u| (((65536u32 << sh) / u as u32) + 1) as u16 as i16 as i32);
signed_divider!(i32, unsigned = u32, lanes = 4, mul = i32, wide = i64,
    magic = |sh, u| (((0x1_0000_0000u64 << sh) / u as u64) + 1) as u32 as i32);
signed_divider!(i64, unsigned = u64, lanes = 2, mul = i64, wide = i128,
    magic = |sh, u| (bits::div_hi_by(1u64 << sh, u) + 1) as i64);
