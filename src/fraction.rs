//! An exact rational number type: an integer numerator over a strictly
//! positive denominator, kept in lowest terms through every operation.

use num_traits::{FromPrimitive, Num, One, Signed, Zero};
use std::{
    fmt::Display,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};
use thiserror::Error;

/// The base type used. Fixed width: arithmetic on very large numerators and
/// denominators can overflow, with the usual i64 semantics.
pub type BaseInt = i64;

/// The single failure mode of fraction arithmetic: a denominator of zero,
/// whether supplied directly or produced by dividing by a zero fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    #[error("Denominator cannot be zero.")]
    ZeroDenominator,
}

/// Greatest common divisor of two non-negative integers, by iterative
/// Euclid. `gcd(a, 0) == a`, so in particular `gcd(0, n) == n`.
///
/// Callers pass magnitudes; negative inputs are outside the contract.
pub const fn gcd(a: BaseInt, b: BaseInt) -> BaseInt {
    let mut a = a;
    let mut b = b;
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    a
}

/// Least common multiple of two non-negative integers, `|a * b| / gcd(a, b)`.
///
/// At least one input must be non-zero. The arithmetic here only ever sees
/// denominators, which are never zero, but the guard keeps a misuse from
/// turning into a bare division-by-zero panic in debug builds.
pub fn lcm(a: BaseInt, b: BaseInt) -> BaseInt {
    debug_assert!(a != 0 || b != 0, "lcm(0, 0) is undefined");
    (a * b).abs() / gcd(a, b)
}

/// An exact rational number. The denominator is always strictly positive and
/// the pair is always in lowest terms, so equality and hashing work on the
/// fields directly.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Fraction {
    /// The numerator. Carries the sign of the whole fraction.
    numerator: BaseInt,
    /// The denominator. Strictly positive.
    denominator: BaseInt,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a new `Fraction`, canonicalizing its inputs: `new(6, 8)` is
    /// 3/4, `new(3, -4)` is -3/4. Errors if `denominator` is zero.
    pub fn new(numerator: BaseInt, denominator: BaseInt) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// Canonicalizes a pair with a known non-zero denominator: the sign moves
    /// to the numerator and both sides are divided by their gcd. Because
    /// `gcd(0, d) == d`, a zero numerator always collapses to 0/1.
    fn reduce(numerator: BaseInt, denominator: BaseInt) -> Self {
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let g = gcd(numerator.abs(), denominator);

        Self {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }

    /// The numerator (top) of the fraction.
    pub const fn numerator(&self) -> BaseInt {
        self.numerator
    }

    /// The denominator (bottom) of the fraction.
    pub const fn denominator(&self) -> BaseInt {
        self.denominator
    }

    /// Division that surfaces a zero divisor as an error instead of
    /// panicking. Dividing by the zero fraction puts a zero denominator in
    /// the cross product, so the constructor's guard catches it without any
    /// separate check here.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FractionError> {
        Self::new(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }

    /// Renders the fraction as a mixed number: `"3 1/2"` for 7/2, `"3"` for
    /// 3/1, `"0"` for zero, and the plain `Display` form for proper
    /// fractions. In mixed form only the integer part carries the sign:
    /// -7/2 is `"-3 1/2"`.
    pub fn to_mixed(&self) -> String {
        if self.numerator.abs() >= self.denominator {
            let whole = self.numerator / self.denominator;
            let rem = self.numerator % self.denominator;
            if rem != 0 {
                format!("{} {}/{}", whole, rem.abs(), self.denominator)
            } else {
                whole.to_string()
            }
        } else if self.numerator == 0 {
            "0".to_string()
        } else {
            self.to_string()
        }
    }

    /// Shared implementation of `+` and `-`: scale both sides to the least
    /// common multiple of the denominators, add the scaled numerators, and
    /// reduce.
    fn add_by_value(self, bn: BaseInt, bd: BaseInt) -> Self {
        let (an, ad) = (self.numerator, self.denominator);

        let nd = lcm(ad, bd);
        let ax = nd / ad;
        let bx = nd / bd;

        Self::reduce(an * ax + bn * bx, nd)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<BaseInt> for Fraction {
    fn from(value: BaseInt) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.numerator as f64 / value.denominator as f64
    }
}

impl From<Fraction> for f32 {
    fn from(value: Fraction) -> Self {
        value.numerator as f32 / value.denominator as f32
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_by_value(rhs.numerator, rhs.denominator)
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        // rhs.denominator is already positive, so negating the numerator
        // negates the fraction.
        self.add_by_value(-rhs.numerator, rhs.denominator)
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Fraction {
    type Output = Self;

    /// Note: like primitive integer division, this panics when `rhs` is the
    /// zero fraction. Use [`Fraction::checked_div`] for a `Result` instead.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(
            rhs.numerator != 0,
            "Cannot divide {} by the zero fraction",
            self
        );
        Self::reduce(
            self.numerator * rhs.denominator,
            self.denominator * rhs.numerator,
        )
    }
}

impl DivAssign for Fraction {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Rem for Fraction {
    type Output = Self;

    /// The remainder after truncating division, so `7/2 % 1/3` is 1/6.
    /// Panics when `rhs` is zero, like `Div`.
    fn rem(self, rhs: Self) -> Self::Output {
        let q = self / rhs;
        self - Self::from(q.numerator / q.denominator) * rhs
    }
}

impl RemAssign for Fraction {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl Num for Fraction {
    type FromStrRadixErr = <BaseInt as Num>::FromStrRadixErr;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        BaseInt::from_str_radix(str, radix).map(Self::from)
    }
}

impl Signed for Fraction {
    fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator,
        }
    }

    fn abs_sub(&self, other: &Self) -> Self {
        let diff = *self - *other;
        if diff.is_negative() {
            Self::ZERO
        } else {
            diff
        }
    }

    fn signum(&self) -> Self {
        Self::from(self.numerator.signum())
    }

    fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }
}

impl FromPrimitive for Fraction {
    fn from_i64(n: i64) -> Option<Self> {
        BaseInt::from_i64(n).map(Self::from)
    }

    fn from_u64(n: u64) -> Option<Self> {
        BaseInt::from_u64(n).map(Self::from)
    }
}

/// Builds a [`Fraction`] from literal parts, panicking on a zero
/// denominator. `frac!(6 / 8)` is 3/4; `frac!(2)` is 2/1.
#[macro_export]
macro_rules! frac {
    ($num:literal / $denom:expr) => {
        match $crate::fraction::Fraction::new($num, $denom) {
            Ok(f) => f,
            Err(e) => panic!("Invalid fraction {}/{}: {}", $num, $denom, e),
        }
    };
    ($num:expr) => {
        $crate::fraction::Fraction::from($num as $crate::fraction::BaseInt)
    };
}
