//! Exact rational arithmetic: the [`Fraction`] value type plus the integer
//! [`gcd`]/[`lcm`] helpers it is built on.

pub mod fraction;

pub use fraction::{gcd, lcm, BaseInt, Fraction, FractionError};
