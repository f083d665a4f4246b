//! Coordinate scalar traits.
//!
//! `Coord` is the minimal capability set the homogeneous point needs:
//! ring arithmetic, division, negation, ordering and an absolute value,
//! plus a lossy view as `f64` for ratio-valued results.
//!
//! Implemented for `f32`, `f64` and the signed integers. Unsigned types are
//! excluded because vectors must be negatable.
//!
//! Integer arithmetic is not checked: products of coordinates that leave the
//! range of the type overflow (a panic in debug builds). Keep integral
//! coordinates small enough for the degree-3 products of `collinear` and the
//! degree-2 products of `centre` and `ideal`.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type of a homogeneous coordinate.
pub trait Coord:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;
    /// Multiplicative identity.
    fn one() -> Self;
    /// Conversion of a point count, used as the weight of a centroid.
    /// `None` when `n` is out of range for the type.
    fn from_usize(n: usize) -> Option<Self>;
    fn abs(self) -> Self;
    /// Lossy conversion used by ratio-valued results.
    fn to_f64(self) -> f64;
}

/// A coordinate type that can represent ½, so the default midpoint exists.
pub trait HalfCoord: Coord {
    fn half() -> Self;
}

macro_rules! impl_coord {
    ($n:ident => $from_usize:expr; $($t:ty),*) => {$(
        impl Coord for $t {
            #[inline]
            fn zero() -> Self {
                0 as $t
            }
            #[inline]
            fn one() -> Self {
                1 as $t
            }
            #[inline]
            fn from_usize($n: usize) -> Option<Self> {
                $from_usize
            }
            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_coord!(n => Some(n as Self); f32, f64);
impl_coord!(n => Self::try_from(n).ok(); i8, i16, i32, i64, i128, isize);

impl HalfCoord for f32 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}

impl HalfCoord for f64 {
    #[inline]
    fn half() -> Self {
        0.5
    }
}
