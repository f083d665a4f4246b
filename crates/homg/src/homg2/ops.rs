//! Point–vector arithmetic.
//!
//! A vector is a displacement between finite points; it moves finite points
//! and leaves points at infinity where they are. `vector + point` is not
//! defined, only `point + vector`.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use nalgebra::Vector2;

use super::scalar::Coord;
use super::types::HomgPoint2;
use crate::error::{HomgError, HomgResult};

/// `f · v`, componentwise.
#[inline]
pub(crate) fn scale<T: Coord>(v: Vector2<T>, f: T) -> Vector2<T> {
    Vector2::new(v.x * f, v.y * f)
}

impl<T: Coord> HomgPoint2<T> {
    /// The vector from `other` to `self` (`self − other`).
    ///
    /// Both points must be finite.
    pub fn vector_from(&self, other: &Self) -> HomgResult<Vector2<T>> {
        if self.w() == T::zero() || other.w() == T::zero() {
            return Err(HomgError::PointAtInfinity);
        }
        Ok(Vector2::new(
            self.x() / self.w() - other.x() / other.w(),
            self.y() / self.w() - other.y() / other.w(),
        ))
    }

    /// `(x + vx·w, y + vy·w, w)`; a point at infinity comes back unchanged.
    #[inline]
    pub fn translate(&self, v: &Vector2<T>) -> Self {
        Self::from_homg(
            self.x() + v.x * self.w(),
            self.y() + v.y * self.w(),
            self.w(),
        )
    }
}

impl<T: Coord> Add<Vector2<T>> for HomgPoint2<T> {
    type Output = HomgPoint2<T>;
    #[inline]
    fn add(self, v: Vector2<T>) -> Self::Output {
        self.translate(&v)
    }
}

impl<T: Coord> Sub<Vector2<T>> for HomgPoint2<T> {
    type Output = HomgPoint2<T>;
    #[inline]
    fn sub(self, v: Vector2<T>) -> Self::Output {
        self.translate(&Vector2::new(-v.x, -v.y))
    }
}

impl<T: Coord> AddAssign<Vector2<T>> for HomgPoint2<T> {
    #[inline]
    fn add_assign(&mut self, v: Vector2<T>) {
        *self = self.translate(&v);
    }
}

impl<T: Coord> SubAssign<Vector2<T>> for HomgPoint2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vector2<T>) {
        *self = *self - v;
    }
}
