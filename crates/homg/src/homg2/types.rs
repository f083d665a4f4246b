//! The homogeneous point value type and its tolerances.
//!
//! - `HomgCfg`: centralizes epsilons for the tolerance-aware predicates.
//! - `HomgPoint2`: projective point `[x : y : w]` stored unnormalized.
//!
//! Code cross-refs: `geometry::{collinear_eps, cross_ratio_cfg}`, `ops`

use nalgebra::{Point2, Vector3};

use super::scalar::Coord;
use crate::error::{HomgError, HomgResult};

/// Tolerances for the predicates that work on rounded input.
#[derive(Clone, Copy, Debug)]
pub struct HomgCfg {
    /// Bound on the determinant of three unit-normalized triples in `collinear_eps`.
    pub eps_collinear: f64,
    /// Two line coordinates closer than `eps_coincide * spread` coincide.
    pub eps_coincide: f64,
    /// Tolerance of the ideal-point test applied inside the cross ratio.
    pub eps_ideal: f64,
    /// Largest sine of the angle between a point at infinity and the fitted
    /// line in the cross ratio.
    pub eps_direction: f64,
}

impl Default for HomgCfg {
    fn default() -> Self {
        Self {
            eps_collinear: 1e-12,
            eps_coincide: 1e-12,
            eps_ideal: 0.0,
            eps_direction: 1e-9,
        }
    }
}

/// Homogeneous 2D point `[x : y : w]`.
///
/// Nonhomogeneous coordinates are `(x/w, y/w)` for `w ≠ 0`; `w = 0` is a point
/// at infinity (a direction). Coordinates are never normalized implicitly, so
/// the derived `PartialEq` compares raw triples: `(1, 2, 1)` and `(2, 4, 2)`
/// are the same projective point but compare unequal. Use
/// [`HomgPoint2::projective_eq`] for projective equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomgPoint2<T> {
    x: T,
    y: T,
    w: T,
}

impl<T: Coord> Default for HomgPoint2<T> {
    /// The nonhomogeneous origin `(0, 0, 1)`.
    fn default() -> Self {
        Self::from_homg(T::zero(), T::zero(), T::one())
    }
}

impl<T: Coord> HomgPoint2<T> {
    /// Point from nonhomogeneous coordinates (`w = 1`).
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self::from_homg(x, y, T::one())
    }

    #[inline]
    pub fn from_homg(x: T, y: T, w: T) -> Self {
        Self { x, y, w }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }
    #[inline]
    pub fn y(&self) -> T {
        self.y
    }
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    #[inline]
    pub fn set(&mut self, x: T, y: T, w: T) {
        self.x = x;
        self.y = y;
        self.w = w;
    }

    /// True iff the point is at infinity within `tol`:
    /// `|w| <= tol·|x|` or `|w| <= tol·|y|`.
    ///
    /// The two axes are tested independently, so a small `w` next to one large
    /// coordinate suffices even when the other coordinate is of the same order
    /// as `w`. A negative `tol` is treated as zero; with `tol = 0` only `w == 0`
    /// qualifies. For integral coordinates `tol·|x|` and `tol·|y|` must fit the
    /// type; overflow is not checked.
    #[inline]
    pub fn ideal(&self, tol: T) -> bool {
        let tol = if tol < T::zero() { T::zero() } else { tol };
        let aw = self.w.abs();
        aw <= tol * self.x.abs() || aw <= tol * self.y.abs()
    }

    /// Projective equality: the triples are nonzero multiples of each other.
    ///
    /// The all-zero triple is not a projective point and equals nothing.
    pub fn projective_eq(&self, other: &Self) -> bool {
        if self.is_zero_triple() || other.is_zero_triple() {
            return false;
        }
        self.x * other.w == other.x * self.w
            && self.y * other.w == other.y * self.w
            && self.x * other.y == other.x * self.y
    }

    #[inline]
    fn is_zero_triple(&self) -> bool {
        self.x == T::zero() && self.y == T::zero() && self.w == T::zero()
    }

    /// Same point rescaled to `w = 1`.
    pub fn normalized(&self) -> HomgResult<Self> {
        let p = self.to_point()?;
        Ok(Self::new(p.x, p.y))
    }

    /// Nonhomogeneous coordinates `(x/w, y/w)`.
    pub fn to_point(&self) -> HomgResult<Point2<T>> {
        if self.w == T::zero() {
            return Err(HomgError::PointAtInfinity);
        }
        Ok(Point2::new(self.x / self.w, self.y / self.w))
    }

    #[inline]
    pub fn from_point(p: Point2<T>) -> Self {
        Self::new(p.x, p.y)
    }

    #[inline]
    pub fn to_vector3(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.w)
    }

    #[inline]
    pub fn from_vector3(v: Vector3<T>) -> Self {
        Self::from_homg(v.x, v.y, v.z)
    }
}

impl<T: Coord> From<Point2<T>> for HomgPoint2<T> {
    fn from(p: Point2<T>) -> Self {
        Self::from_point(p)
    }
}

impl<T: Coord> From<Vector3<T>> for HomgPoint2<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::from_vector3(v)
    }
}

/// Free-function form of [`HomgPoint2::ideal`].
#[inline]
pub fn is_ideal<T: Coord>(p: &HomgPoint2<T>, tol: T) -> bool {
    p.ideal(tol)
}
