//! Projective predicates and constructions on homogeneous points.
//!
//! - `collinear`, `collinear_eps`: homogeneous 3×3 determinant test.
//! - `ratio`, `midpoint_at`, `midpoint`: affine frame on the line p1→p2.
//! - `centre`, `centre_of`: homogeneous centroids.
//! - `cross_ratio`, `cross_ratio_cfg`: projective invariant of four points,
//!   least-squares on nearly collinear input.
//!
//! Code cross-refs: `types::{HomgPoint2, HomgCfg}`, `ops::scale`

use nalgebra::{Matrix2, Matrix3, SymmetricEigen, Vector2, Vector3};

use super::ops::scale;
use super::scalar::{Coord, HalfCoord};
use super::types::{HomgCfg, HomgPoint2};
use crate::error::{HomgError, HomgResult};

/// True iff the three points lie on a common line.
///
/// Evaluates the determinant of the three coordinate triples directly on the
/// unnormalized coordinates and compares it with zero exactly. That is the
/// right test for integral coordinates; rounded input wants `collinear_eps`.
pub fn collinear<T: Coord>(p1: &HomgPoint2<T>, p2: &HomgPoint2<T>, p3: &HomgPoint2<T>) -> bool {
    let det = (p1.x() * p2.y() - p1.y() * p2.x()) * p3.w()
        + (p3.x() * p1.y() - p3.y() * p1.x()) * p2.w()
        + (p2.x() * p3.y() - p2.y() * p3.x()) * p1.w();
    det == T::zero()
}

/// Collinearity up to `eps`: `|det[p̂1 p̂2 p̂3]| <= eps` with every triple
/// scaled to unit norm, so the test does not depend on the weights chosen.
pub fn collinear_eps<T: Coord>(
    p1: &HomgPoint2<T>,
    p2: &HomgPoint2<T>,
    p3: &HomgPoint2<T>,
    eps: f64,
) -> bool {
    let m = Matrix3::from_columns(&[unit_triple(p1), unit_triple(p2), unit_triple(p3)]);
    m.determinant().abs() <= eps.max(0.0)
}

fn unit_triple<T: Coord>(p: &HomgPoint2<T>) -> Vector3<f64> {
    let v = Vector3::new(p.x().to_f64(), p.y().to_f64(), p.w().to_f64());
    let n = v.norm();
    if n > 0.0 {
        v / n
    } else {
        v
    }
}

/// Coordinate of `p3` in the affine frame where `p1` is 0 and `p2` is 1.
///
/// Pre: the points are collinear. The quotient of the parallel vectors
/// `p3 − p1` and `p2 − p1` is taken as `dot(a, b) / dot(b, b)`, which is also
/// the least-squares answer when `p3` is slightly off the line.
pub fn ratio<T: Coord>(
    p1: &HomgPoint2<T>,
    p2: &HomgPoint2<T>,
    p3: &HomgPoint2<T>,
) -> HomgResult<f64> {
    let a = p3.vector_from(p1)?;
    let b = p2.vector_from(p1)?;
    let (ax, ay) = (a.x.to_f64(), a.y.to_f64());
    let (bx, by) = (b.x.to_f64(), b.y.to_f64());
    let bb = bx * bx + by * by;
    if bb == 0.0 {
        return Err(HomgError::CoincidentPoints);
    }
    Ok((ax * bx + ay * by) / bb)
}

/// The point `p1 + f·(p2 − p1)`; `f = −1` reflects `p2` through `p1`.
pub fn midpoint_at<T: Coord>(
    p1: &HomgPoint2<T>,
    p2: &HomgPoint2<T>,
    f: T,
) -> HomgResult<HomgPoint2<T>> {
    let d = p2.vector_from(p1)?;
    Ok(*p1 + scale(d, f))
}

/// Midpoint of two finite points (`f = ½`).
pub fn midpoint<T: HalfCoord>(p1: &HomgPoint2<T>, p2: &HomgPoint2<T>) -> HomgResult<HomgPoint2<T>> {
    midpoint_at(p1, p2, T::half())
}

/// Centre of gravity of two points: `(x1·w2 + x2·w1, y1·w2 + y2·w1, 2·w1·w2)`.
///
/// A single point at infinity is not special-cased: the formula then yields a
/// point at infinity as well. Two points at infinity have no centre.
///
/// For integral coordinates `2·w1·w2` and the cross terms must fit the type;
/// overflow is not checked.
pub fn centre<T: Coord>(p1: &HomgPoint2<T>, p2: &HomgPoint2<T>) -> HomgResult<HomgPoint2<T>> {
    if p1.w() == T::zero() && p2.w() == T::zero() {
        return Err(HomgError::AllIdeal);
    }
    let two = T::one() + T::one();
    Ok(HomgPoint2::from_homg(
        p1.x() * p2.w() + p2.x() * p1.w(),
        p1.y() * p2.w() + p2.y() * p1.w(),
        p1.w() * p2.w() * two,
    ))
}

/// Centre of gravity of a non-empty set of finite points, `(Σx/w, Σy/w, n)`.
///
/// For integral coordinates with all weights 1 nothing is rounded. A count
/// the coordinate type cannot hold (e.g. 256 points as `i8`) is
/// `CountOverflow`.
pub fn centre_of<T: Coord>(points: &[HomgPoint2<T>]) -> HomgResult<HomgPoint2<T>> {
    if points.is_empty() {
        return Err(HomgError::EmptyInput);
    }
    let mut x = T::zero();
    let mut y = T::zero();
    for p in points {
        if p.w() == T::zero() {
            return Err(HomgError::PointAtInfinity);
        }
        x = x + p.x() / p.w();
        y = y + p.y() / p.w();
    }
    let n = T::from_usize(points.len()).ok_or(HomgError::CountOverflow(points.len()))?;
    Ok(HomgPoint2::from_homg(x, y, n))
}

/// Cross ratio `((p1−p3)(p2−p4)) / ((p1−p4)(p2−p3))` with default tolerances.
///
/// Equals the coordinate of `p4` in the projective frame where `p2` is 0,
/// `p3` is 1 and `p1` is infinity. See [`cross_ratio_cfg`].
pub fn cross_ratio<T: Coord>(
    p1: &HomgPoint2<T>,
    p2: &HomgPoint2<T>,
    p3: &HomgPoint2<T>,
    p4: &HomgPoint2<T>,
) -> HomgResult<f64> {
    cross_ratio_cfg(p1, p2, p3, p4, HomgCfg::default())
}

/// Cross ratio of four (nearly) collinear points.
///
/// The finite points are fitted with their principal-axis line and replaced
/// by their 1-D coordinates on it; exactly collinear input gives the exact
/// value, nearly collinear input a least-squares estimate. A point at
/// infinity sits at coordinate ∞ and its factors cancel; its direction must
/// match the fitted line within `cfg.eps_direction` (sine of the angle),
/// otherwise the configuration is `Degenerate`.
///
/// Errors with `Degenerate` when three or more points coincide (including
/// two points at infinity, which meet the fitted line in the same place).
/// A vanishing denominator with a nonzero numerator is the projective value
/// ∞ and is returned as `f64::INFINITY`.
pub fn cross_ratio_cfg<T: Coord>(
    p1: &HomgPoint2<T>,
    p2: &HomgPoint2<T>,
    p3: &HomgPoint2<T>,
    p4: &HomgPoint2<T>,
    cfg: HomgCfg,
) -> HomgResult<f64> {
    let t = line_coordinates(&[*p1, *p2, *p3, *p4], cfg)?;

    let finite: Vec<f64> = t.iter().flatten().copied().collect();
    let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tol = cfg.eps_coincide.max(0.0) * (hi - lo);
    let same = |i: usize, j: usize| match (t[i], t[j]) {
        (Some(a), Some(b)) => (a - b).abs() <= tol,
        _ => false,
    };
    for (i, j, k) in [(0, 1, 2), (0, 1, 3), (0, 2, 3), (1, 2, 3)] {
        if same(i, j) && same(j, k) && same(i, k) {
            return Err(HomgError::Degenerate("three or more points coincide"));
        }
    }

    // Factors touching a point at infinity tend to 1 pairwise.
    let diff = |i: usize, j: usize| match (t[i], t[j]) {
        (Some(a), Some(b)) if (a - b).abs() <= tol => 0.0,
        (Some(a), Some(b)) => a - b,
        _ => 1.0,
    };
    let num = diff(0, 2) * diff(1, 3);
    let den = diff(0, 3) * diff(1, 2);
    if den == 0.0 {
        if num == 0.0 {
            return Err(HomgError::Degenerate("cross ratio is 0/0"));
        }
        return Ok(f64::INFINITY);
    }
    Ok(num / den)
}

/// 1-D coordinates of the points along their best-fit line; `None` marks a
/// point at infinity.
fn line_coordinates<T: Coord>(
    pts: &[HomgPoint2<T>; 4],
    cfg: HomgCfg,
) -> HomgResult<[Option<f64>; 4]> {
    let tol = cfg.eps_ideal.max(0.0);
    let mut affine: [Option<Vector2<f64>>; 4] = [None; 4];
    let mut directions = Vec::new();
    for (slot, p) in affine.iter_mut().zip(pts) {
        let (x, y, w) = (p.x().to_f64(), p.y().to_f64(), p.w().to_f64());
        if w.abs() <= tol * x.abs() || w.abs() <= tol * y.abs() {
            let d = Vector2::new(x, y);
            let norm = d.norm();
            if !(norm.is_finite()) || norm <= 0.0 {
                return Err(HomgError::Degenerate("zero triple is not a point"));
            }
            directions.push(d / norm);
        } else {
            *slot = Some(Vector2::new(x / w, y / w));
        }
    }
    let finite: Vec<Vector2<f64>> = affine.iter().flatten().copied().collect();
    if finite.len() < 3 {
        return Err(HomgError::Degenerate("two or more points at infinity"));
    }

    let mean =
        finite.iter().fold(Vector2::<f64>::zeros(), |acc, p| acc + p) / finite.len() as f64;
    let mut cov = Matrix2::<f64>::zeros();
    for p in &finite {
        let d = p - mean;
        cov += d * d.transpose();
    }
    let eig = SymmetricEigen::new(cov);
    let k = if eig.eigenvalues[0] >= eig.eigenvalues[1] { 0 } else { 1 };
    let spread = eig.eigenvalues[k];
    if !(spread.is_finite()) || spread <= 0.0 {
        return Err(HomgError::Degenerate("three or more points coincide"));
    }
    let dir: Vector2<f64> = eig.eigenvectors.column(k).into_owned();
    let eps_dir = cfg.eps_direction.max(0.0);
    if directions.iter().any(|d| dir.perp(d).abs() > eps_dir) {
        return Err(HomgError::Degenerate("point at infinity off the fitted line"));
    }

    let mut t = [None; 4];
    for (out, p) in t.iter_mut().zip(affine) {
        *out = p.map(|p| dir.dot(&(p - mean)));
    }
    Ok(t)
}
