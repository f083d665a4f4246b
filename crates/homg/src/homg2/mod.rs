//! Homogeneous 2D points and projective primitives.
//!
//! Purpose
//! - Provide the point value type `HomgPoint2<T>` (`[x : y : w]`, never
//!   normalized implicitly) and the predicates built directly on it:
//!   ideal-point test, collinearity, affine ratio, midpoint, centroids and the
//!   cross ratio.
//! - Keep every degenerate case explicit: operations that need finite points
//!   or distinct points return `HomgError` instead of `inf`/`NaN`.
//!
//! Numeric policy
//! - Exact predicates (`ideal(0)`, `collinear`) compare with zero exactly and
//!   are meant for integral coordinates; rounded input goes through the
//!   `*_eps`/`*_cfg` variants driven by `HomgCfg`.
//!
//! Code cross-refs: `HomgPoint2`, `HomgCfg`, `Coord`, `cross_ratio_cfg`

mod geometry;
mod ops;
pub mod rand;
mod scalar;
mod text;
mod types;

pub use geometry::{
    centre, centre_of, collinear, collinear_eps, cross_ratio, cross_ratio_cfg, midpoint,
    midpoint_at, ratio,
};
pub use scalar::{Coord, HalfCoord};
pub use types::{is_ideal, HomgCfg, HomgPoint2};
