//! Homogeneous-coordinate 2D points and projective primitives.
//!
//! The algebraic layer under lines, conics and projective transforms:
//! points at infinity, collinearity, affine ratios, centroids and the cross
//! ratio, with explicit errors for every degenerate configuration.
//!
//! Vectors (differences of finite points) are `nalgebra::Vector2<T>`.

pub mod error;
pub mod homg2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HomgError, HomgResult};
pub use homg2::{HomgCfg, HomgPoint2};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{HomgError, HomgResult};
    pub use crate::homg2::rand::{sample_collinear, CollinearCfg, ReplayToken};
    pub use crate::homg2::{
        centre, centre_of, collinear, collinear_eps, cross_ratio, cross_ratio_cfg, is_ideal,
        midpoint, midpoint_at, ratio, Coord, HalfCoord, HomgCfg, HomgPoint2,
    };
    pub use nalgebra::Vector2 as Vec2;
}
