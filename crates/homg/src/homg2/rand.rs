//! Random points on a line (random weights, replay tokens).
//!
//! Purpose
//! - Deterministic input for property tests and benchmarks of the projective
//!   predicates: points with known line coordinates, arbitrary nonzero
//!   weights, and optional jitter off the line.
//!
//! Model
//! - Draw an anchor in `[-extent, extent]²` and a unit direction; place point
//!   `k` at `anchor + t_k·dir (+ jitter·normal)` and scale its triple by a
//!   weight of random sign and magnitude in `weight_range`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::HomgPoint2;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CollinearCfg {
    /// Half-width of the box holding the anchor and the line coordinates.
    pub extent: f64,
    /// Magnitude range of the homogeneous weight. Clamped to `>= 1e-6`.
    pub weight_range: (f64, f64),
    /// Maximal offset along the line normal. `0` keeps points exactly on the line.
    pub jitter: f64,
}

impl Default for CollinearCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            weight_range: (0.5, 4.0),
            jitter: 0.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A draw of points on a common line.
#[derive(Clone, Debug)]
pub struct CollinearSample {
    pub points: Vec<HomgPoint2<f64>>,
    /// Signed position of each point along `dir`, measured from `anchor`.
    pub params: Vec<f64>,
    pub anchor: Vector2<f64>,
    pub dir: Vector2<f64>,
}

/// Draw `n` points on a random line.
pub fn sample_collinear(cfg: CollinearCfg, n: usize, tok: ReplayToken) -> CollinearSample {
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs().max(1e-9);
    let (w_lo, w_hi) = {
        let lo = cfg.weight_range.0.abs().max(1e-6);
        (lo, cfg.weight_range.1.abs().max(lo))
    };
    let anchor = Vector2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e));
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let dir = Vector2::new(theta.cos(), theta.sin());
    let normal = Vector2::new(-dir.y, dir.x);

    let mut points = Vec::with_capacity(n);
    let mut params = Vec::with_capacity(n);
    for _ in 0..n {
        let t = rng.gen_range(-e..=e);
        let off = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.jitter.max(0.0);
        let p = anchor + dir * t + normal * off;
        let mut w = rng.gen_range(w_lo..=w_hi);
        if rng.gen::<bool>() {
            w = -w;
        }
        points.push(HomgPoint2::from_homg(p.x * w, p.y * w, w));
        params.push(t);
    }
    CollinearSample {
        points,
        params,
        anchor,
        dir,
    }
}

/// Embed the given line coordinates on the line `anchor + t·dir`, weights random.
pub fn embed_on_line(
    params: &[f64],
    anchor: Vector2<f64>,
    dir: Vector2<f64>,
    tok: ReplayToken,
) -> Vec<HomgPoint2<f64>> {
    let mut rng = tok.to_std_rng();
    params
        .iter()
        .map(|&t| {
            let p = anchor + dir * t;
            let w = rng.gen_range(0.25..4.0) * if rng.gen::<bool>() { 1.0 } else { -1.0 };
            HomgPoint2::from_homg(p.x * w, p.y * w, w)
        })
        .collect()
}
