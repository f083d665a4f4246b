use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use homg::homg2::{
    centre, centre_of, collinear, collinear_eps, cross_ratio, midpoint_at, ratio, HomgCfg,
};
use homg::HomgPoint2;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

type Pt = HomgPoint2<f64>;

#[derive(Parser)]
#[command(name = "homg")]
#[command(about = "Projective primitives on homogeneous 2D points")]
#[command(after_help = "Points are written \"(x, y, w)\" or \"(x, y)\" (w = 1).")]
struct Cmd {
    /// Also write the JSON result to this file, with a provenance sidecar
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Is the point at infinity: |w| <= tol·|x| or |w| <= tol·|y|
    Ideal {
        point: Pt,
        #[arg(long, default_value_t = 0.0)]
        tol: f64,
    },
    /// Do three points lie on a common line (exact unless --eps is given)
    Collinear {
        p1: Pt,
        p2: Pt,
        p3: Pt,
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Coordinate of P3 in the affine frame P1 = 0, P2 = 1
    Ratio { p1: Pt, p2: Pt, p3: Pt },
    /// The point P1 + f·(P2 − P1)
    Midpoint {
        p1: Pt,
        p2: Pt,
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        f: f64,
    },
    /// Centre of gravity of two points, or of a point set
    Centre {
        points: Vec<Pt>,
        /// CSV table with columns x, y and optionally w
        #[arg(long, conflicts_with = "points")]
        input: Option<PathBuf>,
    },
    /// Cross ratio ((P1−P3)(P2−P4)) / ((P1−P4)(P2−P3))
    CrossRatio { p1: Pt, p2: Pt, p3: Pt, p4: Pt },
}

#[derive(Serialize)]
struct PointOut {
    homg: [f64; 3],
    text: String,
    ideal: bool,
}

impl From<Pt> for PointOut {
    fn from(p: Pt) -> Self {
        Self {
            homg: [p.x(), p.y(), p.w()],
            text: p.to_string(),
            ideal: p.ideal(0.0),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let (op, params, result) = match cmd.action {
        Action::Ideal { point, tol } => {
            tracing::info!(%point, tol, "ideal");
            let params = json!({ "point": point.to_string(), "tol": tol });
            ("ideal", params, json!(point.ideal(tol)))
        }
        Action::Collinear { p1, p2, p3, eps } => {
            tracing::info!(%p1, %p2, %p3, eps = ?eps, "collinear");
            let params = json!({ "points": texts(&[p1, p2, p3]), "eps": eps });
            let on_line = match eps {
                Some(eps) => collinear_eps(&p1, &p2, &p3, eps),
                None => collinear(&p1, &p2, &p3),
            };
            ("collinear", params, json!(on_line))
        }
        Action::Ratio { p1, p2, p3 } => {
            tracing::info!(%p1, %p2, %p3, "ratio");
            warn_if_not_collinear(&[p1, p2, p3]);
            let r = ratio(&p1, &p2, &p3).context("ratio")?;
            ("ratio", json!({ "points": texts(&[p1, p2, p3]) }), json!(r))
        }
        Action::Midpoint { p1, p2, f } => {
            tracing::info!(%p1, %p2, f, "midpoint");
            let m = midpoint_at(&p1, &p2, f).context("midpoint")?;
            let params = json!({ "points": texts(&[p1, p2]), "f": f });
            ("midpoint", params, point_json(m)?)
        }
        Action::Centre { points, input } => {
            let pts = match input {
                Some(path) => points::read_points_csv(&path)?,
                None => points,
            };
            tracing::info!(n = pts.len(), "centre");
            let c = match pts.as_slice() {
                [a, b] => centre(a, b).context("centre of two points")?,
                _ => centre_of(&pts).context("centre of point set")?,
            };
            ("centre", json!({ "points": texts(&pts) }), point_json(c)?)
        }
        Action::CrossRatio { p1, p2, p3, p4 } => {
            tracing::info!(%p1, %p2, %p3, %p4, "cross_ratio");
            warn_if_not_collinear(&[p1, p2, p3, p4]);
            let cr = cross_ratio(&p1, &p2, &p3, &p4).context("cross ratio")?;
            let params = json!({ "points": texts(&[p1, p2, p3, p4]) });
            // JSON has no infinity.
            let value = if cr.is_finite() { json!(cr) } else { json!("inf") };
            ("cross-ratio", params, value)
        }
    };
    emit(cmd.out.as_deref(), op, params, result)
}

fn texts(pts: &[Pt]) -> Vec<String> {
    pts.iter().map(|p| p.to_string()).collect()
}

fn point_json(p: Pt) -> Result<Value> {
    Ok(serde_json::to_value(PointOut::from(p))?)
}

fn warn_if_not_collinear(pts: &[Pt]) {
    let eps = HomgCfg::default().eps_collinear;
    let first = pts[0];
    for pair in pts[1..].windows(2) {
        if !collinear_eps(&first, &pair[0], &pair[1], eps) {
            tracing::warn!(
                points = ?texts(pts),
                "points are not collinear; using least-squares line"
            );
            return;
        }
    }
}

fn emit(out: Option<&Path>, op: &'static str, params: Value, result: Value) -> Result<()> {
    let doc = json!({ "op": op, "result": result });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    let Some(out) = out else {
        return Ok(());
    };
    if out.as_os_str().is_empty() {
        bail!("--out must not be empty");
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let sidecar = provenance::write_sidecar(out, provenance::Payload::new(op, params))?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    Ok(())
}
