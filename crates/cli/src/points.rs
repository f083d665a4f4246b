//! Point tables: CSV with columns `x`, `y` and optionally `w`.

use anyhow::{bail, Context, Result};
use homg::HomgPoint2;
use polars::prelude::*;
use std::path::Path;

/// Read a CSV point table. A missing `w` column means every weight is 1.
pub fn read_points_csv(path: &Path) -> Result<Vec<HomgPoint2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "point_table_shape");

    let x = float_column(&df, "x")?;
    let y = float_column(&df, "y")?;
    let w = if df.column("w").is_ok() {
        float_column(&df, "w")?
    } else {
        vec![1.0; x.len()]
    };
    if x.len() != y.len() || x.len() != w.len() {
        bail!("ragged point table {}", path.display());
    }
    Ok(x.into_iter()
        .zip(y)
        .zip(w)
        .map(|((x, y), w)| HomgPoint2::from_homg(x, y, w))
        .collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("empty {name:?} in row {row}")))
        .collect()
}
