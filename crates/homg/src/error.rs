use thiserror::Error;

/// Precondition violations of the projective primitives.
///
/// Every operation reports these synchronously; none of them hands back a
/// division-by-zero artifact (`inf`/`NaN`) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HomgError {
    #[error("point at infinity where a finite point is required")]
    PointAtInfinity,
    #[error("reference points coincide")]
    CoincidentPoints,
    #[error("centroid of an empty point set")]
    EmptyInput,
    #[error("point count {0} does not fit the coordinate type")]
    CountOverflow(usize),
    #[error("centroid of two points at infinity")]
    AllIdeal,
    #[error("degenerate configuration: {0}")]
    Degenerate(&'static str),
    #[error("cannot parse homogeneous point: {0}")]
    Parse(String),
}

pub type HomgResult<T> = Result<T, HomgError>;
