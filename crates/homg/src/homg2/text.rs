//! Text form `(x, y, w)`.
//!
//! Parsing is lenient about separators: commas and/or whitespace, optional
//! parentheses. Two components are nonhomogeneous (`w = 1`).

use std::fmt;
use std::str::FromStr;

use super::scalar::Coord;
use super::types::HomgPoint2;
use crate::error::HomgError;

impl<T: Coord + fmt::Display> fmt::Display for HomgPoint2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.w())
    }
}

impl<T: Coord + FromStr> FromStr for HomgPoint2<T> {
    type Err = HomgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.starts_with('('), trimmed.ends_with(')')) {
            (true, true) if trimmed.len() >= 2 => &trimmed[1..trimmed.len() - 1],
            (false, false) => trimmed,
            _ => return Err(HomgError::Parse(format!("unbalanced parentheses in {s:?}"))),
        };
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();
        let mut coords = Vec::with_capacity(3);
        for part in &parts {
            let v = part
                .parse::<T>()
                .map_err(|_| HomgError::Parse(format!("bad coordinate {part:?} in {s:?}")))?;
            coords.push(v);
        }
        match coords[..] {
            [x, y] => Ok(HomgPoint2::new(x, y)),
            [x, y, w] => Ok(HomgPoint2::from_homg(x, y, w)),
            _ => Err(HomgError::Parse(format!(
                "expected 2 or 3 coordinates, got {} in {s:?}",
                coords.len()
            ))),
        }
    }
}
