//! The movement cost model shared by the searches and by path scoring.
//!
//! Stepping between two adjacent cells costs the average of their weights.
//! Searches accumulate costs in half-units (`w_a + w_b`) so that the open
//! set orders exact integers; [`path_cost`] reports the same quantity in
//! whole units.

use std::fmt;
use std::str::FromStr;

use gridbench_core::Cell;

/// Cost of a step between cells of weight `a` and `b`, in half-units.
#[inline]
pub fn step_cost_halves(a: u8, b: u8) -> i32 {
    i32::from(a) + i32::from(b)
}

/// Cost of a step between two adjacent cells.
#[inline]
pub fn step_cost(a: Cell, b: Cell) -> f64 {
    f64::from(step_cost_halves(a.weight, b.weight)) / 2.0
}

/// Which consecutive pairs of a path contribute to its cost.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PathCostMode {
    /// Every step of the path.
    #[default]
    Full,
    /// Every step except the last one. Matches benchmark numbers recorded
    /// by earlier tooling, which stopped one segment short.
    Legacy,
}

impl PathCostMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PathCostMode::Full => "full",
            PathCostMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PathCostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path cost mode '{0}', expected 'full' or 'legacy'")]
pub struct UnknownCostMode(pub String);

impl FromStr for PathCostMode {
    type Err = UnknownCostMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(PathCostMode::Full),
            "legacy" => Ok(PathCostMode::Legacy),
            other => Err(UnknownCostMode(other.to_string())),
        }
    }
}

/// Total cost of walking `path`. Empty and single-cell paths cost nothing.
pub fn path_cost(path: &[Cell], mode: PathCostMode) -> f64 {
    let steps = match mode {
        PathCostMode::Full => path.len().saturating_sub(1),
        PathCostMode::Legacy => path.len().saturating_sub(2),
    };
    let halves: i64 = path
        .windows(2)
        .take(steps)
        .map(|w| i64::from(step_cost_halves(w[0].weight, w[1].weight)))
        .sum();
    halves as f64 / 2.0
}
