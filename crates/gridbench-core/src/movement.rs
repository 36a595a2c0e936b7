//! Diagonal-movement policies.

use std::fmt;
use std::str::FromStr;

/// Rule deciding when a diagonal step between two cells is permitted.
///
/// A diagonal step from `p` to `p + (dx, dy)` is flanked by the two
/// orthogonal cells `p + (dx, 0)` and `p + (0, dy)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DiagonalMovement {
    /// Diagonal steps are allowed regardless of the flanking cells.
    Always,
    /// Orthogonal steps only.
    Never,
    /// Allowed when at least one flanking cell is walkable (corner cutting).
    #[default]
    IfAtMostOneObstacle,
    /// Allowed only when both flanking cells are walkable.
    OnlyWhenNoObstacles,
}

impl DiagonalMovement {
    pub const ALL: [DiagonalMovement; 4] = [
        DiagonalMovement::Always,
        DiagonalMovement::Never,
        DiagonalMovement::IfAtMostOneObstacle,
        DiagonalMovement::OnlyWhenNoObstacles,
    ];

    /// Whether any diagonal step can ever be taken under this policy.
    #[inline]
    pub fn allows_diagonals(self) -> bool {
        self != DiagonalMovement::Never
    }

    /// Decide a diagonal step given the walkability of its two flanking
    /// orthogonal cells.
    #[inline]
    pub fn permits(self, flank_a: bool, flank_b: bool) -> bool {
        match self {
            DiagonalMovement::Always => true,
            DiagonalMovement::Never => false,
            DiagonalMovement::IfAtMostOneObstacle => flank_a || flank_b,
            DiagonalMovement::OnlyWhenNoObstacles => flank_a && flank_b,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagonalMovement::Always => "always",
            DiagonalMovement::Never => "never",
            DiagonalMovement::IfAtMostOneObstacle => "if-at-most-one-obstacle",
            DiagonalMovement::OnlyWhenNoObstacles => "only-when-no-obstacles",
        }
    }
}

impl fmt::Display for DiagonalMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagonal movement policy '{0}'")]
pub struct UnknownMovement(pub String);

impl FromStr for DiagonalMovement {
    type Err = UnknownMovement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagonalMovement::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMovement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gating_table() {
        use DiagonalMovement::*;
        for (a, b) in [(true, true), (true, false), (false, true), (false, false)] {
            assert!(Always.permits(a, b));
            assert!(!Never.permits(a, b));
        }
        assert!(IfAtMostOneObstacle.permits(true, false));
        assert!(IfAtMostOneObstacle.permits(false, true));
        assert!(!IfAtMostOneObstacle.permits(false, false));
        assert!(OnlyWhenNoObstacles.permits(true, true));
        assert!(!OnlyWhenNoObstacles.permits(true, false));
    }

    #[test]
    fn parse_names() {
        for m in DiagonalMovement::ALL {
            assert_eq!(m.as_str().parse::<DiagonalMovement>(), Ok(m));
        }
        assert!("sideways".parse::<DiagonalMovement>().is_err());
    }
}
