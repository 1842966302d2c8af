use std::fmt;

use crate::matrix::NO_EDGE_GLYPH;

/// Total weight of a shortest path.
///
/// Variant order makes every finite cost compare less than `Unreachable`.
/// Finite costs are `u128` so a sum of `u64` weights never wraps or clamps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Cost {
    Finite(u128),
    Unreachable,
}

impl Cost {
    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<u128> {
        match self {
            Self::Finite(c) => Some(c),
            Self::Unreachable => None,
        }
    }
}

impl From<Option<u128>> for Cost {
    fn from(value: Option<u128>) -> Self {
        value.map_or(Self::Unreachable, Self::Finite)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(c) => write!(f, "{c}"),
            Self::Unreachable => f.write_str(NO_EDGE_GLYPH),
        }
    }
}

/// Outcome of one query: the cost and the vertices from start to destination
/// inclusive. `path` is empty exactly when `cost` is `Unreachable`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathResult {
    pub cost: Cost,
    pub path: Vec<usize>,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            cost: Cost::Unreachable,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_reachable()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn labels(&self) -> PathLabels<'_> {
        PathLabels(&self.path)
    }
}

/// Renders 0-based vertices as `v1->v4->v5`.
#[derive(Clone, Copy, Debug)]
pub struct PathLabels<'a>(pub &'a [usize]);

impl fmt::Display for PathLabels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("->")?;
            }
            write!(f, "v{}", v + 1)?;
        }
        Ok(())
    }
}
