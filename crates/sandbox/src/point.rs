//! Grid coordinates.

use std::fmt;

/// Row/column offsets of the four cardinal neighbors: up, right, down, left.
pub const CARDINALS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// A (row, col) cell address. Row 0 is the top of the grid. Signed so that
/// neighbor offsets may step off the grid and be rejected by a bounds check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct SandboxPoint {
    pub row: i32,
    pub col: i32,
}

impl SandboxPoint {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The four cardinal neighbors, in [`CARDINALS`] order.
    pub fn cardinal_neighbors(self) -> impl Iterator<Item = SandboxPoint> {
        CARDINALS.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(i32, i32)> for SandboxPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for SandboxPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
