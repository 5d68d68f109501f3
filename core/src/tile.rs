use serde::{Deserialize, Serialize};

/// Hidden truth of a cell, fixed at generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Mine,
    /// Number of mines in the Moore neighborhood, `0..=8`.
    Count(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Whether revealing this cell floods into its neighbors.
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Count(0))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Count(0)
    }
}

/// Player-facing visibility of a cell, independent of its truth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Hidden,
    Visible,
    Marked,
}

impl Overlay {
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What a renderer shows for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Marked,
    Mine,
    Count(u8),
    Empty,
}

impl CellView {
    pub const fn from_parts(overlay: Overlay, cell: Cell) -> Self {
        match (overlay, cell) {
            (Overlay::Hidden, _) => Self::Hidden,
            (Overlay::Marked, _) => Self::Marked,
            (Overlay::Visible, Cell::Mine) => Self::Mine,
            (Overlay::Visible, Cell::Count(0)) => Self::Empty,
            (Overlay::Visible, Cell::Count(count)) => Self::Count(count),
        }
    }
}
