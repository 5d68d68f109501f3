use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Unfinished,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A game session: the generated minefield plus the player's overlay on top of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    minefield: Minefield,
    overlay: Array2<Overlay>,
}

impl Board {
    pub fn new(minefield: Minefield) -> Self {
        let size = usize::from(minefield.size());
        Self {
            minefield,
            overlay: Array2::default((size, size)),
        }
    }

    pub fn size(&self) -> Coord {
        self.minefield.size()
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    pub fn marked_count(&self) -> CellCount {
        self.overlay
            .iter()
            .filter(|&&overlay| overlay == Overlay::Marked)
            .count() as CellCount
    }

    /// Mines not accounted for by marks, negative when the player over-marks.
    pub fn mines_left(&self) -> isize {
        self.total_mines() as isize - self.marked_count() as isize
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.minefield.validate_coords(coords)
    }

    pub fn overlay_at(&self, coords: Coord2) -> Overlay {
        self.overlay[coords.to_nd_index()]
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        CellView::from_parts(self.overlay_at(coords), self.minefield[coords])
    }

    /// Toggles the mark on a non-visible cell.
    ///
    /// Panics when `coords` is off the board, check with [`Board::validate_coords`] first.
    pub fn mark(&mut self, coords: Coord2) -> MarkOutcome {
        use MarkOutcome::*;
        use Overlay::*;

        let overlay = &mut self.overlay[coords.to_nd_index()];
        match *overlay {
            Hidden => {
                *overlay = Marked;
                Changed
            }
            Marked => {
                *overlay = Hidden;
                Changed
            }
            Visible => NoChange,
        }
    }

    /// Makes a hidden cell visible. Revealing an empty cell floods through its connected empty
    /// region, the numbered cells bordering it become visible but do not propagate. Marked and
    /// already visible cells are left alone.
    ///
    /// Panics when `coords` is off the board, check with [`Board::validate_coords`] first.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.overlay_at(coords) != Overlay::Hidden {
            return RevealOutcome::NoChange;
        }

        let cell = self.minefield[coords];
        self.overlay[coords.to_nd_index()] = Overlay::Visible;
        log::debug!("Reveal cell at {:?}: {:?}", coords, cell);

        if cell.is_mine() {
            return RevealOutcome::HitMine;
        }

        let mut revealed: CellCount = 1;
        if cell.is_empty() {
            let mut to_visit: VecDeque<_> = self.minefield.iter_neighbors(coords).collect();
            log::trace!("Starting flood-fill from {:?}", coords);

            while let Some(visit_coords) = to_visit.pop_front() {
                // visible cells were already handled, marks stop the flood
                if self.overlay_at(visit_coords) != Overlay::Hidden {
                    continue;
                }

                self.overlay[visit_coords.to_nd_index()] = Overlay::Visible;
                revealed += 1;

                let visit_cell = self.minefield[visit_coords];
                log::trace!("Flood revealed {:?}: {:?}", visit_coords, visit_cell);
                if visit_cell.is_empty() {
                    to_visit.extend(
                        self.minefield
                            .iter_neighbors(visit_coords)
                            .filter(|&pos| self.overlay_at(pos) == Overlay::Hidden),
                    );
                }
            }
        }

        RevealOutcome::Revealed(revealed)
    }

    /// Derives the game state from scratch. A visible mine always means a loss, otherwise the
    /// game goes on while any safe cell remains hidden. Marks never matter.
    pub fn status(&self) -> GameState {
        let cells = self.minefield.cells();

        let lost = self
            .overlay
            .iter()
            .zip(cells.iter())
            .any(|(&overlay, cell)| overlay == Overlay::Visible && cell.is_mine());
        if lost {
            return GameState::Lost;
        }

        let unfinished = self
            .overlay
            .iter()
            .zip(cells.iter())
            .any(|(&overlay, cell)| overlay == Overlay::Hidden && !cell.is_mine());
        if unfinished {
            GameState::Unfinished
        } else {
            GameState::Won
        }
    }
}
