/// Single coordinate axis, used for the board side and for positions on it.
pub type Coord = u8;

/// Area-sized count, used for mine counts and cell totals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, `x` being the column.
pub type Coord2 = (Coord, Coord);

/// Largest supported board side, every column gets a single letter label.
pub const MAX_SIZE: Coord = 26;

/// Largest supported board area.
pub const MAX_AREA: CellCount = mult(MAX_SIZE, MAX_SIZE);

/// Maps `(x, y)` coordinates onto the `[row, column]` index of a row-major `Array2`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Coordinates of the row-major linear index `y * size + x` on a square board of side `size`.
pub const fn from_linear_index(index: usize, size: Coord) -> Coord2 {
    let size = size as usize;
    ((index % size) as Coord, (index / size) as Coord)
}

/// Iterates every position of a square board of side `size`, row by row.
pub fn iter_coords(size: Coord) -> impl Iterator<Item = Coord2> {
    (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Moves `coords` by `delta`, only returning positions that stay on a board of side `size`.
fn apply_delta(coords: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let next_x = coords.0.checked_add_signed(delta.0)?;
    let next_y = coords.1.checked_add_signed(delta.1)?;
    (next_x < size && next_y < size).then_some((next_x, next_y))
}

/// Moore neighborhood of a cell, clipped at the board edges. The center is never yielded.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(pos) = apply_delta(self.center, delta, self.size) {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// The clipped 3x3 block around `(x, y)`, as a half-open range walk, minus the center.
    fn clipped_block(x: Coord, y: Coord, size: Coord) -> Vec<Coord2> {
        let mut out = Vec::new();
        for j in y.saturating_sub(1)..(y + 2).min(size) {
            for i in x.saturating_sub(1)..(x + 2).min(size) {
                if (i, j) != (x, y) {
                    out.push((i, j));
                }
            }
        }
        out
    }

    #[test]
    fn neighbors_match_clipped_block_for_every_size() {
        for size in 1..=MAX_SIZE {
            for (x, y) in iter_coords(size) {
                let mut neighbors: Vec<_> = NeighborIter::new((x, y), size).collect();
                let mut block = clipped_block(x, y, size);
                neighbors.sort_unstable();
                block.sort_unstable();
                assert_eq!(neighbors, block, "size {size} at ({x}, {y})");
            }
        }
    }

    #[test]
    fn corner_edge_and_inner_neighbor_counts() {
        assert_eq!(NeighborIter::new((0, 0), 1).count(), 0);
        assert_eq!(NeighborIter::new((0, 0), 3).count(), 3);
        assert_eq!(NeighborIter::new((1, 0), 3).count(), 5);
        assert_eq!(NeighborIter::new((1, 1), 3).count(), 8);
        assert_eq!(NeighborIter::new((25, 25), MAX_SIZE).count(), 3);
    }

    #[test]
    fn linear_index_is_row_major() {
        assert_eq!(from_linear_index(0, 5), (0, 0));
        assert_eq!(from_linear_index(4, 5), (4, 0));
        assert_eq!(from_linear_index(5, 5), (0, 1));
        assert_eq!(from_linear_index(13, 5), (3, 2));
        for (index, coords) in iter_coords(7).enumerate() {
            assert_eq!(from_linear_index(index, 7), coords);
        }
        assert_eq!(iter_coords(3).nth(4), Some((1, 1)));
        assert_eq!(iter_coords(4).count(), 16);
    }
}
