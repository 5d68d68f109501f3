use alloc::vec;
use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::*;

/// Uniform placement without replacement: the first `mines` entries of a shuffled index list
/// become mines. Work is bounded by the board area whatever the mine density.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

/// Inside-out Fisher-Yates shuffle of `0..len`.
fn shuffled_indices(len: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut indices = vec![0; len];
    for i in 0..len {
        let j = rng.random_range(0..=i);
        if j != i {
            indices[i] = indices[j];
        }
        indices[j] = i;
    }
    indices
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield {
        debug_assert!(check_size(config.size()).is_ok(), "invalid board size in {config:?}");
        let size = config.size();
        let total_cells = config.total_cells();
        let shape = (size as usize, size as usize);

        if config.mines() > total_cells {
            log::warn!(
                "Requested {} mines but only {} cells fit, filling the board",
                config.mines(),
                total_cells
            );
        }

        // optimize for full boards
        if config.mines() >= total_cells {
            log::debug!("Generated full {}x{} minefield", size, size);
            return Minefield::from_mine_mask(&Array2::from_elem(shape, true));
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(shape);
        for &index in shuffled_indices(total_cells.into(), &mut rng)
            .iter()
            .take(config.mines().into())
        {
            mine_mask[from_linear_index(index, size).to_nd_index()] = true;
        }

        let minefield = Minefield::from_mine_mask(&mine_mask);
        log::debug!(
            "Generated {}x{} minefield with {} mines from seed {}",
            size,
            size,
            minefield.mine_count(),
            self.seed
        );
        minefield
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(size: Coord, mines: CellCount, seed: u64) -> Minefield {
        RandomMinefieldGenerator::new(seed).generate(GameConfig::new(size, mines).unwrap())
    }

    fn assert_counts_consistent(field: &Minefield) {
        let size = field.size();
        for coords in iter_coords(size) {
            if let Cell::Count(count) = field[coords] {
                let expected = field
                    .iter_neighbors(coords)
                    .filter(|&pos| field.contains_mine(pos))
                    .count();
                assert_eq!(usize::from(count), expected, "count at {coords:?}");
            }
        }
    }

    #[test]
    fn places_exact_mine_count_for_every_size_and_density() {
        for size in 1..=MAX_SIZE {
            let area = mult(size, size);
            let step = (area / 7).max(1);
            let mut mines = 0;
            while mines <= area {
                let field = generate(size, mines, u64::from(mines) * 31 + u64::from(size));
                let placed = field.cells().iter().filter(|cell| cell.is_mine()).count();

                assert_eq!(placed, usize::from(mines), "size {size}, mines {mines}");
                assert_eq!(field.mine_count(), mines);
                assert_eq!(field.safe_cell_count(), area - mines);
                assert_counts_consistent(&field);
                mines += step;
            }
            let full = generate(size, area, 7);
            assert_eq!(full.mine_count(), area);
        }
    }

    #[test]
    fn clamps_requests_beyond_board_area() {
        let field = RandomMinefieldGenerator::new(3).generate(GameConfig { size: 3, mines: 50 });
        assert_eq!(field.mine_count(), 9);
        assert!(iter_coords(3).all(|coords| field.contains_mine(coords)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid board size")]
    fn hand_built_oversized_config_is_rejected() {
        RandomMinefieldGenerator::new(1).generate(GameConfig { size: 40, mines: 3 });
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(generate(12, 30, 99), generate(12, 30, 99));
        assert_ne!(generate(12, 30, 99), generate(12, 30, 100));
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut indices = shuffled_indices(MAX_AREA.into(), &mut rng);
        indices.sort_unstable();
        assert_eq!(indices, (0..usize::from(MAX_AREA)).collect::<Vec<_>>());
    }

    #[test]
    fn mine_placement_is_uniform() {
        const SIZE: Coord = 4;
        const MINES: CellCount = 5;
        const RUNS: u64 = 8000;

        let mut hits = [0u32; 16];
        for seed in 0..RUNS {
            let field = generate(SIZE, MINES, seed);
            for (index, coords) in iter_coords(SIZE).enumerate() {
                if field.contains_mine(coords) {
                    hits[index] += 1;
                }
            }
        }

        // expected 2500 per cell, allow ~7 standard deviations
        let expected = (RUNS * u64::from(MINES) / 16) as u32;
        for (index, &count) in hits.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < 300,
                "cell {index} hit {count} times, expected ~{expected}"
            );
        }
    }
}
