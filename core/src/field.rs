use ndarray::Array2;
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable mine placement for one game: which cells are mined, and how
/// many mines there are in total. Adjacency counts are derived from the mask
/// on demand, keeping a single source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineField {
    /// Mines every cell independently with probability `config.density`.
    pub fn scatter(config: BoardConfig, rng: &mut impl Rng) -> Self {
        let mut mask: Array2<bool> = Array2::default(config.size.to_index());
        for is_mine in mask.iter_mut() {
            *is_mine = rng.random::<f64>() < config.density;
        }

        let field = Self::from_mine_mask(mask);
        if field.safe_cell_count() == 0 {
            log::warn!(
                "Generated a field with no safe cells ({} mines), it cannot be won",
                field.mine_count
            );
        }
        field
    }

    pub fn from_mine_mask(mask: Array2<bool>) -> Self {
        let mine_count = mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self { mask, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default(size.to_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_index()] = true;
        }
        Ok(Self::from_mine_mask(mask))
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mask.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mask.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mask[coords.to_index()]
    }

    /// Number of mined cells among the up-to-8 neighbors of `coords`.
    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self.is_mine(pos))
            .count() as u8
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (size_x, size_y) = self.size();
        if coords.0 < size_x && coords.1 < size_y {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// In-bounds neighbors of `coords`, failing for coordinates off the grid.
    pub fn iter_neighbors(&self, coords: Coord2) -> Result<impl Iterator<Item = Coord2>> {
        Ok(neighbors(self.validate_coords(coords)?, self.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn adjacency_counts_match_the_mask() {
        let field = MineField::from_mine_coords((3, 3), &[(0, 0), (2, 1)]).unwrap();

        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.safe_cell_count(), 7);
        assert_eq!(field.adjacent_mines((1, 0)), 2);
        assert_eq!(field.adjacent_mines((1, 1)), 2);
        assert_eq!(field.adjacent_mines((0, 2)), 0);
        assert_eq!(field.adjacent_mines((2, 2)), 1);
    }

    #[test]
    fn scatter_is_deterministic_per_seed() {
        let config = BoardConfig::new((9, 9), 0.2).unwrap();

        let first = MineField::scatter(config, &mut SmallRng::seed_from_u64(42));
        let second = MineField::scatter(config, &mut SmallRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn zero_density_scatters_no_mines() {
        let config = BoardConfig::new((9, 9), 0.0).unwrap();

        let field = MineField::scatter(config, &mut SmallRng::seed_from_u64(1));

        assert_eq!(field.mine_count(), 0);
        assert_eq!(field.safe_cell_count(), 81);
    }

    #[test]
    fn mine_coords_outside_the_grid_are_rejected() {
        let result = MineField::from_mine_coords((3, 3), &[(3, 0)]);
        assert_eq!(result, Err(GameError::OutOfBounds));
    }

    #[test]
    fn neighbor_queries_validate_coordinates() {
        let field = MineField::from_mine_coords((3, 3), &[]).unwrap();

        assert!(field.iter_neighbors((1, 1)).is_ok());
        assert!(field.iter_neighbors((5, 5)).is_err());
    }
}
