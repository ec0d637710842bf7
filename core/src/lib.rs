#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use field::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod field;
mod types;

/// Fixed parameters of a board: grid size and per-cell mine probability.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub density: f64,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, density: f64) -> Self {
        Self { size, density }
    }

    /// Rejects empty boards and densities outside `[0, 1)`.
    pub fn new(size: Coord2, density: f64) -> Result<Self> {
        let (size_x, size_y) = size;
        if size_x == 0 || size_y == 0 || !(0.0..1.0).contains(&density) {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(size, density))
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

/// Outcome of revealing a cell, used by the presentation layer to decide
/// between a redraw, a loss dialog, or a win indicator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_valid_parameters() {
        let config = BoardConfig::new((9, 9), 0.2).unwrap();
        assert_eq!(config.size, (9, 9));
        assert_eq!(config.total_cells(), 81);
    }

    #[test]
    fn config_accepts_zero_density() {
        assert!(BoardConfig::new((1, 1), 0.0).is_ok());
    }

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(BoardConfig::new((0, 9), 0.2), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((9, 0), 0.2), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_rejects_out_of_range_density() {
        assert_eq!(BoardConfig::new((9, 9), 1.0), Err(GameError::InvalidConfig));
        assert_eq!(BoardConfig::new((9, 9), -0.1), Err(GameError::InvalidConfig));
        assert_eq!(
            BoardConfig::new((9, 9), f64::NAN),
            Err(GameError::InvalidConfig)
        );
    }

    #[test]
    fn outcome_reports_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(RevealOutcome::Won.has_update());
    }
}
