use alloc::collections::VecDeque;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

/// Game-level state machine value.
///
/// Valid transitions:
/// - Playing -> Lost
/// - Playing -> Won
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game: mine placement, per-cell reveal state, and the win/loss
/// state machine. The board exclusively owns its cells; all mutation goes
/// through [`Board::reveal`] and [`Board::reset`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    field: MineField,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
    reset_seed: u64,
}

impl Board {
    /// Creates a board with a random mine placement drawn from `seed`.
    /// Equal config and seed produce identical boards.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = MineField::scatter(config, &mut rng);
        Self::assemble(config, field, rng.next_u64())
    }

    /// Wraps an explicit mine layout, for callers that build their own
    /// placement. Later resets draw at a density matching the layout's
    /// actual mine ratio.
    pub fn with_field(field: MineField, seed: u64) -> Self {
        let density = f64::from(field.mine_count()) / f64::from(field.total_cells());
        let config = BoardConfig::new_unchecked(field.size(), density);
        Self::assemble(config, field, seed)
    }

    fn assemble(config: BoardConfig, field: MineField, reset_seed: u64) -> Self {
        let size = field.size();
        Self {
            config,
            field,
            grid: Array2::default(size.to_index()),
            revealed_count: 0,
            state: Default::default(),
            triggered_mine: None,
            reset_seed,
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.field.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_index()]
    }

    pub fn total_mines(&self) -> CellCount {
        self.field.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Only meaningful for end-state rendering after a loss.
    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.field.is_mine(coords)
    }

    /// The mine whose reveal ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Reveals the cell at `coords`.
    ///
    /// Finished games and already-revealed cells are a no-op. Revealing a
    /// mine loses the game without opening the cell. Revealing a zero-count
    /// cell cascades through the contiguous zero region and its numbered rim;
    /// numbered cells never cascade. Once every safe cell is revealed the
    /// game is won.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.field.validate_coords(coords)?;

        if self.state.is_finished() || self.grid[coords.to_index()].is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.field.is_mine(coords) {
            self.triggered_mine = Some(coords);
            self.state = GameState::Lost;
            log::debug!("Revealed a mine at {:?}, game lost", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let count = self.field.adjacent_mines(coords);
        self.reveal_cell(coords, count);
        if count == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.field.safe_cell_count() {
            self.state = GameState::Won;
            log::debug!("All {} safe cells revealed, game won", self.revealed_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    fn reveal_cell(&mut self, coords: Coord2, count: u8) {
        self.grid[coords.to_index()] = Cell::Revealed(count);
        self.revealed_count += 1;
    }

    /// Worklist cascade from a zero-count cell; the revealed flag is the
    /// visited guard. Only zero-count cells enqueue their neighbors, and a
    /// zero-count cell has no mined neighbor, so mines never enter the
    /// worklist.
    fn flood_fill(&mut self, origin: Coord2) {
        let bounds = self.field.size();
        let mut to_visit: VecDeque<Coord2> = neighbors(origin, bounds)
            .filter(|&pos| !self.grid[pos.to_index()].is_revealed())
            .collect();
        log::trace!("Flood fill from {:?}, initial front: {:?}", origin, to_visit);

        while let Some(visit_coords) = to_visit.pop_front() {
            if self.grid[visit_coords.to_index()].is_revealed() {
                continue;
            }

            let visit_count = self.field.adjacent_mines(visit_coords);
            self.reveal_cell(visit_coords, visit_count);
            log::trace!(
                "Flood fill revealed {:?}, adjacent mines: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                to_visit.extend(
                    neighbors(visit_coords, bounds)
                        .filter(|&pos| !self.grid[pos.to_index()].is_revealed()),
                );
            }
        }
    }

    /// Replaces the whole grid with a fresh random placement under the same
    /// configuration. The only defined response to a loss.
    pub fn reset(&mut self) {
        let mut rng = SmallRng::seed_from_u64(self.reset_seed);
        self.field = MineField::scatter(self.config, &mut rng);
        self.reset_seed = rng.next_u64();
        self.grid = Array2::default(self.field.size().to_index());
        self.revealed_count = 0;
        self.state = GameState::Playing;
        self.triggered_mine = None;
        log::debug!("Board reset, {} mines placed", self.field.mine_count());
    }
}
