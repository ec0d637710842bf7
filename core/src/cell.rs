use serde::{Deserialize, Serialize};

/// Player-visible state of a single grid cell. `Revealed` carries the
/// adjacent-mine count and is permanent: nothing un-reveals a cell short of
/// a full board reset.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Revealed(u8),
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
