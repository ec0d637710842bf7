/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Conversion into an `ndarray` index.
pub trait ToIndex {
    type Output;
    fn to_index(self) -> Self::Output;
}

impl ToIndex for Coord2 {
    type Output = [usize; 2];

    fn to_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(a: Coord, b: Coord) -> CellCount {
    a as CellCount * b as CellCount
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn shift((x, y): Coord2, (dx, dy): (i8, i8), (max_x, max_y): Coord2) -> Option<Coord2> {
    let next_x = x.checked_add_signed(dx)?;
    let next_y = y.checked_add_signed(dy)?;
    (next_x < max_x && next_y < max_y).then_some((next_x, next_y))
}

/// In-bounds neighbors of `center` on a `bounds`-sized grid, in a fixed
/// offset order. Corner cells yield 3 coordinates, edge cells 5, interior
/// cells 8.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    OFFSETS
        .into_iter()
        .filter_map(move |delta| shift(center, delta, bounds))
}
