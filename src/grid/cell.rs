/// The label held by a single grid cell.
///
/// `Empty` is the only label the collision check treats as free; every other
/// variant is an occupant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Magenta,
    Green,
    Blue,
}

impl Cell {
    pub const COUNT: usize = 5;

    pub const ALL: [Cell; Cell::COUNT] = [
        Cell::Empty,
        Cell::Red,
        Cell::Magenta,
        Cell::Green,
        Cell::Blue,
    ];

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Cell::Empty => "empty",
            Cell::Red => "red",
            Cell::Magenta => "magenta",
            Cell::Green => "green",
            Cell::Blue => "blue",
        }
    }
}
