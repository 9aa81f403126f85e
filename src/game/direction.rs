use super::grid::Bounds;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step would leave `bounds`.
    pub(crate) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let next = match self {
            Direction::North => Position {
                y: pos.y.checked_sub(1)?,
                ..pos
            },
            Direction::East => Position {
                x: pos.x.checked_add(1)?,
                ..pos
            },
            Direction::South => Position {
                y: pos.y.checked_add(1)?,
                ..pos
            },
            Direction::West => Position {
                x: pos.x.checked_sub(1)?,
                ..pos
            },
        };
        bounds.contains(next).then_some(next)
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
