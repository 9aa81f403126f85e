use super::direction::Direction;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect, Size};
use std::collections::VecDeque;

/// The dimensions of the board.  Valid cells are `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Return the cells of a new snake (head first) and the direction it
    /// starts out moving in.  The head is placed in the middle of the board
    /// with the rest of the body trailing off to the west.
    pub(crate) fn snake_start(self) -> (VecDeque<Position>, Direction) {
        let head = Position::new(self.width / 2, self.height / 2);
        let direction = Direction::East;
        let cells = std::iter::successors(Some(head), |&p| direction.reverse().advance(p, self))
            .take(consts::INITIAL_SNAKE_LENGTH)
            .collect();
        (cells, direction)
    }

    /// Choose a cell uniformly at random from all cells for which `occupied`
    /// returns `false`.  Returns `None` if every cell is occupied.
    pub(crate) fn random_free_cell<R, F>(self, rng: &mut R, occupied: F) -> Option<Position>
    where
        R: Rng,
        F: Fn(Position) -> bool,
    {
        self.positions().filter(|&p| !occupied(p)).choose(rng)
    }
}

impl Default for Bounds {
    fn default() -> Bounds {
        Bounds {
            width: consts::COLS,
            height: consts::ROWS,
        }
    }
}
