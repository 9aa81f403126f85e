use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: the cells it covers and where it is headed.
///
/// All positions are relative to the top-left corner of the board.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) cells: VecDeque<Position>,

    /// The direction applied on the most recent tick
    pub(super) direction: Direction,

    /// The direction that will be applied on the next tick
    pub(super) queued: Direction,
}

impl Snake {
    /// Create a new snake occupying `cells` (head first) and moving in
    /// `direction`
    pub(crate) fn new(cells: VecDeque<Position>, direction: Direction) -> Snake {
        debug_assert!(!cells.is_empty(), "a snake must have a head");
        Snake {
            cells,
            direction,
            queued: direction,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.cells[0]
    }

    /// Return the positions of all cells after the head
    pub(crate) fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().skip(1).copied()
    }

    #[cfg(test)]
    pub(crate) fn cells(&self) -> &VecDeque<Position> {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return the direction applied on the most recent tick
    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the direction that the next tick will apply
    #[cfg(test)]
    pub(crate) fn queued(&self) -> Direction {
        self.queued
    }

    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Request that the snake move in `direction` on the next tick.  Requests
    /// to reverse the committed direction are ignored, as obeying them would
    /// run the head into the neck.  Returns whether the request was accepted.
    pub(crate) fn queue(&mut self, direction: Direction) -> bool {
        if direction == self.direction.reverse() {
            false
        } else {
            self.queued = direction;
            true
        }
    }

    /// Make the queued direction the committed direction and return it
    pub(crate) fn commit(&mut self) -> Direction {
        self.direction = self.queued;
        self.direction
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.cells.push_front(pos);
    }

    pub(crate) fn drop_tail(&mut self) {
        let _ = self.cells.pop_back();
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }
}
