use crate::consts;
use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Pause,
    Home,
    End,
    Next,
    Prev,
    N,
    Q,
    R,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('w' | 'W' | 'k'))
            | (_, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('s' | 'S' | 'j'))
            | (_, KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('a' | 'A' | 'h'))
            | (_, KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('d' | 'D' | 'l'))
            | (_, KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) | (_, KeyCode::Esc) => Some(Command::Pause),
            (_, KeyCode::Home) => Some(Command::Home),
            (_, KeyCode::End) => Some(Command::End),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (KeyModifiers::NONE, KeyCode::Char('n')) => Some(Command::N),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            _ => None,
        }
    }

    /// Return the direction the snake should turn in response to this
    /// command, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::North),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            Command::Right => Some(Direction::East),
            _ => None,
        }
    }
}

/// Turns mouse drags into directions, the terminal's stand-in for touch
/// swipes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SwipeTracker {
    start: Option<Position>,
    threshold: u16,
}

impl SwipeTracker {
    pub(crate) fn new(threshold: u16) -> SwipeTracker {
        SwipeTracker {
            start: None,
            threshold,
        }
    }

    /// Feed a mouse event to the tracker.  Returns a direction when a
    /// left-button drag that began inside `board` and is long enough to
    /// count as a swipe is released.
    pub(crate) fn handle_mouse(&mut self, ev: MouseEvent, board: Rect) -> Option<Direction> {
        let pos = Position::new(ev.column, ev.row);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = board.contains(pos).then_some(pos);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start.take()?;
                let dx = i32::from(pos.x) - i32::from(start.x);
                let dy = i32::from(pos.y) - i32::from(start.y);
                swipe_direction(dx, dy, self.threshold)
            }
            _ => None,
        }
    }
}

/// Classify a drag of `(dx, dy)` terminal columns & rows as a swipe.  The
/// horizontal delta is first converted to board cells, each of which is
/// `CELL_WIDTH` columns wide.  The axis with the larger magnitude then wins,
/// and the movement along it must exceed `threshold` cells.
pub(crate) fn swipe_direction(dx: i32, dy: i32, threshold: u16) -> Option<Direction> {
    let dx = dx / i32::from(consts::CELL_WIDTH);
    let threshold = i32::from(threshold);
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(Direction::East)
        } else if dx < -threshold {
            Some(Direction::West)
        } else {
            None
        }
    } else if dy > threshold {
        Some(Direction::South)
    } else if dy < -threshold {
        Some(Direction::North)
    } else {
        None
    }
}
