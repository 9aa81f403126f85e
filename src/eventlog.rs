use crate::consts;
use crate::game::{EndReason, Level};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};
use std::collections::VecDeque;
use std::fmt;

/// Something noteworthy that happened during play
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    Started,
    Hint,
    FoodEaten { points: u32 },
    LevelUp(Level),
    BonusSpawned,
    BonusEaten { points: u32 },
    BonusExpired,
    NewHighScore(u32),
    GameOver { reason: EndReason, score: u32 },
    Paused,
    Resumed,
    Reset,
    Welcome,
    Problem(String),
}

impl GameEvent {
    pub(crate) fn kind(&self) -> EntryKind {
        match self {
            GameEvent::Started | GameEvent::FoodEaten { .. } | GameEvent::NewHighScore(_) => {
                EntryKind::Success
            }
            GameEvent::LevelUp(_) | GameEvent::BonusSpawned | GameEvent::BonusEaten { .. } => {
                EntryKind::Warning
            }
            GameEvent::GameOver { .. } | GameEvent::Problem(_) => EntryKind::Danger,
            GameEvent::BonusExpired | GameEvent::Reset => EntryKind::System,
            GameEvent::Hint | GameEvent::Welcome | GameEvent::Paused | GameEvent::Resumed => {
                EntryKind::Info
            }
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Started => write!(f, "New game started"),
            GameEvent::Hint => write!(f, "Eat food to grow & level up"),
            GameEvent::FoodEaten { points } => write!(f, "+{points} points"),
            GameEvent::LevelUp(level) => write!(f, "Level {level}!"),
            GameEvent::BonusSpawned => write!(f, "Bonus food appeared!"),
            GameEvent::BonusEaten { points } => write!(f, "Bonus! +{points} points"),
            GameEvent::BonusExpired => write!(f, "Bonus food expired"),
            GameEvent::NewHighScore(score) => write!(f, "New high score: {score}!"),
            GameEvent::GameOver { reason, score } => {
                write!(f, "{reason} Final score: {score}")
            }
            GameEvent::Paused => write!(f, "Game paused"),
            GameEvent::Resumed => write!(f, "Game resumed"),
            GameEvent::Reset => write!(f, "Game reset"),
            GameEvent::Welcome => write!(f, "Press Enter to begin"),
            GameEvent::Problem(msg) => write!(f, "{msg}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EntryKind {
    Success,
    Info,
    Warning,
    Danger,
    System,
}

impl EntryKind {
    fn style(self) -> Style {
        match self {
            EntryKind::Success => consts::LOG_SUCCESS_STYLE,
            EntryKind::Info => consts::LOG_INFO_STYLE,
            EntryKind::Warning => consts::LOG_WARNING_STYLE,
            EntryKind::Danger => consts::LOG_DANGER_STYLE,
            EntryKind::System => consts::LOG_SYSTEM_STYLE,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LogEntry {
    pub(crate) kind: EntryKind,
    pub(crate) text: String,
}

/// A scrolling list of game events, newest first.  Once the list holds
/// `capacity` entries, adding another drops the oldest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct EventLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl EventLog {
    pub(crate) fn new(capacity: usize) -> EventLog {
        EventLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, event: &GameEvent) {
        self.push_entry(LogEntry {
            kind: event.kind(),
            text: event.to_string(),
        });
    }

    pub(crate) fn push_entry(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over the entries, newest first
    pub(crate) fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }
}

impl Default for EventLog {
    fn default() -> EventLog {
        EventLog::new(consts::LOG_CAPACITY)
    }
}

impl Widget for &EventLog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Log ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }
        let width = usize::from(inner.width);
        let lines = self.iter().flat_map(|entry| {
            let opts = textwrap::Options::new(width)
                .break_words(true)
                .subsequent_indent(" ");
            textwrap::wrap(&entry.text, opts)
                .into_iter()
                .map(move |ln| Line::styled(ln.into_owned(), entry.kind.style()))
                .collect::<Vec<_>>()
        });
        for (line, row) in lines.zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let mut log = EventLog::default();
        log.push(&GameEvent::Started);
        log.push(&GameEvent::FoodEaten { points: 10 });
        let texts = log.iter().map(|e| e.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["+10 points", "New game started"]);
    }

    #[test]
    fn capped() {
        let mut log = EventLog::new(3);
        for points in 1..=5 {
            log.push(&GameEvent::FoodEaten { points });
        }
        assert_eq!(log.len(), 3);
        let texts = log.iter().map(|e| e.text.as_str()).collect::<Vec<_>>();
        assert_eq!(texts, ["+5 points", "+4 points", "+3 points"]);
    }

    #[test]
    fn default_capacity() {
        let mut log = EventLog::default();
        for _ in 0..100 {
            log.push(&GameEvent::BonusSpawned);
        }
        assert_eq!(log.len(), consts::LOG_CAPACITY);
    }

    #[test]
    fn game_over_text() {
        let ev = GameEvent::GameOver {
            reason: EndReason::Wall,
            score: 120,
        };
        assert_eq!(ev.to_string(), "Hit the wall! Final score: 120");
        assert_eq!(ev.kind(), EntryKind::Danger);
    }

    #[test]
    fn render_wraps_entries() {
        let mut log = EventLog::default();
        log.push(&GameEvent::Started);
        log.push(&GameEvent::BonusSpawned);
        let area = Rect::new(0, 0, 16, 6);
        let mut buffer = Buffer::empty(area);
        (&log).render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "┌ Log ─────────┐",
            "│ Bonus food   │",
            "│  appeared!   │",
            "│ New game     │",
            "│  started     │",
            "└──────────────┘",
        ]);
        expected.set_style(Rect::new(2, 1, 12, 2), consts::LOG_WARNING_STYLE);
        expected.set_style(Rect::new(2, 3, 12, 2), consts::LOG_SUCCESS_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }
}
