use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for displaying a pause menu pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct PauseMenu {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl PauseMenu {
    /// The height that should be used for the `Rect` passed to
    /// `PauseMenu::render()`
    pub(crate) const HEIGHT: u16 = 6;

    /// The width that should be used for the `Rect` passed to
    /// `PauseMenu::render()`
    pub(crate) const WIDTH: u16 = 21;

    pub(crate) fn new() -> PauseMenu {
        PauseMenu {
            selection: PauseOpt::min(),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    ///
    /// The arrow keys are left alone so that they can still steer the snake
    /// while the game is paused; the menu is navigated with Tab, Shift-Tab,
    /// Home, and End.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<PauseOpt> {
        match cmd {
            Command::Pause => return Some(PauseOpt::Resume),
            Command::R => return Some(PauseOpt::Restart),
            Command::N => return Some(PauseOpt::NewGame),
            Command::Q | Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Next => self.selection = self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection = self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => self.selection = PauseOpt::min(),
            Command::End => self.selection = PauseOpt::max(),
            _ => (),
        }
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum PauseOpt {
    /// Unpause/resume the game
    Resume,

    /// Start the game over
    Restart,

    /// Abandon the game and return to the start screen
    NewGame,

    /// Quit the application
    Quit,
}

impl PauseOpt {
    /// Render the option as a `Line` for display in the pause menu.  If
    /// `selected` is `true`, this option is the currently-selected/active one.
    fn to_line(self, selected: bool) -> Line<'static> {
        let (label, key) = match self {
            PauseOpt::Resume => ("Resume", "Space"),
            PauseOpt::Restart => ("Restart", "r"),
            PauseOpt::NewGame => ("New Game", "n"),
            PauseOpt::Quit => ("Quit", "q"),
        };
        let mut line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(label),
            Span::raw(" ("),
            Span::styled(key, consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        if selected {
            line = line.style(consts::MENU_SELECTION_STYLE);
        }
        line
    }
}

impl Widget for PauseMenu {
    /*
     * ┌───── PAUSED ──────┐
     * │ » Resume (Space)  │
     * │   Restart (r)     │
     * │   New Game (n)    │
     * │   Quit (q)        │
     * └───────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_and_select() {
        let mut menu = PauseMenu::new();
        assert_eq!(menu.handle_command(Command::Next), None);
        assert_eq!(menu.handle_command(Command::Next), None);
        assert_eq!(menu.handle_command(Command::Enter), Some(PauseOpt::NewGame));
        assert_eq!(menu.handle_command(Command::Prev), None);
        assert_eq!(menu.handle_command(Command::Enter), Some(PauseOpt::Restart));
        assert_eq!(menu.handle_command(Command::End), None);
        assert_eq!(menu.handle_command(Command::Next), None);
        assert_eq!(menu.handle_command(Command::Enter), Some(PauseOpt::Resume));
    }

    #[test]
    fn arrows_do_not_move_selection() {
        let mut menu = PauseMenu::new();
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.handle_command(Command::Enter), Some(PauseOpt::Resume));
    }

    #[test]
    fn hotkeys() {
        let mut menu = PauseMenu::new();
        assert_eq!(menu.handle_command(Command::Pause), Some(PauseOpt::Resume));
        assert_eq!(menu.handle_command(Command::R), Some(PauseOpt::Restart));
        assert_eq!(menu.handle_command(Command::N), Some(PauseOpt::NewGame));
        assert_eq!(menu.handle_command(Command::Q), Some(PauseOpt::Quit));
    }

    #[test]
    fn render() {
        let area = Rect::new(0, 0, PauseMenu::WIDTH, PauseMenu::HEIGHT);
        let mut buffer = Buffer::empty(area);
        PauseMenu::new().render(area, &mut buffer);
        let lines = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(
            lines,
            [
                "┌───── PAUSED ──────┐",
                "│ » Resume (Space)  │",
                "│   Restart (r)     │",
                "│   New Game (n)    │",
                "│   Quit (q)        │",
                "└───────────────────┘",
            ]
        );
    }
}
