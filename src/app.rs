use crate::command::{Command, SwipeTracker};
use crate::consts;
use crate::session::Session;
use crossterm::event::{poll, read, Event};
use rand::{rngs::ThreadRng, Rng};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = ThreadRng> {
    session: Session<R>,
    swipe: SwipeTracker,
    /// The terminal area as of the most recent draw
    area: Rect,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(session: Session<R>, swipe: SwipeTracker) -> App<R> {
        App {
            session,
            swipe,
            area: Rect::default(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| {
                self.area = frame.area();
                frame.render_widget(&self.session, self.area);
            })?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for input until either the next tick is due or it's time to
    /// redraw, then let the session catch up to the current time
    fn process_input(&mut self) -> io::Result<()> {
        let wait = self
            .session
            .time_until_tick(Instant::now())
            .map_or(consts::REDRAW_PERIOD, |d| d.min(consts::REDRAW_PERIOD));
        if poll(wait)? {
            self.handle_event(read()?, Instant::now());
        }
        self.session.poll(Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::FocusLost => self.session.focus_lost(now),
            Event::Mouse(ev) => {
                let board = self.session.board_area(self.area);
                if let Some(direction) = self.swipe.handle_mouse(ev, board) {
                    let _ = self.session.queue_direction(direction);
                }
            }
            _ => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    if self.session.handle_command(cmd, now).is_break() {
                        self.quitting = true;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Bounds;
    use crate::session::Phase;
    use crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::layout::Position;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        let session = Session::new(
            Bounds::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
            Instant::now(),
        );
        App::new(session, SwipeTracker::new(consts::DEFAULT_SWIPE_THRESHOLD))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn enter_starts_and_ctrl_c_quits() {
        let mut app = new_app();
        let now = Instant::now();
        app.handle_event(Event::Key(KeyCode::Enter.into()), now);
        assert_eq!(app.session.phase(), Phase::Running);
        assert!(!app.quitting);
        app.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            now,
        );
        assert!(app.quitting);
    }

    #[test]
    fn key_release_ignored() {
        let mut app = new_app();
        let mut ev = KeyEvent::from(KeyCode::Enter);
        ev.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(ev), Instant::now());
        assert_eq!(app.session.phase(), Phase::Idle);
    }

    #[test]
    fn focus_lost_pauses() {
        let mut app = new_app();
        let now = Instant::now();
        app.handle_event(Event::Key(KeyCode::Enter.into()), now);
        app.handle_event(Event::FocusLost, now);
        assert!(matches!(app.session.phase(), Phase::Paused(_)));
    }

    fn new_app_on_screen() -> App<ChaCha12Rng> {
        let mut app = new_app();
        app.area = Rect::new(0, 0, 100, 40);
        app
    }

    #[test]
    fn swipe_steers() {
        let mut app = new_app_on_screen();
        let board = app.session.board_area(app.area);
        let now = Instant::now();
        app.handle_event(Event::Key(KeyCode::Enter.into()), now);
        app.handle_event(
            mouse(
                MouseEventKind::Down(MouseButton::Left),
                board.x + 20,
                board.y + 10,
            ),
            now,
        );
        app.handle_event(
            mouse(
                MouseEventKind::Up(MouseButton::Left),
                board.x + 21,
                board.y + 4,
            ),
            now,
        );
        app.session.poll(now + Duration::from_millis(220));
        assert_eq!(app.session.game().head(), Position::new(12, 11));
    }

    #[test]
    fn swipe_over_log_panel_ignored() {
        let mut app = new_app_on_screen();
        let board = app.session.board_area(app.area);
        let now = Instant::now();
        app.handle_event(Event::Key(KeyCode::Enter.into()), now);
        let column = board.right() + 5;
        app.handle_event(
            mouse(MouseEventKind::Down(MouseButton::Left), column, board.y + 10),
            now,
        );
        app.handle_event(
            mouse(MouseEventKind::Up(MouseButton::Left), column, board.y + 4),
            now,
        );
        app.session.poll(now + Duration::from_millis(220));
        assert_eq!(app.session.game().head(), Position::new(13, 12));
    }
}
