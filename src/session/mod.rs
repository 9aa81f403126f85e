mod paused;
use self::paused::{PauseMenu, PauseOpt};
use crate::command::Command;
use crate::config::Theme;
use crate::consts;
use crate::eventlog::{EventLog, GameEvent};
use crate::game::{Bounds, Direction, EndReason, Game, Step};
use crate::highscore::{HighScore, HighScoreFile};
use crate::ticker::Ticker;
use crate::util::center_rect;
use rand::{rngs::ThreadRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Margin, Rect, Size},
    text::{Line, Span},
    widgets::{Block, LineGauge, Widget},
};
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Where the player is in the lifecycle of a game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Nothing is in play; waiting for the player to start
    Idle,
    Running,
    /// Play is suspended and the pause menu is showing
    Paused(PauseMenu),
    Ended(EndReason),
}

/// A game of Snake together with everything around it: the lifecycle, the
/// movement clock, the event log, and the high score
#[derive(Clone, Debug)]
pub(crate) struct Session<R = ThreadRng> {
    game: Game<R>,
    phase: Phase,
    ticker: Ticker,
    log: EventLog,
    high_score: HighScore,
    high_score_file: Option<HighScoreFile>,
    theme: Theme,
    /// The time as of the most recent call to `poll()`, used for drawing the
    /// bonus countdown
    now: Instant,
}

impl<R: Rng> Session<R> {
    pub(crate) fn new(bounds: Bounds, rng: R, now: Instant) -> Session<R> {
        let mut log = EventLog::default();
        log.push(&GameEvent::Welcome);
        Session {
            game: Game::new(bounds, rng),
            phase: Phase::Idle,
            ticker: Ticker::new(),
            log,
            high_score: HighScore::default(),
            high_score_file: None,
            theme: Theme::default(),
            now,
        }
    }

    /// Set the starting high score and, if `file` is `Some`, the file that
    /// new high scores are saved to
    pub(crate) fn with_high_score(
        mut self,
        high_score: HighScore,
        file: Option<HighScoreFile>,
    ) -> Session<R> {
        self.high_score = high_score;
        self.high_score_file = file;
        self
    }

    pub(crate) fn with_theme(mut self, theme: Theme) -> Session<R> {
        self.theme = theme;
        self
    }

    /// Start a new game.  Does nothing unless the session is idle or the
    /// previous game has ended.
    pub(crate) fn start(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Idle | Phase::Ended(_)) {
            self.begin(now);
        }
    }

    /// Abandon the current game (if any) and immediately start a new one
    pub(crate) fn restart(&mut self, now: Instant) {
        if !matches!(self.phase, Phase::Idle) {
            self.begin(now);
        }
    }

    fn begin(&mut self, now: Instant) {
        self.game.reset();
        self.log.clear();
        self.log.push(&GameEvent::Started);
        self.log.push(&GameEvent::Hint);
        self.phase = Phase::Running;
        self.now = now;
        self.ticker.start(self.game.level().tick_period(), now);
        log::info!("Started new game");
    }

    /// Pause a running game or resume a paused one
    pub(crate) fn toggle_pause(&mut self, now: Instant) {
        match self.phase {
            Phase::Running => {
                self.ticker.stop();
                self.phase = Phase::Paused(PauseMenu::new());
                self.log.push(&GameEvent::Paused);
                log::debug!("Game paused");
            }
            Phase::Paused(_) => {
                self.phase = Phase::Running;
                self.now = now;
                self.ticker.start(self.game.level().tick_period(), now);
                self.log.push(&GameEvent::Resumed);
                log::debug!("Game resumed");
            }
            Phase::Idle | Phase::Ended(_) => (),
        }
    }

    /// Abandon the current game and return to the idle state
    pub(crate) fn reset(&mut self) {
        self.ticker.stop();
        self.game.reset();
        self.phase = Phase::Idle;
        self.log.clear();
        self.log.push(&GameEvent::Reset);
        self.log.push(&GameEvent::Welcome);
        log::info!("Game reset");
    }

    /// Queue a turn for the snake to make on its next move.  Turns are
    /// accepted while the game is running or paused; returns `true` if the
    /// turn was queued.
    pub(crate) fn queue_direction(&mut self, direction: Direction) -> bool {
        match self.phase {
            Phase::Running | Phase::Paused(_) => self.game.queue_direction(direction),
            Phase::Idle | Phase::Ended(_) => false,
        }
    }

    /// Pause the game if it's running
    pub(crate) fn focus_lost(&mut self, now: Instant) {
        if self.phase == Phase::Running {
            self.toggle_pause(now);
        }
    }

    /// Advance the clock to `now`, moving the snake if a tick is due
    pub(crate) fn poll(&mut self, now: Instant) {
        self.now = now;
        if self.ticker.poll(now) && self.phase == Phase::Running {
            self.tick(now);
        }
    }

    fn tick(&mut self, now: Instant) {
        let mut events = Vec::new();
        let step = self.game.step(now, &mut events);
        for ev in &events {
            log::debug!("{ev}");
            self.log.push(ev);
        }
        match step {
            Step::Advanced { level_up: true, .. } => {
                let period = self.game.level().tick_period();
                log::debug!(
                    "Reached level {}; tick period is now {period:?}",
                    self.game.level()
                );
                self.ticker.start(period, now);
            }
            Step::Advanced { .. } => (),
            Step::Ended(reason) => self.end(reason),
        }
    }

    fn end(&mut self, reason: EndReason) {
        self.ticker.stop();
        self.phase = Phase::Ended(reason);
        let score = self.game.score();
        log::info!("Game over: {reason} Final score: {score}");
        if self.high_score.record(score) {
            self.log.push(&GameEvent::NewHighScore(score));
            if let Some(ref file) = self.high_score_file {
                if let Err(e) = file.save(self.high_score) {
                    let e = anyhow::Error::new(e);
                    log::warn!("{e:#}");
                    self.log.push(&GameEvent::Problem(format!("{e:#}")));
                } else {
                    log::debug!("Saved high score to {}", file.path().display());
                }
            }
        }
        self.log.push(&GameEvent::GameOver { reason, score });
    }

    /// Add a warning to the event log
    pub(crate) fn warn(&mut self, msg: String) {
        self.log.push(&GameEvent::Problem(msg));
    }

    /// Respond to a command from the player.  Returns `Break` if the player
    /// asked to quit.
    pub(crate) fn handle_command(&mut self, cmd: Command, now: Instant) -> ControlFlow<()> {
        if let Some(direction) = cmd.direction() {
            let _ = self.queue_direction(direction);
            return ControlFlow::Continue(());
        }
        match self.phase {
            Phase::Idle => match cmd {
                Command::Enter => self.start(now),
                Command::Q | Command::Quit => return ControlFlow::Break(()),
                _ => (),
            },
            Phase::Running => match cmd {
                Command::Pause => self.toggle_pause(now),
                Command::N => self.reset(),
                Command::Quit => return ControlFlow::Break(()),
                _ => (),
            },
            Phase::Paused(ref mut menu) => {
                let choice = menu.handle_command(cmd);
                match choice {
                    Some(PauseOpt::Resume) => self.toggle_pause(now),
                    Some(PauseOpt::Restart) => self.restart(now),
                    Some(PauseOpt::NewGame) => self.reset(),
                    Some(PauseOpt::Quit) => return ControlFlow::Break(()),
                    None => (),
                }
            }
            Phase::Ended(_) => match cmd {
                Command::Enter | Command::R => self.restart(now),
                Command::N => self.reset(),
                Command::Q | Command::Quit => return ControlFlow::Break(()),
                _ => (),
            },
        }
        ControlFlow::Continue(())
    }
}

impl<R> Session<R> {
    #[cfg(test)]
    pub(crate) fn game(&self) -> &Game<R> {
        &self.game
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub(crate) fn high_score(&self) -> HighScore {
        self.high_score
    }

    /// Return the region of `area` in which the board (including its border)
    /// is drawn
    pub(crate) fn board_area(&self, area: Rect) -> Rect {
        self.layout(area).board_area
    }

    fn layout(&self, area: Rect) -> ScreenLayout {
        let bounds = self.game.bounds();
        let board_width = bounds
            .width
            .saturating_mul(consts::CELL_WIDTH)
            .saturating_add(2);
        let board_height = bounds.height.saturating_add(2);
        let display = center_rect(
            area,
            Size::new(
                board_width
                    .saturating_add(1)
                    .saturating_add(consts::LOG_PANEL_WIDTH),
                board_height.saturating_add(4),
            ),
        );
        let [status_area, main_area, gauge_area, message_area, hint_area] =
            Layout::vertical([1, board_height, 1, 1, 1]).areas(display);
        let [board_area, _, log_area] =
            Layout::horizontal([board_width, 1, consts::LOG_PANEL_WIDTH]).areas(main_area);
        ScreenLayout {
            status_area,
            board_area,
            log_area,
            gauge_area,
            message_area,
            hint_area,
        }
    }

    /// Return how long until the snake next moves, or `None` if it isn't
    /// moving
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ScreenLayout {
    status_area: Rect,
    board_area: Rect,
    log_area: Rect,
    gauge_area: Rect,
    message_area: Rect,
    hint_area: Rect,
}

impl<R> Widget for &Session<R> {
    /*
     *  Score: 0  High: 0  Level: 1  Length: 3
     * ┌──────────────────────┐ ┌ Log ─────────────────────┐
     * │                      │ │ ...                      │
     * │   (board & pop-ups)  │ │                          │
     * └──────────────────────┘ └──────────────────────────┘
     *  Bonus ━━━━━━━━━━━━━━━━
     *  (message line)
     *  (key hints)
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let ScreenLayout {
            status_area,
            board_area,
            log_area,
            gauge_area,
            message_area,
            hint_area,
        } = self.layout(area);

        Line::styled(
            format!(
                " Score: {}  High: {}  Level: {}  Length: {}",
                self.game.score(),
                self.high_score.get(),
                self.game.level(),
                self.game.snake_len()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(status_area, buf);

        Block::bordered().render(board_area, buf);
        let inner = board_area.inner(Margin::new(1, 1));
        if self.phase == Phase::Idle {
            let row = Rect {
                y: inner.y.saturating_add(inner.height / 2),
                height: inner.height.min(1),
                ..inner
            };
            Line::from_iter([
                Span::raw("Press "),
                Span::styled("Enter", consts::KEY_STYLE),
                Span::raw(" to start"),
            ])
            .centered()
            .render(row, buf);
        } else {
            let crashed = matches!(self.phase, Phase::Ended(reason) if reason.crashed());
            self.game.render_board(inner, buf, &self.theme, crashed);
        }

        (&self.log).render(log_area, buf);

        if let Some(bonus) = self.game.bonus() {
            if matches!(self.phase, Phase::Running | Phase::Paused(_)) {
                let gauge_area = Rect {
                    width: board_area.width.min(gauge_area.width),
                    ..gauge_area
                };
                LineGauge::default()
                    .ratio(bonus.remaining_ratio(self.now))
                    .label(" Bonus ")
                    .filled_style(self.theme.bonus)
                    .render(gauge_area, buf);
            }
        }

        let (message, hints) = match self.phase {
            Phase::Idle => (
                Line::default(),
                key_hints(&[("Enter", "start"), ("q", "quit")]),
            ),
            Phase::Running => (
                Line::default(),
                key_hints(&[("Space", "pause"), ("n", "new game"), ("Ctrl-C", "quit")]),
            ),
            Phase::Paused(menu) => {
                menu.render(
                    center_rect(board_area, Size::new(PauseMenu::WIDTH, PauseMenu::HEIGHT)),
                    buf,
                );
                (Line::default(), Line::default())
            }
            Phase::Ended(reason) => (
                Line::styled(format!(" GAME OVER: {reason}"), consts::LOG_DANGER_STYLE),
                key_hints(&[("Enter", "play again"), ("n", "new game"), ("q", "quit")]),
            ),
        };
        message.render(message_area, buf);
        hints.render(hint_area, buf);
    }
}

/// Render a list of key bindings as a line of the form " key: action  key:
/// action"
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for &(key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), consts::KEY_STYLE));
        spans.push(Span::raw(format!(": {action} ")));
    }
    Line::from(spans)
}
