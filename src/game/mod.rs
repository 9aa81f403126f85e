mod direction;
mod grid;
mod level;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::Bounds;
pub(crate) use self::level::Level;
use self::snake::Snake;
use crate::config::Theme;
use crate::consts;
use crate::eventlog::GameEvent;
use rand::{
    distr::{Bernoulli, Distribution},
    Rng,
};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};
use std::fmt;
use std::time::{Duration, Instant};

/// The state of a single game of Snake, plus the rules for advancing it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    /// `None` only while the snake and the bonus between them cover every
    /// other cell
    food: Option<Position>,
    bonus: Option<Bonus>,
    score: u32,
    level: Level,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(bounds: Bounds, rng: R) -> Game<R> {
        let (cells, direction) = bounds.snake_start();
        let mut game = Game {
            rng,
            bounds,
            snake: Snake::new(cells, direction),
            food: None,
            bonus: None,
            score: 0,
            level: Level::FIRST,
        };
        game.food = game.random_free_cell();
        game
    }

    /// Discard the current game and set up a fresh one on the same board
    pub(crate) fn reset(&mut self) {
        let (cells, direction) = self.bounds.snake_start();
        self.snake = Snake::new(cells, direction);
        self.bonus = None;
        self.food = None;
        self.score = 0;
        self.level = Level::FIRST;
        self.food = self.random_free_cell();
    }

    /// Advance the game by one tick at time `now`, appending anything
    /// noteworthy that happens to `events`.
    ///
    /// Collisions are checked before anything is eaten, so a head that would
    /// leave the board or hit the snake never scores.
    pub(crate) fn step(&mut self, now: Instant, events: &mut Vec<GameEvent>) -> Step {
        let direction = self.snake.commit();
        let Some(head) = direction.advance(self.snake.head(), self.bounds) else {
            return Step::Ended(EndReason::Wall);
        };
        if self.snake.occupies(head) {
            return Step::Ended(EndReason::SelfCollision);
        }
        self.snake.push_head(head);

        let start_level = self.level;
        let mut ate = false;
        if self.food == Some(head) {
            let points = self.level.points(consts::FOOD_POINTS);
            self.score = self.score.saturating_add(points);
            ate = true;
            events.push(GameEvent::FoodEaten { points });
            self.food = self.random_free_cell();
            self.update_level(events);
            if self.bonus.is_none() && self.roll_for_bonus() {
                if let Some(pos) = self.random_free_cell() {
                    self.bonus = Some(Bonus {
                        pos,
                        expires: now + consts::BONUS_LIFETIME,
                    });
                    events.push(GameEvent::BonusSpawned);
                }
            }
        }

        if let Some(bonus) = self.bonus {
            if bonus.pos == head {
                let points = self.level.points(consts::BONUS_POINTS);
                self.score = self.score.saturating_add(points);
                ate = true;
                self.bonus = None;
                events.push(GameEvent::BonusEaten { points });
                self.update_level(events);
            } else if bonus.expired(now) {
                self.bonus = None;
                events.push(GameEvent::BonusExpired);
            }
        }

        if !ate {
            self.snake.drop_tail();
        }
        if self.food.is_none() {
            self.food = self.random_free_cell();
            if self.food.is_none() && self.bonus.is_none() {
                return Step::Ended(EndReason::BoardFull);
            }
        }
        Step::Advanced {
            ate,
            level_up: self.level > start_level,
        }
    }

    fn update_level(&mut self, events: &mut Vec<GameEvent>) {
        let level = Level::for_score(self.score);
        if level > self.level {
            self.level = level;
            events.push(GameEvent::LevelUp(level));
        }
    }

    fn roll_for_bonus(&mut self) -> bool {
        let dist = Bernoulli::new(consts::BONUS_PROBABILITY)
            .expect("BONUS_PROBABILITY should be between 0 and 1");
        dist.sample(&mut self.rng)
    }

    /// Pick a random cell not occupied by the snake, the food, or the bonus
    fn random_free_cell(&mut self) -> Option<Position> {
        let snake = &self.snake;
        let food = self.food;
        let bonus = self.bonus.map(|b| b.pos);
        self.bounds.random_free_cell(&mut self.rng, |p| {
            snake.occupies(p) || food == Some(p) || bonus == Some(p)
        })
    }
}

impl<R> Game<R> {
    pub(crate) fn queue_direction(&mut self, direction: Direction) -> bool {
        self.snake.queue(direction)
    }

    pub(crate) fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn level(&self) -> Level {
        self.level
    }

    pub(crate) fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub(crate) fn bonus(&self) -> Option<Bonus> {
        self.bonus
    }

    #[cfg(test)]
    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, pos: Position) {
        self.food = Some(pos);
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Draw the board's contents into `area`, which must not include any
    /// border.  If `crashed` is true, the head is drawn as a collision.
    pub(crate) fn render_board(&self, area: Rect, buf: &mut Buffer, theme: &Theme, crashed: bool) {
        let mut canvas = Canvas { area, buf };
        for p in self.snake.body() {
            canvas.draw_cell(p, consts::SNAKE_BODY_SYMBOL, theme.snake);
        }
        if let Some(pos) = self.food {
            canvas.draw_cell(pos, consts::FOOD_SYMBOL, theme.food);
        }
        if let Some(bonus) = self.bonus {
            canvas.draw_cell(bonus.pos, consts::BONUS_SYMBOL, theme.bonus);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if crashed {
            canvas.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            canvas.draw_cell(self.snake.head(), self.snake.head_symbol(), theme.snake_head);
        }
    }
}

/// A time-limited piece of food worth more points than the regular kind
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bonus {
    pub(crate) pos: Position,
    pub(crate) expires: Instant,
}

impl Bonus {
    pub(crate) fn expired(self, now: Instant) -> bool {
        now > self.expires
    }

    pub(crate) fn remaining(self, now: Instant) -> Duration {
        self.expires.saturating_duration_since(now)
    }

    /// Return the fraction of the bonus's lifetime still remaining, from 0.0
    /// to 1.0
    pub(crate) fn remaining_ratio(self, now: Instant) -> f64 {
        (self.remaining(now).as_secs_f64() / consts::BONUS_LIFETIME.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// The outcome of [`Game::step()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// The snake moved.  `ate` is true if it ate something and grew, and
    /// `level_up` is true if the level increased.
    Advanced { ate: bool, level_up: bool },
    /// The game is over
    Ended(EndReason),
}

/// Why a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EndReason {
    Wall,
    SelfCollision,
    /// The snake has filled the board and there are no more cells to place
    /// food in.
    BoardFull,
}

impl EndReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            EndReason::Wall => "Hit the wall!",
            EndReason::SelfCollision => "Ate yourself!",
            EndReason::BoardFull => "The board is full!",
        }
    }

    /// Whether the snake's head ended up in an invalid spot
    pub(crate) fn crashed(self) -> bool {
        matches!(self, EndReason::Wall | EndReason::SelfCollision)
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = pos
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}
