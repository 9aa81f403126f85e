//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default number of columns on the board
pub(crate) const COLS: u16 = 25;

/// Default number of rows on the board
pub(crate) const ROWS: u16 = 25;

/// Smallest board width or height accepted from the configuration file
pub(crate) const MIN_BOARD_SIDE: u16 = 5;

/// Largest board width or height accepted from the configuration file
pub(crate) const MAX_BOARD_SIDE: u16 = 60;

/// Number of terminal columns used to draw a single board cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Time between movements of the snake on level 1
pub(crate) const BASE_TICK_PERIOD: Duration = Duration::from_millis(220);

/// Amount by which the tick period shrinks with each level gained
pub(crate) const TICK_PERIOD_STEP: Duration = Duration::from_millis(15);

/// The tick period never drops below this
pub(crate) const MIN_TICK_PERIOD: Duration = Duration::from_millis(60);

/// Maximum time the event loop waits for input before redrawing, so that the
/// bonus countdown keeps moving even when no ticks are due
pub(crate) const REDRAW_PERIOD: Duration = Duration::from_millis(100);

/// Points per regular food, multiplied by the current level
pub(crate) const FOOD_POINTS: u32 = 10;

/// Points per bonus food, multiplied by the current level
pub(crate) const BONUS_POINTS: u32 = 50;

/// Score needed to gain each level
pub(crate) const POINTS_PER_LEVEL: u32 = 50;

/// Probability of a bonus food appearing after a regular food is eaten
pub(crate) const BONUS_PROBABILITY: f64 = 0.3;

/// How long a bonus food stays on the board
pub(crate) const BONUS_LIFETIME: Duration = Duration::from_millis(5000);

/// Maximum number of entries kept in the event log
pub(crate) const LOG_CAPACITY: usize = 30;

/// Width of the event log panel, borders included
pub(crate) const LOG_PANEL_WIDTH: u16 = 28;

/// Default minimum length (in board cells) of a mouse drag for it to count
/// as a swipe
pub(crate) const DEFAULT_SWIPE_THRESHOLD: u16 = 2;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the bonus food
pub(crate) const BONUS_SYMBOL: char = '★';

/// Glyph for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style =
    Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for the bonus food and its countdown gauge
pub(crate) const BONUS_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for log entries about things going well
pub(crate) const LOG_SUCCESS_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for neutral log entries
pub(crate) const LOG_INFO_STYLE: Style = Style::new().fg(Color::LightBlue);

/// Style for log entries that call for attention
pub(crate) const LOG_WARNING_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for log entries about the game ending badly
pub(crate) const LOG_DANGER_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for log entries about the program itself
pub(crate) const LOG_SYSTEM_STYLE: Style = Style::new().fg(Color::Gray);
