use crate::consts;
use crate::game::Bounds;
use crate::highscore::HighScoreFile;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about the board
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about input handling
    #[serde(default)]
    pub(crate) controls: ControlsConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Overrides for the colors & attributes of things on the board
    #[serde(default)]
    pub(crate) styles: StylesConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the high score file to read from & write to, or `None` if high
    /// scores should not be persisted.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no path is configured and the default path could not
    /// be determined.
    pub(crate) fn high_score_file(&self) -> Result<Option<HighScoreFile>, ConfigError> {
        if !self.files.save_high_score {
            return Ok(None);
        }
        let path = match self.files.high_score_file {
            Some(ref p) => p.clone(),
            None => HighScoreFile::default_path().ok_or(ConfigError::NoDataPath)?,
        };
        Ok(Some(HighScoreFile::new(path)))
    }

    pub(crate) fn theme(&self) -> Theme {
        let mut theme = Theme::default();
        let StylesConfig {
            snake,
            snake_head,
            food,
            bonus,
        } = self.styles.clone();
        if let Some(st) = snake {
            theme.snake = st.into();
        }
        if let Some(st) = snake_head {
            theme.snake_head = st.into();
        }
        if let Some(st) = food {
            theme.food = st.into();
        }
        if let Some(st) = bonus {
            theme.bonus = st.into();
        }
        theme
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) bounds: Bounds,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    width: u16,
    height: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            width: consts::COLS,
            height: consts::ROWS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = BoardSizeError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, BoardSizeError> {
        let range = consts::MIN_BOARD_SIDE..=consts::MAX_BOARD_SIDE;
        for side in [value.width, value.height] {
            if !range.contains(&side) {
                return Err(BoardSizeError(side));
            }
        }
        Ok(GameConfig {
            bounds: Bounds {
                width: value.width,
                height: value.height,
            },
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error(
    "board width and height must be between {min} and {max}, got {0}",
    min = consts::MIN_BOARD_SIDE,
    max = consts::MAX_BOARD_SIDE
)]
pub(crate) struct BoardSizeError(u16);

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct ControlsConfig {
    /// Minimum distance, in board cells, that the mouse must be dragged
    /// along its dominant axis to count as a swipe
    pub(crate) swipe_threshold: u16,
}

impl Default for ControlsConfig {
    fn default() -> ControlsConfig {
        ControlsConfig {
            swipe_threshold: consts::DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score
    pub(crate) save_high_score: bool,

    /// Path to which to write a diagnostic log
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct StylesConfig {
    snake: Option<parse_style::Style>,
    snake_head: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    bonus: Option<parse_style::Style>,
}

/// The styles used to draw the things on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Theme {
    pub(crate) snake: Style,
    pub(crate) snake_head: Style,
    pub(crate) food: Style,
    pub(crate) bonus: Style,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake: consts::SNAKE_STYLE,
            snake_head: consts::SNAKE_HEAD_STYLE,
            food: consts::FOOD_STYLE,
            bonus: consts::BONUS_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to determine path to local data directory")]
    NoDataPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
