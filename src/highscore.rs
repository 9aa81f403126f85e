use std::path::{Path, PathBuf};
use thiserror::Error;

/// The best score achieved across all games.  It only ever goes up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct HighScore(u32);

impl HighScore {
    #[cfg(test)]
    pub(crate) fn new(score: u32) -> HighScore {
        HighScore(score)
    }

    pub(crate) fn get(self) -> u32 {
        self.0
    }

    /// Record the final score of a game.  The high score is replaced if and
    /// only if `score` is strictly greater, in which case `true` is returned.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

/// A file holding the high score as a bare JSON integer
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub(crate) fn new(path: PathBuf) -> HighScoreFile {
        HighScoreFile { path }
    }

    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("gridsnake").join("highscore.json"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the high score from disk.  A missing file yields a high score of
    /// zero, as does a file whose contents are not a non-negative integer.
    pub(crate) fn load(&self) -> Result<HighScore, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HighScore::default()),
            Err(e) => return Err(LoadError::read(e)),
        };
        match serde_json::from_slice::<u32>(&src) {
            Ok(score) => Ok(HighScore(score)),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed high score file {}: {e}",
                    self.path.display()
                );
                Ok(HighScore::default())
            }
        }
    }

    pub(crate) fn save(&self, score: HighScore) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&score.0).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
}
