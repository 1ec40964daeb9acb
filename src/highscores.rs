//! Persisted high score
//!
//! A single integer in a file. The file holds the plain decimal score (a
//! JSON number), so older plain-text score files load unchanged.

use std::path::{Path, PathBuf};

/// Default store location, relative to the working directory
pub const DEFAULT_PATH: &str = "highscore.json";

/// Errors reading or writing the store. A missing file is not an error.
#[derive(Debug, thiserror::Error)]
pub enum HighScoreError {
    #[error("Failed to access high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt high score file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed best score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when nothing has been stored yet
    pub fn load(&self) -> Result<u64, HighScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score at {}, starting fresh", self.path.display());
                return Ok(0);
            }
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let first_line = content.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return Ok(0);
        }
        serde_json::from_str(first_line).map_err(|source| HighScoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Record a finished session's score.
    ///
    /// Overwrites the store only when `score` beats it. Returns the high
    /// score after the update.
    pub fn submit(&self, score: u64) -> Result<u64, HighScoreError> {
        let best = self.load()?;
        if score <= best {
            return Ok(best);
        }

        let json = serde_json::to_string(&score).map_err(|source| HighScoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::info!("New high score {} (was {})", score, best);
        Ok(score)
    }
}
