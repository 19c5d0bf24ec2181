//! High-score persistence
//!
//! The storage format is a plain text file holding one decimal integer.
//! Reads default to 0 on any failure; writes are best-effort and logged
//! at warn level when they fail. Persistence problems never reach the
//! simulation.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// File-backed best score
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored best score. Missing or unreadable files and
    /// unparseable contents all yield 0.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim().parse::<u32>() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!(
                        "high score file {} is not a number, starting from 0",
                        self.path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting from 0", self.path.display());
                0
            }
        }
    }

    /// Write the best score. Failures are logged and dropped; the game
    /// never sees them.
    pub fn save(&self, score: u32) {
        if let Err(e) = self.write(score) {
            log::warn!("failed to save high score to {}: {}", self.path.display(), e);
        }
    }

    fn write(&self, score: u32) -> std::io::Result<()> {
        let mut file = fs::File::create(&self.path)?;
        write!(file, "{score}")?;
        file.sync_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> HighScoreFile {
        let path = std::env::temp_dir().join(format!("birdhop_test_{}_{}", std::process::id(), name));
        let _ = fs::remove_file(&path);
        HighScoreFile::new(path)
    }

    #[test]
    fn test_missing_file_defaults_to_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("round_trip");
        store.save(7);
        assert_eq!(store.load(), 7);

        // A later, better score replaces it
        store.save(12);
        assert_eq!(store.load(), 12);
    }

    #[test]
    fn test_garbage_contents_default_to_zero() {
        let store = temp_store("garbage");
        fs::write(&store.path, "not a number").expect("write test file");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_whitespace_tolerated() {
        let store = temp_store("whitespace");
        fs::write(&store.path, " 42\n").expect("write test file");
        assert_eq!(store.load(), 42);
    }
}
