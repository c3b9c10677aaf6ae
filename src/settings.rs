//! Persisted game settings
//!
//! A three-line text file, line order significant:
//!
//! ```text
//! Difficulty: Easy
//! Sound: On
//! High Score: 0
//! ```
//!
//! A missing file is replaced with defaults and is not an error. A file that
//! exists but does not parse is a fatal startup error; the game refuses to
//! guess what the player meant.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Default settings file, next to the executable's working directory
pub const SETTINGS_FILE: &str = "settings.txt";

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// The other difficulty, for menu toggling
    pub fn toggled(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Why settings could not be loaded or saved
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    /// A line is missing or does not parse
    Malformed { line: usize, expected: &'static str },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file i/o error: {e}"),
            SettingsError::Malformed { line, expected } => {
                write!(f, "settings file line {line} is malformed, expected `{expected}`")
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

/// The full persisted record; always written as a whole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_on: bool,
    pub high_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            sound_on: true,
            high_score: 0,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields defaults and writes them to disk so the file
    /// exists from then on. Any other failure propagates.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings file at {}, writing defaults", path.display());
                let settings = Self::default();
                settings.save(path)?;
                return Ok(settings);
            }
            Err(e) => return Err(SettingsError::Io(e)),
        };
        Self::parse(&text)
    }

    /// Write all three lines, replacing any previous contents
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_text())?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }

    fn to_text(&self) -> String {
        format!(
            "Difficulty: {}\nSound: {}\nHigh Score: {}\n",
            self.difficulty.as_str(),
            if self.sound_on { "On" } else { "Off" },
            self.high_score,
        )
    }

    fn parse(text: &str) -> Result<Self, SettingsError> {
        let mut lines = text.lines();

        let difficulty = lines
            .next()
            .and_then(|l| l.strip_prefix("Difficulty:"))
            .and_then(Difficulty::from_str)
            .ok_or(SettingsError::Malformed {
                line: 1,
                expected: "Difficulty: Easy|Hard",
            })?;

        let sound_on = lines
            .next()
            .and_then(|l| l.strip_prefix("Sound:"))
            .and_then(|s| match s.trim().to_lowercase().as_str() {
                "on" => Some(true),
                "off" => Some(false),
                _ => None,
            })
            .ok_or(SettingsError::Malformed {
                line: 2,
                expected: "Sound: On|Off",
            })?;

        let high_score = lines
            .next()
            .and_then(|l| l.strip_prefix("High Score:"))
            .and_then(|s| s.trim().parse::<u32>().ok())
            .ok_or(SettingsError::Malformed {
                line: 3,
                expected: "High Score: <non-negative integer>",
            })?;

        Ok(Self {
            difficulty,
            sound_on,
            high_score,
        })
    }
}
