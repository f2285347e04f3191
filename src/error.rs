//! Configuration errors

use std::fmt;

/// Errors raised while loading or validating configuration.
///
/// The simulation itself has no error paths; everything that can go wrong
/// happens before the first frame.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NoInvaders,
    TooManyRows { rows: usize, max: usize },
    TooManyColumns { cols: usize, max: usize },
    TooManyInvaders { invaders: usize, cells: usize },
    TooManyWalls { walls: usize, max: usize },
    VolumeOutOfRange { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::NoInvaders => write!(f, "level must contain at least one invader"),
            Self::TooManyRows { rows, max } => {
                write!(f, "level has {rows} rows, at most {max} supported")
            }
            Self::TooManyColumns { cols, max } => {
                write!(f, "level has {cols} columns, at most {max} supported")
            }
            Self::TooManyInvaders { invaders, cells } => {
                write!(f, "{invaders} invaders do not fit in a grid of {cells} cells")
            }
            Self::TooManyWalls { walls, max } => {
                write!(f, "level has {walls} walls, at most {max} supported")
            }
            Self::VolumeOutOfRange { name, value } => {
                write!(f, "{name} must be within 0.0..=1.0, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
