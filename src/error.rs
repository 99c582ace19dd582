//! Error types
//!
//! The simulation itself never fails: out-of-range values are clamped and
//! out-of-bounds entities are deactivated. Errors only surface when loading
//! tuning data or when the spawn placer gives up for a frame.

use thiserror::Error;

/// Spawn placement failure (recoverable, the spawn is retried next frame)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no collision-free spawn location found after {attempts} attempts")]
    NoFreeLocation { attempts: u32 },
}

/// Tuning load/validation failure
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}
