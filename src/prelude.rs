//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate, to_coordinates, Cell, CellView, GameConfig, GameError, GameSession, SessionError,
    SessionStatus, ShotOutcome,
};

#[cfg(feature = "std")]
pub use crate::{cli::run, init_logging};
