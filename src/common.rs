//! Common types for the game: grid cells, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A single grid coordinate. `x` is the column, `y` the row counted from the
/// northern edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a cell at column `x`, row `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the cell lies inside a `grid_size`×`grid_size` grid.
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        self.x < grid_size && self.y < grid_size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of firing at the selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The shot landed in open sea.
    Miss,
    /// The shot damaged a ship that is still afloat.
    Hit,
    /// The shot destroyed a ship, carrying its label.
    Sunk(&'static str),
}

/// Invalid game configuration: the grid, islands and roster cannot produce
/// a valid placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Grid side length of zero.
    EmptyGrid,
    /// Grid has more cells than the cell-set storage can hold.
    GridTooLarge { size: usize, capacity: usize },
    /// A roster entry has no cells.
    ZeroLengthShip(&'static str),
    /// A roster entry cannot fit on the grid in any orientation.
    ShipTooLong { label: &'static str, length: usize, grid_size: usize },
    /// An island lies outside the grid.
    IslandOutOfBounds(Cell),
    /// Ships and islands together need more cells than the grid has.
    OverCapacity { required: usize, available: usize },
    /// No valid position was found for a ship within the attempt bound.
    PlacementExhausted { label: &'static str, attempts: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyGrid => write!(f, "Grid size must be positive"),
            ConfigurationError::GridTooLarge { size, capacity } => write!(
                f,
                "Grid of {}x{} cells exceeds capacity of {} cells",
                size, size, capacity
            ),
            ConfigurationError::ZeroLengthShip(label) => {
                write!(f, "Ship '{}' has zero length", label)
            }
            ConfigurationError::ShipTooLong {
                label,
                length,
                grid_size,
            } => write!(
                f,
                "Ship '{}' of length {} does not fit on a grid of size {}",
                label, length, grid_size
            ),
            ConfigurationError::IslandOutOfBounds(cell) => {
                write!(f, "Island {} lies outside the grid", cell)
            }
            ConfigurationError::OverCapacity {
                required,
                available,
            } => write!(
                f,
                "Ships and islands need {} cells but the grid has {}",
                required, available
            ),
            ConfigurationError::PlacementExhausted { label, attempts } => write!(
                f,
                "Unable to place ship '{}' after {} attempts",
                label, attempts
            ),
        }
    }
}

/// A select or fire request the session refused. No state was changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The session has not been started.
    NotStarted,
    /// Cell lies outside the grid.
    OutOfBounds(Cell),
    /// Cell is an island and can never be targeted.
    IslandCell(Cell),
    /// Cell has already been fired upon.
    AlreadyShot(Cell),
    /// `fire` was requested with no cell selected.
    NothingSelected,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotStarted => write!(f, "Game has not been started"),
            SessionError::OutOfBounds(cell) => write!(f, "Cell {} is outside the grid", cell),
            SessionError::IslandCell(cell) => write!(f, "Cell {} is an island", cell),
            SessionError::AlreadyShot(cell) => {
                write!(f, "Cell {} has already been fired upon", cell)
            }
            SessionError::NothingSelected => write!(f, "No cell is selected"),
        }
    }
}

/// Top-level error for library operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying cell-set error.
    BitBoard(BitBoardError),
    /// Invalid grid, island or roster configuration.
    Configuration(ConfigurationError),
    /// Rejected session operation.
    Session(SessionError),
    /// Ship anchor and orientation put part of the ship off the grid.
    ShipOutOfBounds { anchor: Cell, length: usize },
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl From<ConfigurationError> for GameError {
    fn from(err: ConfigurationError) -> Self {
        GameError::Configuration(err)
    }
}

impl From<SessionError> for GameError {
    fn from(err: SessionError) -> Self {
        GameError::Session(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::Configuration(e) => write!(f, "Configuration error: {}", e),
            GameError::Session(e) => write!(f, "Invalid operation: {}", e),
            GameError::ShipOutOfBounds { anchor, length } => write!(
                f,
                "Ship of length {} anchored at {} is out of bounds",
                length, anchor
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::BitBoard(e) => Some(e),
            GameError::Configuration(e) => Some(e),
            GameError::Session(e) => Some(e),
            GameError::ShipOutOfBounds { .. } => None,
        }
    }
}
