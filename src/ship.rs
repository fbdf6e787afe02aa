//! Ship roster entries, placed ships and their damage state.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Mask;
use crate::common::{Cell, GameError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell `offset` steps along this orientation from `anchor`.
    fn step(self, anchor: Cell, offset: usize) -> Cell {
        match self {
            Orientation::Horizontal => Cell::new(anchor.x + offset, anchor.y),
            Orientation::Vertical => Cell::new(anchor.x, anchor.y + offset),
        }
    }
}

/// Roster entry: display label and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipSpec {
    label: &'static str,
    length: usize,
}

impl ShipSpec {
    /// Create a new roster entry.
    pub const fn new(label: &'static str, length: usize) -> Self {
        Self { label, length }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Number of cells the ship covers.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A ship with its cells assigned for one game.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlacedShip {
    spec: ShipSpec,
    orientation: Orientation,
    anchor: Cell,
    cells: Vec<Cell>,
    #[cfg_attr(feature = "serde", serde(skip))]
    mask: Mask,
}

impl PlacedShip {
    /// Place `spec` with its top-left cell at `anchor`, extending along
    /// `orientation` on a `grid_size` board.
    pub fn new(
        spec: ShipSpec,
        orientation: Orientation,
        anchor: Cell,
        grid_size: usize,
    ) -> Result<Self, GameError> {
        let len = spec.length();
        let out_of_bounds = GameError::ShipOutOfBounds {
            anchor,
            length: len,
        };
        if len == 0 || !anchor.in_bounds(grid_size) {
            return Err(out_of_bounds);
        }
        let end = match orientation {
            Orientation::Horizontal => anchor.x.checked_add(len),
            Orientation::Vertical => anchor.y.checked_add(len),
        };
        match end {
            Some(end) if end <= grid_size => {}
            _ => return Err(out_of_bounds),
        }

        let cells: Vec<Cell> = (0..len).map(|i| orientation.step(anchor, i)).collect();
        let mask = Mask::from_cells(grid_size, cells.iter().copied())?;
        Ok(PlacedShip {
            spec,
            orientation,
            anchor,
            cells,
            mask,
        })
    }

    /// Roster entry this ship was placed from.
    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    pub fn label(&self) -> &'static str {
        self.spec.label()
    }

    pub fn length(&self) -> usize {
        self.spec.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of the ship.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns `true` if the ship covers `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        self.mask.contains(cell)
    }
}

impl fmt::Debug for PlacedShip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PlacedShip {{ label: \"{}\", anchor: {}, orientation: {:?}, length: {} }}",
            self.spec.label(),
            self.anchor,
            self.orientation,
            self.spec.length(),
        )
    }
}

/// A placed ship together with the number of its cells that were hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipStatus {
    ship: PlacedShip,
    hits: usize,
}

impl ShipStatus {
    /// Fresh status with no damage.
    pub fn new(ship: PlacedShip) -> Self {
        Self { ship, hits: 0 }
    }

    pub fn ship(&self) -> &PlacedShip {
        &self.ship
    }

    /// Number of this ship's cells that were fired upon.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// A ship is destroyed once every one of its cells has been hit.
    pub fn destroyed(&self) -> bool {
        self.hits == self.ship.length()
    }

    /// Record a hit on this ship. The caller guarantees each cell is
    /// reported at most once.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.ship.length() {
            self.hits += 1;
        }
    }
}
