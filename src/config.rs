//! Board layout: grid size, islands and ship roster.

use alloc::vec::Vec;

use crate::bitboard::{BitBoardError, Mask};
use crate::common::{Cell, ConfigurationError};
use crate::ship::ShipSpec;

pub const GRID_SIZE: usize = 10;
pub const NUM_ISLANDS: usize = 6;
pub const ISLANDS: [Cell; NUM_ISLANDS] = [
    Cell::new(2, 3),
    Cell::new(2, 4),
    Cell::new(3, 3),
    Cell::new(7, 7),
    Cell::new(7, 8),
    Cell::new(8, 7),
];
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Lentotukialus", 5),
    ShipSpec::new("Taistelulaiva", 4),
    ShipSpec::new("Risteilijä", 3),
    ShipSpec::new("Risteilijä", 3),
    ShipSpec::new("Hävittäjä", 2),
];

/// Total number of ship segments in the reference roster.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
};

/// Upper bound on candidate positions sampled for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Check that ships from `roster` can be placed around `islands` on a
/// `grid_size` board. Returns the island mask on success.
pub fn validate(
    islands: &[Cell],
    roster: &[ShipSpec],
    grid_size: usize,
) -> Result<Mask, ConfigurationError> {
    if grid_size == 0 {
        return Err(ConfigurationError::EmptyGrid);
    }
    let mut island_mask = Mask::try_new(grid_size).map_err(|e| match e {
        BitBoardError::SizeTooLarge { size, capacity } => {
            ConfigurationError::GridTooLarge { size, capacity }
        }
        BitBoardError::IndexOutOfBounds { .. } => ConfigurationError::EmptyGrid,
    })?;
    for &island in islands {
        island_mask
            .insert(island)
            .map_err(|_| ConfigurationError::IslandOutOfBounds(island))?;
    }
    for spec in roster {
        if spec.length() == 0 {
            return Err(ConfigurationError::ZeroLengthShip(spec.label()));
        }
        if spec.length() > grid_size {
            return Err(ConfigurationError::ShipTooLong {
                label: spec.label(),
                length: spec.length(),
                grid_size,
            });
        }
    }
    let required = roster.iter().map(|s| s.length()).sum::<usize>() + island_mask.count_ones();
    let available = grid_size * grid_size;
    if required > available {
        return Err(ConfigurationError::OverCapacity {
            required,
            available,
        });
    }
    Ok(island_mask)
}

/// A validated board layout handed to each new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    islands: Vec<Cell>,
    island_mask: Mask,
    roster: Vec<ShipSpec>,
}

impl GameConfig {
    /// Build a layout, rejecting combinations that cannot host the roster.
    pub fn new(
        grid_size: usize,
        islands: Vec<Cell>,
        roster: Vec<ShipSpec>,
    ) -> Result<Self, ConfigurationError> {
        let island_mask = validate(&islands, &roster, grid_size)?;
        Ok(Self {
            grid_size,
            islands,
            island_mask,
            roster,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn islands(&self) -> &[Cell] {
        &self.islands
    }

    pub fn roster(&self) -> &[ShipSpec] {
        &self.roster
    }

    /// Returns `true` if `cell` is an island.
    pub fn is_island(&self, cell: Cell) -> bool {
        self.island_mask.contains(cell)
    }
}

impl Default for GameConfig {
    /// The reference 10×10 layout with two island clusters and five ships.
    fn default() -> Self {
        // ISLANDS all lie on the GRID_SIZE board
        let island_mask =
            Mask::from_cells(GRID_SIZE, ISLANDS).unwrap_or_else(|_| Mask::new(GRID_SIZE));
        Self {
            grid_size: GRID_SIZE,
            islands: ISLANDS.to_vec(),
            island_mask,
            roster: SHIPS.to_vec(),
        }
    }
}
