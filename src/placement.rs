//! Random ship placement by rejection sampling.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::{Cell, ConfigurationError, GameError};
use crate::config::{validate, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, PlacedShip, ShipSpec};

/// Place every ship of `roster`, in order, on a `grid_size` board so that no
/// ship overlaps an island or another ship.
///
/// Each ship is retried from a fresh random orientation and anchor until it
/// lands on free water, up to [`MAX_PLACEMENT_ATTEMPTS`] times.
pub fn generate<R: Rng>(
    rng: &mut R,
    islands: &[Cell],
    roster: &[ShipSpec],
    grid_size: usize,
) -> Result<Vec<PlacedShip>, GameError> {
    let mut occupied = validate(islands, roster, grid_size)?;
    let mut ships = Vec::with_capacity(roster.len());

    for &spec in roster {
        let ship = random_placement(rng, spec, grid_size, |ship| {
            !occupied.intersects(&ship.mask())
        })?;
        occupied = occupied | ship.mask();
        debug!(
            "placed {} at {} {:?}",
            ship.label(),
            ship.anchor(),
            ship.orientation()
        );
        ships.push(ship);
    }
    Ok(ships)
}

/// Sample positions for `spec` until `accept` approves one.
fn random_placement<R, F>(
    rng: &mut R,
    spec: ShipSpec,
    grid_size: usize,
    mut accept: F,
) -> Result<PlacedShip, GameError>
where
    R: Rng,
    F: FnMut(&PlacedShip) -> bool,
{
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_x = if orientation == Orientation::Horizontal {
            grid_size - spec.length()
        } else {
            grid_size - 1
        };
        let max_y = if orientation == Orientation::Vertical {
            grid_size - spec.length()
        } else {
            grid_size - 1
        };
        let anchor = Cell::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
        let ship = PlacedShip::new(spec, orientation, anchor, grid_size)?;
        if accept(&ship) {
            if attempt > 1 {
                debug!("{} needed {} attempts", spec.label(), attempt);
            }
            return Ok(ship);
        }
    }
    warn!(
        "giving up on {} after {} attempts",
        spec.label(),
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(ConfigurationError::PlacementExhausted {
        label: spec.label(),
        attempts: MAX_PLACEMENT_ATTEMPTS,
    }
    .into())
}
