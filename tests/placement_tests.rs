use coordinates_battleship::{
    generate, Cell, ConfigurationError, GameError, Orientation, PlacedShip, ShipSpec, GRID_SIZE,
    ISLANDS, MAX_PLACEMENT_ATTEMPTS, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn assert_valid_placement(ships: &[PlacedShip], islands: &[Cell], roster: &[ShipSpec], size: usize) {
    assert_eq!(ships.len(), roster.len());
    let mut seen: HashSet<Cell> = islands.iter().copied().collect();
    for (ship, spec) in ships.iter().zip(roster) {
        assert_eq!(ship.spec(), *spec);
        assert_eq!(ship.cells().len(), spec.length());
        assert_eq!(ship.cells()[0], ship.anchor());
        for (i, cell) in ship.cells().iter().enumerate() {
            assert!(cell.in_bounds(size), "{:?} off the grid", cell);
            let expected = match ship.orientation() {
                Orientation::Horizontal => Cell::new(ship.anchor().x + i, ship.anchor().y),
                Orientation::Vertical => Cell::new(ship.anchor().x, ship.anchor().y + i),
            };
            assert_eq!(*cell, expected);
            assert!(seen.insert(*cell), "{:?} overlaps an island or ship", cell);
        }
    }
}

#[test]
fn test_reference_layout_is_valid() {
    let mut rng = SmallRng::seed_from_u64(42);
    let ships = generate(&mut rng, &ISLANDS, &SHIPS, GRID_SIZE).unwrap();
    assert_valid_placement(&ships, &ISLANDS, &SHIPS, GRID_SIZE);
    let total: usize = ships.iter().map(|s| s.cells().len()).sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
}

#[test]
fn test_total_ship_cells_follows_roster() {
    let sum: usize = SHIPS.iter().map(|s| s.length()).sum();
    assert_eq!(TOTAL_SHIP_CELLS, sum);
    assert_eq!(TOTAL_SHIP_CELLS, 17);
}

#[test]
fn test_same_seed_same_placement() {
    let mut rng1 = SmallRng::seed_from_u64(12345);
    let mut rng2 = SmallRng::seed_from_u64(12345);
    let a = generate(&mut rng1, &ISLANDS, &SHIPS, GRID_SIZE).unwrap();
    let b = generate(&mut rng2, &ISLANDS, &SHIPS, GRID_SIZE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_many_seeds_never_overlap() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = generate(&mut rng, &ISLANDS, &SHIPS, GRID_SIZE).unwrap();
        assert_valid_placement(&ships, &ISLANDS, &SHIPS, GRID_SIZE);
    }
}

#[test]
fn test_full_row_ship_on_small_grid() {
    let roster = [ShipSpec::new("Long", 4)];
    let mut rng = SmallRng::seed_from_u64(7);
    let ships = generate(&mut rng, &[], &roster, 4).unwrap();
    assert_valid_placement(&ships, &[], &roster, 4);
    let anchor = ships[0].anchor();
    match ships[0].orientation() {
        Orientation::Horizontal => assert_eq!(anchor.x, 0),
        Orientation::Vertical => assert_eq!(anchor.y, 0),
    }
}

#[test]
fn test_empty_roster() {
    let mut rng = SmallRng::seed_from_u64(1);
    let ships = generate(&mut rng, &ISLANDS, &[], GRID_SIZE).unwrap();
    assert!(ships.is_empty());
}

#[test]
fn test_over_capacity_is_rejected() {
    let roster = [ShipSpec::new("Big", 3); 4];
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate(&mut rng, &[Cell::new(0, 0)], &roster, 3).unwrap_err();
    assert_eq!(
        err,
        GameError::Configuration(ConfigurationError::OverCapacity {
            required: 13,
            available: 9
        })
    );
}

#[test]
fn test_invalid_rosters_are_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        generate(&mut rng, &[], &[ShipSpec::new("Ghost", 0)], 5).unwrap_err(),
        GameError::Configuration(ConfigurationError::ZeroLengthShip("Ghost"))
    );
    assert_eq!(
        generate(&mut rng, &[], &[ShipSpec::new("Huge", 6)], 5).unwrap_err(),
        GameError::Configuration(ConfigurationError::ShipTooLong {
            label: "Huge",
            length: 6,
            grid_size: 5
        })
    );
}

#[test]
fn test_invalid_grids_are_rejected() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        generate(&mut rng, &[], &SHIPS, 0).unwrap_err(),
        GameError::Configuration(ConfigurationError::EmptyGrid)
    );
    assert_eq!(
        generate(&mut rng, &[], &SHIPS, 12).unwrap_err(),
        GameError::Configuration(ConfigurationError::GridTooLarge {
            size: 12,
            capacity: 128
        })
    );
    assert_eq!(
        generate(&mut rng, &[Cell::new(10, 2)], &SHIPS, GRID_SIZE).unwrap_err(),
        GameError::Configuration(ConfigurationError::IslandOutOfBounds(Cell::new(10, 2)))
    );
}

#[test]
fn test_unplaceable_ship_gives_up() {
    // Islands on every edge midpoint leave no two adjacent free cells.
    let islands = [
        Cell::new(1, 0),
        Cell::new(0, 1),
        Cell::new(2, 1),
        Cell::new(1, 2),
    ];
    let mut rng = SmallRng::seed_from_u64(3);
    let err = generate(&mut rng, &islands, &[ShipSpec::new("Boat", 2)], 3).unwrap_err();
    assert_eq!(
        err,
        GameError::Configuration(ConfigurationError::PlacementExhausted {
            label: "Boat",
            attempts: MAX_PLACEMENT_ATTEMPTS
        })
    );
}

#[test]
fn test_placed_ship_bounds() {
    let spec = ShipSpec::new("Test", 3);
    let ship = PlacedShip::new(spec, Orientation::Vertical, Cell::new(4, 7), 10).unwrap();
    assert_eq!(
        ship.cells(),
        &[Cell::new(4, 7), Cell::new(4, 8), Cell::new(4, 9)]
    );
    assert!(ship.contains(Cell::new(4, 8)));
    assert!(!ship.contains(Cell::new(5, 8)));
    assert_eq!(ship.mask().count_ones(), 3);

    let err = PlacedShip::new(spec, Orientation::Horizontal, Cell::new(8, 0), 10).unwrap_err();
    assert_eq!(
        err,
        GameError::ShipOutOfBounds {
            anchor: Cell::new(8, 0),
            length: 3
        }
    );

    for anchor in [Cell::new(usize::MAX, 0), Cell::new(0, usize::MAX), Cell::new(10, 10)] {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            assert_eq!(
                PlacedShip::new(spec, orientation, anchor, 10).unwrap_err(),
                GameError::ShipOutOfBounds { anchor, length: 3 }
            );
        }
    }
}
