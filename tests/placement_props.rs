use coordinates_battleship::{generate, Cell, ShipSpec, GRID_SIZE, ISLANDS, SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::HashSet;

fn roster_strategy() -> impl Strategy<Value = Vec<ShipSpec>> {
    prop::collection::vec(1usize..=5, 0..6).prop_map(|lens| {
        lens.into_iter()
            .map(|len| ShipSpec::new("Ship", len))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reference_placement_invariants(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = generate(&mut rng, &ISLANDS, &SHIPS, GRID_SIZE).unwrap();
        let mut occupied: HashSet<Cell> = ISLANDS.iter().copied().collect();
        for (ship, spec) in ships.iter().zip(SHIPS.iter()) {
            prop_assert_eq!(ship.cells().len(), spec.length());
            let xs: HashSet<usize> = ship.cells().iter().map(|c| c.x).collect();
            let ys: HashSet<usize> = ship.cells().iter().map(|c| c.y).collect();
            prop_assert!(xs.len() == 1 || ys.len() == 1);
            for pair in ship.cells().windows(2) {
                let step = (pair[1].x - pair[0].x) + (pair[1].y - pair[0].y);
                prop_assert_eq!(step, 1);
            }
            for cell in ship.cells() {
                prop_assert!(cell.in_bounds(GRID_SIZE));
                prop_assert!(occupied.insert(*cell));
            }
        }
    }

    #[test]
    fn random_rosters_fit_or_fail_cleanly(seed in any::<u64>(), roster in roster_strategy()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        match generate(&mut rng, &ISLANDS, &roster, GRID_SIZE) {
            Ok(ships) => {
                let cells: HashSet<Cell> = ships.iter().flat_map(|s| s.cells().iter().copied()).collect();
                let total: usize = roster.iter().map(|s| s.length()).sum();
                prop_assert_eq!(cells.len(), total);
                prop_assert!(ISLANDS.iter().all(|i| !cells.contains(i)));
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
