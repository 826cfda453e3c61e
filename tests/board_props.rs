use sea_battle::{Board, BoardError, CellState, GameConfig, Point, ShotOutcome, NUM_SHIPS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::random(&GameConfig::default(), &mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ships_keep_their_distance(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), NUM_SHIPS);
        for (i, a) in ships.iter().enumerate() {
            for cell in a.cells() {
                prop_assert!(cell.in_bounds(board.size()));
                prop_assert_eq!(board.cell(cell), Some(CellState::Occupied));
                prop_assert!(board.forbidden().contains(&cell));
            }
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.chebyshev(&cb) >= 2, "{} and {} touch", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_shot_is_rejected(seed in any::<u64>(), row in 0..6usize, col in 0..6usize) {
        let mut board = random_board(seed);
        let target = Point::new(row, col);
        board.shoot(target).unwrap();
        let cells_after = board.clone();
        prop_assert_eq!(board.shoot(target), Err(BoardError::AlreadyTargeted(target)));
        prop_assert_eq!(board.shoot(target), Err(BoardError::AlreadyTargeted(target)));
        prop_assert_eq!(board.sunk_count(), cells_after.sunk_count());
        prop_assert_eq!(board.ships(), cells_after.ships());
    }

    #[test]
    fn ship_sinks_on_last_distinct_hit(seed in any::<u64>(), index in 0..NUM_SHIPS) {
        let mut board = random_board(seed);
        let ship = board.ships()[index];
        let cells: Vec<_> = ship.cells().collect();
        for (n, cell) in cells.iter().enumerate() {
            let outcome = board.shoot(*cell).unwrap();
            let remaining = board.ships()[index].hit_points();
            prop_assert_eq!(remaining, ship.length() - n - 1);
            if n + 1 == cells.len() {
                prop_assert_eq!(outcome, ShotOutcome::Sunk);
            } else {
                prop_assert_eq!(outcome, ShotOutcome::Hit);
            }
        }
        prop_assert_eq!(board.sunk_count(), 1);
        for ring in ship.buffer(board.size()) {
            prop_assert_eq!(board.cell(ring), Some(CellState::Miss));
        }
    }
}
