use sea_battle::{
    Board, BoardError, CellState, ConfigError, GameConfig, Orientation, Point, Ship, ShotOutcome,
    MAX_BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn p(x: usize, y: usize) -> Point {
    Point::new(x, y)
}

#[test]
fn test_sinking_reveals_surrounding_water() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(p(0, 0), 3, Orientation::Horizontal))
        .unwrap();
    board.begin();

    assert_eq!(board.shoot(p(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.shoot(p(0, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.cell(p(1, 0)), Some(CellState::Empty));
    assert_eq!(board.shoot(p(0, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.sunk_count(), 1);
    assert!(board.ships()[0].is_sunk());

    for ring in [p(1, 0), p(1, 1), p(1, 2), p(1, 3), p(0, 3)] {
        assert_eq!(board.cell(ring), Some(CellState::Miss), "{} should be revealed", ring);
    }
    for own in [p(0, 0), p(0, 1), p(0, 2)] {
        assert_eq!(board.cell(own), Some(CellState::Hit));
    }
    // revealed water was never fired at and can still be targeted
    assert!(!board.fired_at().contains(&p(1, 0)));
    assert_eq!(board.shoot(p(1, 0)).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_place_out_of_bounds() {
    let mut board = Board::new(6);
    let err = board
        .place(Ship::new(p(5, 5), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::OutOfBounds(p(5, 6)));
    assert!(board.ships().is_empty());
    assert!(board.forbidden().is_empty());
    assert_eq!(board.cell(p(5, 5)), Some(CellState::Empty));
}

#[test]
fn test_place_rejects_empty_ship() {
    let mut board = Board::new(6);
    let err = board
        .place(Ship::new(p(2, 2), 0, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, BoardError::EmptyShip(p(2, 2)));
    assert!(board.ships().is_empty());
    assert!(board.forbidden().is_empty());
}

#[test]
fn test_place_adjacent_is_collision() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(p(2, 2), 2, Orientation::Vertical))
        .unwrap();

    // diagonal neighbour of the stern
    assert_eq!(
        board.place(Ship::new(p(4, 3), 1, Orientation::Horizontal)),
        Err(BoardError::Collision(p(4, 3)))
    );
    // side by side
    assert_eq!(
        board.place(Ship::new(p(2, 3), 2, Orientation::Vertical)),
        Err(BoardError::Collision(p(2, 3)))
    );
    // overlap
    assert_eq!(
        board.place(Ship::new(p(3, 0), 3, Orientation::Horizontal)),
        Err(BoardError::Collision(p(3, 1)))
    );
    // one empty cell in between is fine
    board
        .place(Ship::new(p(2, 4), 2, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_failed_placement_changes_nothing() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(p(3, 3), 1, Orientation::Horizontal))
        .unwrap();
    let forbidden_before = board.forbidden().clone();

    let err = board
        .place(Ship::new(p(2, 0), 3, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, BoardError::Collision(p(2, 2)));
    assert_eq!(board.cell(p(2, 0)), Some(CellState::Empty));
    assert_eq!(board.cell(p(2, 1)), Some(CellState::Empty));
    assert_eq!(board.forbidden(), &forbidden_before);
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_placement_buffer_is_silent() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(p(0, 0), 1, Orientation::Vertical))
        .unwrap();
    assert!(board.forbidden().contains(&p(1, 1)));
    assert_eq!(board.cell(p(1, 1)), Some(CellState::Empty));
    assert_eq!(board.cell(p(0, 0)), Some(CellState::Occupied));
}

#[test]
fn test_shoot_errors_and_miss() {
    let mut board = Board::new(6);
    board
        .place(Ship::new(p(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    board.begin();

    assert_eq!(board.shoot(p(6, 0)), Err(BoardError::OutOfBounds(p(6, 0))));
    assert_eq!(board.shoot(p(0, 17)), Err(BoardError::OutOfBounds(p(0, 17))));
    assert!(board.fired_at().is_empty());

    assert_eq!(board.shoot(p(4, 4)), Ok(ShotOutcome::Miss));
    assert_eq!(board.cell(p(4, 4)), Some(CellState::Miss));
    assert_eq!(board.shoot(p(4, 4)), Err(BoardError::AlreadyTargeted(p(4, 4))));

    assert_eq!(board.shoot(p(0, 0)), Ok(ShotOutcome::Hit));
    assert_eq!(board.shoot(p(0, 0)), Err(BoardError::AlreadyTargeted(p(0, 0))));
    assert_eq!(board.ships()[0].hit_points(), 1);
}

#[test]
fn test_begin_clears_fired_at() {
    let mut board = Board::new(6);
    board.shoot(p(1, 1)).unwrap();
    assert_eq!(board.fired_at().len(), 1);
    board.begin();
    assert!(board.fired_at().is_empty());
}

#[test]
fn test_random_board_places_whole_fleet() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::random(&config, &mut rng).unwrap();

    assert_eq!(board.size(), 6);
    assert_eq!(board.ships().len(), 7);
    let lengths: Vec<_> = board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, config.fleet());
    let occupied = board
        .rows()
        .flatten()
        .filter(|&&c| c == CellState::Occupied)
        .count();
    assert_eq!(occupied, 3 + 2 + 2 + 1 + 1 + 1 + 1);
    assert!(board.fired_at().is_empty());
    assert_eq!(board.sunk_count(), 0);
    assert!(!board.hidden());
}

#[test]
fn test_random_board_is_reproducible() {
    let config = GameConfig::default();
    let a = Board::random(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Board::random(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.ships(), b.ships());
}

#[test]
fn test_random_board_gives_up_on_impossible_fleet() {
    // Nine single cells cannot keep their distance on a 3x3 board.
    let config = GameConfig::new(3, vec![1; 9]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(matches!(
        Board::random(&config, &mut rng),
        Err(BoardError::FleetDoesNotFit { .. })
    ));
}

#[test]
fn test_random_board_needs_a_valid_config() {
    // Zero and oversized boards never reach generation.
    assert_eq!(GameConfig::new(0, vec![1]), Err(ConfigError::ZeroSize));
    assert_eq!(
        GameConfig::new(1 << 33, vec![1]),
        Err(ConfigError::TooLarge(1 << 33))
    );

    let config = GameConfig::new(MAX_BOARD_SIZE, vec![1]).unwrap();
    let board = Board::random(&config, &mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(board.size(), MAX_BOARD_SIZE);
    assert_eq!(board.ships().len(), 1);
}
