use std::sync::{Arc, Mutex};

use broadside::{
    Board, CellEvent, CellState, Coord, GameError, Orientation, Ship, ShipId, ShipType,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const DESTROYER: ShipType = ShipType::new("Destroyer", 2);
const CRUISER: ShipType = ShipType::new("Cruiser", 3);

#[test]
fn test_cell_at_bounds() {
    let board = Board::new(4, 6);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.cols(), 6);
    assert_eq!(board.len(), 24);

    let cell = board.cell_at(3, 5).unwrap();
    assert_eq!(cell.coord(), Coord::new(3, 5));
    assert_eq!(cell.state(), CellState::Empty);
    assert!(!cell.has_occupant());

    assert!(board.cell_at(4, 0).is_none());
    assert!(board.cell_at(0, 6).is_none());
    assert!(board.cell_at(usize::MAX, usize::MAX).is_none());
}

#[test]
fn test_every_coordinate_maps_to_its_cell() {
    let board = Board::new(3, 5);
    for r in 0..3 {
        for c in 0..5 {
            assert_eq!(board.cell_at(r, c).unwrap().coord(), Coord::new(r, c));
        }
    }
}

#[test]
fn test_cell_state_change_notifies() {
    let mut board = Board::new(2, 2);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let cell = board.cell_at_mut(1, 0).unwrap();
    cell.subscribe(move |cell, ev| sink.lock().unwrap().push((cell.coord(), *ev)));

    cell.set_state(CellState::Miss);
    assert_eq!(cell.state(), CellState::Miss);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Coord::new(1, 0), CellEvent::StateChanged(CellState::Miss))]
    );
}

#[test]
fn test_placement_free_checks_bounds_and_overlap() {
    let mut board = Board::new(10, 10);
    assert!(board.is_placement_free(Coord::new(0, 0), 5, Orientation::Vertical));
    assert!(board.is_placement_free(Coord::new(0, 5), 5, Orientation::Horizontal));
    assert!(!board.is_placement_free(Coord::new(0, 6), 5, Orientation::Horizontal));
    assert!(!board.is_placement_free(Coord::new(6, 0), 5, Orientation::Vertical));
    assert!(!board.is_placement_free(Coord::new(10, 0), 2, Orientation::Horizontal));

    let mut ship = Ship::new(ShipId(0), CRUISER);
    board
        .place_ship(Coord::new(2, 2), &mut ship, Orientation::Horizontal)
        .unwrap();
    assert!(!board.is_placement_free(Coord::new(0, 3), 3, Orientation::Vertical));
    assert!(board.is_placement_free(Coord::new(0, 5), 3, Orientation::Vertical));
}

#[test]
fn test_place_ship_links_cells_and_ship() {
    let mut board = Board::new(10, 10);
    let mut ship = Ship::new(ShipId(3), CRUISER);
    board
        .place_ship(Coord::new(4, 7), &mut ship, Orientation::Vertical)
        .unwrap();

    assert_eq!(
        ship.cells(),
        &[Coord::new(4, 7), Coord::new(5, 7), Coord::new(6, 7)]
    );
    for c in ship.cells() {
        assert_eq!(board.cell_at(c.row, c.col).unwrap().occupant(), Some(ShipId(3)));
    }
    assert!(!board.cell_at(7, 7).unwrap().has_occupant());
}

#[test]
fn test_rejected_placement_mutates_nothing() {
    let mut board = Board::new(10, 10);
    let mut first = Ship::new(ShipId(0), DESTROYER);
    board
        .place_ship(Coord::new(0, 1), &mut first, Orientation::Vertical)
        .unwrap();

    let mut second = Ship::new(ShipId(1), CRUISER);
    let err = board
        .place_ship(Coord::new(0, 0), &mut second, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::PlacementRejected);
    assert!(second.cells().is_empty());
    assert!(!board.cell_at(0, 0).unwrap().has_occupant());
    assert_eq!(board.cell_at(0, 1).unwrap().occupant(), Some(ShipId(0)));

    let err = board
        .place_ship(Coord::new(12, 0), &mut second, Orientation::Horizontal)
        .unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 12, col: 0 });
}

#[test]
fn test_ship_cannot_be_placed_twice() {
    let mut board = Board::new(10, 10);
    let mut ship = Ship::new(ShipId(0), DESTROYER);
    board
        .place_ship(Coord::new(0, 0), &mut ship, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.place_ship(Coord::new(5, 5), &mut ship, Orientation::Horizontal),
        Err(GameError::PlacementRejected)
    );
    assert_eq!(ship.cells().len(), 2);
}

#[test]
fn test_shuffled_positions_is_lazy_and_exact() {
    let board = Board::new(3, 4);
    let mut rng = SmallRng::seed_from_u64(9);
    let mut iter = board.shuffled_positions(&mut rng);
    assert_eq!(iter.len(), 12);
    let first = iter.next().unwrap();
    assert!(board.contains(first.row, first.col));
    assert_eq!(iter.len(), 11);
    assert_eq!(iter.count(), 11);
}

#[test]
fn test_shuffled_positions_differ_between_calls() {
    let board = Board::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(42);
    let a: Vec<Coord> = board.shuffled_positions(&mut rng).collect();
    let b: Vec<Coord> = board.shuffled_positions(&mut rng).collect();
    assert_ne!(a, b, "each call draws a fresh order");
}
