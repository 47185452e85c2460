use std::collections::HashSet;

use broadside::{
    place_fleet, Board, Coord, GameError, Orientation, Ship, ShipId, ShipType, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn occupied(board: &Board) -> usize {
    board.cells().filter(|c| c.has_occupant()).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shuffled_positions_is_a_permutation(
        seed in any::<u64>(),
        rows in 1usize..16,
        cols in 1usize..16
    ) {
        let board = Board::new(rows, cols);
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..2 {
            let seq: Vec<Coord> = board.shuffled_positions(&mut rng).collect();
            prop_assert_eq!(seq.len(), rows * cols);
            let distinct: HashSet<Coord> = seq.iter().copied().collect();
            prop_assert_eq!(distinct.len(), rows * cols);
            prop_assert!(seq.iter().all(|c| board.contains(c.row, c.col)));
        }
    }

    #[test]
    fn fleet_placement_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(10, 10);
        let mut fleet: Vec<Ship> = Vec::new();
        place_fleet(&mut board, &mut fleet, &FLEET, &mut rng).unwrap();

        prop_assert_eq!(fleet.len(), FLEET.len());
        let mut claimed = HashSet::new();
        for (i, ship) in fleet.iter().enumerate() {
            prop_assert_eq!(ship.id().index(), i);
            prop_assert_eq!(ship.cells().len(), FLEET[i].length());
            for c in ship.cells() {
                prop_assert!(claimed.insert(*c), "cell {:?} claimed twice", c);
                prop_assert_eq!(board.cell_at(c.row, c.col).unwrap().occupant(), Some(ship.id()));
            }
        }
        prop_assert_eq!(occupied(&board), TOTAL_SHIP_CELLS);
    }

    #[test]
    fn horizontal_ships_only_where_vertical_was_blocked(seed in any::<u64>(), side in 5usize..11) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(side, side);
        let mut fleet: Vec<Ship> = Vec::new();
        place_fleet(&mut board, &mut fleet, &FLEET, &mut rng).unwrap();

        // Replay the final layout ship by ship; each one saw only its predecessors.
        let mut replay = Board::new(side, side);
        for (i, ship) in fleet.iter().enumerate() {
            let cells = ship.cells();
            let origin = cells[0];
            let horizontal = cells[1].row == origin.row;
            if horizontal {
                prop_assert!(
                    !replay.is_placement_free(origin, cells.len(), Orientation::Vertical),
                    "ship {} at {} went horizontal although vertical was free",
                    i,
                    origin
                );
            }
            let orientation = if horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let mut copy = Ship::new(ShipId(i), FLEET[i]);
            prop_assert!(replay.place_ship(origin, &mut copy, orientation).is_ok());
        }
    }

    #[test]
    fn tight_boards_still_fit_the_fleet(seed in any::<u64>()) {
        // 17 ship cells on 25 squares: greedy placement alone often dead-ends
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(5, 5);
        let mut fleet: Vec<Ship> = Vec::new();
        place_fleet(&mut board, &mut fleet, &FLEET, &mut rng).unwrap();
        prop_assert_eq!(occupied(&board), TOTAL_SHIP_CELLS);
    }
}

#[test]
fn impossible_fleet_leaves_board_untouched() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(3, 3);
    let mut fleet: Vec<Ship> = Vec::new();
    let types = [ShipType::new("Skiff", 2), ShipType::new("Barge", 4)];
    let err = place_fleet(&mut board, &mut fleet, &types, &mut rng).unwrap_err();
    assert_eq!(err, GameError::FleetUnplaceable { size: 4 });
    assert!(fleet.is_empty());
    assert_eq!(occupied(&board), 0);
}
