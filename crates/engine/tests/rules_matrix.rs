use cascade_core::{Action, Cell, Grid, Piece, PieceKind, Rotation};
use cascade_engine::{apply_action, freeze, hard_drop_row, inject_garbage, AttackConfig, GravityConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Interior filled with garbage except the cells of the given pieces.
fn caged(openings: &[Piece]) -> Grid {
    let mut grid = Grid::new();
    for col in Grid::FIRST_COL..=Grid::LAST_COL {
        for row in Grid::FIRST_ROW..=Grid::TOP_ROW {
            grid.set(col as i8, row as i8, Cell::Garbage).unwrap();
        }
    }
    for piece in openings {
        for (col, row) in piece.cells() {
            grid.set(col, row, Cell::Empty).unwrap();
        }
    }
    grid
}

fn assert_rotates_to(start: Piece, target: Piece) {
    let grid = caged(&[start, target]);
    let mut piece = start;
    apply_action(&grid, &mut piece, Action::RotateCw).unwrap();
    assert_eq!(piece, target);
}

mod rules_config {
    use super::*;

    #[test]
    fn test_custom_threshold() {
        let config = AttackConfig {
            min_lines: 3,
            offset: 0,
        };
        assert_eq!(config.rows_sent(2), 0);
        assert_eq!(config.rows_sent(3), 3);
    }

    #[test]
    fn test_gravity_frames() {
        let gravity = GravityConfig::classic();
        let steps: Vec<u64> = (0..61).filter(|&f| gravity.is_step_frame(f)).collect();
        assert_eq!(steps, vec![0, 20, 40, 60]);
        assert!((0..5).all(|f| GravityConfig::instant().is_step_frame(f)));
    }
}

mod caged_rotations {
    use super::*;

    #[test]
    fn test_first_nudge_in_place() {
        let start = Piece::new(PieceKind::T, 5, 10, Rotation::North);
        assert_rotates_to(start, Piece::new(PieceKind::T, 5, 10, Rotation::East));
    }

    #[test]
    fn test_second_nudge_one_left() {
        let start = Piece::new(PieceKind::T, 5, 10, Rotation::North);
        assert_rotates_to(start, Piece::new(PieceKind::T, 4, 10, Rotation::East));
    }

    #[test]
    fn test_third_nudge_left_and_up() {
        let start = Piece::new(PieceKind::T, 5, 10, Rotation::North);
        assert_rotates_to(start, Piece::new(PieceKind::T, 4, 11, Rotation::East));
    }

    #[test]
    fn test_fourth_nudge_two_down() {
        let start = Piece::new(PieceKind::I, 5, 10, Rotation::North);
        assert_rotates_to(start, Piece::new(PieceKind::I, 5, 8, Rotation::East));
    }

    #[test]
    fn test_fifth_nudge_left_and_two_down() {
        let start = Piece::new(PieceKind::I, 5, 10, Rotation::North);
        assert_rotates_to(start, Piece::new(PieceKind::I, 4, 8, Rotation::East));
    }

    #[test]
    fn test_no_nudge_fits() {
        let start = Piece::new(PieceKind::I, 5, 10, Rotation::North);
        let grid = caged(&[start]);
        let mut piece = start;
        let blocked = apply_action(&grid, &mut piece, Action::RotateCw).unwrap_err();
        assert_eq!(blocked.action, Action::RotateCw);
        assert_eq!((blocked.col, blocked.row), (5, 10));
        assert_eq!(piece, start);
    }

    #[test]
    fn test_caged_shifts() {
        let start = Piece::new(PieceKind::O, 5, 10, Rotation::North);
        let grid = caged(&[start, start.shifted(1, 0)]);

        let mut piece = start;
        assert!(apply_action(&grid, &mut piece, Action::Left).is_err());
        // the double stops after one column and still succeeds
        assert!(apply_action(&grid, &mut piece, Action::RightDouble).is_ok());
        assert_eq!(piece.col, 6);
    }
}

mod freeze_and_clear {
    use super::*;

    #[test]
    fn test_split_clear_keeps_middle_row() {
        let mut grid = Grid::from_rows(&[
            "#########.", // row 3
            "#.........", // row 2
            "#########.", // row 1
        ])
        .unwrap();
        let mut piece = Piece::new(PieceKind::I, 10, 12, Rotation::East);
        piece.row = hard_drop_row(&grid, &piece);
        assert_eq!(piece.row, 3);

        assert_eq!(freeze(&mut grid, &piece), 2);
        // old row 2 now sits on the floor, old row 4 above it
        assert!(grid.get(1, 1).is_occupied());
        assert!(grid.get(10, 1).is_occupied());
        assert!(grid.get(5, 1).is_empty());
        assert!(grid.get(10, 2).is_occupied());
        assert!(grid.get(1, 2).is_empty());
        assert!(grid.is_row_empty(3));
    }

    #[test]
    fn test_filling_garbage_hole_clears_it() {
        let mut grid = Grid::new();
        let mut rng = StdRng::seed_from_u64(17);
        inject_garbage(&mut grid, 1, &mut rng);
        let hole = (1..=10).find(|&col| grid.get(col, 1).is_empty()).unwrap();

        let mut piece = Piece::new(PieceKind::I, hole as i8, 12, Rotation::East);
        piece.row = hard_drop_row(&grid, &piece);
        assert_eq!(freeze(&mut grid, &piece), 1);
        assert_eq!(grid.occupied(), 3);
        assert!(grid.is_row_empty(4));
    }

    #[test]
    fn test_top_row_empty_after_clear() {
        let mut rows = vec!["#........."; 19];
        rows.push("#########.");
        let mut grid = Grid::from_rows(&rows).unwrap();
        assert!(!grid.is_row_empty(Grid::TOP_ROW));

        let piece = Piece::new(PieceKind::I, 10, 3, Rotation::East);
        assert_eq!(freeze(&mut grid, &piece), 1);
        assert!(grid.is_row_empty(Grid::TOP_ROW));
        assert!(grid.get(1, Grid::TOP_ROW - 1).is_occupied());
    }
}
