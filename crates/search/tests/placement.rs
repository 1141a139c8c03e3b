use cascade_core::{Action, Grid, Piece, PieceKind};
use cascade_eval::{count_holes, evaluate, EvalWeights};
use cascade_search::{resolve, PlacementSearch, PruneReason, SequenceOutcome};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn search(seed: u64) -> PlacementSearch<StdRng> {
    PlacementSearch::new(StdRng::seed_from_u64(seed))
}

/// `gen_bool(0.5)` is always true: every pop takes the front.
fn front_first() -> StepRng {
    StepRng::new(0, 0)
}

/// `gen_bool(0.5)` is always false: every pop takes the back.
fn back_first() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Columns 1..=9 stacked to row 17, column 10 open. An O spawned above it
/// lands within two actions.
fn shelf() -> Grid {
    Grid::from_rows(&["#########."; 17]).unwrap()
}

/// A flat O resting on the shelf anywhere in columns 2..=9: step 17 + 2 + 2 + 17,
/// top 7 * (7 * 17 + 2 * 19).
const SHELF_TIE: i32 = 50_000 - 38 - 7 * 157;

/// Bottom row full except column 5.
fn pit() -> Grid {
    Grid::from_rows(&["####.#####"]).unwrap()
}

#[test]
fn test_t_fills_one_wide_pit() {
    let grid = pit();
    let piece = Piece::spawn(PieceKind::T);

    for seed in 0..4 {
        let best = search(seed).search(&grid, &piece).best.expect("a T fits the pit");
        let (frozen, lines) = resolve(&grid, piece, &best.actions).expect("best sequence replays");

        assert_eq!(lines, 1, "seed {seed}: {:?}", best.actions);
        assert_eq!(count_holes(&frozen), 0);
        // three T cells left on row 1 in columns 4..=6
        assert_eq!(best.score, 50_000 - 2 - 21);
        assert_eq!(evaluate(&frozen, &EvalWeights::default()), best.score);
    }
}

#[test]
fn test_pit_path_is_reachable() {
    let grid = pit();
    let piece = Piece::spawn(PieceKind::T);
    let mut actions = vec![Action::LeftDouble, Action::RotateCw, Action::RotateCw, Action::None, Action::Right];
    actions.extend([Action::None; 13]);

    let mut search = search(0);
    assert_eq!(
        search.evaluate_sequence(&grid, &piece, &actions),
        SequenceOutcome::Landed(50_000 - 23)
    );
}

#[test]
fn test_hole_free_beats_covering_the_pit() {
    let grid = pit();
    let piece = Piece::spawn(PieceKind::T);
    let weights = EvalWeights::default();

    // flat T dropped straight down covers columns 5..=7 and seals the pit
    let (covered, _) = resolve(&grid, piece, &[Action::None; 18]).expect("straight drop lands");
    assert_eq!(count_holes(&covered), 1);

    let best = search(11).search(&grid, &piece).best.expect("a T fits the pit");
    assert!(best.score > evaluate(&covered, &weights));
}

#[test]
fn test_best_score_is_stable_across_runs() {
    let grid = Grid::from_rows(&["....######", "..########", ".#########"]).unwrap();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let mut reused = search(21);
        let first = reused.search(&grid, &piece).best.map(|p| p.score);
        let second = reused.search(&grid, &piece).best.map(|p| p.score);
        assert_eq!(first, second, "{kind:?}");
        assert_eq!(reused.reached_len(), 0);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let grid = Grid::from_rows(&["..#.......", "###..##.##"]).unwrap();
    let piece = Piece::spawn(PieceKind::L);
    let a = search(42).compute_best_sequence(&grid, &piece);
    let b = search(42).compute_best_sequence(&grid, &piece);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_search_leaves_grid_and_piece_alone() {
    let grid = Grid::from_rows(&["#...#....#", "##.###.###"]).unwrap();
    let before = grid.clone();
    let piece = Piece::spawn(PieceKind::Z);
    let start = piece;

    let mut search = search(8);
    search.search(&grid, &piece);
    search.evaluate_sequence(&grid, &piece, &[Action::Left; 8]);

    assert_eq!(grid, before);
    assert_eq!(piece, start);
}

#[test]
fn test_wall_shift_is_pruned_not_scored() {
    let grid = Grid::new();
    let piece = Piece::new(PieceKind::I, 2, 19, cascade_core::Rotation::North);
    let mut search = search(0);

    let outcome = search.evaluate_sequence(&grid, &piece, &[Action::Left]);
    assert_eq!(outcome, SequenceOutcome::Pruned(PruneReason::Illegal));
    assert!(outcome.score().is_none());
    assert_eq!(search.reached_len(), 0);

    // the same state reached legally is still new
    assert_eq!(
        search.evaluate_sequence(&grid, &piece, &[Action::None]),
        SequenceOutcome::InProgress
    );
}

mod frontier_order {
    use super::*;

    #[test]
    fn test_front_pops_keep_first_right_seeded_tie() {
        let grid = shelf();
        let piece = Piece::spawn(PieceKind::O);
        let report = PlacementSearch::new(front_first()).search(&grid, &piece);

        // [RR, RIGHT] lands first over the open column; [RR, ROT] is the first
        // of the tied landings, ahead of [RR, -] and all four left children
        let best = report.best.expect("an O lands on the shelf");
        assert_eq!(best.actions, vec![Action::RightDouble, Action::RotateCw]);
        assert_eq!(best.score, SHELF_TIE);

        // [RR, RR] ends where [RR, RIGHT] already did
        assert_eq!(report.stats.evaluated, 10);
        assert_eq!(report.stats.expanded, 2);
        assert_eq!(report.stats.landed, 7);
        assert_eq!(report.stats.duplicate, 1);
        assert_eq!(report.stats.illegal, 0);
    }

    #[test]
    fn test_back_pops_keep_first_left_seeded_tie() {
        let grid = shelf();
        let piece = Piece::spawn(PieceKind::O);
        let report = PlacementSearch::new(back_first()).search(&grid, &piece);

        // left children sit at the back in list order, so [LL, LEFT] comes off
        // first and every later tie leaves it in place
        let best = report.best.expect("an O lands on the shelf");
        assert_eq!(best.actions, vec![Action::LeftDouble, Action::Left]);
        assert_eq!(best.score, SHELF_TIE);

        // here [RR, RR] comes off before [RR, RIGHT], which is the duplicate
        assert_eq!(report.stats.evaluated, 10);
        assert_eq!(report.stats.landed, 7);
        assert_eq!(report.stats.duplicate, 1);
    }

    #[test]
    fn test_tied_landings_are_equal_scores() {
        let grid = shelf();
        let piece = Piece::spawn(PieceKind::O);
        let mut search = search(0);
        for actions in [
            [Action::RightDouble, Action::RotateCw],
            [Action::RightDouble, Action::None],
            [Action::LeftDouble, Action::None],
            [Action::LeftDouble, Action::LeftDouble],
            [Action::LeftDouble, Action::RotateCw],
            [Action::LeftDouble, Action::Left],
        ] {
            assert_eq!(
                search.evaluate_sequence(&grid, &piece, &actions),
                SequenceOutcome::Landed(SHELF_TIE),
                "{actions:?}"
            );
        }
    }
}
