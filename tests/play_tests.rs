//! Play integration tests.
//!
//! These tests drive an agent through generated mazes and verify that moves
//! follow passages exactly.

use labyrinth::core::{Cell, Direction, MazeConfig};
use labyrinth::grid::path_between;
use labyrinth::{Labyrinth, PlayState};
use proptest::prelude::*;

/// Test that the origin rejects outward moves and accepts at least one exit.
#[test]
fn test_origin_scenario() {
    for seed in 0..30 {
        let mut lab = Labyrinth::new(MazeConfig::default().with_seed(seed)).unwrap();
        assert!(!lab.attempt_move(Direction::Left));
        assert!(!lab.attempt_move(Direction::Up));
        assert_eq!(lab.player().position(), Cell::ORIGIN);

        let moved = lab.attempt_move(Direction::Down) || lab.attempt_move(Direction::Right);
        assert!(moved, "seed {}", seed);
        assert_ne!(lab.player().position(), Cell::ORIGIN);
    }
}

/// Test walking the unique path from origin to goal.
#[test]
fn test_walk_to_goal() {
    let mut lab = Labyrinth::new(MazeConfig::default().with_seed(2024)).unwrap();
    let path = path_between(lab.grid(), Cell::ORIGIN, lab.goal()).unwrap();

    for pair in path.windows(2) {
        let dir = pair[0].direction_to(pair[1]).unwrap();
        assert!(lab.attempt_move(dir));
        assert_eq!(lab.player().position(), pair[1]);
        assert_eq!(lab.player().previous_position(), pair[0]);
    }

    assert_eq!(lab.player().position(), lab.goal());
    assert_eq!(lab.player().moves() as usize, path.len() - 1);
}

/// Test that keys drive the agent the same way directions do.
#[test]
fn test_keys_follow_path() {
    let mut lab = Labyrinth::new(MazeConfig::small().with_seed(8)).unwrap();
    let path = path_between(lab.grid(), Cell::ORIGIN, lab.goal()).unwrap();

    for pair in path.windows(2) {
        let key = match pair[0].direction_to(pair[1]).unwrap() {
            Direction::Up => "w",
            Direction::Down => "ArrowDown",
            Direction::Left => "A",
            Direction::Right => "ArrowRight",
        };
        assert!(lab.handle_key(key));
    }
    assert_eq!(lab.player().position(), lab.goal());
}

/// Test that a one-cell maze never lets the agent move.
#[test]
fn test_single_cell_maze() {
    let mut lab = Labyrinth::new(MazeConfig::new(1).with_seed(0)).unwrap();
    assert_eq!(lab.goal(), Cell::ORIGIN);
    for dir in Direction::ALL {
        assert!(!lab.attempt_move(dir));
    }
}

proptest! {
    /// A move succeeds iff the passage bit was set, and lands on the unit
    /// offset neighbour.
    #[test]
    fn prop_move_follows_passages(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..4, 0..200),
    ) {
        let lab = Labyrinth::new(MazeConfig::small().with_seed(seed)).unwrap();
        let grid = lab.grid();
        let mut state = PlayState::new();

        for m in moves {
            let dir = Direction::ALL[m];
            let before = state;
            let open = grid.has_passage(before.position(), dir);
            let moved = state.attempt_move(grid, dir);

            prop_assert_eq!(moved, open);
            if moved {
                let (dx, dy) = dir.delta();
                let expected = Cell::new(
                    (before.position().x as i32 + dx) as usize,
                    (before.position().y as i32 + dy) as usize,
                );
                prop_assert_eq!(state.position(), expected);
                prop_assert_eq!(state.previous_position(), before.position());
            } else {
                prop_assert_eq!(state, before);
            }
            prop_assert!(grid.contains(state.position()));
        }
    }
}
