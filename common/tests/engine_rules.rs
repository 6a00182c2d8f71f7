use std::collections::HashSet;

use snake_common::games::SessionRng;
use snake_common::games::snake::{
    BorderMode, Cell, Collision, Direction, GridEngine, TickOutcome,
};

fn create_engine(cols: i32, rows: i32, seed: u64) -> GridEngine {
    GridEngine::new(cols, rows, SessionRng::new(seed)).unwrap()
}

fn body_of(engine: &GridEngine) -> Vec<Cell> {
    engine.body().iter().copied().collect()
}

#[test]
fn test_reset_canonical_state() {
    for cols in 4..12 {
        for rows in 4..9 {
            let engine = create_engine(cols, rows, (cols * 100 + rows) as u64);
            let (cx, cy) = (cols / 2, rows / 2);

            assert_eq!(
                body_of(&engine),
                vec![Cell::new(cx - 2, cy), Cell::new(cx - 1, cy), Cell::new(cx, cy)]
            );
            assert_eq!(engine.direction(), Direction::Right);
            assert_eq!(engine.score(), 0);
            assert!(!engine.is_game_over());
            let food = engine.food().expect("food on a board with free cells");
            assert!(!engine.body().contains(&food));
        }
    }
}

#[test]
fn test_reset_is_repeatable() {
    for seed in 0..20 {
        let mut engine = create_engine(16, 12, seed);
        for _ in 0..7 {
            engine.tick();
        }

        engine.reset();
        let first = engine.snapshot();
        engine.reset();
        let second = engine.snapshot();

        assert_eq!(first, second);
        assert_eq!(first, create_engine(16, 12, seed).snapshot());
    }
}

#[test]
fn test_same_seed_same_game() {
    let mut a = create_engine(20, 15, 77);
    let mut b = create_engine(20, 15, 77);
    let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

    for step in 0..120 {
        let direction = turns[(step / 5) % turns.len()];
        a.request_direction(direction);
        b.request_direction(direction);
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_wrap_run_along_row() {
    let mut engine = create_engine(10, 10, 1);
    engine.set_border_mode(BorderMode::Wrap);

    for _ in 0..5 {
        assert!(matches!(engine.tick(), TickOutcome::Moved { .. }));
    }
    assert_eq!(engine.head(), Cell::new(0, 5));
    assert!(!engine.is_game_over());
}

#[test]
fn test_walls_stop_at_edge_without_moving() {
    let mut engine = create_engine(10, 10, 1);
    engine.set_border_mode(BorderMode::Walls);

    for _ in 0..4 {
        assert!(matches!(engine.tick(), TickOutcome::Moved { .. }));
    }
    assert_eq!(engine.head(), Cell::new(9, 5));

    let before = body_of(&engine);
    assert_eq!(engine.tick(), TickOutcome::Blocked(Collision::Wall));
    assert!(engine.is_game_over());
    assert_eq!(body_of(&engine), before);
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

#[test]
fn test_tick_invariants_over_long_run() {
    let mut engine = create_engine(12, 12, 2024);
    let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    for step in 0..400 {
        if step % 7 == 0 {
            engine.request_direction(turns[(step / 7) % turns.len()]);
        }

        let length_before = engine.body().len();
        let score_before = engine.score();

        match engine.tick() {
            TickOutcome::Moved { grew: true } => {
                assert_eq!(engine.body().len(), length_before + 1);
                assert_eq!(engine.score(), score_before + 1);
            }
            TickOutcome::Moved { grew: false } => {
                assert_eq!(engine.body().len(), length_before);
                assert_eq!(engine.score(), score_before);
            }
            TickOutcome::Blocked(_) => {
                assert_eq!(engine.body().len(), length_before);
                engine.reset();
                continue;
            }
            TickOutcome::Idle => unreachable!("game over is always followed by reset"),
        }

        let unique: HashSet<Cell> = engine.body().iter().copied().collect();
        assert_eq!(unique.len(), engine.body().len());
        if let Some(food) = engine.food() {
            assert!(!unique.contains(&food));
        }
    }
}

#[test]
fn test_opposite_request_after_turn_uses_applied_direction() {
    let mut engine = create_engine(10, 10, 3);
    engine.request_direction(Direction::Up);
    engine.tick();
    assert_eq!(engine.direction(), Direction::Up);

    engine.request_direction(Direction::Down);
    assert_eq!(engine.pending_direction(), Direction::Up);
    engine.request_direction(Direction::Left);
    assert_eq!(engine.pending_direction(), Direction::Left);
}
