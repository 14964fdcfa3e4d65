//! Invariants that hold on every tick, under arbitrary input sequences

use brick_breaker::{GameConfig, GameOutcome, GameState, TickInput, tick};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (
        any::<bool>(),
        any::<bool>(),
        prop::option::of(-100.0f32..600.0),
        prop::bool::weighted(0.05),
    )
        .prop_map(|(left, right, pointer_x, autopilot)| TickInput {
            left,
            right,
            pointer_x,
            autopilot,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entities_stay_in_bounds(inputs in prop::collection::vec(input_strategy(), 1..3000)) {
        let config = GameConfig::default();
        let mut state = GameState::new(config.clone()).unwrap();
        let max_paddle_x = config.field_width - config.paddle_width;
        let r = config.ball_radius;

        for input in &inputs {
            tick(&mut state, input);
            prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= max_paddle_x);
            prop_assert!(state.ball.pos.x >= r && state.ball.pos.x <= config.field_width - r);
            prop_assert!(state.ball.pos.y <= config.field_height - r + config.ball_speed);
        }
    }

    #[test]
    fn score_and_lives_are_monotonic(inputs in prop::collection::vec(input_strategy(), 1..3000)) {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        let total = state.target_score();
        let mut score = state.score;
        let mut lives = state.lives;

        for input in &inputs {
            let result = tick(&mut state, input);
            prop_assert!(state.score >= score);
            prop_assert!(state.score <= total);
            prop_assert!(state.lives <= lives);
            if state.score == total {
                prop_assert_eq!(result.outcome, GameOutcome::Won);
            }
            if state.lives == 0 {
                prop_assert_eq!(result.outcome, GameOutcome::Lost);
            }
            score = state.score;
            lives = state.lives;
        }
    }

    #[test]
    fn terminal_snapshot_is_frozen(
        inputs in prop::collection::vec(input_strategy(), 1..50),
        lives in 1u32..4,
    ) {
        let config = GameConfig { lives, ..Default::default() };
        let mut state = GameState::new(config).unwrap();

        // Keep the paddle pinned left and let every serve fall past it
        let lose = TickInput { left: true, ..Default::default() };
        let mut last = None;
        for _ in 0..10_000 {
            let result = tick(&mut state, &lose);
            if !result.should_continue() {
                last = Some(result);
                break;
            }
        }
        let last = last.expect("session never ended");
        prop_assert!(last.outcome.is_terminal());

        for input in &inputs {
            prop_assert_eq!(&tick(&mut state, input), &last);
        }
    }
}
