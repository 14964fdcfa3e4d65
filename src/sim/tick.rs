//! Fixed-step simulation tick
//!
//! One call advances a session by exactly one tick: paddle input, then
//! collisions, then ball motion.

use super::collision::{
    FloorContact, bounce_x, bounce_y, first_brick_hit, floor_contact, side_wall_hit, top_wall_hit,
};
use super::snapshot::RenderSnapshot;
use super::state::{Direction, GameOutcome, GameState};

/// Input signals for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Left direction held
    pub left: bool,
    /// Right direction held (wins over `left`)
    pub right: bool,
    /// Canvas-relative pointer x, if the pointer moved since the last tick
    pub pointer_x: Option<f32>,
    /// Idle/demo mode - paddle follows the ball
    pub autopilot: bool,
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub snapshot: RenderSnapshot,
    pub outcome: GameOutcome,
}

impl StepResult {
    /// Whether another tick should be scheduled
    pub fn should_continue(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

/// How collision resolution ended for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// Commit the ball's move
    Advance,
    /// Ball and paddle were re-centered; remaining checks skipped, move still committed
    RoundReset,
    /// Session reached Won or Lost
    Terminal,
}

/// Advance the game state by one tick.
///
/// Once the outcome is terminal this is a no-op that returns the snapshot
/// frozen on the terminal tick.
pub fn tick(state: &mut GameState, input: &TickInput) -> StepResult {
    if state.outcome.is_terminal() {
        let snapshot = state.frozen.clone().unwrap_or_else(|| state.snapshot());
        return StepResult {
            snapshot,
            outcome: state.outcome,
        };
    }

    state.time_ticks += 1;

    apply_paddle_input(state, input);

    match resolve_collisions(state) {
        Resolution::Advance | Resolution::RoundReset => state.ball.advance(),
        Resolution::Terminal => {}
    }

    state.bricks.relayout(&state.config);

    let snapshot = state.snapshot();
    if state.outcome.is_terminal() {
        state.frozen = Some(snapshot.clone());
    }

    StepResult {
        snapshot,
        outcome: state.outcome,
    }
}

/// Pointer (or autopilot) snaps the paddle; otherwise a held direction steps it.
fn apply_paddle_input(state: &mut GameState, input: &TickInput) {
    let field_width = state.config.field_width;

    let target = if input.autopilot {
        Some(state.ball.pos.x)
    } else {
        input.pointer_x
    };
    if target.is_some_and(|x| state.paddle.snap_to_pointer(x, field_width)) {
        return;
    }

    let step = state.config.paddle_step;
    if input.right {
        state.paddle.step(Direction::Right, step, field_width);
    } else if input.left {
        state.paddle.step(Direction::Left, step, field_width);
    }
}

/// Walls, then floor/paddle, then bricks.
fn resolve_collisions(state: &mut GameState) -> Resolution {
    if side_wall_hit(&state.ball, state.config.field_width) {
        state.ball.vel = bounce_x(state.ball.vel);
    }

    if top_wall_hit(&state.ball) {
        state.ball.vel = bounce_y(state.ball.vel);
    } else {
        match floor_contact(&state.ball, &state.paddle, state.config.field_height) {
            FloorContact::None => {}
            FloorContact::Paddle => state.ball.vel = bounce_y(state.ball.vel),
            FloorContact::Miss => return floor_event(state),
        }
    }

    // Flips dy independently of the floor check above. A brick reaching into
    // the paddle band can undo a paddle bounce on the same tick.
    if let Some(index) = first_brick_hit(&state.bricks, state.ball.pos) {
        state.ball.vel = bounce_y(state.ball.vel);
        let brick = &mut state.bricks.bricks[index];
        brick.alive = false;
        state.score += 1;
        log::debug!(
            "Brick ({}, {}) destroyed, score {}",
            brick.column,
            brick.row,
            state.score
        );

        if state.score >= state.target_score() {
            state.outcome = GameOutcome::Won;
            log::info!("All bricks cleared at tick {}", state.time_ticks);
            return Resolution::Terminal;
        }
    }

    Resolution::Advance
}

/// Ball crossed the bottom edge without the paddle
fn floor_event(state: &mut GameState) -> Resolution {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.outcome = GameOutcome::Lost;
        log::info!(
            "Last life lost at tick {} with score {}",
            state.time_ticks,
            state.score
        );
        return Resolution::Terminal;
    }

    log::debug!("Floor event, {} lives left", state.lives);
    state.round_reset();
    Resolution::RoundReset
}
