/// Collision and scoring resolver.  Runs once per tick after motion and
/// before rendering: obstacle checks first, then the goal line.

use log::{debug, info};
use rand::Rng;

use crate::difficulty;
use crate::entities::GameState;

/// What happened to the ball this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Ball idle, or still travelling.
    Clear,
    /// Knocked out by the goalie or a defender.  Score unchanged.
    Intercepted,
    /// Crossed the goal line; score has been incremented.
    Goal,
}

/// Resolve ball contacts for the current tick.  An interception resets the
/// ball before the goal check, so a ball can never both be stopped and
/// score in the same tick.
pub fn resolve(state: &mut GameState, rng: &mut impl Rng) -> Resolution {
    if !state.ball.is_in_flight() {
        return Resolution::Clear;
    }

    let ball = state.ball.rect;

    // Goalie and each defender are checked independently; hitting several
    // at once is still a single knock-out.
    let mut intercepted = ball.intersects(&state.goalie.rect);
    for defender in &state.defenders {
        if ball.intersects(&defender.rect) {
            intercepted = true;
        }
    }

    if intercepted {
        debug!("ball intercepted at ({}, {})", ball.x, ball.y);
        state.ball.reset();
        return Resolution::Intercepted;
    }

    if ball.right() >= state.config.field_width {
        state.score += 1;
        state.ball.reset();
        info!("goal! score is now {}", state.score);
        difficulty::on_goal(state, rng);
        return Resolution::Goal;
    }

    Resolution::Clear
}
