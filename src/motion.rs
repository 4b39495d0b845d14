/// Motion engine: advances every entity by one tick according to its own
/// rule.  Speeds are per-tick pixel deltas, so the achieved frame rate is
/// also the game speed.

use log::trace;

use crate::config::{Config, Params};
use crate::entities::{Ball, EntityMut, GameState, Patroller, Player};
use crate::input::TickInput;

/// Advance all entities in update order.
pub fn advance_all(state: &mut GameState, input: &TickInput) {
    let config = state.config;
    for entity in state.entities_mut() {
        advance(entity, input, &config);
    }
}

/// Advance a single entity.  Only the player reads `input`.
pub fn advance(entity: EntityMut<'_>, input: &TickInput, config: &Config) {
    match entity {
        EntityMut::Player(player) => move_player(player, input, config),
        EntityMut::Ball(ball) => move_ball(ball, config),
        EntityMut::Goalie(patroller) | EntityMut::Defender(patroller) => patrol(patroller),
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Four independent axis checks, clamped to the field vertically and to the
/// shooting lane horizontally.
fn move_player(player: &mut Player, input: &TickInput, config: &Config) {
    let speed = player.speed;
    let rect = &mut player.rect;

    if input.up {
        rect.y = (rect.y - speed).max(0);
    }
    if input.down {
        rect.y = (rect.y + speed).min(config.field_height - rect.height);
    }
    if input.left {
        rect.x = (rect.x - speed).max(0);
    }
    if input.right {
        rect.x = (rect.x + speed).min(config.lane_right - rect.width);
    }
}

// ── Ball ──────────────────────────────────────────────────────────────────────

fn move_ball(ball: &mut Ball, config: &Config) {
    if !ball.is_in_flight() {
        return;
    }

    ball.rect.x += ball.velocity;
    // One animation frame per tick, no throttling.
    ball.frame = (ball.frame + 1) % Params::BALL_FRAMES;

    if ball.rect.left() > config.field_width || ball.rect.right() < 0 {
        trace!("ball left the field at x={}", ball.rect.x);
        ball.reset();
    }
}

// ── Goalie & defenders ────────────────────────────────────────────────────────

/// Triangle-wave patrol with hard reflection at the band edges.
fn patrol(patroller: &mut Patroller) {
    patroller.rect.y += patroller.speed;

    if patroller.rect.top() < patroller.top_bound {
        patroller.rect.set_top(patroller.top_bound);
        patroller.speed = patroller.speed.abs();
    } else if patroller.rect.bottom() > patroller.bottom_bound {
        patroller.rect.set_bottom(patroller.bottom_bound);
        patroller.speed = -patroller.speed.abs();
    }
}
