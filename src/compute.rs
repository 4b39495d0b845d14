/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the tick's input and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and log output.

use log::debug;
use rand::Rng;

use crate::collision;
use crate::config::{Config, Params};
use crate::entities::{Ball, BallPhase, GameState, Patroller, Player, Rect};
use crate::input::TickInput;
use crate::motion;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: player on the left, goalie in front of the
/// goal, idle ball, no defenders.
pub fn init_state(config: Config) -> GameState {
    let mid_y = config.field_height / 2;

    let player_rect = Rect::new(
        Params::PLAYER_START_LEFT,
        mid_y - Params::PLAYER_HEIGHT / 2,
        Params::PLAYER_WIDTH,
        Params::PLAYER_HEIGHT,
    );
    let goalie_rect = Rect::new(
        Params::GOALIE_RIGHT - Params::GOALIE_WIDTH,
        mid_y - Params::GOALIE_HEIGHT / 2,
        Params::GOALIE_WIDTH,
        Params::GOALIE_HEIGHT,
    );

    GameState {
        player: Player {
            rect: player_rect,
            speed: config.player_speed,
        },
        ball: Ball::idle(),
        goalie: Patroller {
            rect: goalie_rect,
            speed: config.goalie_speed,
            top_bound: config.goalie_top,
            bottom_bound: config.goalie_bottom,
        },
        defenders: Vec::new(),
        score: 0,
        level: 1,
        frame: 0,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Launch the ball from the player's feet.  A no-op while the ball is
/// already in flight.
pub fn kick(state: &GameState) -> GameState {
    if state.ball.is_in_flight() {
        return state.clone();
    }

    let origin = state.player.rect;
    let mut ball = state.ball.clone();
    ball.rect.set_center(
        origin.x + Params::KICK_OFFSET_X,
        origin.y + Params::KICK_OFFSET_Y,
    );
    ball.velocity = state.config.kick_speed;
    ball.phase = BallPhase::InFlight;
    debug!("kick from ({}, {})", ball.rect.x, ball.rect.y);

    GameState {
        ball,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick: motion, then obstacle collisions,
/// then the goal line (which may escalate difficulty).  All randomness
/// comes through `rng` so callers control determinism.
pub fn tick(state: &GameState, input: &TickInput, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.frame += 1;

    motion::advance_all(&mut next, input);
    collision::resolve(&mut next, rng);

    next
}
