/// All game entity types: plain data plus the geometry helpers that keep
/// their invariants.  Behaviour lives in `motion`, `collision` and
/// `difficulty`.

use crate::config::{Config, Params};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box in field pixels.  Origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn set_center(&mut self, cx: i32, cy: i32) {
        self.x = cx - self.width / 2;
        self.y = cy - self.height / 2;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    /// Overlap test with exclusive edges: boxes that merely touch do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
}

// ── Ball ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BallPhase {
    Idle,
    InFlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub phase: BallPhase,
    /// Horizontal pixels per tick.  Zero while idle.
    pub velocity: i32,
    /// Index into the animation frames, `0..Params::BALL_FRAMES`.
    pub frame: usize,
}

impl Ball {
    pub fn idle() -> Self {
        let mut ball = Ball {
            rect: Rect::new(0, 0, Params::BALL_SIZE, Params::BALL_SIZE),
            phase: BallPhase::Idle,
            velocity: 0,
            frame: 0,
        };
        ball.reset();
        ball
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == BallPhase::InFlight
    }

    /// Take the ball out of play.  Shared by goals, interceptions and
    /// screen exits; calling it on an idle ball changes nothing.
    pub fn reset(&mut self) {
        self.phase = BallPhase::Idle;
        self.velocity = 0;
        self.rect.set_center(Params::BALL_SENTINEL, Params::BALL_SENTINEL);
    }
}

// ── Goalie & defenders ────────────────────────────────────────────────────────

/// A vertically patrolling obstacle.  Goalie and defenders share this
/// shape and differ only in their band and speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Patroller {
    pub rect: Rect,
    /// Signed pixels per tick; positive moves down.
    pub speed: i32,
    pub top_bound: i32,
    pub bottom_bound: i32,
}

impl Patroller {
    /// Add one to the speed magnitude, keeping the current direction.
    pub fn speed_up(&mut self) {
        self.speed += if self.speed < 0 { -1 } else { 1 };
    }
}

// ── Tagged views ──────────────────────────────────────────────────────────────

/// Read-only view of one entity, in draw order.
#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Player(&'a Player),
    Goalie(&'a Patroller),
    Defender(&'a Patroller),
    Ball(&'a Ball),
}

impl Entity<'_> {
    pub fn rect(&self) -> Rect {
        match self {
            Entity::Player(p) => p.rect,
            Entity::Goalie(g) | Entity::Defender(g) => g.rect,
            Entity::Ball(b) => b.rect,
        }
    }
}

/// Mutable view of one entity, handed to the motion engine.
#[derive(Debug)]
pub enum EntityMut<'a> {
    Player(&'a mut Player),
    Goalie(&'a mut Patroller),
    Defender(&'a mut Patroller),
    Ball(&'a mut Ball),
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub ball: Ball,
    pub goalie: Patroller,
    /// Grows to at most `config.max_defenders`; never shrinks.
    pub defenders: Vec<Patroller>,
    pub score: u32,
    /// Starts at 1.
    pub level: u32,
    pub frame: u64,
    pub config: Config,
}

impl GameState {
    /// Every entity in draw order: player, goalie, defenders, ball.
    pub fn entities(&self) -> Vec<Entity<'_>> {
        let mut all = Vec::with_capacity(3 + self.defenders.len());
        all.push(Entity::Player(&self.player));
        all.push(Entity::Goalie(&self.goalie));
        all.extend(self.defenders.iter().map(Entity::Defender));
        all.push(Entity::Ball(&self.ball));
        all
    }

    /// Every entity in update order: player, ball, goalie, defenders.
    pub fn entities_mut(&mut self) -> Vec<EntityMut<'_>> {
        let mut all = Vec::with_capacity(3 + self.defenders.len());
        all.push(EntityMut::Player(&mut self.player));
        all.push(EntityMut::Ball(&mut self.ball));
        all.push(EntityMut::Goalie(&mut self.goalie));
        all.extend(self.defenders.iter_mut().map(EntityMut::Defender));
        all
    }
}
