use goal_shooter::compute::init_state;
use goal_shooter::config::{Config, Params};
use goal_shooter::entities::*;
use goal_shooter::input::TickInput;
use goal_shooter::motion::{advance, advance_all};

fn make_state() -> GameState {
    init_state(Config::default())
}

fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
    TickInput {
        up,
        down,
        left,
        right,
        ..TickInput::default()
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_moves_along_each_pressed_axis() {
    let mut s = make_state(); // (50, 305)
    advance_all(&mut s, &held(true, false, false, true));
    assert_eq!(s.player.rect.x, 55);
    assert_eq!(s.player.rect.y, 300);
}

#[test]
fn player_opposite_keys_cancel() {
    let mut s = make_state();
    advance_all(&mut s, &held(true, true, true, true));
    assert_eq!(s.player.rect.x, 50);
    assert_eq!(s.player.rect.y, 305);
}

#[test]
fn player_clamped_at_top_and_left() {
    let mut s = make_state();
    s.player.rect.x = 3;
    s.player.rect.y = 2;
    advance_all(&mut s, &held(true, false, true, false));
    assert_eq!(s.player.rect.x, 0);
    assert_eq!(s.player.rect.y, 0);
}

#[test]
fn player_clamped_at_bottom() {
    let mut s = make_state();
    s.player.rect.y = 608; // bottom 748
    advance_all(&mut s, &held(false, true, false, false));
    assert_eq!(s.player.rect.bottom(), Params::FIELD_HEIGHT);
}

#[test]
fn player_confined_to_shooting_lane() {
    let mut s = make_state();
    s.player.rect.x = 65; // right edge 145
    advance_all(&mut s, &held(false, false, false, true));
    assert_eq!(s.player.rect.right(), Params::LANE_RIGHT);
    advance_all(&mut s, &held(false, false, false, true));
    assert_eq!(s.player.rect.right(), Params::LANE_RIGHT);
}

// ── Ball ──────────────────────────────────────────────────────────────────────

#[test]
fn idle_ball_does_not_move_or_animate() {
    let mut s = make_state();
    let before = s.ball.clone();
    advance_all(&mut s, &TickInput::default());
    assert_eq!(s.ball, before);
}

#[test]
fn ball_in_flight_moves_and_animates() {
    let mut s = make_state();
    s.ball.phase = BallPhase::InFlight;
    s.ball.velocity = 15;
    s.ball.rect.x = 100;
    s.ball.rect.y = 20;
    s.ball.frame = 3;
    advance_all(&mut s, &TickInput::default());
    assert_eq!(s.ball.rect.x, 115);
    assert_eq!(s.ball.frame, 0); // wraps over 4 frames
}

#[test]
fn ball_leaving_left_edge_resets() {
    let config = Config::default();
    let mut ball = Ball::idle();
    ball.phase = BallPhase::InFlight;
    ball.velocity = -15;
    ball.rect.x = -20; // right edge 10 → -5 after the move
    ball.rect.y = 200;
    advance(EntityMut::Ball(&mut ball), &TickInput::default(), &config);
    assert_eq!(ball, {
        let mut idle = Ball::idle();
        idle.frame = ball.frame;
        idle
    });
}

#[test]
fn ball_leaving_right_edge_resets() {
    let config = Config::default();
    let mut ball = Ball::idle();
    ball.phase = BallPhase::InFlight;
    ball.velocity = 15;
    ball.rect.x = 990;
    advance(EntityMut::Ball(&mut ball), &TickInput::default(), &config);
    assert!(!ball.is_in_flight());
    assert_eq!(ball.rect.center(), (Params::BALL_SENTINEL, Params::BALL_SENTINEL));
}

// ── Goalie & defenders ────────────────────────────────────────────────────────

#[test]
fn goalie_patrols_by_its_speed() {
    let mut s = make_state(); // y=315, speed 2
    advance_all(&mut s, &TickInput::default());
    assert_eq!(s.goalie.rect.y, 317);
}

#[test]
fn goalie_reflects_at_top_bound() {
    let mut s = make_state();
    s.goalie.rect.y = Params::GOALIE_TOP + 1;
    s.goalie.speed = -3;
    advance_all(&mut s, &TickInput::default());
    assert_eq!(s.goalie.rect.top(), Params::GOALIE_TOP);
    assert_eq!(s.goalie.speed, 3);
}

#[test]
fn goalie_reflects_at_bottom_bound() {
    let mut s = make_state();
    s.goalie.rect.set_bottom(Params::GOALIE_BOTTOM - 1);
    s.goalie.speed = 3;
    advance_all(&mut s, &TickInput::default());
    assert_eq!(s.goalie.rect.bottom(), Params::GOALIE_BOTTOM);
    assert_eq!(s.goalie.speed, -3);
}

#[test]
fn defender_reflects_within_its_own_band() {
    let config = Config::default();
    let mut d = Patroller {
        rect: Rect::new(470, Params::DEFENDER_TOP, 60, 100),
        speed: -4,
        top_bound: Params::DEFENDER_TOP,
        bottom_bound: Params::DEFENDER_BOTTOM,
    };
    advance(EntityMut::Defender(&mut d), &TickInput::default(), &config);
    assert_eq!(d.rect.top(), Params::DEFENDER_TOP);
    assert_eq!(d.speed, 4);
}

#[test]
fn patrol_is_a_triangle_wave() {
    let mut s = make_state();
    let mut saw_down = false;
    let mut saw_up = false;
    for _ in 0..600 {
        advance_all(&mut s, &TickInput::default());
        assert!(s.goalie.rect.top() >= Params::GOALIE_TOP);
        assert!(s.goalie.rect.bottom() <= Params::GOALIE_BOTTOM);
        saw_down |= s.goalie.speed > 0;
        saw_up |= s.goalie.speed < 0;
    }
    assert!(saw_down && saw_up);
}
