/// Game tuning parameters.
///
/// All distances are field pixels and all speeds are pixels per tick; the
/// renderer scales the field onto whatever terminal grid is available.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: i32 = 1000;
    pub const FIELD_HEIGHT: i32 = 750;
    pub const FPS: u64 = 60;

    // Player
    pub const PLAYER_WIDTH: i32 = 80;
    pub const PLAYER_HEIGHT: i32 = 140;
    pub const PLAYER_SPEED: i32 = 5;
    pub const PLAYER_START_LEFT: i32 = 50;
    /// Right edge of the shooting lane the player is confined to.
    pub const LANE_RIGHT: i32 = 150;

    // Ball
    pub const BALL_SIZE: i32 = 30;
    pub const BALL_FRAMES: usize = 4;
    pub const KICK_SPEED: i32 = 15;
    pub const KICK_OFFSET_X: i32 = 60;
    pub const KICK_OFFSET_Y: i32 = 125;
    pub const BALL_SENTINEL: i32 = -100;

    // Goalie
    pub const GOALIE_WIDTH: i32 = 70;
    pub const GOALIE_HEIGHT: i32 = 120;
    pub const GOALIE_RIGHT: i32 = 750;
    pub const GOALIE_SPEED: i32 = 2;
    pub const GOALIE_TOP: i32 = 135;
    pub const GOALIE_BOTTOM: i32 = 585;

    // Defenders
    pub const DEFENDER_WIDTH: i32 = 60;
    pub const DEFENDER_HEIGHT: i32 = 100;
    pub const DEFENDER_CENTER_X: i32 = 500;
    pub const DEFENDER_SPEED: i32 = 3;
    pub const DEFENDER_TOP: i32 = 100;
    pub const DEFENDER_BOTTOM: i32 = 650;
    pub const DEFENDER_SPAWN_MARGIN: i32 = 50;
    pub const MAX_DEFENDERS: usize = 2;

    // Difficulty
    pub const DIFFICULTY_INCREMENT: u32 = 3;
}

/// Runtime configuration, carried inside the game state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub fps: u64,
    pub player_speed: i32,
    pub lane_right: i32,
    pub kick_speed: i32,
    pub goalie_speed: i32,
    pub goalie_top: i32,
    pub goalie_bottom: i32,
    pub defender_speed: i32,
    pub defender_top: i32,
    pub defender_bottom: i32,
    pub max_defenders: usize,
    pub difficulty_increment: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            fps: Params::FPS,
            player_speed: Params::PLAYER_SPEED,
            lane_right: Params::LANE_RIGHT,
            kick_speed: Params::KICK_SPEED,
            goalie_speed: Params::GOALIE_SPEED,
            goalie_top: Params::GOALIE_TOP,
            goalie_bottom: Params::GOALIE_BOTTOM,
            defender_speed: Params::DEFENDER_SPEED,
            defender_top: Params::DEFENDER_TOP,
            defender_bottom: Params::DEFENDER_BOTTOM,
            max_defenders: Params::MAX_DEFENDERS,
            difficulty_increment: Params::DIFFICULTY_INCREMENT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target duration of one tick.
    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / self.fps.max(1))
    }
}
