/// Rendering layer — all terminal output lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only scales field
/// pixels onto the terminal grid and translates state into commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use goal_shooter::entities::{Entity, GameState, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PITCH: Color = Color::DarkGreen;
const C_LANE: Color = Color::Green;
const C_GOAL: Color = Color::White;
const C_TITLE: Color = Color::Cyan;
const C_SCORE: Color = Color::White;
const C_LEVEL: Color = Color::Yellow;
const C_PLAYER: Color = Color::Cyan;
const C_GOALIE: Color = Color::Red;
const C_DEFENDER: Color = Color::Magenta;
const C_BALL: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

const TITLE: &str = "Soccer Goal Shoot Game";

/// One glyph per ball animation frame.
const BALL_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Drawable handle per entity role.
#[derive(Clone, Copy, Debug)]
enum Sprite {
    Player,
    Goalie,
    Defender,
    Ball(usize),
}

impl Sprite {
    fn for_entity(entity: &Entity<'_>) -> Option<Sprite> {
        match entity {
            Entity::Player(_) => Some(Sprite::Player),
            Entity::Goalie(_) => Some(Sprite::Goalie),
            Entity::Defender(_) => Some(Sprite::Defender),
            Entity::Ball(ball) if ball.is_in_flight() => Some(Sprite::Ball(ball.frame)),
            Entity::Ball(_) => None,
        }
    }

    fn glyph(self) -> (&'static str, Color) {
        match self {
            Sprite::Player => ("█", C_PLAYER),
            Sprite::Goalie => ("▓", C_GOALIE),
            Sprite::Defender => ("▒", C_DEFENDER),
            Sprite::Ball(frame) => (BALL_FRAMES[frame % BALL_FRAMES.len()], C_BALL),
        }
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal area the field is scaled onto.  Row 0 is the title bar and the
/// last row holds the controls hint.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    fn field_rows(&self) -> i32 {
        (self.rows as i32 - 2).max(1)
    }

    fn col(&self, x: i32, state: &GameState) -> i32 {
        x * self.cols as i32 / state.config.field_width
    }

    fn row(&self, y: i32, state: &GameState) -> i32 {
        1 + y * self.field_rows() / state.config.field_height
    }

    fn visible(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 1 && row <= self.field_rows()
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame and present it.
pub fn render<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out, state, view)?;
    for entity in state.entities() {
        if let Some(sprite) = Sprite::for_entity(&entity) {
            draw_sprite(out, sprite, entity.rect(), state, view)?;
        }
    }
    draw_overlay(out, state, view)?;
    draw_controls_hint(out, view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(
    out: &mut W,
    state: &GameState,
    view: Viewport,
) -> std::io::Result<()> {
    let w = view.cols as usize;
    let bottom = view.field_rows() as u16;

    out.queue(style::SetForegroundColor(C_PITCH))?;
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print("─".repeat(w)))?;
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print("─".repeat(w)))?;

    // Shooting lane boundary
    let lane_col = view.col(state.config.lane_right, state);
    out.queue(style::SetForegroundColor(C_LANE))?;
    for row in 2..bottom {
        if view.visible(lane_col, row as i32) {
            out.queue(cursor::MoveTo(lane_col as u16, row))?;
            out.queue(Print("┆"))?;
        }
    }

    // Goal mouth spans the goalie's patrol band
    let goal_col = view.cols.saturating_sub(1);
    let goal_top = view.row(state.config.goalie_top, state);
    let goal_bottom = view.row(state.config.goalie_bottom, state);
    out.queue(style::SetForegroundColor(C_GOAL))?;
    for row in goal_top..=goal_bottom {
        if view.visible(goal_col as i32, row) {
            out.queue(cursor::MoveTo(goal_col, row as u16))?;
            out.queue(Print("║"))?;
        }
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Blit a sprite over every cell its box covers (at least one cell).
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: Sprite,
    rect: Rect,
    state: &GameState,
    view: Viewport,
) -> std::io::Result<()> {
    let (glyph, color) = sprite.glyph();
    out.queue(style::SetForegroundColor(color))?;

    let left = view.col(rect.left(), state);
    let right = view.col(rect.right(), state).max(left + 1);
    let top = view.row(rect.top(), state);
    let bottom = view.row(rect.bottom(), state).max(top + 1);

    for row in top..bottom {
        for col in left..right {
            if view.visible(col, row) {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── Overlay ───────────────────────────────────────────────────────────────────

fn draw_overlay<W: Write>(out: &mut W, state: &GameState, view: Viewport) -> std::io::Result<()> {
    let tx = (view.cols / 2).saturating_sub(TITLE.len() as u16 / 2);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(TITLE))?;

    let score_col = view.col(10, state).max(1) as u16;
    let score_row = view.row(10, state).max(2);
    let level_row = view.row(50, state).max(score_row + 1);

    out.queue(cursor::MoveTo(score_col, score_row as u16))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    out.queue(cursor::MoveTo(score_col, level_row as u16))?;
    out.queue(style::SetForegroundColor(C_LEVEL))?;
    out.queue(Print(format!("Level: {}", state.level)))?;

    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ ↓ ← → / W A S D : Move   SPACE : Kick   Q : Quit"))?;
    Ok(())
}
