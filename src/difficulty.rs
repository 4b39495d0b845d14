/// Difficulty controller.  Invoked only on goals, with the score already
/// incremented.  Difficulty never decreases and defenders are never
/// removed.

use log::info;
use rand::Rng;

use crate::config::{Config, Params};
use crate::entities::{GameState, Patroller, Rect};

pub fn on_goal(state: &mut GameState, rng: &mut impl Rng) {
    let increment = state.config.difficulty_increment.max(1);
    if state.score % increment != 0 {
        return;
    }

    state.level += 1;
    state.goalie.speed_up();
    info!(
        "level {} reached, goalie speed {}",
        state.level, state.goalie.speed
    );

    // Guard order matters: at most one spawn per level-up.
    if state.level >= 3 && state.defenders.is_empty() {
        state.defenders.push(spawn_defender(&state.config, rng));
        info!("first defender joins the pitch");
    } else if state.level >= 4 && state.defenders.len() < state.config.max_defenders {
        state.defenders.push(spawn_defender(&state.config, rng));
        info!("defender {} joins the pitch", state.defenders.len());
    }

    for defender in &mut state.defenders {
        defender.speed_up();
    }
}

/// A new defender at the centre line with a random height and direction,
/// placed inside its patrol band.
pub fn spawn_defender(config: &Config, rng: &mut impl Rng) -> Patroller {
    let margin = Params::DEFENDER_SPAWN_MARGIN;
    let center_y = rng.gen_range(margin..=config.field_height - margin);
    let speed = if rng.gen_bool(0.5) {
        config.defender_speed
    } else {
        -config.defender_speed
    };

    let mut rect = Rect::new(0, 0, Params::DEFENDER_WIDTH, Params::DEFENDER_HEIGHT);
    rect.set_center(Params::DEFENDER_CENTER_X, center_y);
    if rect.top() < config.defender_top {
        rect.set_top(config.defender_top);
    } else if rect.bottom() > config.defender_bottom {
        rect.set_bottom(config.defender_bottom);
    }

    Patroller {
        rect,
        speed,
        top_bound: config.defender_top,
        bottom_bound: config.defender_bottom,
    }
}
