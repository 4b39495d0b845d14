/// Frame loop state machine.  The binary owns pacing, polling and
/// rendering; `step` is the logic half of one RUNNING tick.

use log::info;
use rand::Rng;

use crate::compute::{kick, tick};
use crate::entities::GameState;
use crate::input::TickInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Run one tick: quit check, then the kick trigger, then motion and
/// collision resolution.  A quit leaves the game state untouched.
pub fn step(
    run_state: RunState,
    state: &GameState,
    input: &TickInput,
    rng: &mut impl Rng,
) -> (RunState, GameState) {
    if run_state == RunState::Terminated {
        return (RunState::Terminated, state.clone());
    }
    if input.quit {
        info!(
            "quit after {} ticks with score {} at level {}",
            state.frame, state.score, state.level
        );
        return (RunState::Terminated, state.clone());
    }

    let kicked = if input.kick {
        kick(state)
    } else {
        state.clone()
    };

    (RunState::Running, tick(&kicked, input, rng))
}
