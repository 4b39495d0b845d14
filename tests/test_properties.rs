use goal_shooter::compute::{init_state, tick};
use goal_shooter::config::{Config, Params};
use goal_shooter::difficulty::on_goal;
use goal_shooter::entities::GameState;
use goal_shooter::frame::{step, RunState};
use goal_shooter::input::TickInput;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn input_strategy() -> impl Strategy<Value = TickInput> {
    any::<(bool, bool, bool, bool, bool)>().prop_map(|(up, down, left, right, kick)| TickInput {
        up,
        down,
        left,
        right,
        kick,
        quit: false,
    })
}

/// A state that has already been through `level_ups` difficulty steps.
fn escalated(level_ups: u32, rng: &mut StdRng) -> GameState {
    let mut state = init_state(Config::default());
    for k in 1..=level_ups {
        state.score = k * Params::DIFFICULTY_INCREMENT;
        on_goal(&mut state, rng);
    }
    state
}

fn assert_in_bounds(s: &GameState) {
    let g = &s.goalie.rect;
    assert!(g.top() >= Params::GOALIE_TOP && g.bottom() <= Params::GOALIE_BOTTOM);
    for d in &s.defenders {
        assert!(d.rect.top() >= Params::DEFENDER_TOP);
        assert!(d.rect.bottom() <= Params::DEFENDER_BOTTOM);
    }
    let p = &s.player.rect;
    assert!(p.top() >= 0 && p.bottom() <= Params::FIELD_HEIGHT);
    assert!(p.left() >= 0 && p.right() <= Params::LANE_RIGHT);
}

proptest! {
    #[test]
    fn entities_stay_in_their_bands(
        seed in any::<u64>(),
        level_ups in 0u32..6,
        inputs in prop::collection::vec(input_strategy(), 1..400),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = escalated(level_ups, &mut rng);
        assert_in_bounds(&state);
        for input in &inputs {
            state = tick(&state, input, &mut rng);
            assert_in_bounds(&state);
        }
    }

    #[test]
    fn difficulty_never_decreases(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = escalated(2, &mut rng);
        let mut run = RunState::Running;
        for input in &inputs {
            let before = state.clone();
            (run, state) = step(run, &before, input, &mut rng);
            prop_assert_eq!(run, RunState::Running);
            prop_assert!(state.score >= before.score);
            prop_assert!(state.level >= before.level);
            prop_assert!(state.goalie.speed.abs() >= before.goalie.speed.abs());
            prop_assert!(state.defenders.len() >= before.defenders.len());
            prop_assert!(state.defenders.len() <= Params::MAX_DEFENDERS);
            for (now, was) in state.defenders.iter().zip(&before.defenders) {
                prop_assert!(now.speed.abs() >= was.speed.abs());
            }
        }
    }

    #[test]
    fn kick_in_flight_never_moves_ball(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..200),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = init_state(Config::default());
        for input in &inputs {
            if state.ball.is_in_flight() {
                let kicked = goal_shooter::compute::kick(&state);
                prop_assert_eq!(&kicked.ball, &state.ball);
            }
            state = tick(&state, input, &mut rng);
        }
    }
}
