/// Translates raw terminal key events into one `TickInput` per tick.
///
/// Terminals do not report which keys are held, so a `key_frame` map
/// records the tick of the last press/repeat event for every key.  A key
/// counts as held while that record is fresh (within `HOLD_WINDOW` ticks).
/// On keyboard-enhancement terminals (kitty protocol) release events remove
/// the record immediately; elsewhere it simply expires, and the steady OS
/// repeat rate refreshes it often enough to keep an actively repeating key
/// live.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key is "held" if its last press/repeat arrived within this many ticks.
/// 8 ticks @ 60 FPS ≈ 133 ms covers the steady OS repeat interval but not
/// the initial repeat delay (250-500 ms), so on terminals without release
/// events a held direction moves briefly, pauses, then keeps moving.
pub const HOLD_WINDOW: u64 = 8;

/// Space presses closer than this to the previous one are treated as
/// auto-repeat of the same hold and never kick.  36 ticks @ 60 FPS = 600 ms,
/// longer than the initial repeat delay.  A release event re-arms at once.
pub const KICK_REARM_WINDOW: u64 = 36;

const KICK_KEY: KeyCode = KeyCode::Char(' ');

const UP_KEYS: [KeyCode; 3] = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: [KeyCode; 3] = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// Everything the simulation needs from the input source for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Edge-triggered: set for exactly one tick per Space press, never for
    /// auto-repeat.
    pub kick: bool,
    pub quit: bool,
}

#[derive(Debug, Default)]
pub struct InputTracker {
    key_frame: HashMap<KeyCode, u64>,
    frame: u64,
    kick: bool,
    quit: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick.  Call before feeding that tick's events.
    pub fn begin_tick(&mut self) {
        self.frame += 1;
    }

    pub fn handle(&mut self, event: &Event) {
        let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        else {
            return;
        };

        match kind {
            KeyEventKind::Press => {
                // Legacy terminals report auto-repeat as further presses,
                // so the rearm check must see the previous press.
                if *code == KICK_KEY && !self.seen_within(code, KICK_REARM_WINDOW) {
                    self.kick = true;
                }
                self.key_frame.insert(*code, self.frame);
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        self.quit = true
                    }
                    _ => {}
                }
            }
            // Repeats keep a key held but never re-trigger a kick.
            KeyEventKind::Repeat => {
                self.key_frame.insert(*code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(code);
            }
        }
    }

    /// The input for the current tick.  Clears the one-shot kick flag;
    /// quit stays latched.
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            up: self.any_held(&UP_KEYS),
            down: self.any_held(&DOWN_KEYS),
            left: self.any_held(&LEFT_KEYS),
            right: self.any_held(&RIGHT_KEYS),
            kick: self.kick,
            quit: self.quit,
        };
        self.kick = false;
        input
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_held(key))
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.seen_within(key, HOLD_WINDOW)
    }

    fn seen_within(&self, key: &KeyCode, window: u64) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= window)
            .unwrap_or(false)
    }
}
