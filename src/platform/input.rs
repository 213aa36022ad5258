//! Input events
//!
//! Raw key presses become [`InputEvent`]s in an ordered queue, which the
//! driver turns into one [`TickInput`] per tick.

use std::collections::VecDeque;

use crate::sim::{Command, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    P,
    Escape,
    Other,
}

impl Key {
    /// Events a key press produces
    ///
    /// Space both jumps and restarts; the simulation's guards pick whichever
    /// applies.
    pub fn events(self) -> &'static [InputEvent] {
        match self {
            Key::Space => &[InputEvent::Jump, InputEvent::Restart],
            Key::P => &[InputEvent::PauseToggle],
            Key::Escape => &[InputEvent::Quit],
            Key::Other => &[],
        }
    }
}

/// A discrete request from the player or the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    PauseToggle,
    Restart,
    /// Window closed or escape pressed
    Quit,
}

/// Ordered event queue, polled once per tick
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn press(&mut self, key: Key) {
        self.events.extend(key.events().iter().copied());
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drain everything queued for this tick
    ///
    /// Returns the commands in arrival order and whether a quit was
    /// requested.
    pub fn drain_tick(&mut self, idle_mode: bool) -> (TickInput, bool) {
        let mut input = TickInput {
            idle_mode,
            ..Default::default()
        };
        let mut quit = false;

        for event in self.events.drain(..) {
            match event {
                InputEvent::Jump => input.push(Command::Jump),
                InputEvent::PauseToggle => input.push(Command::PauseToggle),
                InputEvent::Restart => input.push(Command::Restart),
                InputEvent::Quit => quit = true,
            }
        }

        (input, quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_maps_to_jump_and_restart() {
        let mut queue = EventQueue::new();
        queue.press(Key::Space);
        queue.press(Key::Other);
        assert_eq!(queue.len(), 2);

        let (input, quit) = queue.drain_tick(false);
        assert_eq!(input.commands, vec![Command::Jump, Command::Restart]);
        assert!(!input.has(Command::PauseToggle));
        assert!(!quit);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_keeps_arrival_order() {
        let mut queue = EventQueue::new();
        queue.press(Key::Space);
        queue.press(Key::P);
        queue.press(Key::P);
        let (input, _) = queue.drain_tick(false);
        assert_eq!(
            input.commands,
            vec![
                Command::Jump,
                Command::Restart,
                Command::PauseToggle,
                Command::PauseToggle,
            ]
        );

        queue.press(Key::P);
        queue.press(Key::Space);
        let (input, _) = queue.drain_tick(false);
        assert_eq!(input.commands[0], Command::PauseToggle);
        assert_eq!(input.commands.len(), 3);
    }

    #[test]
    fn test_quit_and_idle_flag() {
        let mut queue = EventQueue::new();
        queue.press(Key::Escape);
        let (input, quit) = queue.drain_tick(true);
        assert!(quit);
        assert!(input.idle_mode);

        let (_, quit) = queue.drain_tick(true);
        assert!(!quit);
    }
}
