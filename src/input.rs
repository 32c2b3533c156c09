use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Steer(Direction),
    Restart,
    Quit,
    Ignored,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn map_key(&self, key: KeyEvent) -> KeyCommand {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyCommand::Quit;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyCommand::Steer(Direction::Up)
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyCommand::Steer(Direction::Down)
            }
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyCommand::Steer(Direction::Left)
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyCommand::Steer(Direction::Right)
            }

            KeyCode::Char('r') | KeyCode::Char('R') => KeyCommand::Restart,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyCommand::Quit,

            _ => KeyCommand::Ignored,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_steer() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.map_key(press(KeyCode::Up)),
            KeyCommand::Steer(Direction::Up)
        );
        assert_eq!(
            handler.map_key(press(KeyCode::Down)),
            KeyCommand::Steer(Direction::Down)
        );
        assert_eq!(
            handler.map_key(press(KeyCode::Left)),
            KeyCommand::Steer(Direction::Left)
        );
        assert_eq!(
            handler.map_key(press(KeyCode::Right)),
            KeyCommand::Steer(Direction::Right)
        );
    }

    #[test]
    fn wasd_steers_in_both_cases() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.map_key(press(KeyCode::Char('w'))),
            KeyCommand::Steer(Direction::Up)
        );
        assert_eq!(
            handler.map_key(press(KeyCode::Char('a'))),
            KeyCommand::Steer(Direction::Left)
        );
        assert_eq!(
            handler.map_key(press(KeyCode::Char('s'))),
            KeyCommand::Steer(Direction::Down)
        );
        assert_eq!(
            handler.map_key(KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            KeyCommand::Steer(Direction::Right)
        );
    }

    #[test]
    fn quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.map_key(press(KeyCode::Char('q'))), KeyCommand::Quit);
        assert_eq!(handler.map_key(press(KeyCode::Esc)), KeyCommand::Quit);
        assert_eq!(
            handler.map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyCommand::Quit
        );
    }

    #[test]
    fn restart_key() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.map_key(press(KeyCode::Char('r'))),
            KeyCommand::Restart
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.map_key(press(KeyCode::Char('x'))),
            KeyCommand::Ignored
        );
        assert_eq!(handler.map_key(press(KeyCode::Tab)), KeyCommand::Ignored);
    }
}
