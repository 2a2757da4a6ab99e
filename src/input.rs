use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geometry::Direction;

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(KeyCode),
    Quit,
    Ignore,
}

/// Arrow keys only; anything else is not a heading.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        _ => None,
    }
}

/// Heading after `key` is pressed while moving `current`. Unknown keys and
/// 180-degree reversals leave `current` unchanged.
pub fn resolve_direction(key: KeyCode, current: Direction) -> Direction {
    direction_for_key(key)
        .filter(|requested| !requested.is_opposite(current))
        .unwrap_or(current)
}

pub fn command_for(key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        code if direction_for_key(code).is_some() => Command::Steer(code),
        _ => Command::Ignore,
    }
}
