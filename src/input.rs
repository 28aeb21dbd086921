/// Key mapping and held-key movement rules.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::entities::Player;
use crate::tuning::PLAYER_SPEED;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

/// What a key press asks the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Shoot,
    Restart,
    Quit,
}

/// Translate a terminal key into a game command.
pub fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Up | KeyCode::Char(' ') => Some(Command::Shoot),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
        _ => None,
    }
}

/// A direction key went down.  Ignored entirely while movement is disabled.
pub fn press(player: &mut Player, dir: Direction) {
    if !player.can_move {
        return;
    }
    let keys = &mut player.keys;
    let body = &mut player.body;
    match dir {
        Direction::Left => {
            keys.left = true;
            body.change_x = -PLAYER_SPEED;
        }
        Direction::Right => {
            keys.right = true;
            body.change_x = PLAYER_SPEED;
        }
        Direction::Down => {
            keys.down = true;
            body.change_y = -PLAYER_SPEED;
        }
        Direction::Up => {
            keys.up = true;
            body.change_y = PLAYER_SPEED;
        }
    }
}

/// A direction key came up.  The axis only stops if the opposite key is
/// not still held.
pub fn release(player: &mut Player, dir: Direction) {
    let keys = &mut player.keys;
    let body = &mut player.body;
    match dir {
        Direction::Left => {
            keys.left = false;
            if !keys.right {
                body.change_x = 0.0;
            }
        }
        Direction::Right => {
            keys.right = false;
            if !keys.left {
                body.change_x = 0.0;
            }
        }
        Direction::Down => {
            keys.down = false;
            if !keys.up {
                body.change_y = 0.0;
            }
        }
        Direction::Up => {
            keys.up = false;
            if !keys.down {
                body.change_y = 0.0;
            }
        }
    }
}

/// Enable or disable movement.  Disabling stops the player at once.
pub fn set_can_move(player: &mut Player, can_move: bool) {
    player.can_move = can_move;
    if !can_move {
        player.body.change_x = 0.0;
        player.body.change_y = 0.0;
    }
}
