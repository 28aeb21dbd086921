use crossterm::event::{KeyCode, KeyModifiers};

use sprite_explosion::entities::*;
use sprite_explosion::input::*;
use sprite_explosion::tuning::PLAYER_SPEED;

fn make_player() -> Player {
    Player {
        id: 0,
        body: Body::new(0.0, 0.0, 48.0, 64.0),
        keys: HeldKeys::default(),
        can_move: true,
        walk: WalkCycle::default(),
    }
}

#[test]
fn press_sets_signed_speed() {
    let mut p = make_player();
    press(&mut p, Direction::Left);
    assert_eq!(p.body.change_x, -PLAYER_SPEED);
    press(&mut p, Direction::Up);
    assert_eq!(p.body.change_y, PLAYER_SPEED);
    press(&mut p, Direction::Down);
    assert_eq!(p.body.change_y, -PLAYER_SPEED);
    assert!(p.keys.left && p.keys.up && p.keys.down);
}

#[test]
fn releasing_one_of_two_opposite_keys_keeps_moving() {
    let mut p = make_player();
    press(&mut p, Direction::Left);
    press(&mut p, Direction::Right);
    release(&mut p, Direction::Left);
    assert_eq!(p.body.change_x, PLAYER_SPEED);

    release(&mut p, Direction::Right);
    assert_eq!(p.body.change_x, 0.0);
}

#[test]
fn vertical_axis_follows_the_same_rule() {
    let mut p = make_player();
    press(&mut p, Direction::Down);
    press(&mut p, Direction::Up);
    release(&mut p, Direction::Down);
    assert_eq!(p.body.change_y, PLAYER_SPEED);
    release(&mut p, Direction::Up);
    assert_eq!(p.body.change_y, 0.0);
}

#[test]
fn single_release_stops_axis() {
    let mut p = make_player();
    press(&mut p, Direction::Right);
    release(&mut p, Direction::Right);
    assert_eq!(p.body.change_x, 0.0);
    assert!(!p.keys.right);
}

#[test]
fn disabled_movement_ignores_presses() {
    let mut p = make_player();
    press(&mut p, Direction::Right);
    set_can_move(&mut p, false);
    assert_eq!(p.body.change_x, 0.0);

    press(&mut p, Direction::Up);
    assert_eq!(p.body.change_y, 0.0);
    assert!(!p.keys.up);

    set_can_move(&mut p, true);
    press(&mut p, Direction::Up);
    assert_eq!(p.body.change_y, PLAYER_SPEED);
}

#[test]
fn key_mapping() {
    let none = KeyModifiers::NONE;
    assert_eq!(
        command_for(KeyCode::Char('a'), none),
        Some(Command::Move(Direction::Left))
    );
    assert_eq!(
        command_for(KeyCode::Char('D'), none),
        Some(Command::Move(Direction::Right))
    );
    assert_eq!(
        command_for(KeyCode::Char('w'), none),
        Some(Command::Move(Direction::Up))
    );
    assert_eq!(
        command_for(KeyCode::Down, none),
        Some(Command::Move(Direction::Down))
    );
    assert_eq!(command_for(KeyCode::Up, none), Some(Command::Shoot));
    assert_eq!(command_for(KeyCode::Char(' '), none), Some(Command::Shoot));
    assert_eq!(command_for(KeyCode::Char('r'), none), Some(Command::Restart));
    assert_eq!(command_for(KeyCode::Esc, none), Some(Command::Quit));
    assert_eq!(
        command_for(KeyCode::Char('c'), KeyModifiers::CONTROL),
        Some(Command::Quit)
    );
    assert_eq!(command_for(KeyCode::Char('c'), none), None);
    assert_eq!(command_for(KeyCode::Tab, none), None);
}
