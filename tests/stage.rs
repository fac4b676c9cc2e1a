use neon_coin::state::{countdown_digit, Effect, MenuInput, Stage, StageMachine};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

/// Timestamp handed to every key press; tick tests offset from it.
const T0: u64 = 10_000;

fn press(machine: &mut StageMachine, input: MenuInput) -> Vec<Effect> {
    machine.handle(input, T0).into_iter().collect()
}

#[test]
fn test_starts_at_menu() {
    let machine = StageMachine::new();

    assert_eq!(machine.stage(), Stage::Menu);
    assert_eq!(machine.cursors.menu, 0);
}

#[test]
fn test_menu_cursor_wraps_both_ways() {
    let mut machine = StageMachine::new();

    press(&mut machine, MenuInput::Up);
    assert_eq!(machine.cursors.menu, 2);

    press(&mut machine, MenuInput::Down);
    assert_eq!(machine.cursors.menu, 0);

    for _ in 0..4 {
        press(&mut machine, MenuInput::Down);
    }
    assert_eq!(machine.cursors.menu, 1);
}

#[test]
fn test_start_game_resets_and_silences() {
    let mut machine = StageMachine::new();

    let effects = press(&mut machine, MenuInput::Select);

    assert_eq!(machine.stage(), Stage::Countdown { started_at_ms: T0 });
    assert_eq!(effects, vec![Effect::ResetSession, Effect::StopMusic]);
}

#[test]
fn test_quit_from_menu() {
    let mut machine = StageMachine::new();

    press(&mut machine, MenuInput::Up); // wraps down to QUIT
    let effects = press(&mut machine, MenuInput::Select);

    assert_eq!(effects, vec![Effect::Quit]);
    assert_eq!(machine.stage(), Stage::Menu);
}

#[test]
fn test_video_rows_act_in_place() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Down);
    press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Settings);

    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Video);
    assert_that(&effects).is_empty();

    // Row 0 cycles the resolution without leaving the screen
    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Video);
    assert_eq!(effects, vec![Effect::AdvanceResolution]);

    // Row 1 toggles fullscreen
    press(&mut machine, MenuInput::Down);
    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Video);
    assert_eq!(effects, vec![Effect::ToggleFullscreen]);

    // Row 2 backs out
    press(&mut machine, MenuInput::Down);
    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Settings);
    assert_that(&effects).is_empty();
}

#[test]
fn test_audio_rows_toggle_in_place() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Down);
    press(&mut machine, MenuInput::Select); // settings
    press(&mut machine, MenuInput::Down);
    press(&mut machine, MenuInput::Select); // audio
    assert_eq!(machine.stage(), Stage::Audio);

    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(effects, vec![Effect::ToggleMenuMusic]);

    press(&mut machine, MenuInput::Down);
    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(effects, vec![Effect::ToggleGameMusic]);
    assert_eq!(machine.stage(), Stage::Audio);
}

#[test]
fn test_cursors_persist_across_visits() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Down); // menu cursor on SETTINGS
    press(&mut machine, MenuInput::Select);
    press(&mut machine, MenuInput::Down);
    press(&mut machine, MenuInput::Down); // settings cursor on BACK
    press(&mut machine, MenuInput::Select);

    assert_eq!(machine.stage(), Stage::Menu);
    assert_eq!(machine.cursors.menu, 1);
    assert_eq!(machine.cursors.settings, 2);
}

#[test]
fn test_countdown_holds_then_enters_play() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Select);

    let effects: Vec<Effect> = machine.tick(T0 + 2_999).into_iter().collect();
    assert_that(&effects).is_empty();
    assert_eq!(machine.stage(), Stage::Countdown { started_at_ms: T0 });

    let effects: Vec<Effect> = machine.tick(T0 + 3_000).into_iter().collect();
    assert_eq!(effects, vec![Effect::PlayGameMusic]);
    assert_eq!(machine.stage(), Stage::Playing);
}

#[test]
fn test_keys_ignored_during_countdown_and_play() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Select);

    let effects = press(&mut machine, MenuInput::Select);
    assert_that(&effects).is_empty();
    assert_eq!(machine.stage(), Stage::Countdown { started_at_ms: T0 });

    machine.tick(T0 + 3_000);
    let effects = press(&mut machine, MenuInput::Down);
    assert_that(&effects).is_empty();
    assert_eq!(machine.stage(), Stage::Playing);
}

#[test]
fn test_countdown_digit_floors_at_one() {
    assert_eq!(countdown_digit(T0, T0), 3);
    assert_eq!(countdown_digit(T0, T0 + 999), 3);
    assert_eq!(countdown_digit(T0, T0 + 1_000), 2);
    assert_eq!(countdown_digit(T0, T0 + 2_000), 1);
    assert_eq!(countdown_digit(T0, T0 + 2_999), 1);
}

#[test]
fn test_game_over_retry_restarts_countdown() {
    let mut machine = StageMachine::new();
    machine.enter_game_over();
    assert_eq!(machine.stage(), Stage::GameOver);
    assert_eq!(machine.cursors.game_over, 0);

    let effects = press(&mut machine, MenuInput::Select);

    assert_eq!(machine.stage(), Stage::Countdown { started_at_ms: T0 });
    assert_eq!(effects, vec![Effect::ResetSession, Effect::StopMusic]);
}

#[test]
fn test_game_over_back_to_menu_resets_menu_cursor() {
    let mut machine = StageMachine::new();
    press(&mut machine, MenuInput::Down);
    assert_eq!(machine.cursors.menu, 1);

    machine.enter_game_over();
    press(&mut machine, MenuInput::Down);
    let effects = press(&mut machine, MenuInput::Select);

    assert_eq!(machine.stage(), Stage::Menu);
    assert_eq!(machine.cursors.menu, 0);
    assert_eq!(effects, vec![Effect::ResetSession, Effect::PlayMenuMusic]);
}

#[test]
fn test_catch_resets_game_over_cursor() {
    let mut machine = StageMachine::new();
    machine.enter_game_over();
    press(&mut machine, MenuInput::Down);
    assert_eq!(machine.cursors.game_over, 1);

    // Back to the menu, then lose again: the cursor is back on retry
    press(&mut machine, MenuInput::Select);
    machine.enter_game_over();
    assert_eq!(machine.cursors.game_over, 0);
}

#[test]
fn test_end_screen_cursor_wraps_two_items() {
    let mut machine = StageMachine::new();
    machine.enter_game_over();

    press(&mut machine, MenuInput::Up);
    assert_eq!(machine.cursors.game_over, 1);
    press(&mut machine, MenuInput::Down);
    assert_eq!(machine.cursors.game_over, 0);
}

#[test]
fn test_win_records_timestamp_and_mirrors_game_over() {
    let mut machine = StageMachine::new();
    machine.enter_win(T0 + 500);
    assert_eq!(machine.stage(), Stage::Win { won_at_ms: T0 + 500 });

    press(&mut machine, MenuInput::Down);
    assert_eq!(machine.cursors.win, 1);

    let effects = press(&mut machine, MenuInput::Select);
    assert_eq!(machine.stage(), Stage::Menu);
    assert_eq!(effects, vec![Effect::ResetSession, Effect::PlayMenuMusic]);
}

#[test]
fn test_win_retry_replays_final_level() {
    let mut machine = StageMachine::new();
    machine.enter_win(T0);

    let effects = press(&mut machine, MenuInput::Select);

    assert_eq!(machine.stage(), Stage::Countdown { started_at_ms: T0 });
    assert_eq!(effects, vec![Effect::ResetSession, Effect::StopMusic]);
}
