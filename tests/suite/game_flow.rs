//! End-to-end game flow driven through terminal key events.

use crossterm::event::KeyCode;

use guess_engine::{GuessResult, Mood, ScreenKind, ValidationError};

use crate::common::{attempts, guess, press, press_ctrl, scripted_app, start_game, type_text};

#[test]
fn correct_first_guess_counts_one_attempt() {
    let mut app = scripted_app(&[50]);
    start_game(&mut app, "1", "100");
    guess(&mut app, "50");

    let playing = app.playing().expect("still on the win screen");
    assert_eq!(
        playing.session().last_result(),
        Some(GuessResult::Correct { attempts: 1 })
    );
    assert_eq!(playing.mood(), Mood::Happy);
    assert!(playing.feedback().contains("The number was 50"));
}

#[test]
fn far_high_guess_is_not_close() {
    let mut app = scripted_app(&[50]);
    start_game(&mut app, "1", "100");
    guess(&mut app, "95");

    let result = app.playing().and_then(|p| p.session().last_result());
    match result {
        Some(GuessResult::TooHigh(proximity)) => {
            assert!(!proximity.is_close());
            assert_eq!(proximity.difference(), 45);
        }
        other => panic!("expected TooHigh, got {other:?}"),
    }
    assert_eq!(app.playing().map(|p| p.mood()), Some(Mood::Sad));
}

#[test]
fn near_high_guess_is_close() {
    let mut app = scripted_app(&[50]);
    start_game(&mut app, "1", "100");
    guess(&mut app, "55");

    let result = app.playing().and_then(|p| p.session().last_result());
    assert!(matches!(result, Some(GuessResult::TooHigh(p)) if p.is_close()));
    assert!(
        app.playing()
            .is_some_and(|p| p.feedback().contains("Try a little lower"))
    );
}

#[test]
fn equal_bounds_are_rejected_with_invalid_order() {
    let mut app = scripted_app(&[10]);
    start_game(&mut app, "10", "10");

    assert_eq!(app.screen_kind(), ScreenKind::Home);
    let error = app.notice().and_then(|n| n.error()).cloned();
    assert_eq!(error.as_ref().map(ValidationError::reason), Some("invalid order"));
}

#[test]
fn missing_bound_is_reported() {
    let mut app = scripted_app(&[10]);
    start_game(&mut app, "", "10");

    let error = app.notice().and_then(|n| n.error()).cloned();
    assert_eq!(error, Some(ValidationError::MissingBounds));
}

#[test]
fn out_of_range_guess_leaves_attempts_unchanged() {
    let mut app = scripted_app(&[5]);
    start_game(&mut app, "1", "10");
    guess(&mut app, "3");
    assert_eq!(attempts(&app), 1);

    guess(&mut app, "11");
    assert_eq!(attempts(&app), 1);
    assert_eq!(
        app.notice().map(|n| n.message().to_string()),
        Some("Your guess must be between 1 and 10".to_string())
    );

    // The rejected text stays in the field for correction.
    press(&mut app, KeyCode::Enter);
    assert!(app.notice().is_none());
    assert_eq!(app.playing().map(|p| p.guess().text()), Some("11"));
}

#[test]
fn empty_guess_is_missing_guess() {
    let mut app = scripted_app(&[5]);
    start_game(&mut app, "1", "10");
    press(&mut app, KeyCode::Enter);

    let error = app.notice().and_then(|n| n.error()).cloned();
    assert_eq!(error, Some(ValidationError::MissingGuess));
    assert_eq!(attempts(&app), 0);
}

#[test]
fn negative_ranges_play_through() {
    let mut app = scripted_app(&[-7]);
    start_game(&mut app, "-20", "-1");
    guess(&mut app, "-15");
    guess(&mut app, "-5");
    guess(&mut app, "-7");

    assert_eq!(
        app.playing().and_then(|p| p.session().last_result()),
        Some(GuessResult::Correct { attempts: 3 })
    );
}

#[test]
fn leaving_mid_game_discards_the_session() {
    let mut app = scripted_app(&[30, 70]);
    start_game(&mut app, "1", "100");
    guess(&mut app, "10");
    press_ctrl(&mut app, 'h');
    assert_eq!(app.screen_kind(), ScreenKind::Home);

    // Same fields, new target and a fresh counter.
    press(&mut app, KeyCode::Enter);
    let playing = app.playing().expect("new session");
    assert_eq!(playing.session().target(), 70);
    assert_eq!(playing.session().attempts(), 0);
    assert_eq!(playing.mood(), Mood::Thinking);
}

#[test]
fn typing_non_digits_never_reaches_the_field() {
    let mut app = scripted_app(&[5]);
    start_game(&mut app, "1", "10");
    type_text(&mut app, "4e2.5");
    assert_eq!(app.playing().map(|p| p.guess().text()), Some("425"));
}
