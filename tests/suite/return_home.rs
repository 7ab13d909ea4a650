//! Delayed return to the Home screen after a win.

use std::time::Duration;

use crossterm::event::KeyCode;

use guess_engine::ScreenKind;

use crate::common::{guess, press, scripted_app_with, start_game};

async fn settle(app: &mut guess_engine::App, wait: Duration) {
    tokio::time::sleep(wait).await;
    app.tick();
}

#[tokio::test]
async fn win_returns_home_after_delay() {
    let mut app = scripted_app_with(&[4], Duration::from_millis(10));
    start_game(&mut app, "1", "9");
    guess(&mut app, "4");
    assert!(app.playing().is_some_and(|p| p.return_pending()));

    settle(&mut app, Duration::from_millis(100)).await;
    assert_eq!(app.screen_kind(), ScreenKind::Home);
    // Auto-return starts over with blank fields.
    assert!(app.home().is_some_and(|h| h.min().is_empty() && h.max().is_empty()));
}

#[tokio::test]
async fn guesses_after_win_are_ignored() {
    let mut app = scripted_app_with(&[4], Duration::from_secs(60));
    start_game(&mut app, "1", "9");
    guess(&mut app, "4");
    guess(&mut app, "5");

    let playing = app.playing().expect("still showing the win");
    assert_eq!(playing.session().attempts(), 1);
    assert!(playing.session().is_solved());
    assert!(app.notice().is_none());
}

#[tokio::test]
async fn new_session_is_not_hijacked_by_old_timer() {
    let mut app = scripted_app_with(&[4, 6], Duration::from_millis(40));
    start_game(&mut app, "1", "9");
    guess(&mut app, "4");

    // Leave before the timer fires and start another game.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);
    let second = app.playing().map(|p| p.session().id());
    assert!(second.is_some());

    settle(&mut app, Duration::from_millis(150)).await;
    assert_eq!(app.screen_kind(), ScreenKind::Playing);
    assert_eq!(app.playing().map(|p| p.session().id()), second);
}
