//! Shared test utilities and fixtures
//!
//! Drives the game through the same key events the terminal delivers.

#![allow(dead_code)]

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use guess_engine::{App, GameSettings, SequenceRandom, UiOptions};
use guess_tui::apply_event;

/// App with scripted targets, no animations and a short auto-return delay.
pub fn scripted_app(targets: &[i64]) -> App {
    scripted_app_with(targets, Duration::from_millis(20))
}

pub fn scripted_app_with(targets: &[i64], return_home_delay: Duration) -> App {
    let settings = GameSettings {
        return_home_delay,
        ..GameSettings::default()
    };
    App::with_random(
        settings,
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        Box::new(SequenceRandom::new(targets.iter().copied())),
    )
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn press_ctrl(app: &mut App, c: char) -> bool {
    apply_event(
        app,
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
    )
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Fill both range fields from the Home screen and press Enter.
pub fn start_game(app: &mut App, min: &str, max: &str) {
    press(app, KeyCode::Up);
    select_all_and_type(app, min);
    press(app, KeyCode::Down);
    select_all_and_type(app, max);
    press(app, KeyCode::Enter);
}

fn select_all_and_type(app: &mut App, text: &str) {
    press_ctrl(app, 'u');
    type_text(app, text);
}

/// Type a guess and submit it.
pub fn guess(app: &mut App, value: &str) {
    type_text(app, value);
    press(app, KeyCode::Enter);
}

pub fn attempts(app: &App) -> u32 {
    app.playing()
        .map(|playing| playing.session().attempts())
        .unwrap_or_default()
}
