//! Full-frame render tests through a vt100 virtual terminal.


use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use guess_engine::{App, GameSettings, SequenceRandom, UiOptions};
use guess_tui::{apply_event, draw};

use vt100_backend::VT100Backend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn app_with(options: UiOptions, target: i64) -> App {
    App::with_random(
        GameSettings {
            return_home_delay: Duration::from_secs(60),
            ..GameSettings::default()
        },
        options,
        Box::new(SequenceRandom::new([target])),
    )
}

fn ascii_app(target: i64) -> App {
    app_with(
        UiOptions {
            ascii_only: true,
            reduced_motion: true,
            ..UiOptions::default()
        },
        target,
    )
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal.backend().contents()
}

fn key(app: &mut App, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn start(app: &mut App, min: &str, max: &str) {
    type_text(app, min);
    key(app, KeyCode::Tab);
    type_text(app, max);
    key(app, KeyCode::Enter);
}

#[test]
fn home_screen_layout() {
    let app = ascii_app(5);
    let screen = render(&app);
    assert!(screen.contains("Guess the Number"));
    assert!(screen.contains("Choose the number range"));
    assert!(screen.contains("> Minimum"));
    assert!(screen.contains("Maximum"));
    assert!(screen.contains("generate number"));
    assert!(screen.contains("Tab switch field"));
}

#[test]
fn home_fields_show_typed_values() {
    let mut app = ascii_app(5);
    type_text(&mut app, "-12");
    key(&mut app, KeyCode::Tab);
    type_text(&mut app, "48");
    let screen = render(&app);
    assert!(screen.contains("-12"));
    assert!(screen.contains("48"));
    assert!(screen.contains("> Maximum"));
}

#[test]
fn playing_screen_tracks_guesses() {
    let mut app = ascii_app(42);
    start(&mut app, "1", "100");

    let screen = render(&app);
    assert!(screen.contains("I'm thinking of a number"));
    assert!(screen.contains("Attempts: 0"));
    assert!(screen.contains("Your guess"));
    assert!(screen.contains("|  o   o  |"));

    type_text(&mut app, "90");
    key(&mut app, KeyCode::Enter);
    let screen = render(&app);
    assert!(screen.contains("Attempts: 1"));
    assert!(screen.contains("Your guess is high."));
    assert!(screen.contains("Still a long way off."));
    assert!(screen.contains("|  ;   ;  |"));
}

#[test]
fn win_screen_shows_congratulations() {
    let mut app = ascii_app(7);
    start(&mut app, "1", "10");
    type_text(&mut app, "7");
    key(&mut app, KeyCode::Enter);

    let screen = render(&app);
    assert!(screen.contains("Congratulations!"));
    assert!(screen.contains("Returning home..."));
    assert!(screen.contains("|  ^   ^  |"));
}

#[test]
fn validation_notice_overlays_screen() {
    let mut app = ascii_app(5);
    start(&mut app, "9", "3");

    let screen = render(&app);
    assert!(screen.contains("! Error"));
    assert!(screen.contains("must be less than"));
    assert!(screen.contains("Enter/Esc dismiss"));

    key(&mut app, KeyCode::Esc);
    let screen = render(&app);
    assert!(!screen.contains("! Error"));
}

#[test]
fn unicode_glyphs_by_default() {
    let app = app_with(UiOptions::default(), 5);
    let screen = render(&app);
    assert!(screen.contains("▸ Minimum"));
}

#[test]
fn shaking_notice_stays_on_screen() {
    let mut app = app_with(
        UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        },
        5,
    );
    key(&mut app, KeyCode::Enter);
    assert!(app.modal_effect().is_some());

    let screen = render(&app);
    assert!(screen.contains("Please fill in both values"));
}
