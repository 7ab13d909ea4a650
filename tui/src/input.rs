//! Input handling for the game TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use guess_engine::{App, HomeField, ScreenKind};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending terminal events into the app. Returns `true` once the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0usize;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Route a single terminal event to the active screen.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                debug!("Quit requested");
                app.request_quit();
                return true;
            }

            if app.notice().is_some() {
                handle_notice(app, key);
                return app.should_quit();
            }

            match app.screen_kind() {
                ScreenKind::Home => handle_home(app, key),
                ScreenKind::Playing => handle_playing(app, key),
            }
        }
        Event::Paste(text) => match app.screen_kind() {
            ScreenKind::Home => {
                if let Some(token) = app.home_token() {
                    app.home_mode(token).enter_text(&text);
                }
            }
            ScreenKind::Playing => {
                if let Some(token) = app.playing_token() {
                    app.playing_mode(token).enter_text(&text);
                }
            }
        },
        _ => {}
    }
    app.should_quit()
}

fn handle_notice(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
}

fn handle_home(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    let Some(token) = app.home_token() else {
        return;
    };
    let mut home = app.home_mode(token);

    match key.code {
        KeyCode::Enter => {
            home.generate();
        }
        KeyCode::Tab | KeyCode::BackTab => home.focus_next(),
        KeyCode::Up => home.focus(HomeField::Min),
        KeyCode::Down => home.focus(HomeField::Max),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            home.clear_field();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            home.enter_char(c);
        }
        KeyCode::Backspace => home.delete_char(),
        KeyCode::Delete => home.delete_char_forward(),
        KeyCode::Left => home.move_cursor_left(),
        KeyCode::Right => home.move_cursor_right(),
        KeyCode::Home => home.move_cursor_start(),
        KeyCode::End => home.move_cursor_end(),
        _ => {}
    }
}

fn handle_playing(app: &mut App, key: KeyEvent) {
    let Some(token) = app.playing_token() else {
        return;
    };
    let mut playing = app.playing_mode(token);

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => playing.go_home(),
        KeyCode::Char('h') if ctrl => playing.go_home(),
        KeyCode::Enter => {
            playing.submit_guess();
        }
        KeyCode::Char('u') if ctrl => playing.clear_guess(),
        KeyCode::Char(c) if !ctrl => playing.enter_char(c),
        KeyCode::Backspace => playing.delete_char(),
        KeyCode::Delete => playing.delete_char_forward(),
        KeyCode::Left => playing.move_cursor_left(),
        KeyCode::Right => playing.move_cursor_right(),
        KeyCode::Home => playing.move_cursor_start(),
        KeyCode::End => playing.move_cursor_end(),
        _ => {}
    }
}
