//! Screen wrappers for type-safe screen-specific operations.
//!
//! This module provides proof-token types and mode wrappers that ensure
//! operations are only performed when the app is on the matching screen and
//! no notice is blocking input.

use guess_types::ui::{HomeField, NumericDraft};
use guess_types::{GuessResult, NumberField, parse_field};

use super::random;
use super::session::Session;
use super::timer::ReturnHomeTimer;
use super::{App, HomeState, PlayingState, Screen, SessionId};

/// Proof token for Home screen operations.
#[derive(Debug)]
pub struct HomeToken(());

/// Proof token for Playing screen operations.
#[derive(Debug)]
pub struct PlayingToken(());

/// Mode wrapper for safe Home screen operations.
pub struct HomeMode<'a> {
    pub(crate) app: &'a mut App,
}

/// Mode wrapper for safe Playing screen operations.
pub struct PlayingMode<'a> {
    pub(crate) app: &'a mut App,
}

// ============================================================================
// Token factory methods (called from App)
// ============================================================================

impl App {
    /// Get proof token if the Home screen is active and unobstructed.
    pub fn home_token(&self) -> Option<HomeToken> {
        (self.notice.is_none() && matches!(&self.screen, Screen::Home(_))).then_some(HomeToken(()))
    }

    /// Get proof token if the Playing screen is active and unobstructed.
    pub fn playing_token(&self) -> Option<PlayingToken> {
        (self.notice.is_none() && matches!(&self.screen, Screen::Playing(_)))
            .then_some(PlayingToken(()))
    }

    /// Get Home mode wrapper (requires proof token).
    pub fn home_mode(&mut self, _token: HomeToken) -> HomeMode<'_> {
        HomeMode { app: self }
    }

    /// Get Playing mode wrapper (requires proof token).
    pub fn playing_mode(&mut self, _token: PlayingToken) -> PlayingMode<'_> {
        PlayingMode { app: self }
    }
}

// ============================================================================
// HomeMode operations
// ============================================================================

impl HomeMode<'_> {
    fn home_mut(&mut self) -> Option<&mut HomeState> {
        match &mut self.app.screen {
            Screen::Home(home) => Some(home),
            Screen::Playing(_) => None,
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut NumericDraft)) {
        if let Some(home) = self.home_mut() {
            f(home.focused_mut());
        }
    }

    pub fn focus(&mut self, field: HomeField) {
        if let Some(home) = self.home_mut() {
            home.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(home) = self.home_mut() {
            home.focus = home.focus.toggle();
        }
    }

    pub fn enter_char(&mut self, c: char) {
        self.edit(|draft| {
            draft.enter_char(c);
        });
    }

    pub fn enter_text(&mut self, text: &str) {
        self.edit(|draft| draft.enter_text(text));
    }

    pub fn delete_char(&mut self) {
        self.edit(NumericDraft::delete_char);
    }

    pub fn delete_char_forward(&mut self) {
        self.edit(NumericDraft::delete_char_forward);
    }

    pub fn move_cursor_left(&mut self) {
        self.edit(NumericDraft::move_cursor_left);
    }

    pub fn move_cursor_right(&mut self) {
        self.edit(NumericDraft::move_cursor_right);
    }

    pub fn move_cursor_start(&mut self) {
        self.edit(NumericDraft::move_cursor_start);
    }

    pub fn move_cursor_end(&mut self) {
        self.edit(NumericDraft::move_cursor_end);
    }

    pub fn clear_field(&mut self) {
        self.edit(NumericDraft::clear);
    }

    /// Validate the range fields, draw a target and switch to the Playing screen.
    ///
    /// On a validation failure a notice is raised and nothing else changes.
    pub fn generate(self) -> Option<SessionId> {
        let Screen::Home(home) = &self.app.screen else {
            return None;
        };

        let min = parse_field(NumberField::Min, home.min.text());
        let max = parse_field(NumberField::Max, home.max.text());
        let (min, max) = match (min, max) {
            (Ok(Some(min)), Ok(Some(max))) => (Some(min), Some(max)),
            (Ok(None), _) | (_, Ok(None)) => (None, None),
            (Err(e), _) | (_, Err(e)) => {
                self.app.reject(e);
                return None;
            }
        };

        let target = match random::generate(self.app.random.as_mut(), min, max) {
            Ok(target) => target,
            Err(e) => {
                self.app.reject(e);
                return None;
            }
        };

        let id = self.app.next_session;
        self.app.next_session = id.next();

        let home = match std::mem::replace(&mut self.app.screen, Screen::Home(HomeState::default()))
        {
            Screen::Home(home) => home,
            Screen::Playing(playing) => playing.home,
        };
        let range = target.range();
        self.app.screen = Screen::Playing(Box::new(PlayingState::new(
            Session::new(id, target),
            home,
        )));
        self.app.clear_status();

        tracing::info!(session = %id, min = range.min(), max = range.max(), "Session started");
        tracing::debug!(session = %id, target = target.value(), "Target drawn");
        Some(id)
    }
}

// ============================================================================
// PlayingMode operations
// ============================================================================

impl PlayingMode<'_> {
    fn playing_mut(&mut self) -> Option<&mut PlayingState> {
        match &mut self.app.screen {
            Screen::Playing(playing) => Some(&mut **playing),
            Screen::Home(_) => None,
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut NumericDraft)) {
        if let Some(playing) = self.playing_mut() {
            f(&mut playing.guess);
        }
    }

    pub fn enter_char(&mut self, c: char) {
        self.edit(|draft| {
            draft.enter_char(c);
        });
    }

    pub fn enter_text(&mut self, text: &str) {
        self.edit(|draft| draft.enter_text(text));
    }

    pub fn delete_char(&mut self) {
        self.edit(NumericDraft::delete_char);
    }

    pub fn delete_char_forward(&mut self) {
        self.edit(NumericDraft::delete_char_forward);
    }

    pub fn move_cursor_left(&mut self) {
        self.edit(NumericDraft::move_cursor_left);
    }

    pub fn move_cursor_right(&mut self) {
        self.edit(NumericDraft::move_cursor_right);
    }

    pub fn move_cursor_start(&mut self) {
        self.edit(NumericDraft::move_cursor_start);
    }

    pub fn move_cursor_end(&mut self) {
        self.edit(NumericDraft::move_cursor_end);
    }

    pub fn clear_guess(&mut self) {
        self.edit(NumericDraft::clear);
    }

    /// Evaluate the drafted guess against the session target.
    ///
    /// Returns the classification when the guess was valid. Invalid input
    /// raises a notice and leaves the attempt counter and draft untouched.
    /// Once the target is found, further submissions are ignored.
    pub fn submit_guess(self) -> Option<GuessResult> {
        let delay = self.app.settings.return_home_delay;
        let tx = self.app.events_tx.clone();
        let reduced_motion = self.app.view.ui_options.reduced_motion;

        let Screen::Playing(playing) = &mut self.app.screen else {
            return None;
        };

        if playing.session.is_solved() {
            self.app.set_status("Already solved. Returning home...");
            return None;
        }

        let guess = match parse_field(NumberField::Guess, playing.guess.text()) {
            Ok(guess) => guess,
            Err(e) => {
                self.app.reject(e);
                return None;
            }
        };

        let result = match playing.session.submit(guess) {
            Ok(result) => result,
            Err(e) => {
                self.app.reject(e);
                return None;
            }
        };

        playing.guess.clear();
        playing.show(result);

        let session = playing.session.id();
        tracing::debug!(
            %session,
            guess = ?guess,
            attempts = playing.session.attempts(),
            result = ?result,
            "Guess evaluated"
        );

        if let GuessResult::Correct { attempts } = result {
            tracing::info!(%session, attempts, "Target found");
            playing.return_home = ReturnHomeTimer::schedule(session, delay, tx);
            if !reduced_motion {
                self.app.view.modal_effect = Some(super::ModalEffect::pop_scale(
                    super::WIN_EFFECT_DURATION,
                ));
            }
        }

        Some(result)
    }

    /// Leave the session and return to the Home screen, keeping the range fields.
    pub fn go_home(self) {
        let screen = std::mem::replace(&mut self.app.screen, Screen::Home(HomeState::default()));
        if let Screen::Playing(playing) = screen {
            if let Some(timer) = &playing.return_home {
                tracing::debug!(session = %timer.session(), "Cancelling pending return home");
            }
            tracing::info!(
                session = %playing.session.id(),
                attempts = playing.session.attempts(),
                solved = playing.session.is_solved(),
                "Returned home"
            );
            self.app.screen = Screen::Home(playing.home);
        }
        self.app.clear_status();
    }
}
