//! Core engine for the guessing game - state machine and orchestration.
//!
//! This crate contains the [`App`] controller without TUI dependencies. All
//! session state is owned by `App` and changes only through the screen
//! wrappers ([`HomeMode`], [`PlayingMode`]) and through [`App::tick`].

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

pub use guess_types::ui::{
    AnimPhase, HomeField, ModalEffect, ModalEffectKind, NumericDraft, UiOptions, ViewState,
};
pub use guess_types::{
    Direction, GuessRange, GuessResult, Mood, Proximity, ProximityTier, Target, ValidationError,
};

mod config;
mod input_modes;
mod random;
mod session;
mod timer;

pub use config::{
    AppConfig, ConfigError, DEFAULT_RETURN_HOME_DELAY, GameConfig, GameSettings, GuessConfig,
    RETURN_DELAY_ENV, config_path,
};
pub use input_modes::{HomeMode, HomeToken, PlayingMode, PlayingToken};
pub use random::{RandomSource, SequenceRandom, ThreadRandom, generate};
pub use session::{Session, SessionId};
pub use timer::EngineEvent;

use timer::ReturnHomeTimer;

const NOTICE_EFFECT_DURATION: Duration = Duration::from_millis(260);
const WIN_EFFECT_DURATION: Duration = Duration::from_millis(220);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    Playing,
}

/// Range entry fields of the Home screen.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    min: NumericDraft,
    max: NumericDraft,
    focus: HomeField,
}

impl HomeState {
    /// Fresh fields, pre-filled from configured defaults.
    #[must_use]
    pub fn fresh(settings: &GameSettings) -> Self {
        Self {
            min: settings
                .default_min
                .map(NumericDraft::with_value)
                .unwrap_or_default(),
            max: settings
                .default_max
                .map(NumericDraft::with_value)
                .unwrap_or_default(),
            focus: HomeField::Min,
        }
    }

    #[must_use]
    pub fn min(&self) -> &NumericDraft {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &NumericDraft {
        &self.max
    }

    #[must_use]
    pub fn focus(&self) -> HomeField {
        self.focus
    }

    #[must_use]
    pub fn field(&self, field: HomeField) -> &NumericDraft {
        match field {
            HomeField::Min => &self.min,
            HomeField::Max => &self.max,
        }
    }

    fn focused_mut(&mut self) -> &mut NumericDraft {
        match self.focus {
            HomeField::Min => &mut self.min,
            HomeField::Max => &mut self.max,
        }
    }
}

/// An active session together with its guess field and feedback.
#[derive(Debug)]
pub struct PlayingState {
    session: Session,
    guess: NumericDraft,
    feedback: String,
    mood: Mood,
    hint: Option<&'static str>,
    /// Home fields as they were when the session started.
    home: HomeState,
    /// Pending auto-return after a win. Dropping it cancels the return.
    return_home: Option<ReturnHomeTimer>,
}

impl PlayingState {
    fn new(session: Session, home: HomeState) -> Self {
        let range = session.range();
        Self {
            feedback: format!(
                "I'm thinking of a number between {} and {}. What's your guess?",
                range.min(),
                range.max()
            ),
            session,
            guess: NumericDraft::new(),
            mood: Mood::Thinking,
            hint: None,
            home,
            return_home: None,
        }
    }

    fn show(&mut self, result: GuessResult) {
        self.feedback = result.feedback(self.session.target());
        self.mood = result.mood();
        self.hint = result.proximity().map(|p| p.tier().hint());
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn guess(&self) -> &NumericDraft {
        &self.guess
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Proximity hint for the latest miss.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        self.hint
    }

    #[must_use]
    pub fn return_pending(&self) -> bool {
        self.return_home.is_some()
    }
}

#[derive(Debug)]
enum Screen {
    Home(HomeState),
    Playing(Box<PlayingState>),
}

/// Blocking message shown over the current screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    title: &'static str,
    message: String,
    error: Option<ValidationError>,
}

impl Notice {
    fn validation(err: ValidationError) -> Self {
        Self {
            title: "Error",
            message: err.to_string(),
            error: Some(err),
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The validation failure behind this notice, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

pub struct App {
    screen: Screen,
    notice: Option<Notice>,
    status_message: Option<String>,
    view: ViewState,
    settings: GameSettings,
    random: Box<dyn RandomSource>,
    next_session: SessionId,
    events_tx: mpsc::UnboundedSender<EngineEvent>,
    events_rx: mpsc::UnboundedReceiver<EngineEvent>,
    should_quit: bool,
    tick: usize,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notice", &self.notice)
            .field("settings", &self.settings)
            .field("next_session", &self.next_session)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Build the app from an optional config file, drawing targets from `rand`.
    #[must_use]
    pub fn new(config: Option<&GuessConfig>) -> Self {
        let ui_options = config.map(GuessConfig::ui_options).unwrap_or_default();
        Self::with_random(
            GameSettings::resolve(config),
            ui_options,
            Box::new(ThreadRandom),
        )
    }

    #[must_use]
    pub fn with_random(
        settings: GameSettings,
        ui_options: UiOptions,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::Home(HomeState::fresh(&settings)),
            notice: None,
            status_message: None,
            view: ViewState::new(ui_options),
            settings,
            random,
            next_session: SessionId::FIRST,
            events_tx,
            events_rx,
            should_quit: false,
            tick: 0,
        }
    }

    #[must_use]
    pub fn screen_kind(&self) -> ScreenKind {
        match &self.screen {
            Screen::Home(_) => ScreenKind::Home,
            Screen::Playing(_) => ScreenKind::Playing,
        }
    }

    #[must_use]
    pub fn home(&self) -> Option<&HomeState> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            Screen::Playing(_) => None,
        }
    }

    #[must_use]
    pub fn playing(&self) -> Option<&PlayingState> {
        match &self.screen {
            Screen::Playing(playing) => Some(&**playing),
            Screen::Home(_) => None,
        }
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if self
            .view
            .modal_effect
            .as_ref()
            .is_some_and(|effect| effect.kind() == ModalEffectKind::Shake)
        {
            self.view.modal_effect = None;
        }
    }

    /// Surface a validation failure. No game state is touched.
    fn reject(&mut self, err: ValidationError) {
        tracing::debug!(reason = err.reason(), "Input rejected: {err}");
        self.notice = Some(Notice::validation(err));
        if !self.view.ui_options.reduced_motion {
            self.view.modal_effect = Some(ModalEffect::shake(NOTICE_EFFECT_DURATION));
        }
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.view.ui_options
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Advance one frame: animations, then background events.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        let elapsed = self.frame_elapsed();
        if let Some(effect) = self.view.modal_effect.as_mut() {
            effect.advance(elapsed);
            if effect.phase() == AnimPhase::Completed {
                self.view.modal_effect = None;
            }
        }

        self.process_engine_events();
    }

    /// Drain events from background tasks.
    pub fn process_engine_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                EngineEvent::ReturnHome { session } => self.auto_return_home(session),
            }
        }
    }

    fn auto_return_home(&mut self, session: SessionId) {
        let current = match &self.screen {
            Screen::Playing(playing) if playing.session.is_solved() => playing.session.id(),
            _ => {
                tracing::debug!(%session, "Ignoring return home outside a solved session");
                return;
            }
        };
        if current != session {
            tracing::debug!(%session, %current, "Ignoring stale return home");
            return;
        }

        tracing::info!(%session, "Returning home after win");
        // Auto-return starts over with fresh range fields.
        self.screen = Screen::Home(HomeState::fresh(&self.settings));
        self.notice = None;
        self.view.modal_effect = None;
        self.clear_status();
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.view.modal_effect.as_ref()
    }

    pub fn clear_modal_effect(&mut self) {
        self.view.modal_effect = None;
    }

    /// Sender for engine events, for driving the controller from outside.
    #[must_use]
    pub fn event_sender(&self) -> mpsc::UnboundedSender<EngineEvent> {
        self.events_tx.clone()
    }
}
