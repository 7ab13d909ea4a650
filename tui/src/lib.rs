//! TUI rendering and input handling for the guessing game.

mod effects;
mod input;
mod mood;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use guess_engine::{
    App, HomeField, HomeState, ModalEffectKind, Notice, NumericDraft, PlayingState, ScreenKind,
};

const CARD_WIDTH: u16 = 48;
const HOME_CARD_HEIGHT: u16 = 16;
const PLAYING_CARD_HEIGHT: u16 = 20;
const FIELD_HEIGHT: u16 = 3;

pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Screen
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.screen_kind() {
        ScreenKind::Home => {
            if let Some(home) = app.home() {
                draw_home(frame, app, home, chunks[0], &palette, &glyphs);
            }
        }
        ScreenKind::Playing => {
            if let Some(playing) = app.playing() {
                draw_playing(frame, app, playing, chunks[0], &palette, &glyphs);
            }
        }
    }
    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);

    if let Some(notice) = app.notice() {
        draw_notice(frame, app, notice, &palette, &glyphs);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn card_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(2))
}

fn draw_home(
    frame: &mut Frame,
    app: &App,
    home: &HomeState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let card = centered(area, CARD_WIDTH, HOME_CARD_HEIGHT);
    let block = card_block(palette);
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title
            Constraint::Length(1),            // Subtitle
            Constraint::Length(1),            // Spacer
            Constraint::Length(FIELD_HEIGHT), // Min
            Constraint::Length(FIELD_HEIGHT), // Max
            Constraint::Length(1),            // Spacer
            Constraint::Length(1),            // Action
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Guess the Number",
            styles::title(palette),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Choose the number range",
            Style::default().fg(palette.text_secondary),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );

    let show_cursor = app.notice().is_none();
    for (field, row) in [(HomeField::Min, rows[3]), (HomeField::Max, rows[4])] {
        let focused = home.focus() == field;
        let marker = if focused {
            glyphs.selected
        } else {
            glyphs.unselected
        };
        let title = format!(" {marker} {} ", field.label());
        draw_field(
            frame,
            row,
            &title,
            home.field(field),
            focused,
            show_cursor && focused,
            palette,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" generate number", styles::key_hint(palette)),
        ]))
        .alignment(Alignment::Center),
        rows[6],
    );
}

/// Single-line numeric field with a titled border.
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    draft: &NumericDraft,
    focused: bool,
    show_cursor: bool,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::field_border(palette, focused))
        .title(Line::from(Span::styled(
            title.to_string(),
            styles::field_label(palette, focused),
        )))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Drafts are ASCII, so byte offsets are columns.
    let width = usize::from(inner.width.max(1));
    let cursor = draft.cursor();
    let scroll = (cursor + 1).saturating_sub(width);
    let visible = draft.text().get(scroll..).unwrap_or_default();

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            visible.to_string(),
            Style::default().fg(palette.text_primary),
        ))),
        inner,
    );

    if show_cursor && inner.width > 0 && inner.height > 0 {
        let column = u16::try_from(cursor - scroll).unwrap_or(inner.width - 1);
        frame.set_cursor_position((inner.x + column.min(inner.width - 1), inner.y));
    }
}

fn draw_playing(
    frame: &mut Frame,
    app: &App,
    playing: &PlayingState,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let options = app.ui_options();
    let session = playing.session();
    let range = session.range();

    let base = centered(area, CARD_WIDTH, PLAYING_CARD_HEIGHT);
    let card = match app.modal_effect() {
        Some(effect) if effect.kind() == ModalEffectKind::PopScale => {
            apply_modal_effect(effect, base, area)
        }
        _ => base,
    };
    let block = card_block(palette).title(Line::from(vec![
        Span::styled(format!(" {} ", glyphs.home), styles::key_highlight(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" home ", styles::key_hint(palette)),
    ]));
    let inner = block.inner(card);
    frame.render_widget(Clear, card);
    frame.render_widget(block, card);

    let art = mood::face(playing.mood(), options.ascii_only);
    let art_height = art.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Range
            Constraint::Length(art_height),   // Face
            Constraint::Length(1),            // Spacer
            Constraint::Length(3),            // Feedback
            Constraint::Length(1),            // Hint
            Constraint::Length(FIELD_HEIGHT), // Guess
            Constraint::Length(1),            // Attempts
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Range {range}"),
            Style::default().fg(palette.text_muted),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let mood_style = Style::default().fg(palette.mood(playing.mood()));
    let face: Vec<Line> = art
        .iter()
        .map(|line| Line::from(Span::styled(*line, mood_style)))
        .collect();
    frame.render_widget(
        Paragraph::new(face).alignment(Alignment::Center),
        rows[1],
    );

    let feedback_style = if session.is_solved() {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_primary)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            playing.feedback().to_string(),
            feedback_style,
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        rows[3],
    );

    let hint_line = if session.is_solved() {
        Line::from(Span::styled(
            format!("{} Returning home...", glyphs.check),
            Style::default().fg(palette.text_muted),
        ))
    } else if let Some(result) = session.last_result()
        && let (Some(direction), Some(hint)) = (result.direction(), playing.hint())
    {
        let arrow = match direction {
            guess_engine::Direction::TooLow => glyphs.arrow_up,
            guess_engine::Direction::TooHigh => glyphs.arrow_down,
        };
        Line::from(Span::styled(
            format!("{arrow} {hint}"),
            Style::default().fg(palette.mood(playing.mood())),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(
        Paragraph::new(hint_line).alignment(Alignment::Center),
        rows[4],
    );

    let title = format!(" {} Your guess ", glyphs.prompt);
    let accepting = !session.is_solved();
    draw_field(
        frame,
        rows[5],
        &title,
        playing.guess(),
        accepting,
        accepting && app.notice().is_none(),
        palette,
    );

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.attempts),
                Style::default().fg(palette.accent),
            ),
            Span::styled(
                format!("Attempts: {}", session.attempts()),
                Style::default().fg(palette.text_secondary),
            ),
        ]))
        .alignment(Alignment::Center),
        rows[6],
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let line = if let Some(msg) = app.status_message() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(msg.to_string(), Style::default().fg(palette.warning)),
        ])
    } else {
        let hints: &[(&str, &str)] = match (app.notice().is_some(), app.screen_kind()) {
            (true, _) => &[("Enter/Esc", " dismiss  "), ("Ctrl+C", " quit ")],
            (false, ScreenKind::Home) => &[
                ("Tab", " switch field  "),
                ("Enter", " generate  "),
                ("Esc", " quit "),
            ],
            (false, ScreenKind::Playing) => &[
                ("Enter", " guess  "),
                ("Esc/Ctrl+H", " home  "),
                ("Ctrl+C", " quit "),
            ],
        };
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, styles::key_highlight(palette)));
            spans.push(Span::styled(*label, styles::key_hint(palette)));
        }
        if app.playing().is_some_and(PlayingState::return_pending) {
            spans.push(Span::styled(
                format!("{} won", glyphs.check),
                Style::default().fg(palette.success),
            ));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_notice(frame: &mut Frame, app: &App, notice: &Notice, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let width = 44.min(area.width.saturating_sub(4)).max(24);
    let content_width = usize::from(width.saturating_sub(4).max(1)); // borders + padding

    let message_rows = notice.message().width().div_ceil(content_width).max(1);
    let lines = vec![
        Line::from(Span::styled(
            notice.message().to_string(),
            Style::default().fg(palette.text_primary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" OK", styles::key_hint(palette)),
        ]),
    ];
    let inner_height = u16::try_from(message_rows + 2).unwrap_or(u16::MAX);
    let height = inner_height.saturating_add(4); // borders + vertical padding

    let base_area = centered(area, width, height);
    let notice_area = match app.modal_effect() {
        Some(effect) if effect.kind() == ModalEffectKind::Shake => {
            apply_modal_effect(effect, base_area, area)
        }
        _ => base_area,
    };

    frame.render_widget(Clear, notice_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1))
        .title(Line::from(vec![Span::styled(
            format!(" {} {} ", glyphs.warning, notice.title()),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, notice_area);
}
