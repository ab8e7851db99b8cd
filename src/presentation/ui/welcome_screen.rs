//! Welcome screen.

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap},
};
use tachyonfx::{Effect, Interpolation, fx};
use unicode_width::UnicodeWidthStr;

use crate::domain::catalog::{Profile, welcome};
use crate::domain::keybinding::Action;
use crate::domain::ports::ImageAsset;
use crate::domain::{NavigationEvent, ScreenId};
use crate::presentation::theme::Theme;

const HEADER_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;
const BOTTOM_MARGIN: u16 = 2;
const BODY_MARGIN: u16 = 4;
const BUTTON_MARGIN: u16 = 3;

/// Profile, logo, introduction and the entry button.
pub struct WelcomeScreen {
    profile: Profile,
    logo: Option<ImageAsset>,
    theme: Theme,
    intro: Option<Effect>,
    pending_duration: Duration,
}

impl WelcomeScreen {
    /// Creates the screen without the intro effect.
    #[must_use]
    pub fn new(profile: Profile, logo: Option<ImageAsset>, theme: Theme) -> Self {
        Self {
            profile,
            logo,
            theme,
            intro: None,
            pending_duration: Duration::ZERO,
        }
    }

    /// Fades the logo in on the first frames.
    #[must_use]
    pub fn with_intro_animation(mut self) -> Self {
        if self.logo.is_some() {
            self.intro = Some(fx::coalesce((800, Interpolation::CircOut)));
        }
        self
    }

    /// Actions listed in the footer.
    pub const ACTIONS: &'static [Action] = &[Action::Select, Action::ToggleHelp, Action::Quit];

    /// Whether the intro effect is still running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.intro.is_some()
    }

    /// Advances the intro effect on the next render.
    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    /// Select opens the component catalog.
    pub fn handle_action(&mut self, action: Action) -> Option<NavigationEvent> {
        match action {
            Action::Select => Some(NavigationEvent::Push(ScreenId::ComponentsList)),
            _ => None,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                self.profile.name.as_ref(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.profile.student_id.as_ref(), self.theme.dimmed_style),
        ];

        Paragraph::new(lines)
            .centered()
            .block(Block::default().padding(Padding::vertical(1)))
            .render(area, buf);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_body(&mut self, area: Rect, buf: &mut Buffer) {
        let [_, body, _] = Layout::horizontal([
            Constraint::Length(BODY_MARGIN),
            Constraint::Fill(1),
            Constraint::Length(BODY_MARGIN),
        ])
        .areas(area);

        let logo_height = self.logo.as_ref().map_or(0, |logo| logo.height() as u16);
        let intro_width = welcome::INTRO.width() as u16;
        let intro_height = intro_width.div_ceil(body.width.max(1)) + 1;

        let [logo_area, _, title_area, _, intro_area] = Layout::vertical([
            Constraint::Length(logo_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(intro_height),
        ])
        .flex(Flex::Center)
        .areas(body);

        self.render_logo(logo_area, buf);

        Paragraph::new(Span::styled(
            welcome::TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered()
        .render(title_area, buf);

        Paragraph::new(welcome::INTRO)
            .style(self.theme.dimmed_style)
            .centered()
            .wrap(Wrap { trim: true })
            .render(intro_area, buf);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_logo(&mut self, area: Rect, buf: &mut Buffer) {
        let Some(logo) = &self.logo else {
            return;
        };

        let text = Text::from_iter(logo.rows().iter().map(|row| Line::raw(row.as_str())));
        let logo_width = logo.rows().iter().map(|row| row.width()).max().unwrap_or(0) as u16;

        let x = area.x + area.width.saturating_sub(logo_width) / 2;
        let logo_area = Rect::new(x, area.y, logo_width.min(area.width), area.height);
        Paragraph::new(text)
            .style(Style::default().fg(self.theme.accent))
            .render(logo_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if let Some(effect) = &mut self.intro {
            let overflow = effect.process(duration.into(), buf, logo_area);
            if overflow.is_some() {
                self.intro = None;
            }
        }
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let [_, button, _] = Layout::horizontal([
            Constraint::Length(BUTTON_MARGIN),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_MARGIN),
        ])
        .areas(area);

        Paragraph::new(welcome::READY_BUTTON)
            .centered()
            .style(self.theme.button_style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.button_style),
            )
            .render(button, buf);
    }
}

impl Widget for &mut WelcomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, body, button, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BOTTOM_MARGIN),
        ])
        .areas(area);

        self.render_header(header, buf);
        self.render_body(body, buf);
        self.render_button(button, buf);
    }
}
