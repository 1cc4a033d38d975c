use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use prompterm_core::display_time;

use crate::app::App;

pub struct TransportWidget;

impl TransportWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let engine = app.session.engine();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        // Controls line: play state, time, speed/font readouts, hint
        let (state_label, state_color) = if engine.playing() {
            ("\u{23f8} PAUSE", theme.yellow)
        } else {
            ("\u{25b6} PLAY", theme.green)
        };

        let time_text = format!(
            " {} / {}",
            display_time(engine.elapsed_seconds()),
            display_time(engine.total_seconds())
        );

        let info_text = if let Some(msg) = &app.status_message {
            format!("  {}", msg)
        } else {
            format!(
                "  {:.0} rows/s | font {:.0}",
                engine.speed(),
                engine.font_size()
            )
        };

        let help_hint = " space:play  j/k:scroll  ?:help  q:quit ";

        let mut spans = vec![
            Span::styled(
                format!(" {} ", state_label),
                Style::default()
                    .fg(theme.bg0)
                    .bg(state_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                time_text.clone(),
                Style::default()
                    .fg(theme.fg1)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(info_text.clone(), Style::default().fg(theme.fg0).bg(theme.bg2)),
        ];

        let used = UnicodeWidthStr::width(state_label) + 2
            + UnicodeWidthStr::width(time_text.as_str())
            + UnicodeWidthStr::width(info_text.as_str())
            + UnicodeWidthStr::width(help_hint);
        let padding = (area.width as usize).saturating_sub(used);
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(theme.bg2),
        ));
        spans.push(Span::styled(
            help_hint,
            Style::default().fg(theme.grey1).bg(theme.bg2),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

        // Progress gauge doubling as the seek readout
        let gauge_color = if engine.playing() {
            theme.yellow
        } else {
            theme.green
        };
        let gauge = Gauge::default()
            .ratio(engine.progress().clamp(0.0, 1.0))
            .gauge_style(Style::default().fg(gauge_color).bg(theme.bg1))
            .use_unicode(true)
            .label("");
        frame.render_widget(gauge, rows[1]);
    }
}
