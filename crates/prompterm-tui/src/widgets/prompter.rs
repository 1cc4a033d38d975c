use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, GUTTER_COLS};

/// Rows either side of the cue line that stay at full brightness
const FOCUS_BAND_ROWS: i64 = 5;

pub struct PrompterWidget;

impl PrompterWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let base = Style::default().bg(theme.bg0).fg(theme.fg0);

        if app.script.is_empty() {
            let placeholder = Paragraph::new(Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Write something...",
                    Style::default().fg(theme.grey1).add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "(open a script file: prompterm <path>)",
                    Style::default().fg(theme.grey0),
                )),
            ]))
            .style(base)
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        let cue_row = (area.height / 2) as i64;
        let scroll = app.session.engine().position().round() as i64;
        let content_rows = app.layout.content_rows() as i64;
        let text_width = app.text_width(area.width);

        // Center the column when a max text width narrows it
        let pad = (area.width.saturating_sub(GUTTER_COLS + text_width) / 2) as usize;
        let dim_active = app.config.ui.dim_overlay && !app.editing;

        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        for screen_row in 0..area.height as i64 {
            let at_cue = screen_row == cue_row;
            let gutter = if at_cue {
                Span::styled("\u{25b8} ", Style::default().fg(theme.accent))
            } else {
                Span::raw("  ")
            };

            // The document is the content with `cue_row` leading blanks, so
            // position 0 puts the first line on the cue row.
            let content_row = scroll + screen_row - cue_row;
            let text = if (0..content_rows).contains(&content_row) {
                app.layout.line_at_row(content_row as usize).unwrap_or("")
            } else {
                ""
            };

            let distance = (screen_row - cue_row).abs();
            let style = if dim_active && distance > FOCUS_BAND_ROWS {
                Style::default().fg(theme.grey0)
            } else if at_cue {
                Style::default().fg(theme.fg1)
            } else {
                Style::default().fg(theme.fg0)
            };

            lines.push(Line::from(vec![
                gutter,
                Span::raw(" ".repeat(pad)),
                Span::styled(text.to_string(), style),
            ]));
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).style(base), area);
    }
}
