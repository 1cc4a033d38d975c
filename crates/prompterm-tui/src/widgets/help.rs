use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the help overlay listing the active keybindings
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let keymap = &app.config.keymap;

        let entries: Vec<(String, &str)> = vec![
            (keymap.toggle_play.clone(), "play / pause"),
            (
                format!("{} / {}", keymap.scroll_down, keymap.scroll_up),
                "scroll down / up",
            ),
            (
                format!("{} / {}", keymap.page_down, keymap.page_up),
                "half page down / up",
            ),
            (
                format!("{} / {}", keymap.jump_to_top, keymap.jump_to_bottom),
                "jump to top / end",
            ),
            ("0-9".to_string(), "seek to 0%-90%"),
            (
                format!("{} / {}", keymap.speed_up, keymap.speed_down),
                "speed up / down",
            ),
            (
                format!("{} / {}", keymap.font_up, keymap.font_down),
                "font size up / down",
            ),
            (keymap.edit.clone(), "edit script in $EDITOR"),
            (keymap.reload.clone(), "reload script from disk"),
            (keymap.quit.clone(), "quit"),
        ];

        let mut lines: Vec<Line> = vec![Line::from("")];
        for (key, description) in &entries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:>9}  ", key),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(theme.grey1),
        )));

        let area = frame.area();
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .alignment(Alignment::Left);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
