use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use caravel_core::ViewportClass;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let carousel = &app.carousel;

        let class_str = match carousel.viewport_class() {
            ViewportClass::Narrow => "Narrow",
            ViewportClass::Medium => "Medium",
            ViewportClass::Wide => "Wide",
        };

        let shown = if carousel.item_count() == 0 {
            0
        } else {
            carousel.current_index() + 1
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " card {}/{} | {} | {} per page",
                shown,
                carousel.item_count(),
                class_str,
                carousel.page_size()
            )
        };

        let help_hint = " q:quit h/l:move 1-9:jump ?:help ";
        let padding_len = area
            .width
            .saturating_sub((status_text.width() + help_hint.width()) as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey2).bg(theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
