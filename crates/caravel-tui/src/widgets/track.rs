use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Card};
use crate::theme::Theme;

pub struct TrackWidget;

impl TrackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        if app.cards.is_empty() {
            let empty = Paragraph::new("No cards to show")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.grey1));
            frame.render_widget(empty, area);
            return;
        }

        let gap = app.config.carousel.gap;
        let page_size = app.carousel.page_size() as u16;
        // Geometry is read fresh from the frame every draw so a resize that
        // happened since the last offset computation is picked up
        let item_width = item_width(area.width, page_size, gap);
        if item_width == 0 || area.height == 0 {
            return;
        }

        let offset = i64::from(app.carousel.offset(item_width));
        let stride = i64::from(item_width) + i64::from(gap);

        for (i, card) in app.cards.iter().enumerate() {
            let x = i as i64 * stride - offset;
            if x + i64::from(item_width) <= 0 || x >= i64::from(area.width) {
                continue;
            }

            // Clip cards that hang off either edge of the track
            let clip_left = (-x).max(0) as u16;
            let draw_x = x.max(0) as u16;
            let visible = (item_width - clip_left).min(area.width - draw_x);
            if visible == 0 {
                continue;
            }

            let card_area = Rect::new(area.x + draw_x, area.y, visible, area.height);
            Self::render_card(frame, card_area, card, theme);
        }
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &Card, theme: &Theme) {
        let block = Block::default()
            .title(format!(" {} ", card.author))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.grey0))
            .style(Style::default().bg(theme.bg1));

        let rating = card.rating.min(5) as usize;
        let stars = format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating));

        let lines = vec![
            Line::from(Span::styled(stars, Style::default().fg(theme.yellow))),
            Line::from(""),
            Line::from(Span::styled(
                card.body.clone(),
                Style::default().fg(theme.fg0),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Width of one card: the track width minus the gaps, split across the page.
fn item_width(track_width: u16, page_size: u16, gap: u16) -> u16 {
    let page_size = page_size.max(1);
    track_width.saturating_sub(gap * (page_size - 1)) / page_size
}
