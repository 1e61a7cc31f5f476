use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// The row of dots below the track. Dots are drawn on every other column so
/// hit testing and rendering share the same layout math.
pub struct IndicatorsWidget;

impl IndicatorsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mut spans = Vec::new();
        for (i, active) in app.carousel.indicators().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            if active {
                spans.push(Span::styled("●", Style::default().fg(theme.accent)));
            } else {
                spans.push(Span::styled("○", Style::default().fg(theme.grey1)));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    /// Map a click position onto a dot index, or None when the click landed
    /// between dots or outside the row entirely.
    pub fn hit_test(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
        if count == 0 || row != area.y {
            return None;
        }

        // Dots and single-space separators: "● ○ ○"
        let line_width = (2 * count - 1) as u16;
        let start = area.x + area.width.saturating_sub(line_width) / 2;
        if column < start {
            return None;
        }

        let rel = column - start;
        if rel >= line_width || rel % 2 == 1 {
            return None;
        }

        Some((rel / 2) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_land_on_the_centered_dots() {
        // 5 dots in 80 columns: line is 9 wide, starts at 35
        let area = Rect::new(0, 4, 80, 1);
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 35, 4), Some(0));
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 39, 4), Some(2));
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 43, 4), Some(4));
    }

    #[test]
    fn separators_and_margins_miss() {
        let area = Rect::new(0, 4, 80, 1);
        // The space between the first two dots
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 36, 4), None);
        // Left of the line and past its end
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 34, 4), None);
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 44, 4), None);
    }

    #[test]
    fn wrong_row_misses() {
        let area = Rect::new(0, 4, 80, 1);
        assert_eq!(IndicatorsWidget::hit_test(area, 5, 39, 5), None);
    }

    #[test]
    fn empty_set_never_hits() {
        let area = Rect::new(0, 4, 80, 1);
        assert_eq!(IndicatorsWidget::hit_test(area, 0, 40, 4), None);
    }
}
