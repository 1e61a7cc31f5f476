use std::sync::Arc;

use caravel_core::{AppConfig, Carousel, Direction};
use ratatui::layout::Rect;
use tracing::debug;

use crate::theme::Theme;
use crate::widgets::IndicatorsWidget;

/// One item on the track. Opaque to the carousel controller, which only
/// ever sees the count.
#[derive(Debug, Clone)]
pub struct Card {
    pub author: String,
    /// Star rating, 0 to 5
    pub rating: u8,
    pub body: String,
}

/// Application state
///
/// Holds the single carousel controller instance; every event handler is an
/// explicit method call on this struct, there is no ambient shared state.
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active color theme
    pub theme: Theme,
    /// The cards shown on the track
    pub cards: Vec<Card>,
    /// Carousel controller
    pub carousel: Carousel,
    /// Column/row where the current drag started, if one is in progress
    pub drag_origin: Option<(u16, u16)>,
    /// Where the indicator row was drawn last frame, for dot hit testing
    pub indicator_area: Option<Rect>,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the help overlay is shown
    pub show_help: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(cards: Vec<Card>, viewport_width: u16, config: Arc<AppConfig>, theme: Theme) -> Self {
        let carousel = Carousel::new(cards.len(), viewport_width, config.carousel.clone());
        Self {
            config,
            theme,
            cards,
            carousel,
            drag_origin: None,
            indicator_area: None,
            status_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn advance(&mut self, direction: Direction) {
        self.carousel.advance(direction);
    }

    pub fn jump_to(&mut self, index: isize) {
        self.carousel.jump_to(index);
    }

    pub fn on_resize(&mut self, viewport_width: u16) {
        self.carousel.on_resize(viewport_width);
    }

    /// Record the start of a mouse drag
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        self.drag_origin = Some((column, row));
    }

    /// Finish a mouse drag: a stationary release on an indicator dot jumps
    /// to it, anything else is interpreted as a swipe gesture.
    pub fn end_drag(&mut self, column: u16, row: u16) {
        let Some((start_column, _)) = self.drag_origin.take() else {
            return;
        };

        if start_column == column {
            if let Some(area) = self.indicator_area {
                let count = self.carousel.indicators().count();
                if let Some(dot) = IndicatorsWidget::hit_test(area, count, column, row) {
                    debug!(dot, "indicator clicked");
                    self.jump_to(dot as isize);
                }
            }
            return;
        }

        self.carousel.on_gesture_end(start_column, column);
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::CarouselConfig;

    fn app(card_count: usize) -> App {
        let cards = (0..card_count)
            .map(|i| Card {
                author: format!("Reviewer {}", i + 1),
                rating: 5,
                body: "Great store.".to_string(),
            })
            .collect();
        let config = AppConfig {
            carousel: CarouselConfig::compact(),
            ..AppConfig::default()
        };
        // 140 columns is Wide under the compact preset
        App::new(cards, 140, Arc::new(config), Theme::default())
    }

    #[test]
    fn drag_past_threshold_moves_forward() {
        let mut app = app(7);
        app.begin_drag(40, 10);
        app.end_drag(20, 10);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut app = app(7);
        app.begin_drag(40, 10);
        app.end_drag(38, 10);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn release_without_drag_origin_is_a_no_op() {
        let mut app = app(7);
        app.end_drag(10, 10);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn stationary_click_on_dot_jumps() {
        let mut app = app(7);
        // 5 dots, row drawn at y=20 spanning the full width of 140
        app.indicator_area = Some(Rect::new(0, 20, 140, 1));
        // Dots occupy 9 cells centered at x=65; the third dot sits at 69
        app.begin_drag(69, 20);
        app.end_drag(69, 20);
        assert_eq!(app.carousel.current_index(), 2);
    }
}
