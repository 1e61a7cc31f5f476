use crate::config::CarouselConfig;

/// Width class of the viewport, derived from the configured breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width. Breakpoints are inclusive upper bounds.
    pub fn classify(width: u16, config: &CarouselConfig) -> Self {
        if width <= config.narrow_breakpoint {
            ViewportClass::Narrow
        } else if width <= config.medium_breakpoint {
            ViewportClass::Medium
        } else {
            ViewportClass::Wide
        }
    }
}

impl CarouselConfig {
    /// Items per page for a viewport class. Never less than one.
    pub fn page_size_for(&self, class: ViewportClass) -> usize {
        let size = match class {
            ViewportClass::Narrow => self.narrow_page_size,
            ViewportClass::Medium => self.medium_page_size,
            ViewportClass::Wide => self.wide_page_size,
        };
        size.max(1)
    }
}
