pub mod carousel;
pub mod config;
pub mod error;

pub use carousel::{Carousel, Direction, IndicatorSet, ViewportClass};
pub use config::{AppConfig, CarouselConfig, UiConfig};
pub use error::{Error, Result};
