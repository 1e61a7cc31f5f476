pub mod controller;
pub mod indicators;
pub mod viewport;

pub use controller::{Carousel, Direction};
pub use indicators::IndicatorSet;
pub use viewport::ViewportClass;
