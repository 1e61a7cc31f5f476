mod indicators;
mod popup;
mod status_bar;
mod track;

pub use indicators::IndicatorsWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use track::TrackWidget;
