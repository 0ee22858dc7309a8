mod app;
pub mod theme;
pub mod views;

pub use app::MorphCalendarApp;
