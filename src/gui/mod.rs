//! GUI module - User interface components

mod app;
mod history_window;
mod keypad;
mod settings_window;

pub use app::CalculatorApp;
pub use history_window::HistoryWindow;
pub use settings_window::{SettingsAction, SettingsWindow};
