//! Settings Window
//! Small floating window with the theme and language toggles.

use crate::i18n::Strings;
use crate::settings::Settings;
use egui::{Id, RichText};

/// Actions triggered by the settings window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    ToggleTheme,
    ToggleLanguage,
}

pub struct SettingsWindow {
    pub open: bool,
}

impl Default for SettingsWindow {
    fn default() -> Self {
        // Shown next to the calculator on startup.
        Self { open: true }
    }
}

impl SettingsWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context, settings: &Settings) -> SettingsAction {
        let strings = Strings::for_lang(settings.lang);
        let mut action = SettingsAction::None;

        // The title is localized, so the window needs a stable id.
        egui::Window::new(strings.settings_title)
            .id(Id::new("settings_window"))
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.vertical_centered_justified(|ui| {
                    ui.add_space(10.0);
                    let theme_text = RichText::new(strings.theme_toggle(settings.theme)).size(16.0);
                    if ui.button(theme_text).clicked() {
                        action = SettingsAction::ToggleTheme;
                    }
                    ui.add_space(10.0);
                    let lang_text = RichText::new(strings.lang_toggle(settings.lang)).size(16.0);
                    if ui.button(lang_text).clicked() {
                        action = SettingsAction::ToggleLanguage;
                    }
                    ui.add_space(10.0);
                });
            });

        action
    }
}
