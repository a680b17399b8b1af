//! History Window
//! Read-only listing of this session's calculations.

use crate::i18n::Strings;
use egui::{FontId, Id, ScrollArea, TextEdit};

#[derive(Default)]
pub struct HistoryWindow {
    pub open: bool,
}

impl HistoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context, strings: &Strings, history: &[String]) {
        let text = history_text(strings, history);

        egui::Window::new(strings.history_title)
            .id(Id::new("history_window"))
            .open(&mut self.open)
            .default_size([300.0, 400.0])
            .show(ctx, |ui| {
                ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    // A &str buffer keeps the text box read-only.
                    let mut view: &str = &text;
                    ui.add(
                        TextEdit::multiline(&mut view)
                            .font(FontId::proportional(16.0))
                            .desired_width(f32::INFINITY),
                    );
                });
            });
    }
}

/// Entries one per line, or the localized placeholder when empty.
pub fn history_text(strings: &Strings, history: &[String]) -> String {
    if history.is_empty() {
        strings.history_empty.to_string()
    } else {
        history.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Lang;

    #[test]
    fn test_empty_history_placeholder() {
        assert_eq!(history_text(Strings::for_lang(Lang::En), &[]), "History is empty.");
        assert_eq!(history_text(Strings::for_lang(Lang::Ru), &[]), "История пуста.");
    }

    #[test]
    fn test_entries_are_joined_by_newlines() {
        let history = vec!["7+3 = 10".to_string(), "10*2 = 20".to_string()];
        assert_eq!(
            history_text(Strings::for_lang(Lang::En), &history),
            "7+3 = 10\n10*2 = 20"
        );
    }
}
