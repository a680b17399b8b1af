//! Keypad Widget
//! Button grid, the equals bar and the history/settings row.

use crate::i18n::Strings;
use crate::session::Key;
use egui::{Color32, RichText};

/// Button fill shared by every keypad button.
const BUTTON_FILL: Color32 = Color32::from_rgb(0x3a, 0x4d, 0x70);
const COLUMNS: usize = 4;
const GAP: f32 = 5.0;

/// Grid buttons, row by row.
pub const BUTTONS: [(&str, Key); 16] = [
    ("7", Key::Digit('7')),
    ("8", Key::Digit('8')),
    ("9", Key::Digit('9')),
    ("/", Key::Div),
    ("4", Key::Digit('4')),
    ("5", Key::Digit('5')),
    ("6", Key::Digit('6')),
    ("*", Key::Mul),
    ("1", Key::Digit('1')),
    ("2", Key::Digit('2')),
    ("3", Key::Digit('3')),
    ("-", Key::Sub),
    ("0", Key::Digit('0')),
    (".", Key::Point),
    ("C", Key::Clear),
    ("+", Key::Add),
];

/// Actions triggered by the keypad
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeypadAction {
    None,
    Press(Key),
    Calculate,
    ShowHistory,
    ShowSettings,
}

fn button(label: &str, size: f32) -> egui::Button<'static> {
    egui::Button::new(RichText::new(label).size(size).color(Color32::WHITE)).fill(BUTTON_FILL)
}

/// Draw the keypad filling the remaining space of `ui`.
pub fn show(ui: &mut egui::Ui, strings: &Strings) -> KeypadAction {
    let mut action = KeypadAction::None;

    ui.spacing_mut().item_spacing = egui::vec2(GAP, GAP);
    let width = ui.available_width();
    let rows = BUTTONS.len() / COLUMNS + 2;
    let btn_w = (width - GAP * (COLUMNS - 1) as f32) / COLUMNS as f32;
    let btn_h = ((ui.available_height() - GAP * (rows - 1) as f32) / rows as f32).max(30.0);

    for row in BUTTONS.chunks(COLUMNS) {
        ui.horizontal(|ui| {
            for (label, key) in row {
                if ui.add_sized([btn_w, btn_h], button(label, 24.0)).clicked() {
                    action = KeypadAction::Press(*key);
                }
            }
        });
    }

    if ui.add_sized([width, btn_h], button("=", 24.0)).clicked() {
        action = KeypadAction::Calculate;
    }

    ui.horizontal(|ui| {
        let gear_w = btn_h;
        if ui
            .add_sized([width - gear_w - GAP, btn_h], button(strings.history_button, 20.0))
            .clicked()
        {
            action = KeypadAction::ShowHistory;
        }
        if ui
            .add_sized([gear_w, btn_h], button("⚙", 20.0))
            .on_hover_text(strings.settings_title)
            .clicked()
        {
            action = KeypadAction::ShowSettings;
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_keys() {
        for (label, key) in BUTTONS {
            match key.text() {
                Some(c) => assert_eq!(label, c.to_string()),
                None => assert_eq!(label, "C"),
            }
        }
    }

    #[test]
    fn test_grid_is_rectangular() {
        assert_eq!(BUTTONS.len() % COLUMNS, 0);
    }
}
