//! Calculator Main Application
//! Entry field and keypad, plus the settings and history windows.

use crate::gui::keypad::{self, KeypadAction};
use crate::gui::{HistoryWindow, SettingsAction, SettingsWindow};
use crate::i18n::Strings;
use crate::session::{Key, Outcome, Session};
use crate::settings::{Settings, Theme};
use egui::{Align, FontId, Layout, RichText};
use std::time::Duration;
use tracing::{info, warn};

/// How often a running calculation is checked for a result.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application window.
pub struct CalculatorApp {
    settings: Settings,
    session: Session,
    settings_window: SettingsWindow,
    history_window: HistoryWindow,
}

impl CalculatorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        apply_theme(&cc.egui_ctx, settings.theme);
        Self {
            settings,
            session: Session::new(),
            settings_window: SettingsWindow::new(),
            history_window: HistoryWindow::new(),
        }
    }

    fn strings(&self) -> &'static Strings {
        Strings::for_lang(self.settings.lang)
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!("failed to save settings: {}", e);
        }
    }

    fn handle_settings_action(&mut self, ctx: &egui::Context, action: SettingsAction) {
        match action {
            SettingsAction::ToggleTheme => {
                self.settings.toggle_theme();
                apply_theme(ctx, self.settings.theme);
                self.save_settings();
                info!("theme set to {:?}", self.settings.theme);
            }
            SettingsAction::ToggleLanguage => {
                self.settings.toggle_language();
                self.save_settings();
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.strings().title.to_string()));
                info!("language set to {:?}", self.settings.lang);
            }
            SettingsAction::None => {}
        }
    }

    fn handle_keypad_action(&mut self, action: KeypadAction) {
        match action {
            KeypadAction::Press(key) => self.session.press(key),
            KeypadAction::Calculate => {
                let strings = self.strings();
                self.session.start_calculation(strings);
            }
            KeypadAction::ShowHistory => self.history_window.open = true,
            KeypadAction::ShowSettings => self.settings_window.open = true,
            KeypadAction::None => {}
        }
    }

    /// Keyboard input: characters type into the expression, Enter or `=`
    /// evaluates, Escape clears, Backspace deletes.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (typed, enter, escape, backspace) = ctx.input(|i| {
            let typed: String = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            (
                typed,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        let strings = self.strings();
        for c in typed.chars() {
            if c == '=' {
                self.session.start_calculation(strings);
            } else if let Some(key) = Key::from_char(c) {
                self.session.press(key);
            }
        }
        if escape {
            self.session.press(Key::Clear);
        }
        if backspace {
            self.session.backspace();
        }
        if enter {
            self.session.start_calculation(strings);
        }
    }

    fn draw_entry(&self, ui: &mut egui::Ui) {
        let height = 70.0;
        egui::Frame::none()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .rounding(6.0)
            .inner_margin(egui::Margin::symmetric(10.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(ui.available_width(), height));
                ui.set_max_height(height);
                let color = ui.visuals().strong_text_color();
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let text = RichText::new(self.session.display())
                        .font(FontId::proportional(40.0))
                        .color(color);
                    ui.add(egui::Label::new(text).truncate());
                });
            });
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_theme(match theme {
        Theme::Dark => egui::Theme::Dark,
        Theme::Light => egui::Theme::Light,
    });
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        let strings = self.strings();
        match self.session.poll(strings) {
            Some(Outcome::Value(value)) => info!("calculation finished: {}", value),
            Some(Outcome::Failed(kind)) => info!("calculation failed: {:?}", kind),
            None => {}
        }

        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(egui::Margin::same(10.0)))
            .show(ctx, |ui| {
                self.draw_entry(ui);
                ui.add_space(15.0);
                let action = keypad::show(ui, strings);
                self.handle_keypad_action(action);
            });

        let action = self.settings_window.show(ctx, &self.settings);
        self.handle_settings_action(ctx, action);

        let strings = self.strings();
        self.history_window.show(ctx, strings, self.session.history());

        // Keep polling while a calculation is in flight
        if self.session.is_calculating() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}
