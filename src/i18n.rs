//! Localized UI labels (Russian and English).

use crate::settings::{Lang, Theme};

/// All user-facing texts for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub settings_title: &'static str,
    pub history_title: &'static str,
    pub history_button: &'static str,
    pub history_empty: &'static str,
    pub error_div_zero: &'static str,
    pub error_generic: &'static str,
    pub calculating: &'static str,
    pub theme_switch_light: &'static str,
    pub theme_switch_dark: &'static str,
    pub lang_switch_en: &'static str,
    pub lang_switch_ru: &'static str,
}

static RU: Strings = Strings {
    title: "Калькулятор",
    settings_title: "Настройки",
    history_title: "История",
    history_button: "Показать историю",
    history_empty: "История пуста.",
    error_div_zero: "Ошибка: деление на 0",
    error_generic: "Ошибка",
    calculating: "Вычисление...",
    theme_switch_light: "Переключить на светлую ✨",
    theme_switch_dark: "Переключить на темную ⚫",
    lang_switch_en: "English",
    lang_switch_ru: "404",
};

static EN: Strings = Strings {
    title: "Calculator",
    settings_title: "Settings",
    history_title: "History",
    history_button: "Show History",
    history_empty: "History is empty.",
    error_div_zero: "Error: division by 0",
    error_generic: "Error",
    calculating: "Calculating...",
    theme_switch_light: "Switch to Light ✨",
    theme_switch_dark: "Switch to Dark ⚫",
    lang_switch_en: "English",
    lang_switch_ru: "404",
};

impl Strings {
    pub fn for_lang(lang: Lang) -> &'static Strings {
        match lang {
            Lang::Ru => &RU,
            Lang::En => &EN,
        }
    }

    /// Label of the theme toggle: it offers the theme that is not active.
    pub fn theme_toggle(&self, theme: Theme) -> &'static str {
        match theme {
            Theme::Dark => self.theme_switch_light,
            Theme::Light => self.theme_switch_dark,
        }
    }

    /// Label of the language toggle while `lang` is active.
    pub fn lang_toggle(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ru => self.lang_switch_en,
            Lang::En => self.lang_switch_ru,
        }
    }
}
