//! Calculator session state: the expression being typed, the entry text,
//! the in-memory history and the calculation in flight.

use crate::i18n::Strings;
use crate::worker::{spawn_calculation, CalcErrorKind, CalcMessage};
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{info, warn};

/// A key on the calculator, from a button or the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    LParen,
    RParen,
    Clear,
}

impl Key {
    /// Text appended to the expression, `None` for control keys.
    pub fn text(self) -> Option<char> {
        match self {
            Key::Digit(d) => Some(d),
            Key::Point => Some('.'),
            Key::Add => Some('+'),
            Key::Sub => Some('-'),
            Key::Mul => Some('*'),
            Key::Div => Some('/'),
            Key::Pow => Some('^'),
            Key::LParen => Some('('),
            Key::RParen => Some(')'),
            Key::Clear => None,
        }
    }

    /// Map a typed character to a key.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::Point),
            '+' => Some(Key::Add),
            '-' => Some(Key::Sub),
            '*' => Some(Key::Mul),
            '/' => Some(Key::Div),
            '^' => Some(Key::Pow),
            '(' => Some(Key::LParen),
            ')' => Some(Key::RParen),
            'c' | 'C' => Some(Key::Clear),
            _ => None,
        }
    }
}

/// What a finished calculation did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(String),
    Failed(CalcErrorKind),
}

pub struct Session {
    expression: String,
    display: String,
    history: Vec<String>,
    pending: Option<Receiver<CalcMessage>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            expression: String::new(),
            display: String::new(),
            history: Vec::new(),
            pending: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Text for the entry field.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_calculating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn press(&mut self, key: Key) {
        match key.text() {
            Some(c) => self.expression.push(c),
            None => self.expression.clear(),
        }
        self.display = self.expression.clone();
    }

    pub fn backspace(&mut self) {
        self.expression.pop();
        self.display = self.expression.clone();
    }

    /// Start evaluating the current expression in the background.
    ///
    /// Returns `false` when there is nothing to evaluate or a calculation is
    /// already running.
    pub fn start_calculation(&mut self, strings: &Strings) -> bool {
        if self.expression.is_empty() || self.pending.is_some() {
            return false;
        }
        info!("calculating {:?}", self.expression);
        self.display = strings.calculating.to_string();
        self.pending = Some(spawn_calculation(self.expression.clone()));
        true
    }

    /// Drain the pending calculation without blocking.
    pub fn poll(&mut self, strings: &Strings) -> Option<Outcome> {
        let rx = self.pending.take()?;
        let message = match rx.try_recv() {
            Ok(message) => message,
            Err(TryRecvError::Empty) => {
                self.pending = Some(rx);
                return None;
            }
            Err(TryRecvError::Disconnected) => {
                warn!("calculation thread exited without a result");
                CalcMessage::Error(CalcErrorKind::Generic)
            }
        };

        Some(match message {
            CalcMessage::Result { expression, value } => {
                self.history.push(format!("{} = {}", expression, value));
                self.display = value.clone();
                self.expression = value.clone();
                Outcome::Value(value)
            }
            CalcMessage::Error(kind) => {
                self.display = match kind {
                    CalcErrorKind::DivisionByZero => strings.error_div_zero,
                    CalcErrorKind::Generic => strings.error_generic,
                }
                .to_string();
                self.expression.clear();
                Outcome::Failed(kind)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Lang;
    use std::thread;
    use std::time::{Duration, Instant};

    fn strings() -> &'static Strings {
        Strings::for_lang(Lang::En)
    }

    fn type_in(session: &mut Session, text: &str) {
        for c in text.chars() {
            session.press(Key::from_char(c).unwrap());
        }
    }

    /// Poll at the UI cadence until the calculation lands.
    fn wait(session: &mut Session) -> Outcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(outcome) = session.poll(strings()) {
                return outcome;
            }
            assert!(Instant::now() < deadline, "calculation did not finish");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_keys_accumulate_expression() {
        let mut session = Session::new();
        type_in(&mut session, "7+3");
        assert_eq!(session.expression(), "7+3");
        assert_eq!(session.display(), "7+3");

        session.press(Key::Clear);
        assert_eq!(session.expression(), "");
        assert_eq!(session.display(), "");
    }

    #[test]
    fn test_backspace() {
        let mut session = Session::new();
        type_in(&mut session, "12");
        session.backspace();
        assert_eq!(session.display(), "1");
        session.backspace();
        session.backspace();
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn test_calculation_updates_display_and_history() {
        let mut session = Session::new();
        type_in(&mut session, "7+3");
        assert!(session.start_calculation(strings()));
        assert!(session.is_calculating());

        assert_eq!(wait(&mut session), Outcome::Value("10".to_string()));
        assert!(!session.is_calculating());
        assert_eq!(session.display(), "10");
        assert_eq!(session.expression(), "10");
        assert_eq!(session.history(), ["7+3 = 10".to_string()]);
    }

    #[test]
    fn test_result_continues_next_expression() {
        let mut session = Session::new();
        type_in(&mut session, "7/2");
        session.start_calculation(strings());
        wait(&mut session);

        type_in(&mut session, "*2");
        session.start_calculation(strings());
        assert_eq!(wait(&mut session), Outcome::Value("7.0".to_string()));
        assert_eq!(
            session.history(),
            ["7/2 = 3.5".to_string(), "3.5*2 = 7.0".to_string()]
        );
    }

    #[test]
    fn test_division_by_zero_message() {
        let mut session = Session::new();
        type_in(&mut session, "5/0");
        session.start_calculation(strings());
        assert_eq!(wait(&mut session), Outcome::Failed(CalcErrorKind::DivisionByZero));
        assert_eq!(session.display(), "Error: division by 0");
        assert_eq!(session.expression(), "");
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_generic_error_message() {
        let mut session = Session::new();
        type_in(&mut session, "5+");
        session.start_calculation(strings());
        assert_eq!(wait(&mut session), Outcome::Failed(CalcErrorKind::Generic));
        assert_eq!(session.display(), "Error");
        assert_eq!(session.expression(), "");
    }

    #[test]
    fn test_empty_expression_is_ignored() {
        let mut session = Session::new();
        assert!(!session.start_calculation(strings()));
        assert!(!session.is_calculating());
        assert_eq!(session.poll(strings()), None);
    }

    #[test]
    fn test_second_start_while_pending_is_ignored() {
        let mut session = Session::new();
        type_in(&mut session, "2^10");
        assert!(session.start_calculation(strings()));
        // Still pending until polled, however fast the worker was.
        assert!(!session.start_calculation(strings()));
        wait(&mut session);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_calculating_text_is_localized() {
        let mut session = Session::new();
        type_in(&mut session, "1+1");
        session.start_calculation(Strings::for_lang(Lang::Ru));
        assert_eq!(session.display(), "Вычисление...");
        wait(&mut session);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('^'), Some(Key::Pow));
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::Clear.text(), None);
        assert_eq!(Key::Point.text(), Some('.'));
    }
}
