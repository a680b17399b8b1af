//! Background evaluation.
//! Each calculation runs on its own detached thread and reports back over a
//! channel that the UI drains without blocking.

use crate::eval::{self, EvalError};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::debug;

/// The two error classes shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcErrorKind {
    DivisionByZero,
    Generic,
}

impl From<&EvalError> for CalcErrorKind {
    fn from(err: &EvalError) -> Self {
        match err {
            EvalError::DivisionByZero => CalcErrorKind::DivisionByZero,
            _ => CalcErrorKind::Generic,
        }
    }
}

/// Message sent from the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcMessage {
    Result { expression: String, value: String },
    Error(CalcErrorKind),
}

/// Start evaluating `expression` on a new thread.
///
/// The thread is never joined; exactly one message is sent before it exits.
pub fn spawn_calculation(expression: String) -> Receiver<CalcMessage> {
    let (tx, rx) = channel();
    thread::spawn(move || run_calculation(tx, expression));
    rx
}

fn run_calculation(tx: Sender<CalcMessage>, expression: String) {
    let message = match eval::evaluate(&expression) {
        Ok(value) => CalcMessage::Result {
            value: value.to_string(),
            expression,
        },
        Err(e) => {
            debug!("evaluation of {:?} failed: {}", expression, e);
            CalcMessage::Error(CalcErrorKind::from(&e))
        }
    };
    // The receiver may be gone if the window closed mid-calculation.
    let _ = tx.send(message);
}
