//! Terminal status output for the imgfuse CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs, written to
//! stderr. stdout stays reserved for machine-readable output such as
//! `inspect --json`.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for the right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Print a pipeline progress line with a green bold verb.
    /// e.g. "    Decoding photo-1.png (1/3)"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    /// Print a completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) {
        let mut err = io::stderr().lock();
        let _ = if self.color {
            writeln!(
                err,
                "{}{}{:>width$}{} {}",
                color,
                BOLD,
                verb,
                RESET,
                message,
                width = VERB_WIDTH
            )
        } else {
            writeln!(err, "{:>width$} {}", verb, message, width = VERB_WIDTH)
        };
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}
