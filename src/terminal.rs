#![forbid(unsafe_code)]

//! Terminal color capability detection

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Standard output streams the launcher writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// Exit code used after the help text has been written to this stream
    ///
    /// Help requested by the user goes to stdout and exits cleanly. Help shown
    /// because of bad input goes to stderr and exits with failure.
    pub fn exit_code(self) -> i32 {
        match self {
            Stream::Stdout => 0,
            Stream::Stderr => 1,
        }
    }

    /// Whether this stream is attached to a terminal
    pub fn is_terminal(self) -> bool {
        match self {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Decides whether output should be colored
///
/// `NO_COLOR` (non-empty) always disables color and `CLICOLOR_FORCE` (other
/// than `0`) forces it on. Otherwise a `dumb` terminal gets no color and
/// anything else gets color only when attached to a terminal.
pub fn supports_color<F>(is_terminal: bool, env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if env("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }
    if env("TERM").as_deref() == Some("dumb") {
        return false;
    }
    is_terminal
}

/// Color choice for `stream` in the current process
pub fn color_choice(stream: Stream) -> ColorChoice {
    if supports_color(stream.is_terminal(), |key| std::env::var(key).ok()) {
        // Auto would re-run termcolor's TERM checks and drop CLICOLOR_FORCE
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}
