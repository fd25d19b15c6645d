//! Colored, width-aware status lines.
//!
//! ```ignore
//! log!("write"; "{}", path.display());
//! log!("warn"; "no card images under {}", dir.display());
//! ```
//!
//! `warn` and `error` lines go to stderr so that `--json` output on stdout
//! stays machine readable.

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{self, IsTerminal, Write},
    sync::OnceLock,
};

static TERMINAL_WIDTH: OnceLock<usize> = OnceLock::new();

/// Width used when the terminal size is unknown (pipes, CI).
const FALLBACK_WIDTH: usize = 120;

/// `log!("module"; fmt, args...)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

/// How a status line is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    /// Something was skipped on purpose.
    Quiet,
    /// A command finished.
    Success,
    /// Needs the user's attention; printed to stderr.
    Alert,
    Progress,
}

impl Tone {
    fn of(module: &str) -> Self {
        match module.to_ascii_lowercase().as_str() {
            "skip" => Self::Quiet,
            "done" => Self::Success,
            "warn" | "error" => Self::Alert,
            _ => Self::Progress,
        }
    }

    fn paint(self, prefix: String) -> ColoredString {
        match self {
            Self::Quiet => prefix.bright_blue().bold(),
            Self::Success => prefix.bright_green().bold(),
            Self::Alert => prefix.bright_red().bold(),
            Self::Progress => prefix.bright_yellow().bold(),
        }
    }
}

/// Print `[module] message`, cut to the terminal width.
pub fn log(module: &str, message: &str) {
    let tone = Tone::of(module);
    let prefix = tone.paint(format!("[{module}]"));
    let message = truncate_str(message, terminal_width().saturating_sub(prefix_len(module)));

    if tone == Tone::Alert {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
        return;
    }

    let mut stdout = io::stdout().lock();
    if stdout.is_terminal() {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map_or(FALLBACK_WIDTH, |(w, _)| w as usize))
}

/// Display width of `[module] `.
const fn prefix_len(module: &str) -> usize {
    module.len() + 3
}

/// Cut `s` to at most `max_len` bytes on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_by_module() {
        assert_eq!(Tone::of("skip"), Tone::Quiet);
        assert_eq!(Tone::of("DONE"), Tone::Success);
        assert_eq!(Tone::of("warn"), Tone::Alert);
        assert_eq!(Tone::of("import"), Tone::Progress);
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(prefix_len("write"), "[write] ".len());
        assert_eq!(prefix_len(""), 3);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 5), "hello");
        assert_eq!(truncate_str("hello", 0), "");
        // "é" is two bytes
        assert_eq!(truncate_str("café", 4), "caf");
        assert_eq!(truncate_str("café", 5), "café");
    }
}
