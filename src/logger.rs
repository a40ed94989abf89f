//! Status lines on stderr, tagged by the step that wrote them.
//!
//! stdout is reserved for command results (`render` JSON, `docs` ids), so
//! every `log!` and `debug!` line goes to stderr.
//!
//! ```ignore
//! log!("check"; "checking {} in {}", links, sections);
//! debug!("scan"; "{} -> {}", path.display(), id);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set once from `--verbose` while the config is finalized.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// `[step] message` on stderr; `"warning"`, `"error"`, `"ok"` and `"check"`
/// get their own colors.
#[macro_export]
macro_rules! log {
    ($step:expr; $($arg:tt)*) => {{
        $crate::logger::log($step, &format!($($arg)*))
    }};
}

/// Like `log!`, but silent unless `--verbose` was passed. The message is
/// not formatted at all otherwise.
#[macro_export]
macro_rules! debug {
    ($step:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($step, &format!($($arg)*))
        }
    }};
}

#[inline]
pub fn log(step: &str, message: &str) {
    let prefix = colorize_prefix(step);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Bracketed step name; problems stand out, routine steps stay yellow.
#[inline]
fn colorize_prefix(step: &str) -> String {
    let prefix = format!("[{step}]");
    match step.to_ascii_lowercase().as_str() {
        "check" => prefix.bright_blue().bold().to_string(),
        "ok" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
