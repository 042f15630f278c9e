/// User interface and status output utilities
///
/// This module handles:
/// - Thread-safe console output
/// - Colored terminal text
/// - Status message formatting
///
/// Everything here writes to stderr; stdout is reserved for the report itself.

use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
/// Prevents interleaved output from multiple threads
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print the "whatif: " prefix for status messages
fn print_status_header() {
    eprint!("whatif: ");
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print a status message with "whatif: " prefix (thread-safe)
pub fn status(s: &str) {
    status_lock(|| {
        print_status_header();
        eprintln!("{}", s);
    });
}

/// Print a warning message with colored "warning" prefix
pub fn print_warning(msg: &str) {
    status_lock(|| {
        print_color("warning", term::color::BRIGHT_YELLOW);
        eprintln!(": {}", msg);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    status_lock(|| {
        eprintln!();
        print_color("error", term::color::BRIGHT_RED);
        eprintln!(": {}", msg);
        eprintln!();
    });
}
