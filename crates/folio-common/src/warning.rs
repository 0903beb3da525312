//! Style pipeline warnings with colored terminal output.
//!
//! Repeated messages are printed only once per process. Used by the unit converter, the shorthand expander and the cascade to
//! report declarations that were dropped or degraded.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Every `[component] message` key printed so far.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn format_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Print a warning to stderr, even if it was printed before.
///
/// ```ignore
/// warn("cascade", "dropped backgroundColor: notacolor");
/// ```
pub fn warn(component: &str, message: &str) {
    let line = format!("[folio {component}] ⚠ {message}");
    eprintln!("{}", line.yellow());
}

/// Warn about a dropped or degraded style, once per distinct message.
///
/// ```ignore
/// warn_once("units", "unsupported unit 'vmin' in 10vmin");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(format_key(component, message));

    if first_time {
        warn(component, message);
    }
}

/// Whether `warn_once` has already reported this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&format_key(component, message)))
}

/// Forget every recorded warning so a new document reports afresh.
pub fn clear_warnings() {
    if let Some(seen) = WARNED.lock().unwrap_or_else(PoisonError::into_inner).as_mut() {
        seen.clear();
    }
}
