//! Lossy-input diagnostics on stderr.
//!
//! Geometry is re-read constantly, so the same odd style value (an `em`
//! length where pixels were expected, a five-value `padding`) would be
//! reported on every access. Each distinct `(component, message)` pair is
//! printed once, in yellow, until [`clear_warnings`] forgets them.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// `(component, message)` pairs already printed.
static REPORTED: Mutex<Option<HashSet<(String, String)>>> = Mutex::new(None);

/// Report input that was only partly understood.
///
/// Returns whether this call printed; a repeat of an earlier pair stays
/// silent and returns `false`.
///
/// ```ignore
/// let _ = warn_once("CSS", "length '1.5em' read as 1.5px");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let first_time = REPORTED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert((component.to_string(), message.to_string()));

    if first_time {
        eprintln!("{}", format!("[Wombat {component}] ⚠ {message}").yellow());
    }
    first_time
}

/// Forget every reported pair, so a fresh document reports them again.
pub fn clear_warnings() {
    if let Some(reported) = REPORTED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_mut()
    {
        reported.clear();
    }
}
