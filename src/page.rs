//! The Helium configuration page
//!
//! Literal content of the watchface's settings page, exposed as immutable
//! static data behind a pure accessor. The host renders these descriptors
//! top-to-bottom and persists each toggle under its message key; nothing
//! here ever changes at runtime.

use crate::error::Result;
use crate::schema::{self, Field, SectionItem};
use std::sync::LazyLock;

/// Message keys defined by the page
///
/// These are the identifiers the host persists toggle values under, and the
/// names the watch side sees as generated `MESSAGE_KEY_*` constants.
pub mod keys {
    /// Show the minute on the outermost ring and the hour on the innermost
    pub const MINUTE_ON_OUT: &str = "MinuteOnOut";
    /// Show the battery status indicator
    pub const SHOW_BATTERY: &str = "ShowBattery";
}

static FIELDS: LazyLock<Vec<Field>> = LazyLock::new(|| {
    vec![
        Field::heading("Helium Configuration"),
        Field::section(vec![
            SectionItem::heading("Time Display"),
            SectionItem::text(
                "Turning on the following setting will cause the hour to be shown on the \
                 innermost ring and the minute to be shown on the outermost ring.",
            ),
            SectionItem::toggle(
                keys::MINUTE_ON_OUT,
                "Show Minute on Outermost ring",
                false,
            ),
        ]),
        Field::section(vec![
            SectionItem::heading("More Settings"),
            SectionItem::toggle(keys::SHOW_BATTERY, "Show Battery Status", true),
        ]),
        Field::submit("Save Settings"),
    ]
});

/// The ordered field descriptors of the page
///
/// Pure constant read: every call returns the same slice with the same
/// content, from any thread.
#[must_use]
pub fn fields() -> &'static [Field] {
    &FIELDS
}

/// Default value for one of the page's toggles
///
/// Returns `None` for keys the page does not define.
#[must_use]
pub fn toggle_default(key: &str) -> Option<bool> {
    schema::toggles(fields())
        .iter()
        .find(|toggle| toggle.message_key == key)
        .map(|toggle| toggle.default_value)
}

/// Serialize the page to the host's compact JSON shape
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json() -> Result<String> {
    Ok(serde_json::to_string(fields())?)
}

/// Serialize the page to pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty() -> Result<String> {
    Ok(serde_json::to_string_pretty(fields())?)
}

// =============================================================================
// Tests
// =============================================================================
