//! Common test utilities for helium-config integration tests
//!
//! Provides the reference wire JSON of the page and helpers for building
//! saved-settings dictionaries.

#![allow(dead_code)]

use serde_json::{json, Map, Value};

// =============================================================================
// Reference Page
// =============================================================================

/// The page exactly as the settings host consumes it.
///
/// Kept as a literal JSON value so the contract tests compare the crate's
/// serialization against the published wire shape rather than against itself.
pub fn reference_page() -> Value {
    json!([
        {
            "type": "heading",
            "defaultValue": "Helium Configuration"
        },
        {
            "type": "section",
            "items": [
                {
                    "type": "heading",
                    "defaultValue": "Time Display"
                },
                {
                    "type": "text",
                    "defaultValue": "Turning on the following setting will cause the hour to be shown on the innermost ring and the minute to be shown on the outermost ring."
                },
                {
                    "type": "toggle",
                    "messageKey": "MinuteOnOut",
                    "label": "Show Minute on Outermost ring",
                    "defaultValue": false
                }
            ]
        },
        {
            "type": "section",
            "items": [
                {
                    "type": "heading",
                    "defaultValue": "More Settings"
                },
                {
                    "type": "toggle",
                    "messageKey": "ShowBattery",
                    "label": "Show Battery Status",
                    "defaultValue": true
                }
            ]
        },
        {
            "type": "submit",
            "defaultValue": "Save Settings"
        }
    ])
}

// =============================================================================
// Saved-Settings Builders
// =============================================================================

/// Build a saved-settings dictionary from key/value pairs
pub fn saved(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// A dictionary in the shape Clay actually sends: toggles as 0/1 integers
pub fn clay_saved(minute_on_out: bool, show_battery: bool) -> Map<String, Value> {
    saved(&[
        ("MinuteOnOut", json!(i32::from(minute_on_out))),
        ("ShowBattery", json!(i32::from(show_battery))),
    ])
}
