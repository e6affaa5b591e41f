//! Saved-settings resolution
//!
//! On save, the host emits a dictionary mapping each toggle's message key to
//! its value. This module merges that dictionary over the page defaults and
//! produces the typed configuration the watch consumes. Priority per key:
//! saved value, then page default. Keys the page does not define are ignored.
//!
//! Clay serializes toggles as `0`/`1` integers over AppMessage, so saved
//! values are accepted both as JSON booleans and as those integers.

use crate::error::{Error, Result};
use crate::page::{self, keys};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Effective watchface settings after merging saved values over page defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Show the minute on the outermost ring instead of the hour
    #[serde(rename = "MinuteOnOut")]
    pub minute_on_out: bool,

    /// Show the battery status indicator
    #[serde(rename = "ShowBattery")]
    pub show_battery: bool,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            minute_on_out: false,
            show_battery: true,
        }
    }
}

/// Resolve the host's saved dictionary into effective settings
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] if a recognized key holds a value that is
/// neither a boolean nor a `0`/`1` integer.
///
/// # Example
///
/// ```rust
/// use helium_config::{WatchSettings, resolve};
/// use serde_json::Map;
///
/// let settings = resolve(&Map::new())?;
/// assert_eq!(settings, WatchSettings::default());
/// # Ok::<(), helium_config::Error>(())
/// ```
pub fn resolve(saved: &Map<String, Value>) -> Result<WatchSettings> {
    Ok(WatchSettings {
        minute_on_out: toggle_value(saved, keys::MINUTE_ON_OUT)?,
        show_battery: toggle_value(saved, keys::SHOW_BATTERY)?,
    })
}

/// Effective boolean for a single message key
///
/// Returns the saved value when present and well-typed, the page default
/// otherwise.
///
/// # Errors
///
/// Returns [`Error::UnknownMessageKey`] for keys the page does not define,
/// and [`Error::TypeMismatch`] for malformed saved values.
pub fn toggle_value(saved: &Map<String, Value>, key: &str) -> Result<bool> {
    let Some(default) = page::toggle_default(key) else {
        return Err(Error::UnknownMessageKey(key.to_string()));
    };

    match saved.get(key) {
        Some(value) => as_toggle(key, value),
        None => {
            debug!("No saved value for {key}, using default {default}");
            Ok(default)
        }
    }
}

/// Coerce a saved JSON value to a toggle boolean
fn as_toggle(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Number(number) => match number.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(type_mismatch(key, value)),
        },
        _ => Err(type_mismatch(key, value)),
    }
}

fn type_mismatch(key: &str, value: &Value) -> Error {
    Error::TypeMismatch {
        key: key.to_string(),
        expected: "boolean or 0/1".into(),
        actual: json_type_name(value).into(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Tests
// =============================================================================
