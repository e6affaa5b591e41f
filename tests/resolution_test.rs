//! Saved-Settings Resolution Integration Tests
//!
//! Tests for merging the host's persisted dictionary over page defaults:
//! - Fresh-install defaults
//! - Boolean and Clay-style 0/1 saved values
//! - Partial saves, unrecognized keys, malformed values
//! - Driving resolution from the emitted page JSON

mod common;

use common::{clay_saved, saved};
use helium_config::{page, resolve, toggle_value, Error, WatchSettings};
use serde_json::{json, Map, Value};

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_fresh_install_resolves_to_defaults() {
    let settings = resolve(&Map::new()).unwrap();

    assert!(!settings.minute_on_out);
    assert!(settings.show_battery);
    assert_eq!(settings, WatchSettings::default());
}

#[test]
fn test_defaults_follow_page_descriptors() {
    let settings = WatchSettings::default();

    assert_eq!(
        page::toggle_default(page::keys::MINUTE_ON_OUT),
        Some(settings.minute_on_out)
    );
    assert_eq!(
        page::toggle_default(page::keys::SHOW_BATTERY),
        Some(settings.show_battery)
    );
}

// =============================================================================
// Saved Values
// =============================================================================

#[test]
fn test_saved_booleans_override_defaults() {
    let settings = resolve(&saved(&[
        ("MinuteOnOut", json!(true)),
        ("ShowBattery", json!(false)),
    ]))
    .unwrap();

    assert!(settings.minute_on_out);
    assert!(!settings.show_battery);
}

#[test]
fn test_clay_integer_dictionary_resolves() {
    let settings = resolve(&clay_saved(true, false)).unwrap();

    assert!(settings.minute_on_out);
    assert!(!settings.show_battery);
}

#[test]
fn test_partial_save_keeps_remaining_defaults() {
    let settings = resolve(&saved(&[("MinuteOnOut", json!(true))])).unwrap();

    assert!(settings.minute_on_out);
    assert!(settings.show_battery);
}

#[test]
fn test_unrecognized_saved_keys_are_ignored() {
    let settings = resolve(&saved(&[
        ("VibeOnDisconnect", json!(true)),
        ("ShowBattery", json!(false)),
    ]))
    .unwrap();

    assert!(!settings.show_battery);
    assert!(!settings.minute_on_out);
}

#[test]
fn test_malformed_saved_value_is_reported() {
    let result = resolve(&saved(&[("ShowBattery", json!("yes"))]));

    assert!(matches!(
        result,
        Err(Error::TypeMismatch { key, .. }) if key == "ShowBattery"
    ));
}

#[test]
fn test_single_key_lookup_follows_page() {
    let dict = saved(&[("ShowBattery", json!(0))]);

    assert!(!toggle_value(&dict, "ShowBattery").unwrap());
    assert!(!toggle_value(&dict, "MinuteOnOut").unwrap());
    assert!(matches!(
        toggle_value(&dict, "Brightness"),
        Err(Error::UnknownMessageKey(key)) if key == "Brightness"
    ));
}

// =============================================================================
// Host Round Trip
// =============================================================================

/// What the host does with the page: walk the emitted JSON, collect the
/// toggles, persist flipped values and hand the dictionary back.
#[test]
fn test_emitted_page_drives_resolution() {
    let emitted: Value = serde_json::from_str(&page::to_json().unwrap()).unwrap();

    let mut dict = Map::new();
    collect_flipped_toggles(&emitted, &mut dict);
    assert_eq!(dict.len(), 2);

    let settings = resolve(&dict).unwrap();
    assert!(settings.minute_on_out);
    assert!(!settings.show_battery);
}

fn collect_flipped_toggles(node: &Value, dict: &mut Map<String, Value>) {
    match node {
        Value::Array(items) => {
            for item in items {
                collect_flipped_toggles(item, dict);
            }
        }
        Value::Object(object) => {
            if object.get("type") == Some(&json!("toggle")) {
                let key = object["messageKey"].as_str().unwrap().to_string();
                let default = object["defaultValue"].as_bool().unwrap();
                dict.insert(key, json!(!default));
            }
            if let Some(items) = object.get("items") {
                collect_flipped_toggles(items, dict);
            }
        }
        _ => {}
    }
}
