//! Structural validation for configuration pages
//!
//! A malformed descriptor is an authoring defect, not a runtime condition:
//! the checks here exist so a bad page fails in tests or CI, never in front
//! of the settings host. [`validate`] walks a page in document order and
//! returns the first defect it finds.

use crate::error::{Error, Result};
use crate::schema::field::{Field, SectionItem};
use log::info;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Pattern every message key must match.
///
/// The Pebble build generates a C `MESSAGE_KEY_<name>` constant per key, so
/// keys are restricted to identifier characters.
static MESSAGE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid message key pattern"));

// =============================================================================
// Validation
// =============================================================================

/// Validate the structural shape of a configuration page
///
/// Checks, in document order:
/// - the page has at least one field
/// - every section has at least one item
/// - every message key is a valid identifier
/// - every toggle has a non-empty label
/// - no message key appears twice (sections included)
///
/// # Errors
///
/// Returns the first authoring defect found; see [`Error::is_authoring`].
pub fn validate(fields: &[Field]) -> Result<()> {
    if fields.is_empty() {
        return Err(Error::EmptyPage);
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for (position, field) in fields.iter().enumerate() {
        match field {
            Field::Toggle {
                message_key, label, ..
            } => check_toggle(message_key, label, &mut seen)?,
            Field::Section { items } => {
                if items.is_empty() {
                    return Err(Error::EmptySection(position));
                }
                for item in items {
                    if let SectionItem::Toggle {
                        message_key, label, ..
                    } = item
                    {
                        check_toggle(message_key, label, &mut seen)?;
                    }
                }
            }
            _ => {}
        }
    }

    info!(
        "Configuration page validated: {} fields, {} message keys",
        fields.len(),
        seen.len()
    );
    Ok(())
}

fn check_toggle<'a>(message_key: &'a str, label: &str, seen: &mut HashSet<&'a str>) -> Result<()> {
    if !MESSAGE_KEY_RE.is_match(message_key) {
        return Err(Error::InvalidMessageKey {
            key: message_key.to_string(),
            reason: "must contain only identifier characters".into(),
        });
    }
    if label.trim().is_empty() {
        return Err(Error::EmptyToggleLabel(message_key.to_string()));
    }
    if !seen.insert(message_key) {
        return Err(Error::DuplicateMessageKey(message_key.to_string()));
    }
    Ok(())
}

// =============================================================================
// Schema Walkers
// =============================================================================

/// Flattened view of one toggle descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleRef<'a> {
    /// Identifier the host persists the value under
    pub message_key: &'a str,
    /// Control caption shown next to the toggle
    pub label: &'a str,
    /// Value used when nothing has been saved yet
    pub default_value: bool,
}

/// All toggles of a page in document order, section contents flattened in place
#[must_use]
pub fn toggles(fields: &[Field]) -> Vec<ToggleRef<'_>> {
    let mut found = Vec::new();

    for field in fields {
        match field {
            Field::Toggle {
                message_key,
                label,
                default_value,
            } => found.push(ToggleRef {
                message_key,
                label,
                default_value: *default_value,
            }),
            Field::Section { items } => {
                for item in items {
                    if let SectionItem::Toggle {
                        message_key,
                        label,
                        default_value,
                    } = item
                    {
                        found.push(ToggleRef {
                            message_key,
                            label,
                            default_value: *default_value,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    found
}

/// Every message key of a page in document order
#[must_use]
pub fn message_keys(fields: &[Field]) -> Vec<&str> {
    toggles(fields).iter().map(|t| t.message_key).collect()
}

// =============================================================================
// Tests
// =============================================================================
