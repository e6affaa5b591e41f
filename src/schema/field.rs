//! Field descriptor model for Clay-style configuration pages
//!
//! # Overview
//!
//! A configuration page is an ordered sequence of **field descriptors**:
//! tagged records the settings host renders top-to-bottom, one UI control per
//! descriptor. The model mirrors the Clay wire shape exactly:
//!
//! ```json
//! { "type": "heading", "defaultValue": "Helium Configuration" }
//! { "type": "toggle", "messageKey": "ShowBattery",
//!   "label": "Show Battery Status", "defaultValue": true }
//! { "type": "section", "items": [ ... ] }
//! ```
//!
//! # Section Nesting
//!
//! Sections group other descriptors but never other sections. That rule is
//! encoded in the types: [`Field::Section`] holds [`SectionItem`]s, and
//! `SectionItem` has no section variant, so a nested section cannot be
//! constructed and fails to deserialize from hostile input.
//!
//! # Example
//!
//! ```rust
//! use helium_config::{Field, SectionItem};
//!
//! let page = vec![
//!     Field::heading("Helium Configuration"),
//!     Field::section(vec![
//!         SectionItem::heading("Time Display"),
//!         SectionItem::toggle("MinuteOnOut", "Show Minute on Outermost ring", false),
//!     ]),
//!     Field::submit("Save Settings"),
//! ];
//!
//! let json = serde_json::to_string(&page)?;
//! assert!(json.contains(r#""messageKey":"MinuteOnOut""#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Field Kind
// =============================================================================

/// Kind of field descriptor, named by its wire tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Large heading text
    Heading,
    /// Explanatory body text
    Text,
    /// Boolean toggle persisted under a message key
    Toggle,
    /// Group of heading/text/toggle items
    Section,
    /// The save button
    Submit,
}

impl FieldKind {
    /// The JSON `type` tag for this kind
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Heading => "heading",
            FieldKind::Text => "text",
            FieldKind::Toggle => "toggle",
            FieldKind::Section => "section",
            FieldKind::Submit => "submit",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Field Descriptor
// =============================================================================

/// One entry in a configuration page
///
/// Field order inside each variant matches the wire shape, so serialized
/// output lists `type`, then `messageKey`/`label`/`defaultValue`/`items` in
/// the order the host documentation shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Field {
    /// Heading text rendered above the following descriptors
    Heading {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },

    /// Explanatory text block
    Text {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },

    /// Boolean toggle; the host persists its value under `message_key`
    Toggle {
        #[serde(rename = "messageKey")]
        message_key: String,
        label: String,
        #[serde(rename = "defaultValue")]
        default_value: bool,
    },

    /// Visual group of items, rendered top-to-bottom
    Section { items: Vec<SectionItem> },

    /// Save button closing the page
    Submit {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },
}

impl Field {
    /// Create a heading descriptor
    pub fn heading(text: impl Into<String>) -> Self {
        Field::Heading {
            default_value: text.into(),
        }
    }

    /// Create an explanatory text descriptor
    pub fn text(text: impl Into<String>) -> Self {
        Field::Text {
            default_value: text.into(),
        }
    }

    /// Create a toggle descriptor
    ///
    /// `message_key` is the identifier the host persists the boolean under;
    /// it must be unique across the whole page.
    pub fn toggle(
        message_key: impl Into<String>,
        label: impl Into<String>,
        default_value: bool,
    ) -> Self {
        Field::Toggle {
            message_key: message_key.into(),
            label: label.into(),
            default_value,
        }
    }

    /// Create a section grouping the given items
    pub fn section(items: Vec<SectionItem>) -> Self {
        Field::Section { items }
    }

    /// Create the submit button descriptor with the given label
    pub fn submit(label: impl Into<String>) -> Self {
        Field::Submit {
            default_value: label.into(),
        }
    }

    /// Kind of this descriptor
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Heading { .. } => FieldKind::Heading,
            Field::Text { .. } => FieldKind::Text,
            Field::Toggle { .. } => FieldKind::Toggle,
            Field::Section { .. } => FieldKind::Section,
            Field::Submit { .. } => FieldKind::Submit,
        }
    }

    /// Message key of this descriptor, if it is a toggle
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        match self {
            Field::Toggle { message_key, .. } => Some(message_key),
            _ => None,
        }
    }

    /// Items of this descriptor, if it is a section
    #[must_use]
    pub fn items(&self) -> Option<&[SectionItem]> {
        match self {
            Field::Section { items } => Some(items),
            _ => None,
        }
    }
}

// =============================================================================
// Section Item
// =============================================================================

/// Descriptor allowed inside a section: heading, text, or toggle
///
/// Shares the wire shape of the matching [`Field`] variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SectionItem {
    /// Heading text at the top of the section
    Heading {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },

    /// Explanatory text block
    Text {
        #[serde(rename = "defaultValue")]
        default_value: String,
    },

    /// Boolean toggle persisted under its message key
    Toggle {
        #[serde(rename = "messageKey")]
        message_key: String,
        label: String,
        #[serde(rename = "defaultValue")]
        default_value: bool,
    },
}

impl SectionItem {
    /// Create a heading item
    pub fn heading(text: impl Into<String>) -> Self {
        SectionItem::Heading {
            default_value: text.into(),
        }
    }

    /// Create an explanatory text item
    pub fn text(text: impl Into<String>) -> Self {
        SectionItem::Text {
            default_value: text.into(),
        }
    }

    /// Create a toggle item
    pub fn toggle(
        message_key: impl Into<String>,
        label: impl Into<String>,
        default_value: bool,
    ) -> Self {
        SectionItem::Toggle {
            message_key: message_key.into(),
            label: label.into(),
            default_value,
        }
    }

    /// Kind of this item
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            SectionItem::Heading { .. } => FieldKind::Heading,
            SectionItem::Text { .. } => FieldKind::Text,
            SectionItem::Toggle { .. } => FieldKind::Toggle,
        }
    }

    /// Message key of this item, if it is a toggle
    #[must_use]
    pub fn message_key(&self) -> Option<&str> {
        match self {
            SectionItem::Toggle { message_key, .. } => Some(message_key),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
