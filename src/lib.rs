//! # helium-config - Helium Watchface Configuration
//!
//! The configuration page of the Helium Pebble watchface as a typed Rust
//! library: the field descriptors the settings host renders, structural
//! validation for the page, and resolution of saved values into the
//! settings the watch consumes.
//!
//! ## Features
//!
//! - **Field Descriptors**: tagged `heading` / `text` / `toggle` / `section` /
//!   `submit` records with the exact JSON wire shape the host consumes
//! - **The Page**: the full Helium configuration page as a lazily-built
//!   static with stable accessors
//! - **Structural Validation**: unique message keys, identifier-safe key
//!   names, no empty or nested sections
//! - **Settings Resolution**: merge the host's saved dictionary over page
//!   defaults into typed `WatchSettings`
//! - **Docs Generation**: render a markdown reference of the page
//!
//! ## Quick Start
//!
//! ```rust
//! use helium_config::{page, resolve, validate, WatchSettings};
//! use serde_json::{json, Map};
//!
//! // The descriptor list the host renders, in authoring order
//! let fields = page::fields();
//! validate(fields)?;
//!
//! // Fresh install: nothing saved yet, defaults apply
//! assert_eq!(resolve(&Map::new())?, WatchSettings::default());
//!
//! // The user flips a toggle and saves
//! let mut saved = Map::new();
//! saved.insert(page::keys::MINUTE_ON_OUT.to_string(), json!(true));
//! let settings = resolve(&saved)?;
//! assert!(settings.minute_on_out);
//! assert!(settings.show_battery);
//! # Ok::<(), helium_config::Error>(())
//! ```
//!
//! ## Wire Shape
//!
//! [`page::to_json`] serializes the page exactly as the host expects it:
//!
//! ```json
//! [
//!   { "type": "heading", "defaultValue": "Helium Configuration" },
//!   { "type": "section", "items": [
//!     { "type": "toggle", "messageKey": "MinuteOnOut",
//!       "label": "Show Minute on Outermost ring", "defaultValue": false }
//!   ] },
//!   { "type": "submit", "defaultValue": "Save Settings" }
//! ]
//! ```
//!
//! Message keys double as the `MESSAGE_KEY_*` identifiers on the watch side,
//! so validation holds them to C identifier rules.

// Core modules
mod docs;
mod error;
mod resolve;

// Grouped modules
pub mod page;
pub mod schema;

// Re-exports from core
pub use docs::{generate_page_docs, DocsConfig};
pub use error::{Error, Result};
pub use resolve::{resolve, toggle_value, WatchSettings};

// Re-exports from schema
pub use schema::{message_keys, toggles, validate, Field, FieldKind, SectionItem, ToggleRef};
