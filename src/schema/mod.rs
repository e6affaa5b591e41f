//! Core schema types and structural validation
//!
//! This module contains the foundational types for configuration pages:
//! - `Field` - One descriptor in a page (heading, text, toggle, section, submit)
//! - `SectionItem` - Descriptor allowed inside a section
//! - `validate` - Structural-shape checks for authored pages

mod field;
mod validate;

pub use field::{Field, FieldKind, SectionItem};
pub use validate::{ToggleRef, message_keys, toggles, validate};
