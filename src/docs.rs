//! Documentation generator for configuration pages
//!
//! Generates a markdown reference from a page's field descriptors, walking
//! them strictly in document order so the output matches what the host
//! renders.

use crate::schema::{Field, SectionItem};
use std::fmt::Write;

/// Configuration for docs generation
#[derive(Debug, Clone, Default)]
pub struct DocsConfig {
    /// Title for the documentation
    pub title: Option<String>,
    /// Description/introduction text
    pub description: Option<String>,
    /// Whether to show message keys in toggle tables
    pub show_keys: bool,
}

impl DocsConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            show_keys: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    #[must_use]
    pub fn hide_keys(mut self) -> Self {
        self.show_keys = false;
        self
    }
}

/// Generate markdown documentation for a configuration page
#[must_use]
pub fn generate_page_docs(fields: &[Field], config: DocsConfig) -> String {
    let mut output = String::new();

    // Title
    let title = config
        .title
        .unwrap_or_else(|| "Settings Reference".to_string());
    writeln!(output, "# {title}\n").unwrap();

    // Description
    if let Some(desc) = config.description {
        writeln!(output, "{desc}\n").unwrap();
    }

    let mut table_open = false;

    for field in fields {
        match field {
            Field::Heading { default_value } => {
                close_table(&mut output, &mut table_open);
                writeln!(output, "## {default_value}\n").unwrap();
            }
            Field::Text { default_value } => {
                close_table(&mut output, &mut table_open);
                writeln!(output, "{default_value}\n").unwrap();
            }
            Field::Toggle {
                message_key,
                label,
                default_value,
            } => {
                toggle_row(
                    &mut output,
                    &mut table_open,
                    config.show_keys,
                    message_key,
                    label,
                    *default_value,
                );
            }
            Field::Section { items } => {
                close_table(&mut output, &mut table_open);
                for item in items {
                    match item {
                        SectionItem::Heading { default_value } => {
                            close_table(&mut output, &mut table_open);
                            writeln!(output, "### {default_value}\n").unwrap();
                        }
                        SectionItem::Text { default_value } => {
                            close_table(&mut output, &mut table_open);
                            writeln!(output, "{default_value}\n").unwrap();
                        }
                        SectionItem::Toggle {
                            message_key,
                            label,
                            default_value,
                        } => {
                            toggle_row(
                                &mut output,
                                &mut table_open,
                                config.show_keys,
                                message_key,
                                label,
                                *default_value,
                            );
                        }
                    }
                }
                close_table(&mut output, &mut table_open);
            }
            Field::Submit { default_value } => {
                close_table(&mut output, &mut table_open);
                writeln!(output, "*Settings are saved with the \"{default_value}\" button.*\n")
                    .unwrap();
            }
        }
    }

    close_table(&mut output, &mut table_open);
    output
}

fn toggle_row(
    out: &mut String,
    table_open: &mut bool,
    show_keys: bool,
    message_key: &str,
    label: &str,
    default_value: bool,
) {
    if !*table_open {
        if show_keys {
            out.push_str("| Setting | Message Key | Default |\n");
            out.push_str("|---------|-------------|--------|\n");
        } else {
            out.push_str("| Setting | Default |\n");
            out.push_str("|---------|--------|\n");
        }
        *table_open = true;
    }

    if show_keys {
        writeln!(
            out,
            "| {label} | `{message_key}` | {} |",
            format_default(default_value)
        )
        .unwrap();
    } else {
        writeln!(out, "| {label} | {} |", format_default(default_value)).unwrap();
    }
}

fn close_table(out: &mut String, table_open: &mut bool) {
    if *table_open {
        out.push('\n');
        *table_open = false;
    }
}

fn format_default(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

// =============================================================================
// Tests
// =============================================================================
