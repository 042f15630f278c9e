//! Document block definitions for the rendering model.
//!
//! A report is an ordered sequence of `DocumentBlock`s. The blocks carry no
//! formatting of their own; `markdown` turns them into text and `export`
//! can dump them as JSON.

use serde::Serialize;

/// One renderable element of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentBlock {
    /// Heading, level 1 through 3
    Heading { level: u8, text: String },
    /// Unordered list
    List(Vec<ListItem>),
    /// Fenced code block
    Code { language: String, content: String },
    /// Plain text line
    Text(String),
}

impl DocumentBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        DocumentBlock::Heading { level, text: text.into() }
    }

    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        DocumentBlock::Code { language: language.into(), content: content.into() }
    }
}

/// Entry of an unordered list.
///
/// A `Nested` list belongs to the text item right before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListItem {
    Text(String),
    Nested(Vec<ListItem>),
}

impl ListItem {
    pub fn text(s: impl Into<String>) -> Self {
        ListItem::Text(s.into())
    }
}
