//! Report generation module - what-if changes to document blocks to Markdown.
//!
//! This module handles:
//! - Formatting each resource change (and its nested deltas) into blocks
//! - Assembling the blocks of a whole document under a title
//! - Serializing blocks to Markdown
//! - Summary counts per change type
//! - Export to Markdown and JSON files
//!
//! Console rendering of the summary is handled by the console_format module.
//!
//! # Module Organization
//!
//! - `types` - Document model (DocumentBlock, ListItem)
//! - `formatter` - Change-tree formatter for a single resource change
//! - `assembler` - Title plus all changes, in input order
//! - `markdown` - Block serialization
//! - `stats` - Change counts
//! - `export` - File and stdout output

mod assembler;
mod export;
mod formatter;
mod markdown;
mod stats;
mod types;

// Re-export assembly and serialization
pub use assembler::{DEFAULT_TITLE, assemble_blocks};
pub use markdown::to_markdown;

// Re-export stats functions
pub use stats::{ChangeSummary, summarize_changes};

// Re-export export functions
pub use export::{export_json_blocks, export_markdown_report, print_markdown_report};
