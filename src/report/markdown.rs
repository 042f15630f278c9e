//! Markdown serialization of document blocks.
//!
//! Blocks are separated by a blank line. Lists use `- ` bullets indented two
//! spaces per nesting level; code blocks are fenced with their language tag.

use super::types::{DocumentBlock, ListItem};

/// Serialize blocks to Markdown, preserving their order.
///
/// Blocks that produce no text (empty lists) are skipped. Non-empty output
/// always ends with a single newline.
pub fn to_markdown(blocks: &[DocumentBlock]) -> String {
    let rendered: Vec<String> = blocks.iter().map(render_block).filter(|s| !s.is_empty()).collect();

    if rendered.is_empty() {
        return String::new();
    }

    let mut out = rendered.join("\n\n");
    out.push('\n');
    out
}

fn render_block(block: &DocumentBlock) -> String {
    match block {
        DocumentBlock::Heading { level, text } => {
            format!("{} {}", "#".repeat((*level).clamp(1, 6) as usize), text)
        }
        DocumentBlock::Code { language, content } => {
            format!("```{}\n{}\n```", language, content.trim_end_matches('\n'))
        }
        DocumentBlock::Text(text) => text.clone(),
        DocumentBlock::List(items) => {
            let mut out = String::new();
            write_items(&mut out, items, 0);
            out.truncate(out.trim_end_matches('\n').len());
            out
        }
    }
}

fn write_items(out: &mut String, items: &[ListItem], depth: usize) {
    let indent = "  ".repeat(depth);

    for item in items {
        match item {
            ListItem::Text(text) => {
                // Continuation lines stay inside the bullet
                let continuation = format!("\n{}  ", indent);
                out.push_str(&indent);
                out.push_str("- ");
                out.push_str(&text.replace('\n', &continuation));
                out.push('\n');
            }
            ListItem::Nested(children) => write_items(out, children, depth + 1),
        }
    }
}
