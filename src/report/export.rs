//! Report export functions for Markdown and JSON formats.
//!
//! This module handles writing a rendered report to disk or stdout.

use super::types::DocumentBlock;
use crate::error::ReportError;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write rendered Markdown to a file, creating parent directories as needed.
pub fn export_markdown_report(markdown: &str, output_path: &Path) -> Result<(), ReportError> {
    debug!("Writing Markdown report ({} bytes) to {:?}", markdown.len(), output_path);

    ensure_parent_dir(output_path)?;
    std::fs::write(output_path, markdown).map_err(|e| ReportError::io(output_path, e))
}

/// Write rendered Markdown to stdout.
pub fn print_markdown_report(markdown: &str) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(markdown.as_bytes()).and_then(|_| handle.flush()).map_err(|e| ReportError::io("<stdout>", e))
}

/// Export the block tree as pretty-printed JSON.
///
/// Intended for inspecting how a report was structured; nothing writes this
/// unless it is asked for.
pub fn export_json_blocks(blocks: &[DocumentBlock], output_path: &Path) -> Result<(), ReportError> {
    debug!("Writing {} document blocks as JSON to {:?}", blocks.len(), output_path);

    ensure_parent_dir(output_path)?;
    let file = File::create(output_path).map_err(|e| ReportError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, blocks)?;
    writer.write_all(b"\n").and_then(|_| writer.flush()).map_err(|e| ReportError::io(output_path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), ReportError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            std::fs::create_dir_all(dir).map_err(|e| ReportError::io(dir, e))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::ListItem;
    use tempfile::TempDir;

    #[test]
    fn test_export_markdown_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports").join("whatif.md");

        export_markdown_report("# Bicep What-If Report\n", &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Bicep What-If Report\n");
    }

    #[test]
    fn test_export_json_blocks_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blocks.json");
        let blocks = vec![
            DocumentBlock::heading(1, "Bicep What-If Report"),
            DocumentBlock::code("text", "Resource ID: /a"),
            DocumentBlock::List(vec![ListItem::text("x"), ListItem::Nested(vec![ListItem::text("y")])]),
            DocumentBlock::Text("plain".to_string()),
        ];

        export_json_blocks(&blocks, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "heading": { "level": 1, "text": "Bicep What-If Report" } },
                { "code": { "language": "text", "content": "Resource ID: /a" } },
                { "list": [ { "text": "x" }, { "nested": [ { "text": "y" } ] } ] },
                { "text": "plain" }
            ])
        );
    }

    #[test]
    fn test_export_into_file_path_fails_with_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = export_markdown_report("# T\n", &blocker.join("report.md")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
