//! Report assembly: title plus one formatted section per resource change.

use super::formatter::render_change;
use super::types::DocumentBlock;
use crate::types::{ChangeKind, WhatIfDocument};
use log::debug;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Bicep What-If Report";

/// Build the full block sequence for a document, in input order.
pub fn assemble_blocks(doc: &WhatIfDocument, title: &str) -> Vec<DocumentBlock> {
    let mut blocks = vec![DocumentBlock::heading(1, title)];

    for (i, change) in doc.changes.iter().enumerate() {
        let resource_id = change.resource_id.as_deref().unwrap_or("<no resource id>");
        match change.kind() {
            ChangeKind::Other(change_type) => debug!(
                "Rendering change {}/{}: {} (unrecognized change type '{}')",
                i + 1,
                doc.changes.len(),
                resource_id,
                change_type
            ),
            kind => debug!("Rendering change {}/{}: {} ({:?})", i + 1, doc.changes.len(), resource_id, kind),
        }
        blocks.extend(render_change(change));
    }

    blocks
}
