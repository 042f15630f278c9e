//! Summary statistics for a what-if document.
//!
//! Counts changes per change type for console output. The Markdown report
//! itself never includes these numbers.

use crate::types::{ChangeKind, WhatIfDocument};

/// Change counts by type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeSummary {
    pub create: usize,
    pub modify: usize,
    pub delete: usize,
    pub no_change: usize,
    pub ignore: usize,
    /// Deploy, Unsupported, unrecognized and missing change types
    pub other: usize,
    pub total: usize,
}

impl ChangeSummary {
    /// Label/count pairs in display order.
    pub fn rows(&self) -> [(&'static str, usize); 6] {
        [
            ("Create", self.create),
            ("Modify", self.modify),
            ("Delete", self.delete),
            ("NoChange", self.no_change),
            ("Ignore", self.ignore),
            ("Other", self.other),
        ]
    }
}

/// Calculate summary statistics for a document.
pub fn summarize_changes(doc: &WhatIfDocument) -> ChangeSummary {
    let mut summary = ChangeSummary::default();

    for change in &doc.changes {
        match change.kind() {
            ChangeKind::Create => summary.create += 1,
            ChangeKind::Modify => summary.modify += 1,
            ChangeKind::Delete => summary.delete += 1,
            ChangeKind::NoChange => summary.no_change += 1,
            ChangeKind::Ignore => summary.ignore += 1,
            ChangeKind::Deploy | ChangeKind::Unsupported | ChangeKind::Other(_) | ChangeKind::Missing => {
                summary.other += 1
            }
        }
    }

    summary.total = doc.changes.len();
    summary
}
