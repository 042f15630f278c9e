//! Change-tree formatting.
//!
//! Turns one `ResourceChange` into document blocks: a header section with the
//! resource's identity, then a details section that depends on the change
//! type. Property deltas and arbitrary before/after values are rendered
//! recursively into nested list items.
//!
//! Every function here is pure and total: missing fields fall back to fixed
//! placeholder strings instead of failing.

use super::types::{DocumentBlock, ListItem};
use crate::types::{ChangeKind, PropertyDelta, ResourceChange, value_text};
use serde_json::{Map, Value};

const UNNAMED_RESOURCE: &str = "Unnamed Resource";
const UNKNOWN_TYPE: &str = "Unknown Type";
const UNKNOWN_LOCATION: &str = "Unknown Location";
const UNKNOWN_API_VERSION: &str = "Unknown API Version";
const UNKNOWN_RESOURCE_ID: &str = "Unknown Resource ID";
const UNKNOWN_CHANGE_TYPE: &str = "Unknown Change Type";
const UNKNOWN_RESOURCE_TYPE: &str = "Unknown Resource Type";
const NOT_AVAILABLE: &str = "N/A";

/// Render one resource change into an ordered block sequence.
pub fn render_change(change: &ResourceChange) -> Vec<DocumentBlock> {
    let name = change.after_text("name").unwrap_or_else(|| UNNAMED_RESOURCE.to_string());
    let resource_type = change.after_text("type").unwrap_or_else(|| UNKNOWN_TYPE.to_string());
    let location = change.after_text("location").unwrap_or_else(|| UNKNOWN_LOCATION.to_string());
    let api_version = change.after_text("apiVersion").unwrap_or_else(|| UNKNOWN_API_VERSION.to_string());
    let resource_group = change.after_text("resourceGroup");

    let mut blocks = vec![
        DocumentBlock::heading(2, format!("Resource Name: {}", name)),
        DocumentBlock::code(
            "text",
            format!("Resource ID: {}", change.resource_id.as_deref().unwrap_or(UNKNOWN_RESOURCE_ID)),
        ),
        DocumentBlock::heading(
            3,
            format!("Change Type: {}", change.change_type.as_deref().unwrap_or(UNKNOWN_CHANGE_TYPE)),
        ),
    ];

    let mut overview =
        vec![ListItem::text(format!("**Name**: **{}**", name)), ListItem::text(format!("Type: {}", resource_type))];
    if let Some(group) = resource_group {
        overview.push(ListItem::text(format!("Resource Group: {}", group)));
    }
    overview.push(ListItem::text(format!("Location: {}", location)));
    overview.push(ListItem::text(format!("API Version: {}", api_version)));
    blocks.push(DocumentBlock::List(overview));

    match (change.kind(), change.delta.as_deref()) {
        (ChangeKind::Modify, Some(delta)) if !delta.is_empty() => {
            blocks.push(DocumentBlock::heading(3, "Change Details"));
            blocks.push(DocumentBlock::List(render_delta_list(delta, "")));
        }
        (ChangeKind::Create, _) => {
            blocks.push(DocumentBlock::heading(3, "New Resource Details"));
            let details = match change.after.as_ref() {
                Some(after) => render_value(after),
                None => vec![ListItem::text(NOT_AVAILABLE)],
            };
            blocks.push(DocumentBlock::List(details));
        }
        // Delete, NoChange, Ignore and anything unrecognized carry no body
        _ => blocks.push(DocumentBlock::heading(3, "Details")),
    }

    blocks
}

/// Render a level of property deltas.
///
/// Each delta contributes a `**Resource Type**: <path>` item followed by a
/// nested group with its change type, after/before values and children.
pub fn render_delta_list(deltas: &[PropertyDelta], parent_path: &str) -> Vec<ListItem> {
    let mut items = Vec::with_capacity(deltas.len() * 2);

    for delta in deltas {
        let full_path = qualify_path(parent_path, delta.path.as_deref().unwrap_or(""));

        let mut group = vec![ListItem::text(format!(
            "Change Type: {}",
            delta.property_change_type.as_deref().unwrap_or(UNKNOWN_CHANGE_TYPE)
        ))];
        push_side(&mut group, "After", delta.after.as_ref());
        push_side(&mut group, "Before", delta.before.as_ref());

        if let Some(children) = delta.children.as_deref()
            && !children.is_empty()
        {
            group.push(ListItem::text("**Child Resource(s)**:"));
            group.push(ListItem::Nested(render_delta_list(children, &full_path)));
        }

        let label = if full_path.is_empty() { UNKNOWN_RESOURCE_TYPE } else { full_path.as_str() };
        items.push(ListItem::text(format!("**Resource Type**: {}", label)));
        items.push(ListItem::Nested(group));
    }

    items
}

/// Join a delta path onto its parent: `parent[3]` for indices, `parent.key` otherwise.
pub fn qualify_path(parent: &str, path: &str) -> String {
    if parent.is_empty() {
        path.to_string()
    } else if path.is_empty() {
        parent.to_string()
    } else if is_index(path) {
        format!("{}[{}]", parent, path)
    } else {
        format!("{}.{}", parent, path)
    }
}

fn is_index(path: &str) -> bool {
    let digits = path.strip_prefix(['-', '+']).unwrap_or(path);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Emit `Label: value` inline when the value renders to a single colon-free
/// line, otherwise `Label:` followed by the nested rendering.
fn push_side(group: &mut Vec<ListItem>, label: &str, value: Option<&Value>) {
    let Some(value) = value else {
        group.push(ListItem::text(format!("{}: null", label)));
        return;
    };

    let rendered = render_value(value);
    let inline = match rendered.as_slice() {
        [ListItem::Text(line)] if !line.contains(':') => Some(format!("{}: {}", label, line)),
        _ => None,
    };

    match inline {
        Some(line) => group.push(ListItem::Text(line)),
        None => {
            group.push(ListItem::text(format!("{}:", label)));
            group.push(ListItem::Nested(rendered));
        }
    }
}

/// Render an arbitrary JSON value as list items.
pub fn render_value(value: &Value) -> Vec<ListItem> {
    match value {
        Value::Array(elements) => render_array(elements),
        Value::Object(map) => render_entries(map, false),
        scalar => vec![ListItem::text(display(scalar))],
    }
}

fn render_array(elements: &[Value]) -> Vec<ListItem> {
    let mut items = Vec::new();

    for (i, element) in elements.iter().enumerate() {
        let label = format!("Item {}", i + 1);
        match element {
            Value::Array(inner) if inner.len() == 1 => {
                items.push(ListItem::text(format!("{}: {}", label, display(&inner[0]))));
            }
            Value::Array(_) => push_labelled(&mut items, &label, render_value(element)),
            Value::Object(map) => push_labelled(&mut items, &label, render_entries(map, true)),
            scalar => items.push(ListItem::text(format!("{}: {}", label, display(scalar)))),
        }
    }

    items
}

/// Render object entries in key order.
///
/// Single-element arrays collapse to `key: value`; other arrays and nested
/// objects always recurse. Scalars are written `key: value` when
/// `inline_scalars` is set (objects inside arrays) and as `key:` plus a
/// nested one-line list otherwise.
fn render_entries(map: &Map<String, Value>, inline_scalars: bool) -> Vec<ListItem> {
    let mut items = Vec::new();

    for (key, value) in map {
        match value {
            Value::Array(inner) if inner.len() == 1 => {
                items.push(ListItem::text(format!("{}: {}", key, display(&inner[0]))));
            }
            Value::Array(_) | Value::Object(_) => push_labelled(&mut items, key, render_value(value)),
            scalar if inline_scalars => items.push(ListItem::text(format!("{}: {}", key, display(scalar)))),
            scalar => push_labelled(&mut items, key, render_value(scalar)),
        }
    }

    items
}

fn push_labelled(items: &mut Vec<ListItem>, label: &str, nested: Vec<ListItem>) {
    items.push(ListItem::text(format!("{}:", label)));
    items.push(ListItem::Nested(nested));
}

fn display(value: &Value) -> String {
    value_text(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
#[path = "formatter_test.rs"]
mod formatter_test;
