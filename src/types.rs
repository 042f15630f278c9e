/// Core data structures for what-if results
///
/// This module defines the typed view over the JSON emitted by a what-if run:
/// the document root, one record per resource change, and the recursive
/// property deltas attached to modifications. Nested before/after values stay
/// as `serde_json::Value` (built with `preserve_order`, so object keys keep
/// the order they had in the input).
use crate::error::ReportError;
use log::debug;
use serde_json::{Map, Number, Value};

/// Root of a parsed what-if result
#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfDocument {
    /// Operation status reported by the what-if run ("Succeeded", "Failed", ...)
    pub status: Option<String>,
    /// Resource changes in input order
    pub changes: Vec<ResourceChange>,
}

impl WhatIfDocument {
    /// Build a document from parsed JSON.
    ///
    /// Accepts both the CLI shape (`{"changes": [...]}`) and the REST shape
    /// (`{"properties": {"changes": [...]}}`).
    pub fn from_value(value: &Value) -> Result<Self, ReportError> {
        let root = value.as_object().ok_or_else(|| {
            ReportError::MalformedInput(format!("expected a JSON object at the top level, found {}", type_name(value)))
        })?;

        let container = if root.contains_key("changes") {
            root
        } else {
            root.get("properties").and_then(Value::as_object).filter(|p| p.contains_key("changes")).unwrap_or(root)
        };

        let status = text_field(root, "status").or_else(|| text_field(container, "status"));

        let changes = match container.get("changes") {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::Object(obj) => Ok(ResourceChange::from_object(obj)),
                    other => Err(ReportError::MalformedInput(format!(
                        "changes[{}] must be an object, found {}",
                        i,
                        type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ReportError::MalformedInput(format!(
                    "`changes` must be an array, found {}",
                    type_name(other)
                )));
            }
            None => return Err(ReportError::MalformedInput("missing `changes` array".to_string())),
        };

        if let Some(ref s) = status
            && s != "Succeeded"
        {
            debug!("what-if status is '{}', rendering {} change(s) anyway", s, changes.len());
        }

        debug!("Parsed what-if document with {} change(s)", changes.len());

        Ok(WhatIfDocument { status, changes })
    }
}

/// Classification of a change's `changeType` (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Create,
    Modify,
    Delete,
    NoChange,
    Ignore,
    Deploy,
    Unsupported,
    /// Any other string, kept verbatim
    Other(String),
    /// `changeType` absent or null
    Missing,
}

impl ChangeKind {
    pub fn classify(change_type: Option<&str>) -> Self {
        match change_type {
            Some("Create") => ChangeKind::Create,
            Some("Modify") => ChangeKind::Modify,
            Some("Delete") => ChangeKind::Delete,
            Some("NoChange") => ChangeKind::NoChange,
            Some("Ignore") => ChangeKind::Ignore,
            Some("Deploy") => ChangeKind::Deploy,
            Some("Unsupported") => ChangeKind::Unsupported,
            Some(other) => ChangeKind::Other(other.to_string()),
            None => ChangeKind::Missing,
        }
    }
}

/// One planned change to one resource
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceChange {
    pub resource_id: Option<String>,
    pub change_type: Option<String>,
    pub before: Option<Value>,
    pub after: Option<Value>,
    /// Property deltas, only meaningful for `Modify`
    pub delta: Option<Vec<PropertyDelta>>,
}

impl ResourceChange {
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        ResourceChange {
            resource_id: text_field(obj, "resourceId"),
            change_type: text_field(obj, "changeType"),
            before: value_field(obj, "before"),
            after: value_field(obj, "after"),
            delta: delta_list(obj, "delta"),
        }
    }

    pub fn kind(&self) -> ChangeKind {
        ChangeKind::classify(self.change_type.as_deref())
    }

    /// Read a top-level field of `after` as display text.
    ///
    /// Missing `after`, a non-object `after`, a missing key and a null value
    /// all yield `None`.
    pub fn after_text(&self, key: &str) -> Option<String> {
        self.after.as_ref().and_then(Value::as_object).and_then(|obj| text_field(obj, key))
    }
}

/// One property-level change inside a `Modify`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyDelta {
    /// Property name or array index
    pub path: Option<String>,
    pub property_change_type: Option<String>,
    pub before: Option<Value>,
    pub after: Option<Value>,
    pub children: Option<Vec<PropertyDelta>>,
}

impl PropertyDelta {
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        PropertyDelta {
            path: text_field(obj, "path"),
            property_change_type: text_field(obj, "propertyChangeType"),
            before: value_field(obj, "before"),
            after: value_field(obj, "after"),
            children: delta_list(obj, "children"),
        }
    }
}

/// Natural text form of a JSON value; `None` for null.
///
/// Strings are returned verbatim, numbers and booleans in their default
/// textual form, arrays and objects as compact JSON.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Integral floats print without a fractional part (`1.0` -> `1`, `1e3` -> `1000`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 { "0".to_string() } else { format!("{}", f) }
        }
        _ => n.to_string(),
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(value_text)
}

fn value_field(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).filter(|v| !v.is_null()).cloned()
}

fn delta_list(obj: &Map<String, Value>, key: &str) -> Option<Vec<PropertyDelta>> {
    match obj.get(key)? {
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| match item {
                    Value::Object(d) => Some(PropertyDelta::from_object(d)),
                    other => {
                        debug!("Skipping {}[{}]: expected object, found {}", key, i, type_name(other));
                        None
                    }
                })
                .collect(),
        ),
        Value::Null => None,
        other => {
            debug!("Ignoring `{}`: expected array, found {}", key, type_name(other));
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
