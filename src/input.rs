/// What-if input loading
///
/// This module handles:
/// - Reading raw what-if JSON from a file or stdin
/// - Parsing it into a `serde_json::Value`
/// - Building the typed `WhatIfDocument`
use crate::error::ReportError;
use crate::types::WhatIfDocument;
use log::debug;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

/// Where the what-if JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// `-` means stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" { InputSource::Stdin } else { InputSource::File(PathBuf::from(arg)) }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Read and parse what-if JSON from the given source
pub fn read_whatif_json(source: &InputSource) -> Result<Value, ReportError> {
    let text = match source {
        InputSource::File(path) => std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?,
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| ReportError::io("<stdin>", e))?;
            buf
        }
    };

    debug!("Read {} bytes of what-if JSON from {}", text.len(), source.describe());

    parse_whatif_json(&text)
}

/// Parse what-if JSON text, tolerating a leading UTF-8 byte order mark
pub fn parse_whatif_json(text: &str) -> Result<Value, ReportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    serde_json::from_str(text).map_err(|e| ReportError::Parse(e.to_string()))
}

/// Read, parse and type a what-if document in one step
pub fn load_document(source: &InputSource) -> Result<WhatIfDocument, ReportError> {
    let value = read_whatif_json(source)?;
    WhatIfDocument::from_value(&value)
}
