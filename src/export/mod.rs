//! Export formats and rendering.
//!
//! An export is produced either as the structured [`AnalyticsExport`] record
//! or as flat comma-separated text with one section per dataset.

mod format;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::AnalyticsExport;

pub use format::{format_currency, format_fixed, format_percentage};
pub use text::{escape_field, render_text};

/// The requested export representation.
///
/// # Example
///
/// ```
/// use workforce_analytics::export::ExportFormat;
///
/// assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
/// assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Structured);
/// assert!("xml".parse::<ExportFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The structured export record.
    #[default]
    Structured,
    /// Flat multi-section text.
    Text,
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | "structured" => Ok(ExportFormat::Structured),
            "text" | "csv" => Ok(ExportFormat::Text),
            _ => Err(EngineError::UnknownExportFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Structured => f.write_str("structured"),
            ExportFormat::Text => f.write_str("text"),
        }
    }
}

/// A rendered export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// The structured export record.
    Structured(Box<AnalyticsExport>),
    /// The flat text export.
    Text(String),
}

impl ExportOutput {
    /// Returns the structured record, if this is a structured export.
    pub fn as_structured(&self) -> Option<&AnalyticsExport> {
        match self {
            ExportOutput::Structured(document) => Some(document),
            ExportOutput::Text(_) => None,
        }
    }

    /// Returns the text, if this is a text export.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExportOutput::Structured(_) => None,
            ExportOutput::Text(text) => Some(text),
        }
    }

    /// Renders the export as pretty-printed JSON.
    ///
    /// A text export renders as a single JSON string.
    pub fn to_json(&self) -> EngineResult<String> {
        let rendered = match self {
            ExportOutput::Structured(document) => serde_json::to_string_pretty(document),
            ExportOutput::Text(text) => serde_json::to_string(text),
        };
        rendered.map_err(|e| EngineError::Serialization {
            message: e.to_string(),
        })
    }
}
