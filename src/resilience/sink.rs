//! Destinations for isolated section faults.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, RepositoryError};

/// Classification of an isolated fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// The engine could not derive the section from the rows it read.
    Computation,
    /// The repository returned a row or key it could not materialise.
    MalformedData,
}

/// A section that fell back to its default, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFault {
    /// The section name (e.g., "summary.latest_hires").
    pub section: String,
    /// The fault classification.
    pub kind: FaultKind,
    /// The rendered cause.
    pub message: String,
}

impl SectionFault {
    /// Describes `error` as a fault of `section`, or `None` if the error is not
    /// one a section may absorb.
    pub fn from_error(section: &str, error: &EngineError) -> Option<Self> {
        let kind = match error {
            EngineError::Computation { .. } => FaultKind::Computation,
            EngineError::Repository(RepositoryError::MalformedData { .. }) => {
                FaultKind::MalformedData
            }
            _ => return None,
        };
        Some(Self {
            section: section.to_string(),
            kind,
            message: error.to_string(),
        })
    }
}

/// Receives every fault a view absorbs.
///
/// The sink is handed to the engine at construction, so callers choose where
/// fault reports go and tests can inspect them without global state.
pub trait FaultSink: Send + Sync {
    /// Records one absorbed fault.
    fn record(&self, fault: &SectionFault);
}

/// Logs faults through `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFaultSink;

impl FaultSink for TracingFaultSink {
    fn record(&self, fault: &SectionFault) {
        warn!(
            section = %fault.section,
            kind = ?fault.kind,
            error = %fault.message,
            "Section fell back to its default"
        );
    }
}

/// Keeps faults in memory for later inspection.
///
/// # Example
///
/// ```
/// use workforce_analytics::resilience::{FaultKind, FaultSink, MemoryFaultSink, SectionFault};
///
/// let sink = MemoryFaultSink::new();
/// sink.record(&SectionFault {
///     section: "hire_timeline".to_string(),
///     kind: FaultKind::Computation,
///     message: "bad key".to_string(),
/// });
/// assert_eq!(sink.faults().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryFaultSink {
    faults: Mutex<Vec<SectionFault>>,
}

impl MemoryFaultSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of recorded faults in arrival order.
    pub fn faults(&self) -> Vec<SectionFault> {
        self.faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Returns the sections that recorded a fault, in arrival order.
    pub fn sections(&self) -> Vec<String> {
        self.faults().into_iter().map(|f| f.section).collect()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.faults().is_empty()
    }
}

impl FaultSink for MemoryFaultSink {
    fn record(&self, fault: &SectionFault) {
        self.faults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(fault.clone());
    }
}
