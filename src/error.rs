//! Error types for the reporting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Repository failures and section computation faults are kept apart so the
//! resilience layer can decide which ones may be replaced by a default.

use thiserror::Error;

/// Failures raised by a [`Repository`](crate::repository::Repository) implementation.
///
/// # Example
///
/// ```
/// use workforce_analytics::error::RepositoryError;
///
/// let error = RepositoryError::Unavailable {
///     message: "connection refused".to_string(),
/// };
/// assert_eq!(error.to_string(), "Repository unavailable: connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("Repository unavailable: {message}")]
    Unavailable {
        /// A description of the connectivity failure.
        message: String,
    },

    /// The query was rejected (unknown field for a record kind, mismatched value type).
    #[error("Query rejected: {message}")]
    Query {
        /// A description of why the query was rejected.
        message: String,
    },

    /// A row or grouping key could not be materialised.
    #[error("Malformed data: {message}")]
    MalformedData {
        /// A description of the malformed row or key.
        message: String,
    },
}

/// The main error type for the reporting engine.
///
/// # Example
///
/// ```
/// use workforce_analytics::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/report.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/report.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The repository failed.
    #[error("Repository fault: {0}")]
    Repository(#[from] RepositoryError),

    /// A single section could not be derived from the data it read.
    #[error("Computation fault in '{section}': {message}")]
    Computation {
        /// The section being computed.
        section: String,
        /// A description of the fault.
        message: String,
    },

    /// A section failed while the composite export was being assembled.
    #[error("Export composition failed in '{section}': {source}")]
    ExportComposition {
        /// The section that failed.
        section: String,
        /// The underlying failure.
        #[source]
        source: Box<EngineError>,
    },

    /// No department exists with the requested id.
    #[error("Department not found: {id}")]
    DepartmentNotFound {
        /// The id that was looked up.
        id: u64,
    },

    /// The requested export format is not recognised.
    #[error("Unknown export format: {format}")]
    UnknownExportFormat {
        /// The format string that was requested.
        format: String,
    },

    /// A structured export could not be serialized.
    #[error("Serialization error: {message}")]
    Serialization {
        /// A description of the serialization error.
        message: String,
    },
}

impl EngineError {
    /// Creates a computation fault for the named section.
    pub fn computation(section: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Computation {
            section: section.into(),
            message: message.into(),
        }
    }

    /// Returns true if a view may replace this failure with its documented default.
    ///
    /// Computation faults and malformed repository data are isolated per section.
    /// Connectivity and query failures mean the data source itself is broken and
    /// are always surfaced to the caller.
    pub fn is_isolatable(&self) -> bool {
        matches!(
            self,
            EngineError::Computation { .. }
                | EngineError::Repository(RepositoryError::MalformedData { .. })
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A type alias for Results that return RepositoryError.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
