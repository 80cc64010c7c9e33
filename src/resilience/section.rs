//! Result-with-fallback for one named section.

use crate::error::{EngineError, EngineResult};

use super::sink::{FaultSink, SectionFault};

/// How a failed section is resolved.
#[derive(Clone, Copy)]
pub enum SectionPolicy<'a> {
    /// Absorb isolatable faults: report them to the sink and use the section default.
    Isolate(&'a dyn FaultSink),
    /// Surface every fault to the caller as an export composition fault.
    FailFast,
}

/// The outcome of computing one named section.
///
/// # Example
///
/// ```
/// use workforce_analytics::error::EngineError;
/// use workforce_analytics::resilience::{MemoryFaultSink, Section, SectionPolicy};
///
/// let sink = MemoryFaultSink::new();
/// let value = Section::run("summary.total_employees", || -> Result<u64, EngineError> {
///     Err(EngineError::computation("summary.total_employees", "bad row"))
/// })
/// .resolve(SectionPolicy::Isolate(&sink), || 0)
/// .unwrap();
///
/// assert_eq!(value, 0);
/// assert_eq!(sink.sections(), vec!["summary.total_employees"]);
/// ```
#[derive(Debug)]
pub struct Section<T> {
    name: &'static str,
    outcome: EngineResult<T>,
}

impl<T> Section<T> {
    /// Computes the section, capturing its result.
    pub fn run(name: &'static str, compute: impl FnOnce() -> EngineResult<T>) -> Self {
        Self {
            name,
            outcome: compute(),
        }
    }

    /// The section name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the section computed without fault.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Describes the fault this section would absorb under an isolating policy.
    pub fn fault(&self) -> Option<SectionFault> {
        self.outcome
            .as_ref()
            .err()
            .and_then(|error| SectionFault::from_error(self.name, error))
    }

    /// Resolves the section to a value.
    ///
    /// Under [`SectionPolicy::Isolate`], an isolatable fault is reported to the
    /// sink and replaced by `default()`; any other fault is returned. Under
    /// [`SectionPolicy::FailFast`] every fault is returned wrapped in
    /// [`EngineError::ExportComposition`] naming this section, unless a nested
    /// section already wrapped it.
    pub fn resolve(
        self,
        policy: SectionPolicy<'_>,
        default: impl FnOnce() -> T,
    ) -> EngineResult<T> {
        let error = match self.outcome {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        match policy {
            SectionPolicy::FailFast if matches!(error, EngineError::ExportComposition { .. }) => {
                Err(error)
            }
            SectionPolicy::FailFast => Err(EngineError::ExportComposition {
                section: self.name.to_string(),
                source: Box::new(error),
            }),
            SectionPolicy::Isolate(sink) => match SectionFault::from_error(self.name, &error) {
                Some(fault) => {
                    sink.record(&fault);
                    Ok(default())
                }
                None => Err(error),
            },
        }
    }
}

impl<T: Default> Section<T> {
    /// Resolves the section, falling back to `T::default()`.
    pub fn resolve_or_default(self, policy: SectionPolicy<'_>) -> EngineResult<T> {
        self.resolve(policy, T::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepositoryError;
    use crate::resilience::MemoryFaultSink;

    fn failing(error: EngineError) -> Section<u64> {
        Section::run("test.section", || Err(error))
    }

    #[test]
    fn test_success_passes_through_without_recording() {
        let sink = MemoryFaultSink::new();
        let value = Section::run("test.section", || Ok(42u64))
            .resolve(SectionPolicy::Isolate(&sink), || 0)
            .unwrap();

        assert_eq!(value, 42);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_isolate_replaces_computation_fault_with_default() {
        let sink = MemoryFaultSink::new();
        let section = failing(EngineError::computation("test.section", "boom"));
        assert!(!section.is_ok());
        assert!(section.fault().is_some());

        let value = section
            .resolve(SectionPolicy::Isolate(&sink), || 7)
            .unwrap();

        assert_eq!(value, 7);
        assert_eq!(sink.sections(), vec!["test.section"]);
    }

    #[test]
    fn test_isolate_propagates_repository_fault() {
        let sink = MemoryFaultSink::new();
        let result = failing(
            RepositoryError::Unavailable {
                message: "down".to_string(),
            }
            .into(),
        )
        .resolve(SectionPolicy::Isolate(&sink), || 0);

        assert!(matches!(result, Err(EngineError::Repository(_))));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fail_fast_surfaces_isolatable_fault() {
        let result = failing(EngineError::computation("test.section", "boom"))
            .resolve(SectionPolicy::FailFast, || 0);

        match result {
            Err(EngineError::ExportComposition { section, source }) => {
                assert_eq!(section, "test.section");
                assert!(matches!(*source, EngineError::Computation { .. }));
            }
            _ => panic!("Expected ExportComposition error"),
        }
    }

    #[test]
    fn test_fail_fast_wraps_repository_fault() {
        let result = failing(
            RepositoryError::Unavailable {
                message: "down".to_string(),
            }
            .into(),
        )
        .resolve(SectionPolicy::FailFast, || 0);
        assert!(matches!(result, Err(EngineError::ExportComposition { .. })));
    }

    #[test]
    fn test_fail_fast_keeps_innermost_section() {
        let result = Section::run("outer", || {
            failing(EngineError::computation("test.section", "boom"))
                .resolve(SectionPolicy::FailFast, || 0)
        })
        .resolve(SectionPolicy::FailFast, || 0);

        match result {
            Err(EngineError::ExportComposition { section, source }) => {
                assert_eq!(section, "test.section");
                assert!(matches!(*source, EngineError::Computation { .. }));
            }
            _ => panic!("Expected ExportComposition error"),
        }
    }

    #[test]
    fn test_resolve_or_default() {
        let sink = MemoryFaultSink::new();
        let value: Vec<u64> = Section::run("test.list", || {
            Err(EngineError::computation("test.list", "boom"))
        })
        .resolve_or_default(SectionPolicy::Isolate(&sink))
        .unwrap();
        assert!(value.is_empty());
    }
}
