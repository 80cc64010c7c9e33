//! Per-section failure isolation.
//!
//! Each section of a view is computed into a [`Section`], which is then
//! resolved against a [`SectionPolicy`]: the public views isolate faults and
//! substitute the section default, while the composite export fails fast.
//! Nothing is retried; a read that failed once is reported, not repeated.

mod section;
mod sink;

pub use section::{Section, SectionPolicy};
pub use sink::{FaultKind, FaultSink, MemoryFaultSink, SectionFault, TracingFaultSink};
