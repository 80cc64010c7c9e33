//! Reporting engine for organisational records
//!
//! This crate turns employee, department, performance review and attendance
//! records into dashboard summaries, chart-ready views and multi-section
//! exports. Every view isolates faults per section so one bad metric never
//! blocks the rest of a dashboard; the composite export is all or nothing.
//!
//! Records are read through the [`repository::Repository`] trait;
//! [`repository::InMemoryRepository`] implements it over plain vectors.

#![warn(missing_docs)]

pub mod aggregation;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod repository;
pub mod resilience;
