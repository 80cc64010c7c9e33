//! Read access to persisted organisational records.
//!
//! The engine never talks to storage directly: it issues counting, aggregate,
//! grouping and ordered-listing queries through the [`Repository`] trait.
//! [`InMemoryRepository`] implements the full contract over plain vectors.
//!
//! # Example
//!
//! ```
//! use workforce_analytics::repository::{InMemoryRepository, RecordKind, Repository};
//!
//! let repository = InMemoryRepository::new();
//! assert_eq!(repository.count(RecordKind::Employee, &[]).unwrap(), 0);
//! ```

mod memory;
mod query;

use rust_decimal::Decimal;

use crate::error::RepositoryResult;
use crate::models::{Department, Employee};

pub use memory::InMemoryRepository;
pub use query::{
    AggregateFn, Direction, Field, Filter, GroupKey, GroupRow, OrderBy, RecordKind, Value,
};

/// Filtered and grouped reads over the four record kinds.
///
/// Implementations must be safe to share between threads; the engine holds no
/// locks of its own and may be called concurrently.
pub trait Repository: Send + Sync {
    /// Counts rows of `kind` matching every filter.
    fn count(&self, kind: RecordKind, filters: &[Filter]) -> RepositoryResult<u64>;

    /// Aggregates a decimal `field` over matching rows; `None` when no row matches.
    fn aggregate(
        &self,
        kind: RecordKind,
        function: AggregateFn,
        field: Field,
        filters: &[Filter],
    ) -> RepositoryResult<Option<Decimal>>;

    /// Averages a decimal `field` over matching rows; `None` when no row matches.
    fn average(
        &self,
        kind: RecordKind,
        field: Field,
        filters: &[Filter],
    ) -> RepositoryResult<Option<Decimal>> {
        self.aggregate(kind, AggregateFn::Avg, field, filters)
    }

    /// Groups matching rows by `key`, returning one row per distinct key with its
    /// count and, if requested, an aggregate over a decimal field.
    fn group_by(
        &self,
        kind: RecordKind,
        key: GroupKey,
        aggregate: Option<(AggregateFn, Field)>,
        filters: &[Filter],
    ) -> RepositoryResult<Vec<GroupRow>>;

    /// Lists departments in the given order; ties keep storage order.
    fn departments(&self, order: &[OrderBy]) -> RepositoryResult<Vec<Department>>;

    /// Lists matching employees in the given order, truncated to `limit` if set.
    fn employees(
        &self,
        filters: &[Filter],
        order: &[OrderBy],
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Employee>>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn count(&self, kind: RecordKind, filters: &[Filter]) -> RepositoryResult<u64> {
        (**self).count(kind, filters)
    }

    fn aggregate(
        &self,
        kind: RecordKind,
        function: AggregateFn,
        field: Field,
        filters: &[Filter],
    ) -> RepositoryResult<Option<Decimal>> {
        (**self).aggregate(kind, function, field, filters)
    }

    fn average(
        &self,
        kind: RecordKind,
        field: Field,
        filters: &[Filter],
    ) -> RepositoryResult<Option<Decimal>> {
        (**self).average(kind, field, filters)
    }

    fn group_by(
        &self,
        kind: RecordKind,
        key: GroupKey,
        aggregate: Option<(AggregateFn, Field)>,
        filters: &[Filter],
    ) -> RepositoryResult<Vec<GroupRow>> {
        (**self).group_by(kind, key, aggregate, filters)
    }

    fn departments(&self, order: &[OrderBy]) -> RepositoryResult<Vec<Department>> {
        (**self).departments(order)
    }

    fn employees(
        &self,
        filters: &[Filter],
        order: &[OrderBy],
        limit: Option<usize>,
    ) -> RepositoryResult<Vec<Employee>> {
        (**self).employees(filters, order, limit)
    }
}
