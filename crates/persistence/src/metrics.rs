//! Database metrics collection.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

use crate::PersistenceError;

/// Record the duration of one repository query.
pub fn record_query_duration(table: &'static str, operation: &'static str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "table" => table,
        "operation" => operation
    )
    .record(duration_secs);
}

/// Count a constraint violation reported by the database.
pub fn record_constraint_violation(table: &'static str, err: &PersistenceError) {
    let kind = match err {
        PersistenceError::UniqueViolation { .. } => "unique",
        PersistenceError::MissingValue { .. } => "not_null",
        PersistenceError::ForeignKeyViolation { .. } => "foreign_key",
        PersistenceError::ValueTooLong(_) => "value_too_long",
        _ => return,
    };
    counter!("database_constraint_violations_total", "table" => table, "kind" => kind)
        .increment(1);
}

/// Record connection pool gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times a repository query.
///
/// ```ignore
/// let timer = QueryTimer::new("info", "find_by_question");
/// let result = sqlx::query_as::<_, InfoEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// ```
pub struct QueryTimer {
    table: &'static str,
    operation: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(table: &'static str, operation: &'static str) -> Self {
        Self {
            table,
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(self.table, self.operation, duration);
    }
}
