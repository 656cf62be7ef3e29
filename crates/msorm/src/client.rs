//! Executor seam for driver adapters.
//!
//! The builder produces `(statement text, args)`; running them is the job
//! of an external driver adapter implementing [`Client`]. Repository code
//! written against the trait works with any adapter, and tests use an
//! in-memory one.

use crate::config::ConnectConfig;
use crate::dest::bind_row;
use crate::error::{OrmError, OrmResult};
use crate::qb::SelectQuery;
use crate::value::{Row, Value};

/// A statement executor backed by a driver connection or transaction.
pub trait Client: Send + Sync {
    /// Execute a query and return all rows.
    fn query(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl std::future::Future<Output = OrmResult<Vec<Row>>> + Send;

    /// Execute a query and return the first row, if any.
    fn query_opt(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl std::future::Future<Output = OrmResult<Option<Row>>> + Send {
        async move { Ok(self.query(sql, args).await?.into_iter().next()) }
    }

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        args: &[Value],
    ) -> impl std::future::Future<Output = OrmResult<u64>> + Send;
}

/// Connection factory for a driver adapter.
///
/// Configuration always arrives as an explicit [`ConnectConfig`]; adapters
/// must not read process globals. Failures surface as
/// [`OrmError::Connection`], never as panics.
pub trait Connect {
    /// The client type this factory opens.
    type Client: Client;

    /// Open a connection described by `config`.
    fn connect(
        config: &ConnectConfig,
    ) -> impl std::future::Future<Output = OrmResult<Self::Client>> + Send;
}

/// Check that a statement affected exactly the expected number of rows.
pub fn validate_rows_affected(actual: u64, expected: u64) -> OrmResult<()> {
    if actual != expected {
        return Err(OrmError::RowsAffectedMismatch { expected, actual });
    }
    Ok(())
}

/// Build `query`, run it, and bind the first result row into its
/// destination slots.
///
/// Returns `Ok(true)` when a row was bound, `Ok(false)` when the query
/// matched nothing. Queries without WHERE clauses run with no arguments.
pub async fn fetch_into(client: &impl Client, query: &SelectQuery) -> OrmResult<bool> {
    let sql = query.build()?;
    let args = match query.args() {
        Ok(args) => args,
        Err(OrmError::WheresEmpty) => Vec::new(),
        Err(err) => return Err(err),
    };

    match client.query_opt(&sql, &args).await? {
        Some(row) => {
            bind_row(query.dest()?, row)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
