//! Transaction helpers.
//!
//! Driver adapters expose `begin()` on their client type and
//! `commit()`/`rollback()` on the transaction it returns. The
//! [`transaction!`] macro wraps a block in that lifecycle: commit on
//! `Ok`, roll back on `Err`, with rollback failures folded into the
//! surfaced error. Transaction failures are ordinary errors; whether to
//! abort the process is the top-level caller's decision.
//!
//! # Example
//!
//! ```ignore
//! let updated: OrmResult<u64> = msorm::transaction!(&client, tx, {
//!     let affected = tx.execute(&sql, &args).await?;
//!     validate_rows_affected(affected, 1)?;
//!     Ok(affected)
//! });
//! ```

/// Runs the given block inside a database transaction.
///
/// - Begins a transaction via `$client.begin().await`.
/// - Commits on `Ok(_)`.
/// - Rolls back on `Err(_)`.
///
/// The block must evaluate to `msorm::OrmResult<T>`.
#[macro_export]
macro_rules! transaction {
    ($client:expr, $tx:ident, $body:block) => {{
        let $tx = ($client).begin().await?;

        let __msorm_tx_body_result = async { $body }.await;
        match __msorm_tx_body_result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(error) => match $tx.rollback().await {
                Ok(()) => Err(error),
                Err(rollback_err) => Err($crate::OrmError::Other(format!(
                    "{error} (rollback failed: {rollback_err})"
                ))),
            },
        }
    }};
}
