//! # msorm
//!
//! A small statement-construction helper for SQL Server family databases.
//!
//! ## Features
//!
//! - **Fragment-based SELECT builder**: typed [`Column`]/[`Table`]/[`Where`]
//!   fragments accumulate on a draft, `build()` validates and serializes
//! - **Positional binding**: clause text uses `?` placeholders; arguments
//!   travel as driver-agnostic [`Value`]s in clause order
//! - **Destination slots**: caller-owned [`Slot`]s paired with the SELECT
//!   list receive decoded result cells
//! - **Executor seam**: drivers plug in behind the [`Client`] and
//!   [`Connect`] traits; the builder itself performs no I/O
//! - **Fail-fast drafts**: the first bad fragment poisons the draft and
//!   surfaces at `build()`, so fluent chains never need per-call checks
//!
//! ## Query construction
//!
//! ```ignore
//! use msorm::{select, Column, Table, Where, Value};
//!
//! let query = select("orders_for_user")
//!     .columns(vec![
//!         Column::new("u", "id")?,
//!         Column::aliased("o", "total", "order_total")?,
//!     ])
//!     .froms(vec![
//!         Table::new("dbo", "Users", "u")?,
//!         Table::joined("dbo", "Orders", "o", "u.id = o.user_id")?,
//!     ])
//!     .wheres(vec![Where::new("u.id = ?", vec![Value::from(42)])?]);
//!
//! let sql = query.build()?;
//! let args = query.args()?;
//! let rows = client.query(&sql, &args).await?;
//! ```
//!
//! The builder validates structure only: non-empty SELECT and FROM, join
//! conditions on every table after the first, placeholder/argument parity,
//! and column/destination parity. Clause text is the caller's
//! responsibility; bind values through placeholders, never by splicing.

pub mod client;
pub mod config;
pub mod datetime;
pub mod dest;
pub mod error;
pub mod qb;
pub mod transaction;
pub mod value;

pub use client::{fetch_into, validate_rows_affected, Client, Connect};
pub use config::ConnectConfig;
pub use datetime::{format_datetime2, parse_datetime2, DATETIME2_FORMAT};
pub use dest::{bind_row, Bind, Slot};
pub use error::{OrmError, OrmResult};
pub use value::{FromValue, Row, Value};

// Re-export qb module for easy access
pub use qb::{select, Column, SelectQuery, Table, Where};
