//! Fragment-based SELECT statement construction.
//!
//! A draft accumulates typed fragments ([`Column`], [`Table`], [`Where`])
//! in call order, then `build` validates the structural invariants and
//! serializes the draft into a deterministic statement string with
//! positional `?` placeholders.
//!
//! # Usage
//!
//! ```ignore
//! use msorm::qb::{select, Column, Table, Where};
//! use msorm::Value;
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
//! ```
//!
//! Clause text is never parsed or sanitized; only fragment counts are
//! validated. Callers must bind values through placeholders, never splice
//! them into identifiers or clause text.

mod fragment;
mod select;

pub use fragment::{Column, Table, Where};
pub use select::SelectQuery;

/// Create a SELECT draft tagged with a diagnostic comment.
///
/// # Example
/// ```ignore
/// let query = msorm::qb::select("user_by_id");
/// ```
pub fn select(tag: &str) -> SelectQuery {
    SelectQuery::new(tag)
}

#[cfg(test)]
mod tests;
