//! Destination binding for decoded result rows.
//!
//! A [`Slot`] is a caller-owned cell paired positionally with a requested
//! column. The executor writes each cell of a result row through the
//! object-safe [`Bind`] trait; the caller reads the decoded value back out
//! of its clone of the slot afterwards.

use std::sync::{Arc, Mutex};

use crate::error::{OrmError, OrmResult};
use crate::value::{FromValue, Row, Value};

/// A destination the executor can store one decoded value into.
pub trait Bind: Send + Sync + std::fmt::Debug {
    /// Decode `value` and store it. Decode failures carry no column
    /// position; [`bind_row`] fills it in.
    fn store(&self, value: Value) -> OrmResult<()>;
}

/// A cloneable, caller-owned destination cell.
///
/// # Example
///
/// ```ignore
/// let id = Slot::<i64>::new();
/// let name = Slot::<String>::new();
///
/// let query = select("user_lookup")
///     .columns(vec![Column::new("u", "id")?, Column::new("u", "name")?])
///     .froms(vec![Table::new("dbo", "Users", "u")?])
///     .dests(vec![id.bind(), name.bind()]);
///
/// fetch_into(&client, &query).await?;
/// let id = id.take();
/// ```
pub struct Slot<T> {
    cell: Arc<Mutex<Option<T>>>,
}

impl<T> Slot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(None)),
        }
    }

    /// Take the stored value out of the slot, leaving it empty.
    pub fn take(&self) -> Option<T> {
        self.cell.lock().expect("slot lock poisoned").take()
    }

    /// Whether a value has been stored.
    pub fn is_set(&self) -> bool {
        self.cell.lock().expect("slot lock poisoned").is_some()
    }
}

impl<T: Clone> Slot<T> {
    /// Copy the stored value out of the slot, if any.
    pub fn get(&self) -> Option<T> {
        self.cell.lock().expect("slot lock poisoned").clone()
    }
}

impl<T: FromValue + Send + 'static> Slot<T> {
    /// Box a handle to this slot for registration on a query draft.
    pub fn bind(&self) -> Box<dyn Bind> {
        Box::new(self.clone())
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("set", &self.is_set())
            .finish()
    }
}

impl<T: FromValue + Send> Bind for Slot<T> {
    fn store(&self, value: Value) -> OrmResult<()> {
        let decoded = T::from_value(value)?;
        *self.cell.lock().expect("slot lock poisoned") = Some(decoded);
        Ok(())
    }
}

/// Write one result row into `dests` positionally.
///
/// The row width must match the destination count; this mirrors the
/// column/destination parity the builder enforces at build time.
pub fn bind_row(dests: &[Box<dyn Bind>], row: Row) -> OrmResult<()> {
    if row.len() != dests.len() {
        return Err(OrmError::DestCountMismatch {
            columns: row.len(),
            dests: dests.len(),
        });
    }
    for (i, (dest, value)) in dests.iter().zip(row).enumerate() {
        dest.store(value).map_err(|e| match e {
            OrmError::Decode { column, message } if column.is_empty() => OrmError::Decode {
                column: i.to_string(),
                message,
            },
            other => other,
        })?;
    }
    Ok(())
}
