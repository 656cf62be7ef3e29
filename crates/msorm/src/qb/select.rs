//! The accumulating SELECT statement draft.

use std::fmt;

use crate::dest::Bind;
use crate::error::{OrmError, OrmResult};
use crate::qb::fragment::{Column, Table, Where};
use crate::value::Value;

/// A SELECT statement under construction.
///
/// Fragments accumulate in call order; `build` validates the structural
/// invariants and serializes the draft into a statement string. The first
/// error hit by a fragment-adding call is recorded on the draft and every
/// later fragment-adding call becomes a no-op, so chains never need
/// per-call checks:
///
/// ```ignore
/// let query = select("user_by_id")
///     .columns(vec![Column::new("u", "id")?, Column::aliased("u", "name", "uname")?])
///     .froms(vec![Table::new("dbo", "Users", "u")?])
///     .wheres(vec![Where::new("u.id = ?", vec![Value::from(42)])?]);
///
/// let sql = query.build()?;
/// let args = query.args()?;
/// ```
pub struct SelectQuery {
    tag: String,
    columns: Vec<Column>,
    froms: Vec<Table>,
    wheres: Vec<Where>,
    dests: Vec<Box<dyn Bind>>,
    /// First accumulation error; poisons all later fragment-adding calls.
    build_error: Option<OrmError>,
}

impl SelectQuery {
    /// Create an empty draft tagged with a diagnostic comment.
    ///
    /// The tag renders as the statement's leading `--` line and identifies
    /// the query's origin in server-side logs and traces.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            columns: Vec::new(),
            froms: Vec::new(),
            wheres: Vec::new(),
            dests: Vec::new(),
            build_error: None,
        }
    }

    /// The diagnostic tag this draft was created with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    // ==================== Fragment accumulation ====================

    /// Append SELECT columns, preserving call order.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        if self.build_error.is_some() {
            return self;
        }
        if columns.is_empty() {
            self.record(OrmError::EmptyInput);
            return self;
        }
        self.columns.extend(columns);
        self
    }

    /// Append FROM tables, preserving call order.
    ///
    /// The first table overall is the base FROM table; every later one
    /// must carry a join condition or `build` rejects the draft.
    pub fn froms(mut self, tables: Vec<Table>) -> Self {
        if self.build_error.is_some() {
            return self;
        }
        if tables.is_empty() {
            self.record(OrmError::EmptyInput);
            return self;
        }
        self.froms.extend(tables);
        self
    }

    /// Append WHERE clauses, preserving call order.
    pub fn wheres(mut self, wheres: Vec<Where>) -> Self {
        if self.build_error.is_some() {
            return self;
        }
        if wheres.is_empty() {
            self.record(OrmError::EmptyInput);
            return self;
        }
        self.wheres.extend(wheres);
        self
    }

    /// Append destination slots, paired positionally with the columns.
    pub fn dests(mut self, dests: Vec<Box<dyn Bind>>) -> Self {
        if self.build_error.is_some() {
            return self;
        }
        if dests.is_empty() {
            self.record(OrmError::EmptyInput);
            return self;
        }
        self.dests.extend(dests);
        self
    }

    fn record(&mut self, err: OrmError) {
        if self.build_error.is_none() {
            self.build_error = Some(err);
        }
    }

    // ==================== Outputs ====================

    /// Validate the draft and serialize it into statement text.
    ///
    /// Pure function of the accumulated fragments: building twice yields
    /// identical output.
    pub fn build(&self) -> OrmResult<String> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if self.columns.is_empty() {
            return Err(OrmError::SelectListEmpty);
        }
        if self.froms.is_empty() {
            return Err(OrmError::FromClauseEmpty);
        }
        if let Some(table) = self.froms[1..].iter().find(|t| !t.is_joined()) {
            return Err(OrmError::MissingJoin {
                table: table.qualified_name(),
            });
        }
        let placeholders = self.placeholder_count();
        let args = self.arg_count();
        if placeholders != args {
            return Err(OrmError::ArgCountMismatch { placeholders, args });
        }
        if !self.dests.is_empty() && self.dests.len() != self.columns.len() {
            return Err(OrmError::DestCountMismatch {
                columns: self.columns.len(),
                dests: self.dests.len(),
            });
        }

        let columns = self
            .columns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("--{}\nSELECT {columns}\nFROM {}", self.tag, self.froms[0]);
        for table in &self.froms[1..] {
            sql.push('\n');
            sql.push_str(&table.to_string());
        }
        if !self.wheres.is_empty() {
            let clauses = self
                .wheres
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            sql.push_str("\nWHERE ");
            sql.push_str(&clauses);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(tag = %self.tag, statement = %sql, "built select statement");

        Ok(sql)
    }

    /// The flattened bound arguments, in clause order.
    pub fn args(&self) -> OrmResult<Vec<Value>> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if self.wheres.is_empty() {
            return Err(OrmError::WheresEmpty);
        }
        Ok(self
            .wheres
            .iter()
            .flat_map(|w| w.args().iter().cloned())
            .collect())
    }

    /// The destination slots, in registration order.
    pub fn dest(&self) -> OrmResult<&[Box<dyn Bind>]> {
        if let Some(err) = &self.build_error {
            return Err(err.clone());
        }
        if self.dests.is_empty() {
            return Err(OrmError::DestsEmpty);
        }
        Ok(&self.dests)
    }

    fn placeholder_count(&self) -> usize {
        self.wheres.iter().map(Where::placeholders).sum()
    }

    fn arg_count(&self) -> usize {
        self.wheres.iter().map(|w| w.args().len()).sum()
    }
}

impl fmt::Debug for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectQuery")
            .field("tag", &self.tag)
            .field("columns", &self.columns)
            .field("froms", &self.froms)
            .field("wheres", &self.wheres)
            .field("dests", &self.dests.len())
            .field("build_error", &self.build_error)
            .finish()
    }
}
