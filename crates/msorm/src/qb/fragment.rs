//! Statement fragments: columns, tables, and where clauses.
//!
//! Fragments are immutable once constructed; every required field is
//! checked at construction time so a draft can only ever accumulate
//! well-formed pieces. Rendering is via `Display` and is deterministic.

use std::fmt;

use crate::error::{OrmError, OrmResult};
use crate::value::Value;

/// A column in the SELECT list, qualified by a table alias.
///
/// Renders as `prefix.name`, or `prefix.name AS alias` when an output
/// alias is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    prefix: String,
    name: String,
    alias: Option<String>,
}

impl Column {
    /// Create a column reference.
    pub fn new(prefix: &str, name: &str) -> OrmResult<Self> {
        if prefix.is_empty() {
            return Err(OrmError::EmptyField { field: "prefix" });
        }
        if name.is_empty() {
            return Err(OrmError::EmptyField { field: "name" });
        }
        Ok(Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
            alias: None,
        })
    }

    /// Create a column reference with an output alias.
    pub fn aliased(prefix: &str, name: &str, alias: &str) -> OrmResult<Self> {
        if alias.is_empty() {
            return Err(OrmError::EmptyField { field: "alias" });
        }
        let mut column = Self::new(prefix, name)?;
        column.alias = Some(alias.to_string());
        Ok(column)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.prefix, self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// A table in the FROM clause.
///
/// The first table on a draft is the base FROM table; every further table
/// must carry a join condition and renders as a JOIN line.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: String,
    name: String,
    alias: String,
    join: Option<String>,
}

impl Table {
    /// Create a base FROM table.
    pub fn new(schema: &str, name: &str, alias: &str) -> OrmResult<Self> {
        if schema.is_empty() {
            return Err(OrmError::EmptyField { field: "schema" });
        }
        if name.is_empty() {
            return Err(OrmError::EmptyField { field: "name" });
        }
        if alias.is_empty() {
            return Err(OrmError::EmptyField { field: "alias" });
        }
        Ok(Self {
            schema: schema.to_string(),
            name: name.to_string(),
            alias: alias.to_string(),
            join: None,
        })
    }

    /// Create a joined table with its ON condition.
    pub fn joined(schema: &str, name: &str, alias: &str, on: &str) -> OrmResult<Self> {
        if on.is_empty() {
            return Err(OrmError::EmptyField { field: "join" });
        }
        let mut table = Self::new(schema, name, alias)?;
        table.join = Some(on.to_string());
        Ok(table)
    }

    /// Whether this table carries a join condition.
    pub fn is_joined(&self) -> bool {
        self.join.is_some()
    }

    /// The schema-qualified table name, used in diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.join {
            Some(on) => write!(
                f,
                "JOIN {}.{} {} ON {on}",
                self.schema, self.name, self.alias
            ),
            None => write!(f, "{}.{} {}", self.schema, self.name, self.alias),
        }
    }
}

/// A WHERE clause with its bound arguments.
///
/// The clause text is caller-supplied and never parsed; only the `?`
/// placeholder count is inspected, for parity with `args`. Values must
/// always arrive through placeholders, never be spliced into the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    operator: Option<String>,
    clause: String,
    args: Vec<Value>,
}

impl Where {
    /// Create the leading clause of a WHERE block (no connective).
    pub fn new(clause: &str, args: Vec<Value>) -> OrmResult<Self> {
        if clause.is_empty() {
            return Err(OrmError::EmptyField { field: "clause" });
        }
        Ok(Self {
            operator: None,
            clause: clause.to_string(),
            args,
        })
    }

    /// Create a clause connected with `AND`.
    pub fn and(clause: &str, args: Vec<Value>) -> OrmResult<Self> {
        Self::connected("AND", clause, args)
    }

    /// Create a clause connected with `OR`.
    pub fn or(clause: &str, args: Vec<Value>) -> OrmResult<Self> {
        Self::connected("OR", clause, args)
    }

    /// Create a clause with an explicit leading connective.
    pub fn connected(operator: &str, clause: &str, args: Vec<Value>) -> OrmResult<Self> {
        if operator.is_empty() {
            return Err(OrmError::EmptyField { field: "operator" });
        }
        let mut where_clause = Self::new(clause, args)?;
        where_clause.operator = Some(operator.to_string());
        Ok(where_clause)
    }

    /// Number of `?` placeholders in the clause text.
    pub(crate) fn placeholders(&self) -> usize {
        self.clause.matches('?').count()
    }

    /// The bound arguments, in binding order.
    pub(crate) fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operator {
            Some(op) => write!(f, "{op} {}", self.clause),
            None => write!(f, "{}", self.clause),
        }
    }
}
