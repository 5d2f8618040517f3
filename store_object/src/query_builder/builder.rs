//! Query builder
//!
//! Collects filters, ordering and pagination and assembles them into a
//! SELECT statement with its bound values.

use crate::errors::StorehausError;
use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::validation::{ValidatedFieldName, ValidatedTableName};
use serde_json::Value;
use type_mapping::quote_ident;

/// Query builder for constructing filtered SELECT queries
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: impl Into<QueryFilter>) -> Self {
        self.conditions.push(filter.into());
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<QueryFilter>) -> Self {
        self.conditions.extend(filters);
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> (String, Vec<Value>) {
        SqlGenerator::build_where_clause(&self.conditions)
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(&self) -> String {
        SqlGenerator::build_order_clause(&self.order_by)
    }

    /// Build LIMIT/OFFSET clause
    pub fn build_limit_clause(&self) -> String {
        SqlGenerator::build_limit_clause(self.limit, self.offset)
    }

    /// Build complete query parts (WHERE, ORDER BY, LIMIT, Values)
    pub fn build(&self) -> (String, String, String, Vec<Value>) {
        let (where_clause, values) = self.build_where_clause();
        let order_clause = self.build_order_clause();
        let limit_clause = self.build_limit_clause();

        (where_clause, order_clause, limit_clause, values)
    }

    /// `SELECT * FROM "table" ...` with every clause that is set.
    /// The table, the plain filter fields and the ORDER BY fields must be
    /// plain identifiers.
    pub fn build_select(&self, table: &str) -> Result<(String, Vec<Value>), StorehausError> {
        let table = ValidatedTableName::new(table)?;
        for filter in &self.conditions {
            validate_filter_fields(filter)?;
        }
        for (field, _) in &self.order_by {
            ValidatedFieldName::new(field)?;
        }
        let (where_clause, order_clause, limit_clause, values) = self.build();

        let mut sql = format!("SELECT * FROM {}", quote_ident(table.as_str()));
        for clause in [where_clause, order_clause, limit_clause] {
            if !clause.is_empty() {
                sql.push(' ');
                sql.push_str(&clause);
            }
        }

        Ok((sql, values))
    }
}

/// Check every plain condition field, descending into groups.
/// Hstore predicates quote their column themselves.
fn validate_filter_fields(filter: &QueryFilter) -> Result<(), StorehausError> {
    match filter {
        QueryFilter::Condition(condition) => {
            ValidatedFieldName::new(&condition.field)?;
        }
        QueryFilter::Group { filters, .. } => {
            for inner in filters {
                validate_filter_fields(inner)?;
            }
        }
        QueryFilter::Not(inner) => validate_filter_fields(inner)?,
        QueryFilter::Hstore(_) => {}
    }
    Ok(())
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
