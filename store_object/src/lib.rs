//! Store Object - query layer for Storehaus hstore support
//!
//! This crate provides the query builder, the hstore predicates that plug
//! into it, and identifier validation for the generated SQL.

pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod validation;

pub use errors::StorehausError;
pub use query_builder::hstore;
pub use query_builder::{
    bind_values, CompareOp, HstorePredicate, LikeMatch, QueryBuilder, QueryFilter, QueryOperator, SortOrder,
};
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};
