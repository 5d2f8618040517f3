//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod binding;
pub mod builder;
pub mod filter;
pub mod hstore;
pub mod ordering;
pub mod sql_generation;


pub use binding::{bind_value, bind_values, BoundValue};
pub use builder::QueryBuilder;
pub use filter::{LogicalOperator, QueryFilter, QueryOperator};
pub use hstore::{CompareOp, HstorePredicate, LikeMatch};
pub use ordering::SortOrder;
