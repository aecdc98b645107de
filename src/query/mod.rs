//! Query model for fauxcrm
//!
//! The structures a caller builds to describe a retrieval: base entity
//! type, requested column set, optional filter, and an ordered list of
//! link-entity (join) specifications. Purely descriptive; evaluation
//! lives in [`crate::executor`].

mod ast;
mod errors;

pub use ast::{
    ColumnSet, Condition, ConditionOperator, FilterLogic, FilterSpec, JoinOperator, LinkSpec,
    QuerySpec,
};
pub use errors::{QueryError, QueryResult};
