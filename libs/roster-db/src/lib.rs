//! Store-facing half of the search layer: compiles `roster_core::ast` filter
//! trees into `sea_orm::Condition`s (AST in, SQL out) and implements the
//! offset-pagination count policy.
//!
//! Nothing here parses user input or owns a connection; callers hand in a
//! composed expression plus a whitelist [`FieldMap`] and get back something
//! they can attach to a `Select`.

mod filter;
mod paginate;

pub use filter::{
    expr_to_condition, filter_requires_join, FieldKind, FieldMap, FilterBuildError, FilterExt,
    OrderByExt,
};
pub use paginate::{count_decision, page_with_count, CountDecision};
