//! Query-time value types for the member search layer.
//!
//! This crate holds the pure pieces of a search call: the filter expression
//! tree, ordering descriptors and the offset-based page envelope. It does no
//! I/O and knows nothing about the store; compiling an [`ast::Expr`] into a
//! statement belongs to `roster-db`.

pub mod ast {
    /// A composed boolean filter. Conjunction-only by design: every search
    /// condition is the AND of its present fields.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Expr {
        And(Box<Expr>, Box<Expr>),
        Eq(String, Value),
        Ge(String, Value),
        Le(String, Value),
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Value {
        String(String),
        Int(i64),
    }

    impl Expr {
        pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
            Expr::Eq(field.into(), value.into())
        }

        pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Self {
            Expr::Ge(field.into(), value.into())
        }

        pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Self {
            Expr::Le(field.into(), value.into())
        }

        pub fn and(self, other: Expr) -> Self {
            Expr::And(Box::new(self), Box::new(other))
        }

        /// Total conjunction over optional operands. `None` means "no
        /// constraint", so combining with `None` never poisons the chain and
        /// combining two `None`s stays "match everything".
        pub fn and_opt(a: Option<Expr>, b: Option<Expr>) -> Option<Expr> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a.and(b)),
                (a, None) => a,
                (None, b) => b,
            }
        }

        /// Visit every field name referenced by this expression.
        pub fn for_each_field(&self, f: &mut impl FnMut(&str)) {
            match self {
                Expr::And(a, b) => {
                    a.for_each_field(f);
                    b.for_each_field(f);
                }
                Expr::Eq(name, _) | Expr::Ge(name, _) | Expr::Le(name, _) => f(name),
            }
        }
    }

    impl Value {
        pub fn kind_name(&self) -> &'static str {
            match self {
                Value::String(_) => "string",
                Value::Int(_) => "int",
            }
        }
    }

    impl From<&str> for Value {
        fn from(s: &str) -> Self {
            Value::String(s.to_string())
        }
    }

    impl From<String> for Value {
        fn from(s: String) -> Self {
            Value::String(s)
        }
    }

    impl From<i64> for Value {
        fn from(i: i64) -> Self {
            Value::Int(i)
        }
    }

    impl From<i32> for Value {
        fn from(i: i32) -> Self {
            Value::Int(i64::from(i))
        }
    }
}

mod order;
mod page;

pub use order::{OrderBy, OrderKey, SortDir};
pub use page::{Page, PageError, PageRequest};

#[cfg(test)]
mod tests;
