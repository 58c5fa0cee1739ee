use std::collections::HashMap;

use roster_core::ast::{Expr as Ast, Value as AstValue};
use roster_core::{OrderBy, SortDir};
use sea_orm::sea_query::{ColumnRef, Expr, IntoColumnRef, Order, SimpleExpr};
use sea_orm::{Condition, EntityTrait, QueryFilter, QueryOrder};
use thiserror::Error;

/// Whitelisted field kind, used to coerce `ast::Value` into `sea_orm::Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    String,
    I64,
}

#[derive(Clone)]
struct Field {
    col: ColumnRef,
    kind: FieldKind,
    /// The column lives on a left-joined entity, so any filter touching it
    /// forces the join to be present in the statement.
    joined: bool,
}

/// Logical field name -> qualified column mapping. Columns may come from more
/// than one entity; joined ones are flagged so the planner can tell filter
/// joins apart from projection-only joins.
#[derive(Clone, Default)]
pub struct FieldMap {
    map: HashMap<String, Field>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Register a column of the root entity.
    pub fn insert<E: EntityTrait>(self, name: impl Into<String>, col: E::Column, kind: FieldKind) -> Self {
        self.put::<E>(name, col, kind, false)
    }

    /// Register a column of a left-joined entity.
    pub fn insert_joined<E: EntityTrait>(
        self,
        name: impl Into<String>,
        col: E::Column,
        kind: FieldKind,
    ) -> Self {
        self.put::<E>(name, col, kind, true)
    }

    fn put<E: EntityTrait>(
        mut self,
        name: impl Into<String>,
        col: E::Column,
        kind: FieldKind,
        joined: bool,
    ) -> Self {
        self.map.insert(
            name.into(),
            Field {
                col: (E::default(), col).into_column_ref(),
                kind,
                joined,
            },
        );
        self
    }

    fn get(&self, name: &str) -> Result<&Field, FilterBuildError> {
        self.map
            .get(name)
            .ok_or_else(|| FilterBuildError::UnknownField(name.to_string()))
    }

    fn compare(&self, name: &str, op: CmpOp, v: &AstValue) -> Result<SimpleExpr, FilterBuildError> {
        let f = self.get(name)?;
        let val = coerce(name, f.kind, v)?;
        let col = Expr::col(f.col.clone());
        Ok(match op {
            CmpOp::Eq => col.eq(val),
            CmpOp::Ge => col.gte(val),
            CmpOp::Le => col.lte(val),
        })
    }
}

#[derive(Clone, Copy)]
enum CmpOp {
    Eq,
    Ge,
    Le,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterBuildError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("type mismatch on {field}: expected {expected:?}, got {got}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        got: &'static str,
    },

    #[error("invalid order-by field: {0}")]
    InvalidOrderByField(String),
}

fn coerce(field: &str, kind: FieldKind, v: &AstValue) -> Result<sea_orm::Value, FilterBuildError> {
    match (kind, v) {
        (FieldKind::String, AstValue::String(s)) => {
            Ok(sea_orm::Value::String(Some(Box::new(s.clone()))))
        }
        (FieldKind::I64, AstValue::Int(i)) => Ok(sea_orm::Value::BigInt(Some(*i))),
        (expected, got) => Err(FilterBuildError::TypeMismatch {
            field: field.to_string(),
            expected,
            got: got.kind_name(),
        }),
    }
}

/* ---------- Expr (AST) -> Condition ---------- */

/// Pure compile step: runs before any I/O and fails fast on an unknown field
/// or a value of the wrong kind. An `And` of compiled subtrees nests as a
/// `Condition::all`, so the statement is the exact conjunction the composer
/// produced.
pub fn expr_to_condition(expr: &Ast, fmap: &FieldMap) -> Result<Condition, FilterBuildError> {
    Ok(match expr {
        Ast::And(a, b) => {
            let left = expr_to_condition(a, fmap)?;
            let right = expr_to_condition(b, fmap)?;
            Condition::all().add(left).add(right)
        }
        Ast::Eq(name, v) => Condition::all().add(fmap.compare(name, CmpOp::Eq, v)?),
        Ast::Ge(name, v) => Condition::all().add(fmap.compare(name, CmpOp::Ge, v)?),
        Ast::Le(name, v) => Condition::all().add(fmap.compare(name, CmpOp::Le, v)?),
    })
}

/// True when the filter touches at least one column of a joined entity. The
/// count query may only drop the join when this is false.
pub fn filter_requires_join(expr: &Ast, fmap: &FieldMap) -> bool {
    let mut required = false;
    expr.for_each_field(&mut |name| {
        if let Some(f) = fmap.map.get(name) {
            required |= f.joined;
        }
    });
    required
}

/* ---------- Select extensions ---------- */

/// Attach an optional composed filter to a `Select<E>`. `None` adds no
/// condition at all — it is not a NULL-matching placeholder.
pub trait FilterExt<E: EntityTrait>: Sized {
    fn apply_filter(self, filter: Option<&Ast>, fmap: &FieldMap) -> Result<Self, FilterBuildError>;
}

impl<E> FilterExt<E> for sea_orm::Select<E>
where
    E: EntityTrait,
{
    fn apply_filter(self, filter: Option<&Ast>, fmap: &FieldMap) -> Result<Self, FilterBuildError> {
        match filter {
            Some(ast) => {
                let cond = expr_to_condition(ast, fmap)?;
                Ok(self.filter(cond))
            }
            None => Ok(self),
        }
    }
}

/// Apply an [`OrderBy`] resolved through the field whitelist.
pub trait OrderByExt<E: EntityTrait>: Sized {
    fn apply_order(self, order: &OrderBy, fmap: &FieldMap) -> Result<Self, FilterBuildError>;
}

impl<E> OrderByExt<E> for sea_orm::Select<E>
where
    E: EntityTrait,
{
    fn apply_order(self, order: &OrderBy, fmap: &FieldMap) -> Result<Self, FilterBuildError> {
        let mut query = self;

        for key in &order.0 {
            let field = fmap
                .map
                .get(&key.field)
                .ok_or_else(|| FilterBuildError::InvalidOrderByField(key.field.clone()))?;

            let sea_order = match key.dir {
                SortDir::Asc => Order::Asc,
                SortDir::Desc => Order::Desc,
            };

            query = query.order_by(SimpleExpr::Column(field.col.clone()), sea_order);
        }

        Ok(query)
    }
}
