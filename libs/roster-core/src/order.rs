use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderKey {
    pub field: String,
    pub dir: SortDir,
}

/// Ordered list of sort keys, applied left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy(pub Vec<OrderKey>);

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy(vec![OrderKey {
            field: field.into(),
            dir: SortDir::Asc,
        }])
    }

    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy(vec![OrderKey {
            field: field.into(),
            dir: SortDir::Desc,
        }])
    }

    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.0.push(OrderKey {
            field: field.into(),
            dir: SortDir::Asc,
        });
        self
    }

    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.0.push(OrderKey {
            field: field.into(),
            dir: SortDir::Desc,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a stable tiebreaker unless the field already participates in
    /// the ordering. Paging without a total order is non-deterministic, so
    /// every bounded query goes through this.
    pub fn ensure_tiebreaker(mut self, field: &str, dir: SortDir) -> Self {
        if self.0.iter().any(|k| k.field == field) {
            return self;
        }
        self.0.push(OrderKey {
            field: field.to_string(),
            dir,
        });
        self
    }
}
