use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order::OrderBy;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page limit must be greater than zero")]
    ZeroLimit,
}

/// A bounded window over a filtered result set. Offsets are `u64`, so a
/// negative offset is unrepresentable; a zero limit is rejected eagerly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
    pub order: OrderBy,
}

impl PageRequest {
    pub fn new(offset: u64, limit: u64) -> Result<Self, PageError> {
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(Self {
            offset,
            limit,
            order: OrderBy::default(),
        })
    }

    pub fn with_order(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }

    /// Re-check the invariants for requests built literally rather than via
    /// [`PageRequest::new`].
    pub fn validate(&self) -> Result<(), PageError> {
        if self.limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(())
    }
}

/// One page of results plus the total count across the whole filtered set.
/// Offset and limit are echoed back verbatim for caller bookkeeping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, req: &PageRequest, total: u64) -> Self {
        Self {
            items,
            total,
            offset: req.offset,
            limit: req.limit,
        }
    }

    pub fn empty(req: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            offset: req.offset,
            limit: req.limit,
        }
    }

    pub fn is_last(&self) -> bool {
        self.offset + self.items.len() as u64 >= self.total
    }

    /// Map items while preserving the page envelope (domain -> DTO mapping
    /// convenience).
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}
