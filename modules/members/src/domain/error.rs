use roster_core::PageError;
use roster_db::FilterBuildError;
use thiserror::Error;

/// Single error surface for a search call. Filter and page problems are
/// detected before any statement runs; a store fault at any point aborts the
/// whole page — content success never masks a count failure.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid page request: {0}")]
    InvalidPageRequest(#[from] PageError),

    #[error("filter construction failed: {0}")]
    Filter(#[from] FilterBuildError),

    #[error("store execution failed: {0}")]
    Store(#[from] sea_orm::DbErr),
}
