use std::future::Future;

use roster_core::{Page, PageRequest};
use tracing::debug;

/// Outcome of the count-elision policy for one fetched page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountDecision {
    /// First page came back short: it is the entire result set.
    Skip { total: u64 },
    /// A later page came back short but non-empty: it is the last page, so
    /// the total is `offset + fetched`.
    Derive { total: u64 },
    /// A full page proves nothing about what follows, and an empty page past
    /// the first gives no lower bound either. The count query must run.
    Query,
}

/// Decide whether the total can be proven from the shape of the content
/// slice alone. Pure function of the request and the fetched length.
pub fn count_decision(req: &PageRequest, fetched: u64) -> CountDecision {
    if req.offset == 0 && fetched < req.limit {
        return CountDecision::Skip { total: fetched };
    }
    if req.offset > 0 && fetched > 0 && fetched < req.limit {
        return CountDecision::Derive {
            total: req.offset + fetched,
        };
    }
    CountDecision::Query
}

/// Assemble a page from already-fetched content, invoking `count` only when
/// [`count_decision`] says the total cannot be derived. The count callable is
/// expected to run the identical filter as the content query; a count failure
/// fails the whole page even though content fetching succeeded.
pub async fn page_with_count<T, F, Fut, E>(
    req: &PageRequest,
    items: Vec<T>,
    count: F,
) -> Result<Page<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<u64, E>>,
{
    let fetched = items.len() as u64;
    match count_decision(req, fetched) {
        CountDecision::Skip { total } => {
            debug!(total, "count query elided: first page is not full");
            Ok(Page::new(items, req, total))
        }
        CountDecision::Derive { total } => {
            debug!(total, "count query elided: short page is the last page");
            Ok(Page::new(items, req, total))
        }
        CountDecision::Query => {
            let total = count().await?;
            Ok(Page::new(items, req, total))
        }
    }
}
