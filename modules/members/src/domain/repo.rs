use async_trait::async_trait;
use roster_core::{Page, PageRequest};

use crate::domain::condition::MemberSearchCondition;
use crate::domain::error::SearchError;
use crate::domain::model::{Member, MemberTeamRow, NewMember, NewTeam, Team};

/// Port for the search layer: what a service/controller needs from the store.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait MembersRepository: Send + Sync {
    /// Unbounded search returning flattened member + team rows.
    /// Callers are expected to pre-limit by other means.
    async fn search(
        &self,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, SearchError>;

    /// Unbounded search returning full members; the team reference is lazy.
    async fn search_members(
        &self,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<Member>, SearchError>;

    /// Paged search that always issues the count statement.
    async fn search_page_simple(
        &self,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, SearchError>;

    /// Paged search that skips the count statement whenever the total is
    /// provable from the content slice (first page not full, or a short
    /// non-empty later page).
    async fn search_page(
        &self,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, SearchError>;

    /// Load a member by id.
    async fn find_member(&self, id: i64) -> Result<Option<Member>, SearchError>;

    /// Persist a new team, returning it with its assigned id.
    async fn insert_team(&self, team: NewTeam) -> Result<Team, SearchError>;

    /// Persist a new member, returning it with its assigned id.
    async fn insert_member(&self, member: NewMember) -> Result<Member, SearchError>;
}
