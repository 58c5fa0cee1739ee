//! SeaORM-backed repository implementation for the members search port.
//!
//! Generic over `C: ConnectionTrait`, so it works with a plain
//! `DatabaseConnection` or a transactional one. Each call borrows the
//! connection for its duration; the repository keeps no per-call state and
//! caches nothing.

use async_trait::async_trait;
use roster_core::ast::Expr;
use roster_core::{Page, PageRequest, SortDir};
use roster_db::{page_with_count, FieldMap, FilterExt, OrderByExt};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QuerySelect,
    RelationTrait, Select, SelectModel, Selector, Set,
};
use tracing::debug;

use crate::domain::condition::MemberSearchCondition;
use crate::domain::error::SearchError;
use crate::domain::model::{Member, MemberTeamRow, NewMember, NewTeam, Team};
use crate::domain::plan::{Projection, QueryPlan};
use crate::domain::repo::MembersRepository;
use crate::infra::storage::entity::{member, team};
use crate::infra::storage::fields::{member_fields, TIEBREAKER};

pub struct SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
    fields: FieldMap,
}

impl<C> SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self {
            conn,
            fields: member_fields(),
        }
    }

    /// Hand the connection back, e.g. to read a mock transaction log.
    pub fn into_inner(self) -> C {
        self.conn
    }

    /// Base statement: root entity plus the joins the plan asked for. The
    /// team join is always LEFT OUTER so unassigned members survive
    /// member-only filters; filtering on joined columns happens in WHERE,
    /// never in the ON clause.
    fn content_select(
        &self,
        plan: &QueryPlan,
        filter: Option<&Expr>,
    ) -> Result<Select<member::Entity>, SearchError> {
        let mut query = member::Entity::find();
        if plan.join_team {
            query = query.join(JoinType::LeftJoin, member::Relation::Team.def());
        }
        Ok(query.apply_filter(filter, &self.fields)?)
    }

    /// Explicit select list for the flattened row; one round trip, no
    /// per-row follow-up queries.
    fn project_rows(query: Select<member::Entity>) -> Selector<SelectModel<MemberTeamRow>> {
        query
            .select_only()
            .column_as(member::Column::Id, "member_id")
            .column(member::Column::Username)
            .column(member::Column::Age)
            .column_as(team::Column::Id, "team_id")
            .column_as(team::Column::Name, "team_name")
            .into_model::<MemberTeamRow>()
    }

    async fn fetch_page_rows(
        &self,
        plan: &QueryPlan,
        filter: Option<&Expr>,
        page: &PageRequest,
    ) -> Result<Vec<MemberTeamRow>, SearchError> {
        let order = page
            .order
            .clone()
            .ensure_tiebreaker(TIEBREAKER, SortDir::Asc);
        let query = self
            .content_select(plan, filter)?
            .apply_order(&order, &self.fields)?
            .offset(page.offset)
            .limit(page.limit);
        Ok(Self::project_rows(query).all(&self.conn).await?)
    }

    /// Count over the identical filter. The join is kept only when the
    /// filter itself needs it; a projection-only join cannot change the
    /// number of matching members.
    async fn count_members(
        &self,
        plan: &QueryPlan,
        filter: Option<&Expr>,
    ) -> Result<u64, SearchError> {
        let mut query = member::Entity::find();
        if plan.count_needs_join() {
            query = query.join(JoinType::LeftJoin, member::Relation::Team.def());
        } else if plan.join_team {
            debug!("count query drops the projection-only team join");
        }
        let query = query.apply_filter(filter, &self.fields)?;
        Ok(query.count(&self.conn).await?)
    }
}

#[async_trait]
impl<C> MembersRepository for SeaOrmMembersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn search(
        &self,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<MemberTeamRow>, SearchError> {
        let filter = cond.to_filter();
        let plan = QueryPlan::for_search(filter.as_ref(), Projection::MemberTeamRow, &self.fields);
        let query = self.content_select(&plan, filter.as_ref())?;
        Ok(Self::project_rows(query).all(&self.conn).await?)
    }

    async fn search_members(
        &self,
        cond: &MemberSearchCondition,
    ) -> Result<Vec<Member>, SearchError> {
        let filter = cond.to_filter();
        let plan = QueryPlan::for_search(filter.as_ref(), Projection::Entity, &self.fields);
        let rows = self
            .content_select(&plan, filter.as_ref())?
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn search_page_simple(
        &self,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, SearchError> {
        page.validate()?;
        let filter = cond.to_filter();
        let plan = QueryPlan::for_search(filter.as_ref(), Projection::MemberTeamRow, &self.fields);

        let items = self.fetch_page_rows(&plan, filter.as_ref(), page).await?;
        let total = self.count_members(&plan, filter.as_ref()).await?;
        Ok(Page::new(items, page, total))
    }

    #[tracing::instrument(skip(self), level = "debug")]
    async fn search_page(
        &self,
        cond: &MemberSearchCondition,
        page: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, SearchError> {
        page.validate()?;
        let filter = cond.to_filter();
        let plan = QueryPlan::for_search(filter.as_ref(), Projection::MemberTeamRow, &self.fields);

        let items = self.fetch_page_rows(&plan, filter.as_ref(), page).await?;
        page_with_count(page, items, || self.count_members(&plan, filter.as_ref())).await
    }

    async fn find_member(&self, id: i64) -> Result<Option<Member>, SearchError> {
        let found = member::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(found.map(Into::into))
    }

    async fn insert_team(&self, new: NewTeam) -> Result<Team, SearchError> {
        let model = team::ActiveModel {
            name: Set(new.name),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;
        Ok(model.into())
    }

    async fn insert_member(&self, new: NewMember) -> Result<Member, SearchError> {
        let model = member::ActiveModel {
            username: Set(new.username),
            age: Set(new.age),
            team_id: Set(new.team_id),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;
        Ok(model.into())
    }
}
