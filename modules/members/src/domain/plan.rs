use roster_core::ast::Expr;
use roster_db::{filter_requires_join, FieldMap};

/// Output shape of a search statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// Full `Member` rows; the team association is left lazy.
    Entity,
    /// Flattened member + team scalars in one select list.
    MemberTeamRow,
}

/// Join/projection plan for one search call. Joins are added for data-shape
/// reasons (the select list needs team columns) or because the filter touches
/// a team column — and the team join is always a LEFT OUTER join, so members
/// without a team survive member-only filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryPlan {
    pub projection: Projection,
    pub join_team: bool,
    /// The filter itself references a joined column. When false, the count
    /// query may drop the join without changing the number.
    pub join_for_filter: bool,
    /// Team scalars are materialized in the same round trip. Entity
    /// projection keeps the association lazy instead.
    pub eager_loaded: bool,
}

impl QueryPlan {
    pub fn for_search(filter: Option<&Expr>, projection: Projection, fields: &FieldMap) -> Self {
        let join_for_filter = filter.is_some_and(|f| filter_requires_join(f, fields));
        let join_for_projection = matches!(projection, Projection::MemberTeamRow);
        QueryPlan {
            projection,
            join_team: join_for_filter || join_for_projection,
            join_for_filter,
            eager_loaded: join_for_projection,
        }
    }

    pub fn count_needs_join(&self) -> bool {
        self.join_for_filter
    }
}
