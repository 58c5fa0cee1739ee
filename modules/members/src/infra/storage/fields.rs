use roster_db::{FieldKind, FieldMap};

use super::entity::{member, team};

/// Stable tiebreaker appended to every bounded query.
pub const TIEBREAKER: &str = "member_id";

/// Whitelist of searchable/sortable fields. Team columns are registered as
/// joined, which is what lets the planner drop the join from count queries
/// that never filter on them.
pub fn member_fields() -> FieldMap {
    FieldMap::new()
        .insert::<member::Entity>(TIEBREAKER, member::Column::Id, FieldKind::I64)
        .insert::<member::Entity>("username", member::Column::Username, FieldKind::String)
        .insert::<member::Entity>("age", member::Column::Age, FieldKind::I64)
        .insert_joined::<team::Entity>("team_id", team::Column::Id, FieldKind::I64)
        .insert_joined::<team::Entity>("team_name", team::Column::Name, FieldKind::String)
}
