use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// The aggregate under search. The team reference stays a plain foreign key;
/// nothing here materializes the team row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

pub struct NewTeam {
    pub name: String,
}

/// Flattened member + team scalars, populated in a single statement. Team
/// columns are `Option` because the join is a left outer one: an unassigned
/// member still yields a row, with nulls on the team side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, FromQueryResult)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}
