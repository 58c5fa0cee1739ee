//! Member/Team search module.
//!
//! A member optionally belongs to a team; searching is driven by a sparse
//! [`MemberSearchCondition`] whose present fields are AND-ed together.
//! Paged searches return a [`roster_core::Page`] and skip the count query
//! whenever the total is provable from the content slice alone.
//!
//! Layout follows the usual split: `domain` holds the ports and pure query
//! planning, `infra::storage` holds the SeaORM entities and the repository
//! implementation.

pub mod domain;
pub mod infra;

pub use domain::condition::MemberSearchCondition;
pub use domain::error::SearchError;
pub use domain::model::{Member, MemberTeamRow, NewMember, NewTeam, Team};
pub use domain::plan::{Projection, QueryPlan};
pub use domain::repo::MembersRepository;
pub use infra::storage::sea_orm_repo::SeaOrmMembersRepository;
