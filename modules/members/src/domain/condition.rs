use roster_core::ast::Expr;
use serde::{Deserialize, Serialize};

/// Sparse search criteria. An absent field contributes no condition at all;
/// a blank string counts as absent, not as "match the empty string".
/// Contradictory age bounds are legal and simply match nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i64>,
    pub age_loe: Option<i64>,
}

impl MemberSearchCondition {
    /// Compose the conjunction of the present fields. `None` means "match
    /// everything". Pure; field names resolve against the member field map.
    pub fn to_filter(&self) -> Option<Expr> {
        let username = non_blank(&self.username).map(|s| Expr::eq("username", s));
        let team_name = non_blank(&self.team_name).map(|s| Expr::eq("team_name", s));
        let age_goe = self.age_goe.map(|n| Expr::ge("age", n));
        let age_loe = self.age_loe.map(|n| Expr::le("age", n));

        [username, team_name, age_goe, age_loe]
            .into_iter()
            .fold(None, Expr::and_opt)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}
