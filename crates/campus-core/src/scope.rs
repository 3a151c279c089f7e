//! Access scope resolver
//!
//! Given the authenticated principal and a resource type, produce the row
//! filter every read and write must pass through. Ownership scoping is the
//! single source of truth here; handlers never compare roles themselves.

use campus_db::entities::{prelude::*, student_group, user::UserRole};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::error::CoreError;

/// The authenticated actor making a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: i32,
    pub role: UserRole,
}

impl Principal {
    pub fn new(id: i32, role: UserRole) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Administrator
    }

    /// Administrator gate shared by every admin-only mutation.
    pub fn require_admin(&self) -> Result<(), CoreError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(CoreError::forbidden("administrator role required"))
        }
    }
}

/// Row filter computed for a (principal, resource) pair
#[derive(Debug, Clone)]
pub enum Scope {
    /// No restriction: the principal sees every row
    All,
    /// Restricted to rows matching the condition
    Where(Condition),
    /// The principal sees nothing; short-circuit to an empty page
    Nothing,
}

impl Scope {
    /// Fold the scope into an existing condition set.
    /// `Nothing` must be checked by the caller before this point.
    pub fn into_condition(self, base: Condition) -> Condition {
        match self {
            Scope::All => base,
            Scope::Where(cond) => base.add(cond),
            Scope::Nothing => base.add(Expr::val(1).eq(0)),
        }
    }
}

/// Events: administrator sees all, curator only their own.
pub fn events(principal: &Principal) -> Scope {
    use campus_db::entities::event::Column;
    match principal.role {
        UserRole::Administrator => Scope::All,
        UserRole::Curator => {
            Scope::Where(Condition::all().add(Column::CreatedByUserId.eq(principal.id)))
        }
    }
}

/// Curator reports: administrator sees all (optionally narrowed to one
/// curator), curator only their own.
pub fn reports(principal: &Principal, curator_filter: Option<i32>) -> Scope {
    use campus_db::entities::curator_report::Column;
    match principal.role {
        UserRole::Administrator => match curator_filter {
            Some(id) => Scope::Where(Condition::all().add(Column::CuratorUserId.eq(id))),
            None => Scope::All,
        },
        UserRole::Curator => {
            Scope::Where(Condition::all().add(Column::CuratorUserId.eq(principal.id)))
        }
    }
}

/// Ids of the groups this curator owns. Used for both group and student
/// scoping; an empty result means an empty page, never an error.
pub async fn owned_group_ids<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
) -> Result<Vec<i32>, CoreError> {
    let ids: Vec<i32> = StudentGroup::find()
        .select_only()
        .column(student_group::Column::Id)
        .filter(student_group::Column::CuratorUserId.eq(principal.id))
        .into_tuple()
        .all(db)
        .await?;
    Ok(ids)
}

/// Student groups: administrator sees all (optional curator filter),
/// curator only groups they own.
pub fn groups(principal: &Principal, curator_filter: Option<i32>) -> Scope {
    use campus_db::entities::student_group::Column;
    match principal.role {
        UserRole::Administrator => match curator_filter {
            Some(id) => Scope::Where(Condition::all().add(Column::CuratorUserId.eq(id))),
            None => Scope::All,
        },
        UserRole::Curator => {
            Scope::Where(Condition::all().add(Column::CuratorUserId.eq(principal.id)))
        }
    }
}

/// Students: administrator sees all (optional group filter); curator sees
/// students of their owned groups, which requires a lookup.
pub async fn students<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
    group_filter: Option<i32>,
) -> Result<Scope, CoreError> {
    use campus_db::entities::student::Column;
    match principal.role {
        UserRole::Administrator => Ok(match group_filter {
            Some(id) => Scope::Where(Condition::all().add(Column::GroupId.eq(id))),
            None => Scope::All,
        }),
        UserRole::Curator => {
            let mut owned = owned_group_ids(db, principal).await?;
            if let Some(id) = group_filter {
                owned.retain(|g| *g == id);
            }
            if owned.is_empty() {
                Ok(Scope::Nothing)
            } else {
                Ok(Scope::Where(Condition::all().add(Column::GroupId.is_in(owned))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Principal {
        Principal::new(1, UserRole::Administrator)
    }

    fn curator(id: i32) -> Principal {
        Principal::new(id, UserRole::Curator)
    }

    #[test]
    fn admin_sees_all_events() {
        assert!(matches!(events(&admin()), Scope::All));
    }

    #[test]
    fn curator_events_are_ownership_scoped() {
        assert!(matches!(events(&curator(7)), Scope::Where(_)));
    }

    #[test]
    fn admin_report_filter_narrows() {
        assert!(matches!(reports(&admin(), Some(3)), Scope::Where(_)));
        assert!(matches!(reports(&admin(), None), Scope::All));
    }

    #[test]
    fn curator_ignores_curator_filter_on_reports() {
        // A curator asking for someone else's reports still only gets their own
        assert!(matches!(reports(&curator(5), Some(9)), Scope::Where(_)));
    }

    #[test]
    fn require_admin_rejects_curator() {
        assert!(curator(2).require_admin().is_err());
        assert!(admin().require_admin().is_ok());
    }
}
