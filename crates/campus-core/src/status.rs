//! Event status transition guard
//!
//! Status is a single-field mutation authorized independently of the
//! general event update path. The only transition open to a non-admin is
//! the creator marking their own Planned event as Held; administrators may
//! set any status from any state, including reverts. The overdue sweep
//! cancels events without going through this guard at all.

use campus_db::entities::event::EventStatus;

use crate::error::CoreError;
use crate::scope::Principal;

pub fn check_transition(
    principal: &Principal,
    is_creator: bool,
    current: EventStatus,
    requested: EventStatus,
) -> Result<(), CoreError> {
    if principal.is_admin() {
        return Ok(());
    }

    if !is_creator {
        return Err(CoreError::forbidden(
            "only the event creator or an administrator may change status",
        ));
    }

    match (current, requested) {
        (EventStatus::Planned, EventStatus::Held) => Ok(()),
        _ => Err(CoreError::forbidden(
            "only a Planned event can be marked Held by its creator",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_db::entities::user::UserRole;

    fn admin() -> Principal {
        Principal::new(1, UserRole::Administrator)
    }

    fn curator() -> Principal {
        Principal::new(2, UserRole::Curator)
    }

    #[test]
    fn creator_may_hold_planned_event() {
        assert!(check_transition(&curator(), true, EventStatus::Planned, EventStatus::Held).is_ok());
    }

    #[test]
    fn creator_may_not_cancel() {
        let result =
            check_transition(&curator(), true, EventStatus::Planned, EventStatus::Cancelled);
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn creator_may_not_revert_held_event() {
        let result = check_transition(&curator(), true, EventStatus::Held, EventStatus::Planned);
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn non_creator_curator_is_rejected_outright() {
        let result =
            check_transition(&curator(), false, EventStatus::Planned, EventStatus::Held);
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn admin_may_set_anything_from_anywhere() {
        for current in [EventStatus::Planned, EventStatus::Held, EventStatus::Cancelled] {
            for requested in [EventStatus::Planned, EventStatus::Held, EventStatus::Cancelled] {
                assert!(check_transition(&admin(), false, current, requested).is_ok());
            }
        }
    }
}
