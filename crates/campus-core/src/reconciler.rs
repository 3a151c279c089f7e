//! Background reconciliation sweeps
//!
//! Two independent daily loops: cancelling overdue Planned events and
//! keeping the well-known "Minor" tag in sync with student birth dates.
//! Both sweeps are idempotent, so overlapping runs or a crashed run simply
//! converge on the next tick; no run-lock is kept.

use campus_db::entities::event::EventStatus;
use campus_db::entities::student_tag::MINOR_TAG_NAME;
use campus_db::entities::{event, prelude::*, student, student_tag, student_tag_assignment};
use chrono::{Datelike, Duration, NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::collections::HashSet;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::CoreError;

/// Planned events whose dates slipped this many days into the past are
/// considered abandoned and cancelled.
pub const OVERDUE_GRACE_DAYS: i64 = 3;

/// Age of majority; exactly this age today is not a minor.
pub const MINOR_AGE_YEARS: i32 = 18;

const SWEEP_PERIOD: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// Whole years completed between `birth_date` and `today`.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Cancel Planned events whose end date (or start date, when open-ended)
/// lies more than the grace period in the past. One bulk UPDATE; returns
/// the number of rows touched.
pub async fn cancel_overdue_events(db: &DatabaseConnection) -> Result<u64, CoreError> {
    let cutoff = Utc::now().date_naive() - Duration::days(OVERDUE_GRACE_DAYS);

    let result = Event::update_many()
        .col_expr(event::Column::Status, Expr::value(EventStatus::Cancelled))
        .col_expr(event::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(
            Condition::all()
                .add(event::Column::Status.eq(EventStatus::Planned))
                .add(
                    Condition::any()
                        .add(event::Column::EndDate.lt(cutoff))
                        .add(
                            Condition::all()
                                .add(event::Column::EndDate.is_null())
                                .add(event::Column::StartDate.lt(cutoff)),
                        ),
                ),
        )
        .exec(db)
        .await?;

    info!(cancelled = result.rows_affected, "overdue event sweep finished");
    Ok(result.rows_affected)
}

/// What one minor-tag sweep did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinorTagSummary {
    pub tagged: u64,
    pub untagged: u64,
    pub failed: u64,
}

/// Reconcile the "Minor" tag over all active students with a birth date.
///
/// Each add/remove runs in its own transaction; a failure for one student
/// is logged and the sweep moves on. If the tag itself is missing the
/// sweep logs an error and changes nothing.
pub async fn sync_minor_tags(db: &DatabaseConnection) -> Result<MinorTagSummary, CoreError> {
    let Some(tag) = StudentTag::find()
        .filter(student_tag::Column::Name.eq(MINOR_TAG_NAME))
        .one(db)
        .await?
    else {
        error!(tag = MINOR_TAG_NAME, "well-known tag missing, sweep skipped");
        return Ok(MinorTagSummary::default());
    };

    let students = Student::find()
        .filter(
            Condition::all()
                .add(student::Column::IsActive.eq(true))
                .add(student::Column::BirthDate.is_not_null()),
        )
        .all(db)
        .await?;

    let tagged_ids: HashSet<i32> = StudentTagAssignment::find()
        .filter(student_tag_assignment::Column::TagId.eq(tag.id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.student_id)
        .collect();

    let today = Utc::now().date_naive();
    let mut summary = MinorTagSummary::default();

    for s in students {
        let Some(birth_date) = s.birth_date else {
            continue;
        };
        let is_minor = age_in_years(birth_date, today) < MINOR_AGE_YEARS;
        let has_tag = tagged_ids.contains(&s.id);

        let change = match (is_minor, has_tag) {
            (true, false) => apply_tag(db, s.id, tag.id, today).await,
            (false, true) => remove_tag(db, s.id, tag.id).await,
            _ => continue,
        };

        match change {
            Ok(()) if is_minor => summary.tagged += 1,
            Ok(()) => summary.untagged += 1,
            Err(err) => {
                warn!(student = s.id, error = %err, "minor-tag update failed for student");
                summary.failed += 1;
            }
        }
    }

    info!(
        tagged = summary.tagged,
        untagged = summary.untagged,
        failed = summary.failed,
        "minor-tag sweep finished"
    );
    Ok(summary)
}

async fn apply_tag(
    db: &DatabaseConnection,
    student_id: i32,
    tag_id: i32,
    today: NaiveDate,
) -> Result<(), CoreError> {
    db.transaction::<_, (), CoreError>(|txn| {
        Box::pin(async move {
            student_tag_assignment::ActiveModel {
                student_id: Set(student_id),
                tag_id: Set(tag_id),
                assigned_at: Set(today),
                notes: Set(None),
            }
            .insert(txn)
            .await?;
            Ok(())
        })
    })
    .await
    .map_err(CoreError::from)
}

async fn remove_tag(
    db: &DatabaseConnection,
    student_id: i32,
    tag_id: i32,
) -> Result<(), CoreError> {
    db.transaction::<_, (), CoreError>(|txn| {
        Box::pin(async move {
            StudentTagAssignment::delete_many()
                .filter(
                    Condition::all()
                        .add(student_tag_assignment::Column::StudentId.eq(student_id))
                        .add(student_tag_assignment::Column::TagId.eq(tag_id)),
                )
                .exec(txn)
                .await?;
            Ok(())
        })
    })
    .await
    .map_err(CoreError::from)
}

/// Daily sweep scheduler. `start` spawns one loop per sweep; `shutdown`
/// aborts them.
pub struct Scheduler {
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn start(db: DatabaseConnection) -> Self {
        let mut handles = Vec::new();

        let overdue_db = db.clone();
        handles.push(tokio::spawn(async move {
            let mut tick = tokio::time::interval(SWEEP_PERIOD);
            loop {
                tick.tick().await;
                if let Err(err) = cancel_overdue_events(&overdue_db).await {
                    error!(error = %err, "overdue event sweep failed");
                }
            }
        }));

        handles.push(tokio::spawn(async move {
            let mut tick = tokio::time::interval(SWEEP_PERIOD);
            loop {
                tick.tick().await;
                if let Err(err) = sync_minor_tags(&db).await {
                    error!(error = %err, "minor-tag sweep failed");
                }
            }
        }));

        info!("reconciliation scheduler started");
        Self { handles }
    }

    pub fn shutdown(self) {
        for handle in self.handles {
            handle.abort();
        }
        info!("reconciliation scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_today_is_not_a_minor() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let birth = NaiveDate::from_ymd_opt(2008, 3, 15).unwrap();
        assert_eq!(age_in_years(birth, today), 18);
    }

    #[test]
    fn seventeen_years_and_364_days_is_a_minor() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let birth = NaiveDate::from_ymd_opt(2008, 3, 15).unwrap();
        assert_eq!(age_in_years(birth, today), 17);
    }

    #[test]
    fn birthday_not_yet_reached_this_year() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let birth = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        assert_eq!(age_in_years(birth, today), 25);
    }
}
