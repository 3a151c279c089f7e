//! Curator report service
//!
//! Reports are owned by the curator who files them and never change owner.
//! They are historical records: no update path, and deleting a linked event
//! leaves the report behind with a nulled event reference.

use campus_db::entities::{curator_report, prelude::*, report_participant};
use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::HashSet;
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::{self, Principal};

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub curator_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct CreateReport {
    pub title: String,
    pub report_date: NaiveDate,
    pub location: Option<String>,
    pub direction: Option<String>,
    pub guest_info: Option<String>,
    pub foreigners_count: Option<i32>,
    pub minors_count: Option<i32>,
    pub duration_hours: Option<f64>,
    pub media_refs: Option<String>,
    pub event_id: Option<i32>,
    pub participant_student_ids: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub report: curator_report::Model,
    pub participant_student_ids: Vec<i32>,
}

/// Aggregates over the caller's visible reports
#[derive(Debug, Clone, serde::Serialize)]
pub struct ReportStats {
    pub total_reports: u64,
    pub unique_participants: u64,
    pub reports_this_month: u64,
    pub linked_events: u64,
}

pub async fn list(
    db: &DatabaseConnection,
    principal: &Principal,
    filter: &ReportFilter,
    params: PageParams,
) -> Result<Page<curator_report::Model>, CoreError> {
    let mut cond = Condition::all();
    if let Some(from) = filter.date_from {
        cond = cond.add(curator_report::Column::ReportDate.gte(from));
    }
    if let Some(to) = filter.date_to {
        cond = cond.add(curator_report::Column::ReportDate.lte(to));
    }

    let select = CuratorReport::find()
        .filter(scope::reports(principal, filter.curator_id).into_condition(cond))
        .order_by_desc(curator_report::Column::ReportDate)
        .order_by_desc(curator_report::Column::Id);

    paginate(select, db, params).await
}

pub async fn get(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<ReportDetails, CoreError> {
    let report = find_visible(db, principal, id).await?;

    let participant_student_ids = ReportParticipant::find()
        .filter(report_participant::Column::ReportId.eq(report.id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.student_id)
        .collect();

    Ok(ReportDetails {
        report,
        participant_student_ids,
    })
}

async fn find_visible<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
    id: i32,
) -> Result<curator_report::Model, CoreError> {
    let report = CuratorReport::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("report {id} not found")))?;

    if !principal.is_admin() && report.curator_user_id != principal.id {
        return Err(CoreError::not_found(format!("report {id} not found")));
    }

    Ok(report)
}

/// File a report for the calling curator. The owner is always the caller.
pub async fn create(
    db: &DatabaseConnection,
    principal: &Principal,
    input: CreateReport,
) -> Result<ReportDetails, CoreError> {
    if input.title.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "report validation failed",
            vec![FieldError::new("title", "title must not be empty")],
        ));
    }

    if let Some(event_id) = input.event_id {
        Event::find_by_id(event_id)
            .one(db)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("event {event_id} not found")))?;
    }
    check_student_ids(db, &input.participant_student_ids).await?;

    let owner_id = principal.id;
    let report = db
        .transaction::<_, curator_report::Model, CoreError>(|txn| {
            Box::pin(async move {
                let report = curator_report::ActiveModel {
                    curator_user_id: Set(owner_id),
                    title: Set(input.title),
                    report_date: Set(input.report_date),
                    location: Set(input.location),
                    direction: Set(input.direction),
                    guest_info: Set(input.guest_info),
                    foreigners_count: Set(input.foreigners_count),
                    minors_count: Set(input.minors_count),
                    duration_hours: Set(input.duration_hours),
                    media_refs: Set(input.media_refs),
                    event_id: Set(input.event_id),
                    created_at: Set(Utc::now()),
                    ..Default::default()
                }
                .insert(txn)
                .await?;

                if !input.participant_student_ids.is_empty() {
                    let unique: HashSet<i32> =
                        input.participant_student_ids.into_iter().collect();
                    ReportParticipant::insert_many(unique.into_iter().map(|student_id| {
                        report_participant::ActiveModel {
                            report_id: Set(report.id),
                            student_id: Set(student_id),
                        }
                    }))
                    .exec(txn)
                    .await?;
                }

                Ok(report)
            })
        })
        .await
        .map_err(CoreError::from)?;

    info!(report_id = report.id, curator = owner_id, "report filed");
    get(db, principal, report.id).await
}

async fn check_student_ids<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<(), CoreError> {
    if ids.is_empty() {
        return Ok(());
    }
    let known: HashSet<i32> = Student::find()
        .filter(campus_db::entities::student::Column::Id.is_in(ids.to_vec()))
        .all(db)
        .await?
        .into_iter()
        .map(|s| s.id)
        .collect();
    let missing: Vec<String> = ids
        .iter()
        .filter(|id| !known.contains(id))
        .map(|id| id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::validation_fields(
            "report validation failed",
            vec![FieldError::new(
                "participantStudentIds",
                format!("unknown student ids: {}", missing.join(", ")),
            )],
        ));
    }
    Ok(())
}

/// Delete a report; owner or administrator.
pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    let report = find_visible(db, principal, id).await?;

    CuratorReport::delete_by_id(report.id).exec(db).await?;
    info!(report_id = id, "report deleted");
    Ok(())
}

/// Aggregate counters over the reports the caller can see.
pub async fn stats(
    db: &DatabaseConnection,
    principal: &Principal,
    curator_filter: Option<i32>,
) -> Result<ReportStats, CoreError> {
    let scope = scope::reports(principal, curator_filter);
    let cond = |base: Condition| -> Condition { scope.clone().into_condition(base) };

    let total_reports = CuratorReport::find()
        .filter(cond(Condition::all()))
        .count(db)
        .await?;

    let visible_report_ids: Vec<i32> = CuratorReport::find()
        .select_only()
        .column(curator_report::Column::Id)
        .filter(cond(Condition::all()))
        .into_tuple()
        .all(db)
        .await?;

    let unique_participants = if visible_report_ids.is_empty() {
        0
    } else {
        let student_ids: Vec<i32> = ReportParticipant::find()
            .select_only()
            .column(report_participant::Column::StudentId)
            .distinct()
            .filter(report_participant::Column::ReportId.is_in(visible_report_ids))
            .into_tuple()
            .all(db)
            .await?;
        student_ids.len() as u64
    };

    let today = Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);
    let reports_this_month = CuratorReport::find()
        .filter(cond(
            Condition::all().add(curator_report::Column::ReportDate.gte(month_start)),
        ))
        .count(db)
        .await?;

    let linked_event_ids: Vec<i32> = CuratorReport::find()
        .select_only()
        .column(curator_report::Column::EventId)
        .distinct()
        .filter(cond(
            Condition::all().add(curator_report::Column::EventId.is_not_null()),
        ))
        .into_tuple()
        .all(db)
        .await?;

    Ok(ReportStats {
        total_reports,
        unique_participants,
        reports_this_month,
        linked_events: linked_event_ids.len() as u64,
    })
}
