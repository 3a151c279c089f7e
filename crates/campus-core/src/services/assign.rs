//! Admin bulk event assignment
//!
//! One independent event per target curator. Target validation is
//! all-or-nothing, but creation is deliberately per-target: a failure for
//! one curator does not roll back events already created for the others.

use campus_db::entities::{prelude::*, user, user::UserRole};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{info, warn};

use crate::error::{CoreError, FieldError};
use crate::scope::Principal;
use crate::services::events::{self, CreateEvent, EventMediaInput, InvitedGuestInput, MediaLinkInput};

/// Event template applied to every target. Responsible-person fields are
/// optional here; blanks default from each curator's own profile.
#[derive(Debug, Clone)]
pub struct EventTemplate {
    pub title: String,
    pub direction_id: Option<i32>,
    pub level_id: Option<i32>,
    pub format_id: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub participants_count: Option<i32>,
    pub has_foreigners: bool,
    pub foreigners_count: Option<i32>,
    pub has_minors: bool,
    pub minors_count: Option<i32>,
    pub description: String,
    pub responsible_full_name: Option<String>,
    pub responsible_phone: Option<String>,
    pub responsible_email: Option<String>,
    pub funding_amount: Option<f64>,
    pub category_ids: Vec<i32>,
    pub funding_source_ids: Vec<i32>,
    pub media_links: Vec<MediaLinkInput>,
    pub event_media: Vec<EventMediaInput>,
    pub invited_guests: Vec<InvitedGuestInput>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AssignedEvent {
    pub curator_user_id: i32,
    pub event_id: i32,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AssignFailure {
    pub curator_user_id: i32,
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct AssignOutcome {
    pub created: Vec<AssignedEvent>,
    pub failed: Vec<AssignFailure>,
}

fn template_for(template: &EventTemplate, curator: &user::Model) -> CreateEvent {
    CreateEvent {
        title: template.title.clone(),
        direction_id: template.direction_id,
        level_id: template.level_id,
        format_id: template.format_id,
        start_date: template.start_date,
        end_date: template.end_date,
        location: template.location.clone(),
        address: template.address.clone(),
        participants_count: template.participants_count,
        has_foreigners: template.has_foreigners,
        foreigners_count: template.foreigners_count,
        has_minors: template.has_minors,
        minors_count: template.minors_count,
        description: template.description.clone(),
        responsible_full_name: template
            .responsible_full_name
            .clone()
            .unwrap_or_else(|| curator.full_name.clone()),
        responsible_phone: template
            .responsible_phone
            .clone()
            .or_else(|| curator.phone.clone()),
        responsible_email: template
            .responsible_email
            .clone()
            .or_else(|| Some(curator.email.clone())),
        funding_amount: template.funding_amount,
        category_ids: template.category_ids.clone(),
        funding_source_ids: template.funding_source_ids.clone(),
        media_links: template.media_links.clone(),
        event_media: template.event_media.clone(),
        invited_guests: template.invited_guests.clone(),
    }
}

pub async fn assign_event(
    db: &DatabaseConnection,
    principal: &Principal,
    target_curator_ids: Vec<i32>,
    template: EventTemplate,
) -> Result<AssignOutcome, CoreError> {
    principal.require_admin()?;

    if target_curator_ids.is_empty() {
        return Err(CoreError::validation_fields(
            "assignment failed",
            vec![FieldError::new(
                "curatorIds",
                "at least one target curator is required",
            )],
        ));
    }

    let curators = User::find()
        .filter(user::Column::Id.is_in(target_curator_ids.clone()))
        .all(db)
        .await?;

    // Every target must be an existing, active curator before anything runs
    let mut invalid = Vec::new();
    for &id in &target_curator_ids {
        match curators.iter().find(|u| u.id == id) {
            None => invalid.push(format!("{id} (not found)")),
            Some(u) if u.role != UserRole::Curator => invalid.push(format!("{id} (not a curator)")),
            Some(u) if !u.is_active => invalid.push(format!("{id} (deactivated)")),
            Some(_) => {}
        }
    }
    if !invalid.is_empty() {
        return Err(CoreError::validation_fields(
            "assignment failed",
            vec![FieldError::new(
                "curatorIds",
                format!("invalid target curators: {}", invalid.join(", ")),
            )],
        ));
    }

    let mut outcome = AssignOutcome {
        created: Vec::new(),
        failed: Vec::new(),
    };

    for &curator_id in &target_curator_ids {
        let curator = curators
            .iter()
            .find(|u| u.id == curator_id)
            .ok_or_else(|| CoreError::Internal("validated curator vanished".to_string()))?;

        match events::create_for(db, curator.id, template_for(&template, curator)).await {
            Ok(event) => outcome.created.push(AssignedEvent {
                curator_user_id: curator.id,
                event_id: event.id,
            }),
            Err(err) => {
                warn!(curator = curator.id, error = %err, "event assignment failed for target");
                outcome.failed.push(AssignFailure {
                    curator_user_id: curator.id,
                    message: err.to_string(),
                });
            }
        }
    }

    info!(
        created = outcome.created.len(),
        failed = outcome.failed.len(),
        "bulk event assignment finished"
    );
    Ok(outcome)
}
