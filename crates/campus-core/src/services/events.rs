//! Event read/write service
//!
//! Creates and updates are multi-table writes (event row, category/funding
//! junctions, three child collections) executed as one transaction.
//! Association id lists use full-replace semantics; child collections
//! reconcile by id. Status changes go through `update_status` only.

use campus_db::entities::{
    event, event_funding_source, event_media, event_participant_category, invited_guest,
    media_link, prelude::*,
};
use campus_db::entities::event::EventStatus;
use campus_db::entities::event_media::MediaType;
use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::Query;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;
use tracing::info;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::{self, Principal, Scope};
use crate::status;

/// Minimum accepted description length, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 100;

/// Optional, additive AND filters for event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    pub direction_id: Option<i32>,
    pub level_id: Option<i32>,
    pub format_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub responsible: Option<String>,
    pub title: Option<String>,
    pub category_id: Option<i32>,
    pub funding_source_id: Option<i32>,
    pub has_media_links: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct MediaLinkInput {
    pub id: Option<i32>,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct EventMediaInput {
    pub id: Option<i32>,
    pub media_type: MediaType,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct InvitedGuestInput {
    pub id: Option<i32>,
    pub full_name: String,
    pub organization: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateEvent {
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
    pub responsible_full_name: String,
    pub responsible_phone: Option<String>,
    pub responsible_email: Option<String>,
    pub funding_amount: Option<f64>,
    pub category_ids: Vec<i32>,
    pub funding_source_ids: Vec<i32>,
    pub media_links: Vec<MediaLinkInput>,
    pub event_media: Vec<EventMediaInput>,
    pub invited_guests: Vec<InvitedGuestInput>,
}

/// Scalar fields are updated only when present. `Some(vec![])` on an
/// association list clears it; `None` leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub direction_id: Option<Option<i32>>,
    pub level_id: Option<Option<i32>>,
    pub format_id: Option<Option<i32>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub location: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub participants_count: Option<Option<i32>>,
    pub has_foreigners: Option<bool>,
    pub foreigners_count: Option<Option<i32>>,
    pub has_minors: Option<bool>,
    pub minors_count: Option<Option<i32>>,
    pub description: Option<String>,
    pub responsible_full_name: Option<String>,
    pub responsible_phone: Option<Option<String>>,
    pub responsible_email: Option<Option<String>>,
    pub funding_amount: Option<Option<f64>>,
    pub category_ids: Option<Vec<i32>>,
    pub funding_source_ids: Option<Vec<i32>>,
    pub media_links: Option<Vec<MediaLinkInput>>,
    pub event_media: Option<Vec<EventMediaInput>>,
    pub invited_guests: Option<Vec<InvitedGuestInput>>,
}

/// Event row plus its associations and children
#[derive(Debug, Clone)]
pub struct EventDetails {
    pub event: event::Model,
    pub category_ids: Vec<i32>,
    pub funding_source_ids: Vec<i32>,
    pub media_links: Vec<media_link::Model>,
    pub event_media: Vec<event_media::Model>,
    pub invited_guests: Vec<invited_guest::Model>,
}

fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(CoreError::validation_fields(
            "event validation failed",
            vec![FieldError::new(
                "description",
                format!("description must be at least {MIN_DESCRIPTION_CHARS} characters"),
            )],
        ));
    }
    Ok(())
}

fn build_filter(filter: &EventFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(status) = filter.status {
        cond = cond.add(event::Column::Status.eq(status));
    }
    if let Some(id) = filter.direction_id {
        cond = cond.add(event::Column::DirectionId.eq(id));
    }
    if let Some(id) = filter.level_id {
        cond = cond.add(event::Column::LevelId.eq(id));
    }
    if let Some(id) = filter.format_id {
        cond = cond.add(event::Column::FormatId.eq(id));
    }
    if let Some(from) = filter.date_from {
        cond = cond.add(event::Column::StartDate.gte(from));
    }
    if let Some(to) = filter.date_to {
        cond = cond.add(event::Column::StartDate.lte(to));
    }
    if let Some(ref needle) = filter.responsible {
        cond = cond.add(event::Column::ResponsibleFullName.contains(needle));
    }
    if let Some(ref needle) = filter.title {
        cond = cond.add(event::Column::Title.contains(needle));
    }
    if let Some(id) = filter.category_id {
        cond = cond.add(
            event::Column::Id.in_subquery(
                Query::select()
                    .column(event_participant_category::Column::EventId)
                    .from(EventParticipantCategory)
                    .and_where(event_participant_category::Column::CategoryId.eq(id))
                    .to_owned(),
            ),
        );
    }
    if let Some(id) = filter.funding_source_id {
        cond = cond.add(
            event::Column::Id.in_subquery(
                Query::select()
                    .column(event_funding_source::Column::EventId)
                    .from(EventFundingSource)
                    .and_where(event_funding_source::Column::SourceId.eq(id))
                    .to_owned(),
            ),
        );
    }
    if let Some(wants_links) = filter.has_media_links {
        let subquery = Query::select()
            .column(media_link::Column::EventId)
            .from(MediaLink)
            .to_owned();
        cond = cond.add(if wants_links {
            event::Column::Id.in_subquery(subquery)
        } else {
            event::Column::Id.not_in_subquery(subquery)
        });
    }

    cond
}

/// List events visible to the principal, newest start date first.
pub async fn list(
    db: &DatabaseConnection,
    principal: &Principal,
    filter: &EventFilter,
    params: PageParams,
) -> Result<Page<event::Model>, CoreError> {
    let select = Event::find()
        .filter(scope::events(principal).into_condition(build_filter(filter)))
        .order_by_desc(event::Column::StartDate)
        .order_by_desc(event::Column::Id);

    paginate(select, db, params).await
}

/// Fetch one event the principal is allowed to see; rows outside the
/// principal's scope read as absent.
pub async fn get(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<EventDetails, CoreError> {
    let event = find_visible(db, principal, id).await?;
    load_details(db, event).await
}

async fn find_visible<C: ConnectionTrait>(
    db: &C,
    principal: &Principal,
    id: i32,
) -> Result<event::Model, CoreError> {
    let event = Event::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("event {id} not found")))?;

    if !principal.is_admin() && event.created_by_user_id != principal.id {
        return Err(CoreError::not_found(format!("event {id} not found")));
    }

    Ok(event)
}

async fn load_details<C: ConnectionTrait>(
    db: &C,
    event: event::Model,
) -> Result<EventDetails, CoreError> {
    let category_ids = EventParticipantCategory::find()
        .filter(event_participant_category::Column::EventId.eq(event.id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.category_id)
        .collect();

    let funding_source_ids = EventFundingSource::find()
        .filter(event_funding_source::Column::EventId.eq(event.id))
        .all(db)
        .await?
        .into_iter()
        .map(|row| row.source_id)
        .collect();

    let media_links = MediaLink::find()
        .filter(media_link::Column::EventId.eq(event.id))
        .order_by_asc(media_link::Column::Id)
        .all(db)
        .await?;

    let event_media = EventMedia::find()
        .filter(event_media::Column::EventId.eq(event.id))
        .order_by_asc(event_media::Column::Id)
        .all(db)
        .await?;

    let invited_guests = InvitedGuest::find()
        .filter(invited_guest::Column::EventId.eq(event.id))
        .order_by_asc(invited_guest::Column::Id)
        .all(db)
        .await?;

    Ok(EventDetails {
        event,
        category_ids,
        funding_source_ids,
        media_links,
        event_media,
        invited_guests,
    })
}

/// Create an event owned by the principal, with all associations and
/// children, atomically.
pub async fn create(
    db: &DatabaseConnection,
    principal: &Principal,
    input: CreateEvent,
) -> Result<EventDetails, CoreError> {
    let created = create_for(db, principal.id, input).await?;
    load_details(db, created).await
}

/// Insert an event tree for an explicit creator. Shared with admin bulk
/// assignment, which creates events on behalf of curators.
pub async fn create_for(
    db: &DatabaseConnection,
    creator_user_id: i32,
    input: CreateEvent,
) -> Result<event::Model, CoreError> {
    validate_description(&input.description)?;
    if input.title.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "event validation failed",
            vec![FieldError::new("title", "title must not be empty")],
        ));
    }
    if input.responsible_full_name.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "event validation failed",
            vec![FieldError::new(
                "responsibleFullName",
                "responsible person full name must not be empty",
            )],
        ));
    }

    let event = db
        .transaction::<_, event::Model, CoreError>(|txn| {
            Box::pin(async move {
                let now = Utc::now();
                let event = event::ActiveModel {
                    title: Set(input.title),
                    direction_id: Set(input.direction_id),
                    level_id: Set(input.level_id),
                    format_id: Set(input.format_id),
                    start_date: Set(input.start_date),
                    end_date: Set(input.end_date),
                    location: Set(input.location),
                    address: Set(input.address),
                    participants_count: Set(input.participants_count),
                    has_foreigners: Set(input.has_foreigners),
                    foreigners_count: Set(input.foreigners_count),
                    has_minors: Set(input.has_minors),
                    minors_count: Set(input.minors_count),
                    description: Set(input.description),
                    responsible_full_name: Set(input.responsible_full_name),
                    responsible_phone: Set(input.responsible_phone),
                    responsible_email: Set(input.responsible_email),
                    funding_amount: Set(input.funding_amount),
                    status: Set(EventStatus::Planned),
                    created_by_user_id: Set(creator_user_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(txn)
                .await?;

                replace_categories(txn, event.id, &input.category_ids).await?;
                replace_funding_sources(txn, event.id, &input.funding_source_ids).await?;

                if !input.media_links.is_empty() {
                    MediaLink::insert_many(input.media_links.into_iter().map(|link| {
                        media_link::ActiveModel {
                            event_id: Set(event.id),
                            url: Set(link.url),
                            ..Default::default()
                        }
                    }))
                    .exec(txn)
                    .await?;
                }

                if !input.event_media.is_empty() {
                    EventMedia::insert_many(input.event_media.into_iter().map(|media| {
                        event_media::ActiveModel {
                            event_id: Set(event.id),
                            media_type: Set(media.media_type),
                            url: Set(media.url),
                            description: Set(media.description),
                            ..Default::default()
                        }
                    }))
                    .exec(txn)
                    .await?;
                }

                if !input.invited_guests.is_empty() {
                    InvitedGuest::insert_many(input.invited_guests.into_iter().map(|guest| {
                        invited_guest::ActiveModel {
                            event_id: Set(event.id),
                            full_name: Set(guest.full_name),
                            organization: Set(guest.organization),
                            position: Set(guest.position),
                            ..Default::default()
                        }
                    }))
                    .exec(txn)
                    .await?;
                }

                Ok(event)
            })
        })
        .await
        .map_err(CoreError::from)?;

    info!(event_id = event.id, creator = creator_user_id, "event created");
    Ok(event)
}

/// Full replace of the participant-category association set.
async fn replace_categories<C: ConnectionTrait>(
    txn: &C,
    event_id: i32,
    category_ids: &[i32],
) -> Result<(), CoreError> {
    EventParticipantCategory::delete_many()
        .filter(event_participant_category::Column::EventId.eq(event_id))
        .exec(txn)
        .await?;
    if !category_ids.is_empty() {
        EventParticipantCategory::insert_many(category_ids.iter().map(|&category_id| {
            event_participant_category::ActiveModel {
                event_id: Set(event_id),
                category_id: Set(category_id),
            }
        }))
        .exec(txn)
        .await?;
    }
    Ok(())
}

/// Full replace of the funding-source association set.
async fn replace_funding_sources<C: ConnectionTrait>(
    txn: &C,
    event_id: i32,
    source_ids: &[i32],
) -> Result<(), CoreError> {
    EventFundingSource::delete_many()
        .filter(event_funding_source::Column::EventId.eq(event_id))
        .exec(txn)
        .await?;
    if !source_ids.is_empty() {
        EventFundingSource::insert_many(source_ids.iter().map(|&source_id| {
            event_funding_source::ActiveModel {
                event_id: Set(event_id),
                source_id: Set(source_id),
            }
        }))
        .exec(txn)
        .await?;
    }
    Ok(())
}

/// Update scalar fields and reconcile associations/children. Status and
/// creator are not reachable through this path.
pub async fn update(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
    input: UpdateEvent,
) -> Result<EventDetails, CoreError> {
    let existing = find_visible(db, principal, id).await?;

    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    let updated = db
        .transaction::<_, event::Model, CoreError>(|txn| {
            Box::pin(async move {
                let mut active: event::ActiveModel = existing.into();

                if let Some(title) = input.title {
                    active.title = Set(title);
                }
                if let Some(direction_id) = input.direction_id {
                    active.direction_id = Set(direction_id);
                }
                if let Some(level_id) = input.level_id {
                    active.level_id = Set(level_id);
                }
                if let Some(format_id) = input.format_id {
                    active.format_id = Set(format_id);
                }
                if let Some(start_date) = input.start_date {
                    active.start_date = Set(start_date);
                }
                if let Some(end_date) = input.end_date {
                    active.end_date = Set(end_date);
                }
                if let Some(location) = input.location {
                    active.location = Set(location);
                }
                if let Some(address) = input.address {
                    active.address = Set(address);
                }
                if let Some(participants_count) = input.participants_count {
                    active.participants_count = Set(participants_count);
                }
                if let Some(has_foreigners) = input.has_foreigners {
                    active.has_foreigners = Set(has_foreigners);
                }
                if let Some(foreigners_count) = input.foreigners_count {
                    active.foreigners_count = Set(foreigners_count);
                }
                if let Some(has_minors) = input.has_minors {
                    active.has_minors = Set(has_minors);
                }
                if let Some(minors_count) = input.minors_count {
                    active.minors_count = Set(minors_count);
                }
                if let Some(description) = input.description {
                    active.description = Set(description);
                }
                if let Some(responsible_full_name) = input.responsible_full_name {
                    active.responsible_full_name = Set(responsible_full_name);
                }
                if let Some(responsible_phone) = input.responsible_phone {
                    active.responsible_phone = Set(responsible_phone);
                }
                if let Some(responsible_email) = input.responsible_email {
                    active.responsible_email = Set(responsible_email);
                }
                if let Some(funding_amount) = input.funding_amount {
                    active.funding_amount = Set(funding_amount);
                }
                active.updated_at = Set(Utc::now());

                let event = active.update(txn).await?;

                if let Some(ref category_ids) = input.category_ids {
                    replace_categories(txn, event.id, category_ids).await?;
                }
                if let Some(ref source_ids) = input.funding_source_ids {
                    replace_funding_sources(txn, event.id, source_ids).await?;
                }

                if let Some(links) = input.media_links {
                    reconcile_media_links(txn, event.id, links).await?;
                }
                if let Some(media) = input.event_media {
                    reconcile_event_media(txn, event.id, media).await?;
                }
                if let Some(guests) = input.invited_guests {
                    reconcile_invited_guests(txn, event.id, guests).await?;
                }

                Ok(event)
            })
        })
        .await
        .map_err(CoreError::from)?;

    load_details(db, updated).await
}

/// Reconcile by id: present ids update in place, missing ids insert,
/// absent existing ids delete.
async fn reconcile_media_links<C: ConnectionTrait>(
    txn: &C,
    event_id: i32,
    incoming: Vec<MediaLinkInput>,
) -> Result<(), CoreError> {
    let existing = MediaLink::find()
        .filter(media_link::Column::EventId.eq(event_id))
        .all(txn)
        .await?;
    let keep: HashSet<i32> = incoming.iter().filter_map(|link| link.id).collect();

    let stale: Vec<i32> = existing
        .iter()
        .filter(|row| !keep.contains(&row.id))
        .map(|row| row.id)
        .collect();
    if !stale.is_empty() {
        MediaLink::delete_many()
            .filter(media_link::Column::Id.is_in(stale))
            .exec(txn)
            .await?;
    }

    let existing_ids: HashSet<i32> = existing.iter().map(|row| row.id).collect();
    for link in incoming {
        match link.id {
            Some(link_id) => {
                if !existing_ids.contains(&link_id) {
                    return Err(CoreError::not_found(format!(
                        "media link {link_id} does not belong to event {event_id}"
                    )));
                }
                media_link::ActiveModel {
                    id: Set(link_id),
                    event_id: Set(event_id),
                    url: Set(link.url),
                }
                .update(txn)
                .await?;
            }
            None => {
                media_link::ActiveModel {
                    event_id: Set(event_id),
                    url: Set(link.url),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(())
}

async fn reconcile_event_media<C: ConnectionTrait>(
    txn: &C,
    event_id: i32,
    incoming: Vec<EventMediaInput>,
) -> Result<(), CoreError> {
    let existing = EventMedia::find()
        .filter(event_media::Column::EventId.eq(event_id))
        .all(txn)
        .await?;
    let keep: HashSet<i32> = incoming.iter().filter_map(|media| media.id).collect();

    let stale: Vec<i32> = existing
        .iter()
        .filter(|row| !keep.contains(&row.id))
        .map(|row| row.id)
        .collect();
    if !stale.is_empty() {
        EventMedia::delete_many()
            .filter(event_media::Column::Id.is_in(stale))
            .exec(txn)
            .await?;
    }

    let existing_ids: HashSet<i32> = existing.iter().map(|row| row.id).collect();
    for media in incoming {
        match media.id {
            Some(media_id) => {
                if !existing_ids.contains(&media_id) {
                    return Err(CoreError::not_found(format!(
                        "media item {media_id} does not belong to event {event_id}"
                    )));
                }
                event_media::ActiveModel {
                    id: Set(media_id),
                    event_id: Set(event_id),
                    media_type: Set(media.media_type),
                    url: Set(media.url),
                    description: Set(media.description),
                }
                .update(txn)
                .await?;
            }
            None => {
                event_media::ActiveModel {
                    event_id: Set(event_id),
                    media_type: Set(media.media_type),
                    url: Set(media.url),
                    description: Set(media.description),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(())
}

async fn reconcile_invited_guests<C: ConnectionTrait>(
    txn: &C,
    event_id: i32,
    incoming: Vec<InvitedGuestInput>,
) -> Result<(), CoreError> {
    let existing = InvitedGuest::find()
        .filter(invited_guest::Column::EventId.eq(event_id))
        .all(txn)
        .await?;
    let keep: HashSet<i32> = incoming.iter().filter_map(|guest| guest.id).collect();

    let stale: Vec<i32> = existing
        .iter()
        .filter(|row| !keep.contains(&row.id))
        .map(|row| row.id)
        .collect();
    if !stale.is_empty() {
        InvitedGuest::delete_many()
            .filter(invited_guest::Column::Id.is_in(stale))
            .exec(txn)
            .await?;
    }

    let existing_ids: HashSet<i32> = existing.iter().map(|row| row.id).collect();
    for guest in incoming {
        match guest.id {
            Some(guest_id) => {
                if !existing_ids.contains(&guest_id) {
                    return Err(CoreError::not_found(format!(
                        "invited guest {guest_id} does not belong to event {event_id}"
                    )));
                }
                invited_guest::ActiveModel {
                    id: Set(guest_id),
                    event_id: Set(event_id),
                    full_name: Set(guest.full_name),
                    organization: Set(guest.organization),
                    position: Set(guest.position),
                }
                .update(txn)
                .await?;
            }
            None => {
                invited_guest::ActiveModel {
                    event_id: Set(event_id),
                    full_name: Set(guest.full_name),
                    organization: Set(guest.organization),
                    position: Set(guest.position),
                    ..Default::default()
                }
                .insert(txn)
                .await?;
            }
        }
    }

    Ok(())
}

/// Delete an event. Administrator only; children cascade, linked reports
/// keep their rows with a nulled event reference.
pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    principal.require_admin()?;

    let result = Event::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CoreError::not_found(format!("event {id} not found")));
    }

    info!(event_id = id, "event deleted");
    Ok(())
}

/// Single-field status mutation, guarded by the transition rules.
pub async fn update_status(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
    requested: EventStatus,
) -> Result<event::Model, CoreError> {
    let event = Event::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("event {id} not found")))?;

    let is_creator = event.created_by_user_id == principal.id;
    status::check_transition(principal, is_creator, event.status, requested)?;

    let mut active: event::ActiveModel = event.into();
    active.status = Set(requested);
    active.updated_at = Set(Utc::now());
    let updated = active.update(db).await?;

    info!(event_id = id, status = ?requested, "event status changed");
    Ok(updated)
}
