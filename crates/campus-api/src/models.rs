//! Request/response DTOs for the REST API
//!
//! Wire format is camelCase JSON. Entity models never cross this boundary
//! directly; in particular the password hash has no field here to leak
//! through.

use campus_core::blob::MediaKind;
use campus_core::pagination::Page;
use campus_core::services::assign::{AssignFailure, AssignedEvent};
use campus_core::services::events::EventDetails;
use campus_core::services::lookups::LookupItem;
use campus_core::services::reports::{ReportDetails, ReportStats};
use campus_core::services::students::StudentDetails;
use campus_db::entities::event::EventStatus;
use campus_db::entities::event_media::MediaType;
use campus_db::entities::user::UserRole;
use campus_db::entities::{
    curator_report, document, event, event_media, invited_guest, media_link, student,
    student_group, user,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Distinguishes "field absent" (no change) from "field null" (clear).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorBody>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorBody {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ---------------------------------------------------------------------------
// Auth

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: UserBody,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub position: Option<String>,
    #[schema(value_type = String, example = "curator")]
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for UserBody {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            full_name: m.full_name,
            phone: m.phone,
            position: m.position,
            role: m.role,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub items: Vec<UserBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<user::Model>> for UserList {
    fn from(page: Page<user::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(UserBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub position: Option<Option<String>>,
    #[schema(value_type = Option<String>, example = "administrator")]
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    #[param(value_type = Option<String>)]
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

// ---------------------------------------------------------------------------
// Events

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: i32,
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
    #[schema(value_type = String, example = "Planned")]
    pub status: EventStatus,
    pub created_by_user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<event::Model> for EventBody {
    fn from(m: event::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            direction_id: m.direction_id,
            level_id: m.level_id,
            format_id: m.format_id,
            start_date: m.start_date,
            end_date: m.end_date,
            location: m.location,
            address: m.address,
            participants_count: m.participants_count,
            has_foreigners: m.has_foreigners,
            foreigners_count: m.foreigners_count,
            has_minors: m.has_minors,
            minors_count: m.minors_count,
            description: m.description,
            responsible_full_name: m.responsible_full_name,
            responsible_phone: m.responsible_phone,
            responsible_email: m.responsible_email,
            funding_amount: m.funding_amount,
            status: m.status,
            created_by_user_id: m.created_by_user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaLinkBody {
    pub id: i32,
    pub url: String,
}

impl From<media_link::Model> for MediaLinkBody {
    fn from(m: media_link::Model) -> Self {
        Self { id: m.id, url: m.url }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventMediaBody {
    pub id: i32,
    #[schema(value_type = String, example = "photo")]
    pub media_type: MediaType,
    pub url: String,
    pub description: Option<String>,
}

impl From<event_media::Model> for EventMediaBody {
    fn from(m: event_media::Model) -> Self {
        Self {
            id: m.id,
            media_type: m.media_type,
            url: m.url,
            description: m.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitedGuestBody {
    pub id: i32,
    pub full_name: String,
    pub organization: Option<String>,
    pub position: Option<String>,
}

impl From<invited_guest::Model> for InvitedGuestBody {
    fn from(m: invited_guest::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            organization: m.organization,
            position: m.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailsBody {
    #[serde(flatten)]
    pub event: EventBody,
    pub category_ids: Vec<i32>,
    pub funding_source_ids: Vec<i32>,
    pub media_links: Vec<MediaLinkBody>,
    pub event_media: Vec<EventMediaBody>,
    pub invited_guests: Vec<InvitedGuestBody>,
}

impl From<EventDetails> for EventDetailsBody {
    fn from(d: EventDetails) -> Self {
        Self {
            event: d.event.into(),
            category_ids: d.category_ids,
            funding_source_ids: d.funding_source_ids,
            media_links: d.media_links.into_iter().map(Into::into).collect(),
            event_media: d.event_media.into_iter().map(Into::into).collect(),
            invited_guests: d.invited_guests.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventList {
    pub items: Vec<EventBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<event::Model>> for EventList {
    fn from(page: Page<event::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(EventBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaLinkInput {
    pub id: Option<i32>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventMediaInput {
    pub id: Option<i32>,
    #[schema(value_type = String, example = "photo")]
    pub media_type: MediaType,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvitedGuestInput {
    pub id: Option<i32>,
    pub full_name: String,
    pub organization: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub direction_id: Option<i32>,
    pub level_id: Option<i32>,
    pub format_id: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub participants_count: Option<i32>,
    #[serde(default)]
    pub has_foreigners: bool,
    pub foreigners_count: Option<i32>,
    #[serde(default)]
    pub has_minors: bool,
    pub minors_count: Option<i32>,
    pub description: String,
    pub responsible_full_name: String,
    pub responsible_phone: Option<String>,
    pub responsible_email: Option<String>,
    pub funding_amount: Option<f64>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
    #[serde(default)]
    pub funding_source_ids: Vec<i32>,
    #[serde(default)]
    pub media_links: Vec<MediaLinkInput>,
    #[serde(default)]
    pub event_media: Vec<EventMediaInput>,
    #[serde(default)]
    pub invited_guests: Vec<InvitedGuestInput>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub direction_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub level_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub format_id: Option<Option<i32>>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub participants_count: Option<Option<i32>>,
    pub has_foreigners: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub foreigners_count: Option<Option<i32>>,
    pub has_minors: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub minors_count: Option<Option<i32>>,
    pub description: Option<String>,
    pub responsible_full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub responsible_phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub responsible_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub funding_amount: Option<Option<f64>>,
    pub category_ids: Option<Vec<i32>>,
    pub funding_source_ids: Option<Vec<i32>>,
    pub media_links: Option<Vec<MediaLinkInput>>,
    pub event_media: Option<Vec<EventMediaInput>>,
    pub invited_guests: Option<Vec<InvitedGuestInput>>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(value_type = String, example = "Held")]
    pub status: EventStatus,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[param(value_type = Option<String>)]
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
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

// ---------------------------------------------------------------------------
// Students and groups

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentBody {
    pub id: i32,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub group_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub card_number: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<student::Model> for StudentBody {
    fn from(m: student::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            birth_date: m.birth_date,
            group_id: m.group_id,
            phone: m.phone,
            email: m.email,
            card_number: m.card_number,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TagBody {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailsBody {
    #[serde(flatten)]
    pub student: StudentBody,
    pub tags: Vec<TagBody>,
}

impl From<StudentDetails> for StudentDetailsBody {
    fn from(d: StudentDetails) -> Self {
        Self {
            student: d.student.into(),
            tags: d
                .tags
                .into_iter()
                .map(|t| TagBody {
                    id: t.id,
                    name: t.name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentList {
    pub items: Vec<StudentBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<student::Model>> for StudentList {
    fn from(page: Page<student::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(StudentBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub group_id: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub card_number: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub tag_ids: Option<Vec<i32>>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub birth_date: Option<Option<NaiveDate>>,
    pub group_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub card_number: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub tag_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct StudentQuery {
    pub group_id: Option<i32>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupBody {
    pub id: i32,
    pub name: String,
    pub curator_user_id: Option<i32>,
    pub faculty: Option<String>,
    pub admission_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<student_group::Model> for GroupBody {
    fn from(m: student_group::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            curator_user_id: m.curator_user_id,
            faculty: m.faculty,
            admission_year: m.admission_year,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailsBody {
    #[serde(flatten)]
    pub group: GroupBody,
    pub student_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupList {
    pub items: Vec<GroupBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<student_group::Model>> for GroupList {
    fn from(page: Page<student_group::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(GroupBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    pub curator_user_id: Option<i32>,
    pub faculty: Option<String>,
    pub admission_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub curator_user_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub faculty: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub admission_year: Option<Option<i32>>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct GroupQuery {
    pub curator_id: Option<i32>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

// ---------------------------------------------------------------------------
// Reports

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportBody {
    pub id: i32,
    pub curator_user_id: i32,
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
    pub created_at: DateTime<Utc>,
}

impl From<curator_report::Model> for ReportBody {
    fn from(m: curator_report::Model) -> Self {
        Self {
            id: m.id,
            curator_user_id: m.curator_user_id,
            title: m.title,
            report_date: m.report_date,
            location: m.location,
            direction: m.direction,
            guest_info: m.guest_info,
            foreigners_count: m.foreigners_count,
            minors_count: m.minors_count,
            duration_hours: m.duration_hours,
            media_refs: m.media_refs,
            event_id: m.event_id,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetailsBody {
    #[serde(flatten)]
    pub report: ReportBody,
    pub participant_student_ids: Vec<i32>,
}

impl From<ReportDetails> for ReportDetailsBody {
    fn from(d: ReportDetails) -> Self {
        Self {
            report: d.report.into(),
            participant_student_ids: d.participant_student_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportList {
    pub items: Vec<ReportBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<curator_report::Model>> for ReportList {
    fn from(page: Page<curator_report::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(ReportBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
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
    #[serde(default)]
    pub participant_student_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsBody {
    pub total_reports: u64,
    pub unique_participants: u64,
    pub reports_this_month: u64,
    pub linked_events: u64,
}

impl From<ReportStats> for ReportStatsBody {
    fn from(s: ReportStats) -> Self {
        Self {
            total_reports: s.total_reports,
            unique_participants: s.unique_participants,
            reports_this_month: s.reports_this_month,
            linked_events: s.linked_events,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub curator_id: Option<i32>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

// ---------------------------------------------------------------------------
// Documents and media

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentBody {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by_user_id: Option<i32>,
}

impl From<document::Model> for DocumentBody {
    fn from(m: document::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            category: m.category,
            url: m.url,
            uploaded_at: m.uploaded_at,
            uploaded_by_user_id: m.uploaded_by_user_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentList {
    pub items: Vec<DocumentBody>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl From<Page<document::Model>> for DocumentList {
    fn from(page: Page<document::Model>) -> Self {
        Self {
            items: page.items.into_iter().map(DocumentBody::from).collect(),
            total_items: page.total_items,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DocumentQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    #[schema(value_type = String, example = "photo")]
    pub media_type: MediaKind,
    pub original_name: String,
}

// ---------------------------------------------------------------------------
// Lookups and admin

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LookupBody {
    pub id: i32,
    pub name: String,
}

impl From<LookupItem> for LookupBody {
    fn from(item: LookupItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignEventRequest {
    pub curator_ids: Vec<i32>,
    pub event: AssignEventTemplate,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignEventTemplate {
    pub title: String,
    pub direction_id: Option<i32>,
    pub level_id: Option<i32>,
    pub format_id: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub participants_count: Option<i32>,
    #[serde(default)]
    pub has_foreigners: bool,
    pub foreigners_count: Option<i32>,
    #[serde(default)]
    pub has_minors: bool,
    pub minors_count: Option<i32>,
    pub description: String,
    pub responsible_full_name: Option<String>,
    pub responsible_phone: Option<String>,
    pub responsible_email: Option<String>,
    pub funding_amount: Option<f64>,
    #[serde(default)]
    pub category_ids: Vec<i32>,
    #[serde(default)]
    pub funding_source_ids: Vec<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignEventResponse {
    pub created: Vec<AssignedEventBody>,
    pub failed: Vec<AssignFailureBody>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignedEventBody {
    pub curator_user_id: i32,
    pub event_id: i32,
}

impl From<AssignedEvent> for AssignedEventBody {
    fn from(a: AssignedEvent) -> Self {
        Self {
            curator_user_id: a.curator_user_id,
            event_id: a.event_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignFailureBody {
    pub curator_user_id: i32,
    pub message: String,
}

impl From<AssignFailure> for AssignFailureBody {
    fn from(f: AssignFailure) -> Self {
        Self {
            curator_user_id: f.curator_user_id,
            message: f.message,
        }
    }
}
