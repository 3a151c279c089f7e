//! Event entity
//!
//! The description minimum length and the status state machine are enforced
//! by the write services, not by the schema.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Event lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum EventStatus {
    #[sea_orm(string_value = "Planned")]
    #[serde(rename = "Planned")]
    Planned,

    #[sea_orm(string_value = "Held")]
    #[serde(rename = "Held")]
    Held,

    #[sea_orm(string_value = "Not held (Cancelled)")]
    #[serde(rename = "Not held (Cancelled)")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub direction_id: Option<i32>,

    pub level_id: Option<i32>,

    pub format_id: Option<i32>,

    pub start_date: Date,

    pub end_date: Option<Date>,

    pub location: Option<String>,

    pub address: Option<String>,

    pub participants_count: Option<i32>,

    pub has_foreigners: bool,

    pub foreigners_count: Option<i32>,

    pub has_minors: bool,

    pub minors_count: Option<i32>,

    /// Free-text description, at least 100 characters at create and update
    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub responsible_full_name: String,

    pub responsible_phone: Option<String>,

    pub responsible_email: Option<String>,

    pub funding_amount: Option<f64>,

    pub status: EventStatus,

    /// Creator, set once at creation and never mutated afterwards
    pub created_by_user_id: i32,

    pub created_at: ChronoDateTimeUtc,

    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedByUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Creator,

    #[sea_orm(
        belongs_to = "super::direction::Entity",
        from = "Column::DirectionId",
        to = "super::direction::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Direction,

    #[sea_orm(
        belongs_to = "super::level::Entity",
        from = "Column::LevelId",
        to = "super::level::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Level,

    #[sea_orm(
        belongs_to = "super::format::Entity",
        from = "Column::FormatId",
        to = "super::format::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Format,

    #[sea_orm(has_many = "super::media_link::Entity")]
    MediaLinks,

    #[sea_orm(has_many = "super::event_media::Entity")]
    Media,

    #[sea_orm(has_many = "super::invited_guest::Entity")]
    InvitedGuests,

    #[sea_orm(has_many = "super::curator_report::Entity")]
    CuratorReports,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::direction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Direction.def()
    }
}

impl Related<super::level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Level.def()
    }
}

impl Related<super::format::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Format.def()
    }
}

impl Related<super::media_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaLinks.def()
    }
}

impl Related<super::event_media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<super::invited_guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InvitedGuests.def()
    }
}

impl Related<super::participant_category::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_participant_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_participant_category::Relation::Event.def().rev())
    }
}

impl Related<super::funding_source::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_funding_source::Relation::Source.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_funding_source::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
