//! Curator report entity
//!
//! The optional event link is severed (SET NULL) when the event is deleted;
//! reports are historical records and are never cascaded away with events.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "curator_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Report owner, fixed at creation
    pub curator_user_id: i32,

    pub title: String,

    pub report_date: Date,

    pub location: Option<String>,

    pub direction: Option<String>,

    pub guest_info: Option<String>,

    pub foreigners_count: Option<i32>,

    pub minors_count: Option<i32>,

    pub duration_hours: Option<f64>,

    /// Free-text references to photos/videos
    #[sea_orm(column_type = "Text", nullable)]
    pub media_refs: Option<String>,

    pub event_id: Option<i32>,

    /// Fixed at insertion; reports carry no update timestamp
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CuratorUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Curator,

    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Event,

    #[sea_orm(has_many = "super::report_participant::Entity")]
    Participants,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curator.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::report_participant::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::report_participant::Relation::Report.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
