//! Student group entity
//!
//! Deleting a group cascades to its students. The curator link is optional
//! and survives curator deletion as NULL.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Group name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Curator responsible for this group, if assigned
    pub curator_user_id: Option<i32>,

    pub faculty: Option<String>,

    pub admission_year: Option<i32>,

    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CuratorUserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Curator,

    #[sea_orm(has_many = "super::student::Entity")]
    Students,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curator.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
