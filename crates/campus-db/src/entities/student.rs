//! Student entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub full_name: String,

    /// Birth date drives the minor-tag reconciliation sweep
    pub birth_date: Option<Date>,

    /// Every student belongs to exactly one group
    pub group_id: i32,

    pub phone: Option<String>,

    /// Unique when present; multiple NULLs are allowed
    #[sea_orm(unique)]
    pub email: Option<String>,

    /// Student card number, unique when present
    #[sea_orm(unique)]
    pub card_number: Option<String>,

    pub is_active: bool,

    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_group::Entity",
        from = "Column::GroupId",
        to = "super::student_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Group,

    #[sea_orm(has_many = "super::student_tag_assignment::Entity")]
    TagAssignments,

    #[sea_orm(has_many = "super::report_participant::Entity")]
    ReportParticipations,
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::student_tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_tag_assignment::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_tag_assignment::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
