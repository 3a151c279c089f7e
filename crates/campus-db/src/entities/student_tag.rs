//! Student tag entity
//!
//! The tag named "Minor" is well known to the background reconciler.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tag name the age reconciliation sweep maintains.
pub const MINOR_TAG_NAME: &str = "Minor";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student_tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_tag_assignment::Entity")]
    Assignments,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_tag_assignment::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_tag_assignment::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
