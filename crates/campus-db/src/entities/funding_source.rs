//! Funding source lookup table (many-to-many with events)

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "funding_sources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_funding_source::Entity")]
    EventLinks,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_funding_source::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_funding_source::Relation::Source.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
