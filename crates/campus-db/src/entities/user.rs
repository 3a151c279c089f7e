//! User entity for authentication and account management

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User role in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Administrator with full access to every resource
    #[sea_orm(string_value = "administrator")]
    Administrator,

    /// Curator, scoped to their own events, groups and reports
    #[sea_orm(string_value = "curator")]
    Curator,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::Curator => "curator",
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Login email (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Argon2id password hash
    pub password_hash: String,

    pub full_name: String,

    pub phone: Option<String>,

    pub position: Option<String>,

    pub role: UserRole,

    /// Inactive users cannot log in and are skipped by bulk assignment
    pub is_active: bool,

    pub created_at: ChronoDateTimeUtc,

    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Events created by this user
    #[sea_orm(has_many = "super::event::Entity")]
    Events,

    /// Groups this user curates
    #[sea_orm(has_many = "super::student_group::Entity")]
    StudentGroups,

    /// Reports submitted by this user
    #[sea_orm(has_many = "super::curator_report::Entity")]
    CuratorReports,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl Related<super::student_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroups.def()
    }
}

impl Related<super::curator_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CuratorReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
