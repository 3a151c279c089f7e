//! Reference lookups: directions, levels, formats, participant categories,
//! funding sources. Read-only, id + name, sorted by name.

use campus_db::entities::{
    direction, format, funding_source, level, participant_category, prelude::*,
};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize)]
pub struct LookupItem {
    pub id: i32,
    pub name: String,
}

pub async fn directions(db: &DatabaseConnection) -> Result<Vec<LookupItem>, CoreError> {
    Ok(Direction::find()
        .order_by_asc(direction::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|row| LookupItem {
            id: row.id,
            name: row.name,
        })
        .collect())
}

pub async fn levels(db: &DatabaseConnection) -> Result<Vec<LookupItem>, CoreError> {
    Ok(Level::find()
        .order_by_asc(level::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|row| LookupItem {
            id: row.id,
            name: row.name,
        })
        .collect())
}

pub async fn formats(db: &DatabaseConnection) -> Result<Vec<LookupItem>, CoreError> {
    Ok(Format::find()
        .order_by_asc(format::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|row| LookupItem {
            id: row.id,
            name: row.name,
        })
        .collect())
}

pub async fn participant_categories(
    db: &DatabaseConnection,
) -> Result<Vec<LookupItem>, CoreError> {
    Ok(ParticipantCategory::find()
        .order_by_asc(participant_category::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|row| LookupItem {
            id: row.id,
            name: row.name,
        })
        .collect())
}

pub async fn funding_sources(db: &DatabaseConnection) -> Result<Vec<LookupItem>, CoreError> {
    Ok(FundingSource::find()
        .order_by_asc(funding_source::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|row| LookupItem {
            id: row.id,
            name: row.name,
        })
        .collect())
}
