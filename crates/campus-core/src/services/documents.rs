//! Institution-wide document registry
//!
//! Visible to every authenticated principal; writes are administrator-only.
//! The stored URL must parse as an absolute URL.

use campus_db::entities::{document, prelude::*};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;
use url::Url;

use crate::error::{CoreError, FieldError};
use crate::pagination::{paginate, Page, PageParams};
use crate::scope::Principal;

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub url: String,
}

fn check_url(raw: &str) -> Result<(), CoreError> {
    if Url::parse(raw).is_err() {
        return Err(CoreError::validation_fields(
            "document validation failed",
            vec![FieldError::new("url", "url is not a valid absolute URL")],
        ));
    }
    Ok(())
}

pub async fn list(
    db: &DatabaseConnection,
    filter: &DocumentFilter,
    params: PageParams,
) -> Result<Page<document::Model>, CoreError> {
    let mut cond = Condition::all();
    if let Some(ref category) = filter.category {
        cond = cond.add(document::Column::Category.eq(category.clone()));
    }
    if let Some(ref needle) = filter.search {
        cond = cond.add(document::Column::Title.contains(needle));
    }

    let select = Document::find()
        .filter(cond)
        .order_by_desc(document::Column::UploadedAt)
        .order_by_desc(document::Column::Id);

    paginate(select, db, params).await
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<document::Model, CoreError> {
    Document::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CoreError::not_found(format!("document {id} not found")))
}

pub async fn create(
    db: &DatabaseConnection,
    principal: &Principal,
    input: CreateDocument,
) -> Result<document::Model, CoreError> {
    principal.require_admin()?;

    if input.title.trim().is_empty() {
        return Err(CoreError::validation_fields(
            "document validation failed",
            vec![FieldError::new("title", "title must not be empty")],
        ));
    }
    check_url(&input.url)?;

    let document = document::ActiveModel {
        title: Set(input.title),
        description: Set(input.description),
        category: Set(input.category),
        url: Set(input.url),
        uploaded_at: Set(Utc::now()),
        uploaded_by_user_id: Set(Some(principal.id)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(document_id = document.id, "document registered");
    Ok(document)
}

pub async fn delete(
    db: &DatabaseConnection,
    principal: &Principal,
    id: i32,
) -> Result<(), CoreError> {
    principal.require_admin()?;

    let result = Document::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(CoreError::not_found(format!("document {id} not found")));
    }

    info!(document_id = id, "document deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass() {
        assert!(check_url("https://example.org/handbook.pdf").is_ok());
    }

    #[test]
    fn relative_and_garbage_urls_fail() {
        assert!(check_url("/just/a/path").is_err());
        assert!(check_url("not a url at all").is_err());
    }
}
