//! Uniform pagination over SeaORM selects

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Select};
use serde::Serialize;

use crate::error::CoreError;

/// Upper bound on page size, regardless of what the caller asks for.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Normalized page/limit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    /// Normalize raw query parameters: page defaults to 1, limit to the
    /// resource default, both clamped to sane bounds.
    pub fn new(page: Option<u64>, limit: Option<u64>, default_limit: u64) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(default_limit).clamp(1, MAX_PAGE_SIZE),
        }
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    /// The empty page a scoped-out caller receives.
    pub fn empty(params: PageParams) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            page: params.page,
            limit: params.limit,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Run a select with pagination, returning the requested page and totals.
pub async fn paginate<E, C>(
    select: Select<E>,
    db: &C,
    params: PageParams,
) -> Result<Page<E::Model>, CoreError>
where
    E: EntityTrait,
    E::Model: sea_orm::FromQueryResult + Sized + Send + Sync,
    C: ConnectionTrait,
{
    let paginator = select.paginate(db, params.limit);
    let totals = paginator.num_items_and_pages().await?;
    let items = paginator.fetch_page(params.page - 1).await?;

    Ok(Page {
        items,
        total_items: totals.number_of_items,
        total_pages: totals.number_of_pages,
        page: params.page,
        limit: params.limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_applied() {
        let p = PageParams::new(None, None, 20);
        assert_eq!(p, PageParams { page: 1, limit: 20 });
    }

    #[test]
    fn page_zero_clamped_to_one() {
        let p = PageParams::new(Some(0), Some(0), 10);
        assert_eq!(p, PageParams { page: 1, limit: 1 });
    }

    #[test]
    fn limit_capped() {
        let p = PageParams::new(Some(3), Some(10_000), 10);
        assert_eq!(p.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn empty_page_reports_zero_totals() {
        let page: Page<i32> = Page::empty(PageParams::new(Some(2), None, 10));
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 2);
        assert!(page.items.is_empty());
    }
}
