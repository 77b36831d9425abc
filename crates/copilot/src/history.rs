//! History query service.

use database::{generation, Database, GenerationView};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::validation::{history_criteria, HistoryCriteria, HistoryQuery};

/// Paging metadata for one history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl Pagination {
    /// Metadata for `page` of a `limit`-sized slicing of `total_items` rows.
    pub fn new(page: u32, limit: u32, total_items: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total_items.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };

        Self {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: limit,
            has_next_page: page < total_pages,
            has_previous_page: page > 1,
        }
    }
}

/// One page of history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryPage {
    pub generations: Vec<GenerationView>,
    pub pagination: Pagination,
}

/// Reads stored generations back.
#[derive(Debug, Clone)]
pub struct HistoryService {
    db: Database,
}

impl HistoryService {
    /// Create a service over the given store.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Validate raw parameters and read the requested page.
    pub async fn list(&self, query: &HistoryQuery) -> Result<HistoryPage> {
        let criteria = history_criteria(query)?;
        self.list_criteria(&criteria).await
    }

    /// Read one page for already validated criteria.
    ///
    /// A page past the end yields no rows but accurate metadata. An unknown
    /// language simply matches nothing.
    pub async fn list_criteria(&self, criteria: &HistoryCriteria) -> Result<HistoryPage> {
        let pool = self.db.pool();

        let total = generation::count_generations(pool, &criteria.filter).await?;
        let generations = generation::list_generation_views(
            pool,
            &criteria.filter,
            i64::from(criteria.limit),
            criteria.offset(),
        )
        .await?;

        let pagination = Pagination::new(
            criteria.page,
            criteria.limit,
            u64::try_from(total).unwrap_or_default(),
        );

        debug!(
            page = criteria.page,
            limit = criteria.limit,
            returned = generations.len(),
            total = pagination.total_items,
            "History page read"
        );

        Ok(HistoryPage {
            generations,
            pagination,
        })
    }
}
