//! Generic pagination over any collection.
//!
//! The contract every list endpoint relies on: clamp the parameters,
//! exclude soft-deleted documents, count the full match set, fetch one
//! page newest-first, and report both the page length and the totals.

use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::Collection;
use serde::de::DeserializeOwned;

use mercato_core::result::AppResult;
use mercato_core::types::pagination::{Page, PageParams};

use crate::errors::map_store_error;

/// Merge the soft-delete guard into a caller-supplied filter.
pub(crate) fn exclude_deleted(mut filter: Document) -> Document {
    filter.insert("deleted", doc! {"$ne": true});
    filter
}

/// Page-fetch operation attachable to any persisted collection.
#[async_trait]
pub trait Paginate<T> {
    /// Fetch one page of documents matching `filter`, newest first.
    ///
    /// Soft-deleted documents are excluded regardless of the filter.
    /// `count` in the result reflects the returned page length, which is
    /// shorter than the limit on (or past) the last page.
    async fn paginate(&self, filter: Document, params: &PageParams) -> AppResult<Page<T>>;
}

#[async_trait]
impl<T> Paginate<T> for Collection<T>
where
    T: DeserializeOwned + Send + Sync + Unpin + 'static,
{
    async fn paginate(&self, filter: Document, params: &PageParams) -> AppResult<Page<T>> {
        let params = PageParams::new(params.page, params.limit);
        let filter = exclude_deleted(filter);

        let total = self
            .count_documents(filter.clone())
            .await
            .map_err(map_store_error)?;

        let data: Vec<T> = self
            .find(filter)
            .sort(doc! {"createdAt": -1})
            .skip(params.skip())
            .limit(params.limit as i64)
            .await
            .map_err(map_store_error)?
            .try_collect()
            .await
            .map_err(map_store_error)?;

        Ok(Page::assemble(data, total, &params))
    }
}
