//! Index bootstrap run at startup and before seeding.

use bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use tracing::info;

use mercato_core::result::AppResult;
use mercato_entity::product::Product;
use mercato_entity::user::User;

use crate::connection::DatabaseHandle;
use crate::errors::map_store_error;

/// Create the indexes the application relies on.
///
/// The unique email index backs the duplicate-key error path; the text
/// index backs free-text product search.
pub async fn ensure_indexes(handle: &DatabaseHandle) -> AppResult<()> {
    let users: Collection<User> = handle.users();
    users
        .create_index(
            IndexModel::builder()
                .keys(doc! {"email": 1})
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await
        .map_err(map_store_error)?;

    let products: Collection<Product> = handle.products();
    products
        .create_index(IndexModel::builder().keys(doc! {"name": "text"}).build())
        .await
        .map_err(map_store_error)?;

    info!("Store indexes ensured");
    Ok(())
}
