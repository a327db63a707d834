//! Rate business logic - Posting reviews and aggregating average ratings.
//!
//! Ratings attach to products through the same generic reference the
//! specifications use, so the averages computed here key on
//! `(product_kind, object_id)` and apply to every specification of the
//! rated product. A product with no rates averages to `None`, which
//! callers must render as "unrated" rather than zero.

use crate::{
    core::product,
    entities::{Rate, enums::ProductKind, rate},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, QuerySelect, Set,
    prelude::*,
    sea_query::{Expr, Func},
};
use std::collections::HashMap;

/// Posts a rate for a product. Rates are immutable once posted; there is
/// no update path.
///
/// # Errors
/// Returns an error if:
/// - The point is outside 1..=5
/// - The `(kind, object_id)` reference does not resolve to a product
/// - The database insert fails
pub async fn post_rate(
    db: &DatabaseConnection,
    user_id: i64,
    kind: ProductKind,
    object_id: i64,
    point: i32,
    review: String,
) -> Result<rate::Model> {
    if !(1..=5).contains(&point) {
        return Err(Error::InvalidPoint { point });
    }

    product::require_product(db, kind, object_id).await?;

    let rate = rate::ActiveModel {
        point: Set(point),
        review: Set(review),
        user_id: Set(user_id),
        product_kind: Set(kind),
        object_id: Set(object_id),
        ..Default::default()
    };
    rate.insert(db).await.map_err(Into::into)
}

/// Retrieves all rates for a product, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn rates_for(
    db: &DatabaseConnection,
    kind: ProductKind,
    object_id: i64,
) -> Result<Vec<rate::Model>> {
    Rate::find()
        .filter(rate::Column::ProductKind.eq(kind))
        .filter(rate::Column::ObjectId.eq(object_id))
        .order_by_desc(rate::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Computes the average rating per product for a set of product ids of one
/// kind, grouping rate rows by `object_id` and averaging `point`.
///
/// Products with no rates are absent from the map; callers treat absence
/// as "unrated".
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn average_ratings(
    db: &DatabaseConnection,
    kind: ProductKind,
    object_ids: &[i64],
) -> Result<HashMap<i64, f64>> {
    if object_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i64, f64)> = Rate::find()
        .select_only()
        .column(rate::Column::ObjectId)
        .expr_as(
            Func::avg(Expr::col((rate::Entity, rate::Column::Point))),
            "rating",
        )
        .filter(rate::Column::ProductKind.eq(kind))
        .filter(rate::Column::ObjectId.is_in(object_ids.iter().copied()))
        .group_by(rate::Column::ObjectId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_test_account, create_tv_with_category, setup_test_db};

    #[tokio::test]
    async fn test_post_rate_point_validation() -> Result<()> {
        let db = setup_test_db().await?;
        for point in [0, 6, -1] {
            let result = post_rate(&db, 1, ProductKind::Tv, 1, point, String::new()).await;
            assert!(matches!(result, Err(Error::InvalidPoint { .. })));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_post_rate_requires_product() -> Result<()> {
        let db = setup_test_db().await?;
        let result = post_rate(&db, 1, ProductKind::Tv, 999, 5, String::new()).await;
        assert!(matches!(result, Err(Error::ProductNotFound { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_average_ratings_grouped_by_product() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;
        let alice = create_test_account(&db, "alice").await?;
        let bob = create_test_account(&db, "bob").await?;

        post_rate(&db, alice.id, ProductKind::Tv, tv.id(), 5, "great".to_string()).await?;
        post_rate(&db, bob.id, ProductKind::Tv, tv.id(), 2, "meh".to_string()).await?;

        let averages = average_ratings(&db, ProductKind::Tv, &[tv.id()]).await?;
        assert_eq!(averages[&tv.id()], 3.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_unrated_product_absent_from_averages() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;

        let averages = average_ratings(&db, ProductKind::Tv, &[tv.id()]).await?;
        assert!(averages.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_rates_for_lists_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;
        let alice = create_test_account(&db, "alice").await?;

        post_rate(&db, alice.id, ProductKind::Tv, tv.id(), 4, "first".to_string()).await?;
        post_rate(&db, alice.id, ProductKind::Tv, tv.id(), 5, "second".to_string()).await?;

        let rates = rates_for(&db, ProductKind::Tv, tv.id()).await?;
        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].review, "second");
        assert_eq!(rates[1].review, "first");

        Ok(())
    }
}
