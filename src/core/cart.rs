//! Cart business logic - A user's intended purchases.
//!
//! Adding the same specification twice merges into one row by summing
//! quantities; the merge runs inside a transaction so concurrent adds
//! cannot interleave a read-modify-write. The distinct-customer counts
//! computed here feed the "popular" catalog listing.

use crate::{
    entities::{Cart, Specification, cart, specification},
    errors::{Error, Result},
};
use sea_orm::{
    QueryOrder, QuerySelect, Set, TransactionTrait,
    prelude::*,
    sea_query::{Expr, Func},
};
use std::collections::HashMap;

/// Adds a specification to a user's cart, merging with an existing row for
/// the same `(user, specification)` pair by summing quantities.
///
/// # Errors
/// Returns an error if:
/// - The quantity is below 1
/// - The specification does not exist
/// - The database write fails
pub async fn add_to_cart(
    db: &DatabaseConnection,
    user_id: i64,
    specification_id: i64,
    quantity: i32,
) -> Result<cart::Model> {
    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let txn = db.begin().await?;

    Specification::find_by_id(specification_id)
        .one(&txn)
        .await?
        .ok_or(Error::SpecificationNotFound {
            id: specification_id,
        })?;

    let existing = Cart::find()
        .filter(cart::Column::UserId.eq(user_id))
        .filter(cart::Column::SpecificationId.eq(specification_id))
        .one(&txn)
        .await?;

    let item = match existing {
        Some(item) => {
            let merged = item.quantity + quantity;
            let mut item: cart::ActiveModel = item.into();
            item.quantity = Set(merged);
            item.update(&txn).await?
        }
        None => {
            let item = cart::ActiveModel {
                specification_id: Set(specification_id),
                user_id: Set(user_id),
                quantity: Set(quantity),
                ..Default::default()
            };
            item.insert(&txn).await?
        }
    };

    txn.commit().await?;
    Ok(item)
}

/// Replaces the quantity of an existing cart item.
///
/// # Errors
/// Returns an error if the quantity is below 1, the item does not exist,
/// or the database update fails.
pub async fn update_quantity(
    db: &DatabaseConnection,
    cart_id: i64,
    quantity: i32,
) -> Result<cart::Model> {
    if quantity < 1 {
        return Err(Error::InvalidQuantity { quantity });
    }

    let mut item: cart::ActiveModel = Cart::find_by_id(cart_id)
        .one(db)
        .await?
        .ok_or(Error::CartItemNotFound { id: cart_id })?
        .into();

    item.quantity = Set(quantity);
    item.update(db).await.map_err(Into::into)
}

/// Removes a cart item.
///
/// # Errors
/// Returns an error if the item does not exist or the delete fails.
pub async fn remove_from_cart(db: &DatabaseConnection, cart_id: i64) -> Result<()> {
    let item = Cart::find_by_id(cart_id)
        .one(db)
        .await?
        .ok_or(Error::CartItemNotFound { id: cart_id })?;

    item.delete(db).await?;
    Ok(())
}

/// Retrieves a user's cart with each item's specification joined in.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn cart_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<(cart::Model, specification::Model)>> {
    let rows = Cart::find()
        .find_also_related(Specification)
        .filter(cart::Column::UserId.eq(user_id))
        .order_by_asc(cart::Column::Id)
        .all(db)
        .await?;

    // A cart row without its specification is a broken reference; surface
    // it as a fatal error instead of silently dropping the item.
    rows.into_iter()
        .map(|(item, spec)| {
            let id = item.specification_id;
            spec.map(|s| (item, s))
                .ok_or(Error::SpecificationNotFound { id })
        })
        .collect()
}

/// Counts distinct customers per specification, grouped over the cart
/// table. Specifications nobody has carted are absent from the map.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn distinct_customer_counts(
    db: &DatabaseConnection,
    specification_ids: &[i64],
) -> Result<HashMap<i64, i64>> {
    if specification_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i64, i64)> = Cart::find()
        .select_only()
        .column(cart::Column::SpecificationId)
        .expr_as(
            Func::count_distinct(Expr::col((cart::Entity, cart::Column::UserId))),
            "customers",
        )
        .filter(cart::Column::SpecificationId.is_in(specification_ids.iter().copied()))
        .group_by(cart::Column::SpecificationId)
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::specification::create_specification,
        entities::enums::ProductKind,
        test_utils::{
            create_test_account, create_tv_with_category, default_spec_input, setup_test_db,
        },
    };

    #[tokio::test]
    async fn test_add_to_cart_quantity_validation() -> Result<()> {
        let db = setup_test_db().await?;
        for quantity in [0, -3] {
            let result = add_to_cart(&db, 1, 1, quantity).await;
            assert!(matches!(result, Err(Error::InvalidQuantity { .. })));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_add_to_cart_requires_specification() -> Result<()> {
        let db = setup_test_db().await?;
        let result = add_to_cart(&db, 1, 42, 1).await;
        assert!(matches!(
            result,
            Err(Error::SpecificationNotFound { id: 42 })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_adds_merge_quantities() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;
        let spec =
            create_specification(&db, ProductKind::Tv, tv.id(), default_spec_input()).await?;
        let user = create_test_account(&db, "alice").await?;

        let first = add_to_cart(&db, user.id, spec.id, 2).await?;
        let second = add_to_cart(&db, user.id, spec.id, 3).await?;

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 5);

        let cart = cart_for_user(&db, user.id).await?;
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].0.quantity, 5);
        assert_eq!(cart[0].1.id, spec.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_remove() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;
        let spec =
            create_specification(&db, ProductKind::Tv, tv.id(), default_spec_input()).await?;
        let user = create_test_account(&db, "alice").await?;

        let item = add_to_cart(&db, user.id, spec.id, 1).await?;
        let updated = update_quantity(&db, item.id, 7).await?;
        assert_eq!(updated.quantity, 7);

        remove_from_cart(&db, item.id).await?;
        assert!(cart_for_user(&db, user.id).await?.is_empty());

        let result = remove_from_cart(&db, item.id).await;
        assert!(matches!(result, Err(Error::CartItemNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_distinct_customer_counts() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;
        let spec_a =
            create_specification(&db, ProductKind::Tv, tv.id(), default_spec_input()).await?;
        let spec_b =
            create_specification(&db, ProductKind::Tv, tv.id(), default_spec_input()).await?;
        let alice = create_test_account(&db, "alice").await?;
        let bob = create_test_account(&db, "bob").await?;

        add_to_cart(&db, alice.id, spec_a.id, 1).await?;
        // A second add by the same user must not inflate the count
        add_to_cart(&db, alice.id, spec_a.id, 2).await?;
        add_to_cart(&db, bob.id, spec_a.id, 1).await?;

        let counts = distinct_customer_counts(&db, &[spec_a.id, spec_b.id]).await?;
        assert_eq!(counts[&spec_a.id], 2);
        assert!(!counts.contains_key(&spec_b.id));

        Ok(())
    }
}
