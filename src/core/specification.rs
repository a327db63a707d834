//! Specification business logic - Writes that keep the derived discount
//! price consistent.
//!
//! Every create and update goes through the pricing resolver, so
//! `discount_price` always equals `price - round(price * discount / 100)`
//! no matter which admin path touched the row. The generic product
//! reference is validated at the application layer; the database itself
//! cannot enforce integrity across the `(product_kind, object_id)` pair.

use crate::{
    core::{pricing, product},
    entities::{Specification, enums::ProductKind, specification},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{Set, prelude::*};

/// Minimum pre-packing factor and weight/volume.
pub const MIN_MEASURE: Decimal = Decimal::from_parts(1, 0, 0, false, 3); // 0.001

/// Editable fields of a specification, as an admin form submits them.
/// `discount_price` is deliberately absent: it is derived on every save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecificationInput {
    /// Short variant tag, may be empty
    pub tag: String,
    /// Variant-specific image path
    pub image: Option<String>,
    /// Pre-packing factor, at least 0.001
    pub pre_packing: Decimal,
    /// Weight or volume per unit, at least 0.001
    pub weight_vol: Decimal,
    /// Base price, at least 0.01
    pub price: Decimal,
    /// Discount percentage, 0 to 99
    pub discount: i32,
    /// Flat override price, 0 disables
    pub sale_price: Decimal,
    /// Stock on hand, never negative
    pub available_qty: Decimal,
    /// Additional information, may be empty
    pub addition: String,
}

fn validate_input(input: &SpecificationInput) -> Result<()> {
    pricing::validate_price(input.price)?;
    pricing::validate_discount(input.discount)?;

    if input.pre_packing < MIN_MEASURE {
        return Err(Error::InvalidAmount {
            field: "pre_packing",
            min: MIN_MEASURE,
            value: input.pre_packing,
        });
    }
    if input.weight_vol < MIN_MEASURE {
        return Err(Error::InvalidAmount {
            field: "weight_vol",
            min: MIN_MEASURE,
            value: input.weight_vol,
        });
    }
    if input.sale_price < Decimal::ZERO {
        return Err(Error::InvalidAmount {
            field: "sale_price",
            min: Decimal::ZERO,
            value: input.sale_price,
        });
    }
    if input.available_qty < Decimal::ZERO {
        return Err(Error::InvalidAmount {
            field: "available_qty",
            min: Decimal::ZERO,
            value: input.available_qty,
        });
    }
    Ok(())
}

/// Creates a new specification attached to an existing product.
///
/// # Errors
/// Returns an error if:
/// - Any field violates its bound (price, discount, measures, stock)
/// - The `(kind, object_id)` reference does not resolve to a product
/// - The database insert fails
pub async fn create_specification(
    db: &DatabaseConnection,
    kind: ProductKind,
    object_id: i64,
    input: SpecificationInput,
) -> Result<specification::Model> {
    validate_input(&input)?;
    product::require_product(db, kind, object_id).await?;

    let discount_price = pricing::discount_price(input.price, input.discount)?;
    let today = chrono::Utc::now().date_naive();

    let spec = specification::ActiveModel {
        tag: Set(input.tag),
        image: Set(input.image),
        pre_packing: Set(input.pre_packing),
        weight_vol: Set(input.weight_vol),
        price: Set(input.price),
        discount: Set(input.discount),
        discount_price: Set(discount_price),
        sale_price: Set(input.sale_price),
        available_qty: Set(input.available_qty),
        addition: Set(input.addition),
        date_added: Set(today),
        product_kind: Set(kind),
        object_id: Set(object_id),
        ..Default::default()
    };
    spec.insert(db).await.map_err(Into::into)
}

/// Updates an existing specification, recomputing the discount price.
///
/// The generic product reference and `date_added` are immutable.
///
/// # Errors
/// Returns an error if:
/// - Any field violates its bound
/// - The specification does not exist
/// - The database update fails
pub async fn update_specification(
    db: &DatabaseConnection,
    id: i64,
    input: SpecificationInput,
) -> Result<specification::Model> {
    validate_input(&input)?;

    let mut spec: specification::ActiveModel = Specification::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::SpecificationNotFound { id })?
        .into();

    let discount_price = pricing::discount_price(input.price, input.discount)?;

    spec.tag = Set(input.tag);
    spec.image = Set(input.image);
    spec.pre_packing = Set(input.pre_packing);
    spec.weight_vol = Set(input.weight_vol);
    spec.price = Set(input.price);
    spec.discount = Set(input.discount);
    spec.discount_price = Set(discount_price);
    spec.sale_price = Set(input.sale_price);
    spec.available_qty = Set(input.available_qty);
    spec.addition = Set(input.addition);

    spec.update(db).await.map_err(Into::into)
}

/// Retrieves a specification by its unique id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_specification(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<specification::Model>> {
    Specification::find_by_id(id).one(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{
        create_tv_with_category, default_spec_input, setup_test_db,
    };

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_create_computes_discount_price() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;

        let mut input = default_spec_input();
        input.price = dec("100.00");
        input.discount = 20;

        let spec = create_specification(&db, ProductKind::Tv, tv.id(), input).await?;
        assert_eq!(spec.discount_price, dec("80.00"));
        assert_eq!(spec.product_kind, ProductKind::Tv);

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_discount_keeps_price() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;

        let mut input = default_spec_input();
        input.price = dec("49.99");
        input.discount = 0;

        let spec = create_specification(&db, ProductKind::Tv, tv.id(), input).await?;
        assert_eq!(spec.discount_price, dec("49.99"));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_recomputes_discount_price() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;

        let mut input = default_spec_input();
        input.price = dec("100.00");
        input.discount = 20;
        let spec = create_specification(&db, ProductKind::Tv, tv.id(), input.clone()).await?;

        input.discount = 50;
        let updated = update_specification(&db, spec.id, input).await?;
        assert_eq!(updated.discount_price, dec("50.00"));
        assert_eq!(updated.id, spec.id);
        // reference is immutable across updates
        assert_eq!(updated.object_id, spec.object_id);

        Ok(())
    }

    #[tokio::test]
    async fn test_validation_rejected_without_partial_save() -> Result<()> {
        let db = setup_test_db().await?;
        let tv = create_tv_with_category(&db).await?;

        let mut input = default_spec_input();
        input.discount = 100;
        let result = create_specification(&db, ProductKind::Tv, tv.id(), input).await;
        assert!(matches!(result, Err(Error::InvalidDiscount { discount: 100 })));

        let mut input = default_spec_input();
        input.price = Decimal::ZERO;
        let result = create_specification(&db, ProductKind::Tv, tv.id(), input).await;
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));

        let mut input = default_spec_input();
        input.available_qty = dec("-1");
        let result = create_specification(&db, ProductKind::Tv, tv.id(), input).await;
        assert!(matches!(
            result,
            Err(Error::InvalidAmount {
                field: "available_qty",
                ..
            })
        ));

        let mut input = default_spec_input();
        input.pre_packing = Decimal::ZERO;
        let result = create_specification(&db, ProductKind::Tv, tv.id(), input).await;
        assert!(matches!(
            result,
            Err(Error::InvalidAmount {
                field: "pre_packing",
                ..
            })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_dangling_product_reference() -> Result<()> {
        let db = setup_test_db().await?;
        let result =
            create_specification(&db, ProductKind::Food, 77, default_spec_input()).await;
        assert!(matches!(
            result,
            Err(Error::ProductNotFound {
                kind: ProductKind::Food,
                id: 77
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_specification() -> Result<()> {
        let db = setup_test_db().await?;
        let result = update_specification(&db, 12345, default_spec_input()).await;
        assert!(matches!(
            result,
            Err(Error::SpecificationNotFound { id: 12345 })
        ));
        Ok(())
    }
}
