//! Pricing resolver - Derives the discount price from price and discount.
//!
//! The discount price is recomputed on every specification write, never
//! stored from user input. The rounding step quantizes the discount amount
//! to the price's own decimal scale using midpoint-nearest-even, so e.g.
//! a 50% discount on 10.05 rounds 5.025 down to 5.02 and yields 5.03.

use crate::{
    entities::specification,
    errors::{Error, Result},
};
use rust_decimal::Decimal;

/// Minimum accepted price.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// Validates a price against the 0.01 minimum.
///
/// # Errors
/// Returns [`Error::InvalidPrice`] for prices below 0.01.
pub fn validate_price(price: Decimal) -> Result<()> {
    if price < MIN_PRICE {
        return Err(Error::InvalidPrice { price });
    }
    Ok(())
}

/// Validates a discount percentage against the 0..=99 range.
///
/// # Errors
/// Returns [`Error::InvalidDiscount`] for values outside the range.
pub fn validate_discount(discount: i32) -> Result<()> {
    if !(0..=99).contains(&discount) {
        return Err(Error::InvalidDiscount { discount });
    }
    Ok(())
}

/// Computes the derived discount price:
/// `price - round(price * discount / 100, price's decimal scale)`.
///
/// A discount of 0 yields the price unchanged.
///
/// # Errors
/// Returns a validation error if the price or discount is out of range.
pub fn discount_price(price: Decimal, discount: i32) -> Result<Decimal> {
    validate_price(price)?;
    validate_discount(discount)?;

    let reduction = (price * Decimal::from(discount) / Decimal::ONE_HUNDRED).round_dp(price.scale());
    Ok(price - reduction)
}

/// Resolves the price a specification is displayed and sold at.
///
/// A nonzero `sale_price` is a flat override that replaces the discount
/// price; zero disables the override.
#[must_use]
pub fn display_price(spec: &specification::Model) -> Decimal {
    if spec.sale_price > Decimal::ZERO {
        spec.sale_price
    } else {
        spec.discount_price
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn spec_with_prices(
        discount_price: Decimal,
        sale_price: Decimal,
    ) -> specification::Model {
        specification::Model {
            id: 1,
            tag: String::new(),
            image: None,
            pre_packing: Decimal::ONE,
            weight_vol: Decimal::ONE,
            price: dec("100.00"),
            discount: 0,
            discount_price,
            sale_price,
            available_qty: Decimal::TEN,
            addition: String::new(),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            product_kind: crate::entities::enums::ProductKind::Tv,
            object_id: 1,
        }
    }

    #[test]
    fn test_discount_price_basic() {
        assert_eq!(discount_price(dec("100.00"), 20).unwrap(), dec("80.00"));
        assert_eq!(discount_price(dec("49.99"), 0).unwrap(), dec("49.99"));
    }

    #[test]
    fn test_discount_price_rounds_to_price_scale() {
        // 10.05 * 50% = 5.025, banker's rounding to two places gives 5.02
        assert_eq!(discount_price(dec("10.05"), 50).unwrap(), dec("5.03"));
        // 9.99 * 33% = 3.2967 -> 3.30
        assert_eq!(discount_price(dec("9.99"), 33).unwrap(), dec("6.69"));
    }

    #[test]
    fn test_discount_price_max_discount() {
        assert_eq!(discount_price(dec("100.00"), 99).unwrap(), dec("1.00"));
    }

    #[test]
    fn test_discount_out_of_range_rejected() {
        assert!(matches!(
            discount_price(dec("100.00"), 100),
            Err(Error::InvalidDiscount { discount: 100 })
        ));
        assert!(matches!(
            discount_price(dec("100.00"), -1),
            Err(Error::InvalidDiscount { discount: -1 })
        ));
    }

    #[test]
    fn test_price_below_minimum_rejected() {
        assert!(matches!(
            discount_price(Decimal::ZERO, 10),
            Err(Error::InvalidPrice { .. })
        ));
        assert!(matches!(
            discount_price(dec("-5.00"), 10),
            Err(Error::InvalidPrice { .. })
        ));
        // 0.01 itself is fine
        assert_eq!(discount_price(dec("0.01"), 0).unwrap(), dec("0.01"));
    }

    #[test]
    fn test_display_price_sale_override() {
        let spec = spec_with_prices(dec("80.00"), dec("75.00"));
        assert_eq!(display_price(&spec), dec("75.00"));
    }

    #[test]
    fn test_display_price_zero_sale_disabled() {
        let spec = spec_with_prices(dec("80.00"), Decimal::ZERO);
        assert_eq!(display_price(&spec), dec("80.00"));
    }
}
