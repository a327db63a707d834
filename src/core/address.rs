//! Shipping address business logic.

use crate::{
    entities::{ShippingAddress, shipping_address},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Parameters for creating a shipping address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    /// Recipient's full name
    pub full_name: String,
    /// Country
    pub country: String,
    /// Region, state, or province
    pub region: String,
    /// City
    pub city: String,
    /// Postal code
    pub postcode: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub phone: String,
}

/// Creates a shipping address for a user.
///
/// # Errors
/// Returns an error if the full name is empty or the insert fails.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i64,
    new: NewAddress,
) -> Result<shipping_address::Model> {
    if new.full_name.trim().is_empty() {
        return Err(Error::Config {
            message: "Full name cannot be empty".to_string(),
        });
    }

    let address = shipping_address::ActiveModel {
        user_id: Set(user_id),
        full_name: Set(new.full_name.trim().to_string()),
        country: Set(new.country),
        region: Set(new.region),
        city: Set(new.city),
        postcode: Set(new.postcode),
        address: Set(new.address),
        phone: Set(new.phone),
        ..Default::default()
    };
    address.insert(db).await.map_err(Into::into)
}

/// Lists a user's shipping addresses in insertion order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn addresses_for_user(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Vec<shipping_address::Model>> {
    ShippingAddress::find()
        .filter(shipping_address::Column::UserId.eq(user_id))
        .order_by_asc(shipping_address::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes a shipping address.
///
/// # Errors
/// Returns an error if no address with the given id exists for the user,
/// or the delete fails.
pub async fn remove_address(db: &DatabaseConnection, user_id: i64, address_id: i64) -> Result<()> {
    let address = ShippingAddress::find_by_id(address_id)
        .filter(shipping_address::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or(Error::AddressNotFound { id: address_id })?;

    address.delete(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_account, setup_test_db};

    fn sample_address() -> NewAddress {
        NewAddress {
            full_name: "Alice Doe".to_string(),
            country: "Latvia".to_string(),
            region: "Riga".to_string(),
            city: "Riga".to_string(),
            postcode: "LV-1010".to_string(),
            address: "Brivibas iela 1".to_string(),
            phone: "+371 20000000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_list_remove() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_account(&db, "alice").await?;

        let created = create_address(&db, user.id, sample_address()).await?;
        let listed = addresses_for_user(&db, user.id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        remove_address(&db, user.id, created.id).await?;
        assert!(addresses_for_user(&db, user.id).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_scoped_to_owner() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_account(&db, "alice").await?;
        let bob = create_test_account(&db, "bob").await?;

        let created = create_address(&db, alice.id, sample_address()).await?;
        let result = remove_address(&db, bob.id, created.id).await;
        assert!(result.is_err());
        assert_eq!(addresses_for_user(&db, alice.id).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_full_name_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_account(&db, "alice").await?;

        let mut new = sample_address();
        new.full_name = "   ".to_string();
        let result = create_address(&db, user.id, new).await;
        assert!(matches!(result, Err(Error::Config { .. })));

        Ok(())
    }
}
