//! Account business logic - Minimal user records for carts, rates, and
//! addresses. Authentication lives outside this crate.

use crate::{
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};

/// Creates a new account.
///
/// # Errors
/// Returns an error if the username is empty or whitespace-only, or the
/// database insert fails (e.g. duplicate username).
pub async fn create_account(
    db: &DatabaseConnection,
    username: String,
    email: String,
) -> Result<account::Model> {
    if username.trim().is_empty() {
        return Err(Error::Config {
            message: "Username cannot be empty".to_string(),
        });
    }

    let account = account::ActiveModel {
        username: Set(username.trim().to_string()),
        email: Set(email),
        ..Default::default()
    };
    account.insert(db).await.map_err(Into::into)
}

/// Finds an account by its exact username.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_account_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Option<account::Model>> {
    Account::find()
        .filter(account::Column::Username.eq(username))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_account_by_username`], but absence is an error.
///
/// # Errors
/// Returns [`Error::AccountNotFound`] if no account matches.
pub async fn require_account_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> Result<account::Model> {
    get_account_by_username(db, username)
        .await?
        .ok_or_else(|| Error::AccountNotFound {
            username: username.to_string(),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_and_lookup_account() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_account(&db, "alice".to_string(), "alice@shop.test".to_string())
            .await?;

        let found = require_account_by_username(&db, "alice").await?;
        assert_eq!(found.id, created.id);

        let missing = require_account_by_username(&db, "bob").await;
        assert!(matches!(missing, Err(Error::AccountNotFound { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_username_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let result = create_account(&db, "  ".to_string(), String::new()).await;
        assert!(matches!(result, Err(Error::Config { .. })));
        Ok(())
    }
}
