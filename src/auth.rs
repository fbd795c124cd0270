//! Registration and credential checks against the `users` table.

use common::{PasswordError, hash_password, verify_password};
use model::entities::user::{self, DEFAULT_BALANCE};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::{debug, info, instrument, trace};

/// Error types for the auth flow
#[derive(Error, Debug)]
pub enum AuthError {
    /// Error from password hashing
    #[error("Password hashing error: {0}")]
    Password(#[from] PasswordError),

    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// The blocking hashing task panicked or was cancelled
    #[error("Hashing task failed: {0}")]
    Task(#[from] JoinError),

    /// Unknown email or password mismatch
    #[error("Wrong credentials")]
    WrongCredentials,
}

/// Creates a user with a hashed password and the starting balance.
///
/// Fails with [`AuthError::Database`] when the email is already taken.
#[instrument(skip_all)]
pub async fn register_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    password: &str,
) -> Result<user::Model, AuthError> {
    trace!("Entering register_user function");

    let plaintext = password.to_owned();
    let password_hash = task::spawn_blocking(move || hash_password(&plaintext)).await??;

    let new_user = user::ActiveModel {
        name: Set(name.to_owned()),
        email: Set(email.to_owned()),
        password: Set(password_hash),
        balance: Set(DEFAULT_BALANCE),
        ..Default::default()
    };

    trace!("Attempting to insert new user into database");
    let user_model = new_user.insert(db).await?;
    info!("User created successfully with ID: {}", user_model.id);

    Ok(user_model)
}

/// Returns the user owning `email` if `password` matches the stored hash.
///
/// An unknown email and a wrong password both yield
/// [`AuthError::WrongCredentials`].
#[instrument(skip_all)]
pub async fn authenticate_user(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<user::Model, AuthError> {
    trace!("Entering authenticate_user function");

    let Some(user_model) = user::Entity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?
    else {
        debug!("No user registered with this email");
        return Err(AuthError::WrongCredentials);
    };

    let plaintext = password.to_owned();
    let stored_hash = user_model.password.clone();
    let matches = task::spawn_blocking(move || verify_password(&plaintext, &stored_hash)).await?;

    if !matches {
        debug!("Password mismatch for user ID: {}", user_model.id);
        return Err(AuthError::WrongCredentials);
    }

    info!("User {} authenticated", user_model.id);
    Ok(user_model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_register_stores_hash_and_starting_balance() {
        let db = setup_test_db().await;

        let created = register_user(&db, "Alice", "alice@example.com", "s3cret")
            .await
            .unwrap();

        assert_eq!(created.name, "Alice");
        assert_eq!(created.email, "alice@example.com");
        assert_eq!(created.balance, 1000);
        assert_ne!(created.password, "s3cret");
        assert!(verify_password("s3cret", &created.password));

        let stored = user::Entity::find_by_id(created.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let db = setup_test_db().await;

        register_user(&db, "Alice", "alice@example.com", "one")
            .await
            .unwrap();
        let second = register_user(&db, "Other Alice", "alice@example.com", "two").await;

        assert!(matches!(second, Err(AuthError::Database(_))));
        assert_eq!(user::Entity::find().all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_authenticate_with_registered_password() {
        let db = setup_test_db().await;
        let created = register_user(&db, "Bob", "bob@example.com", "pw")
            .await
            .unwrap();

        let authenticated = authenticate_user(&db, "bob@example.com", "pw")
            .await
            .unwrap();

        assert_eq!(authenticated.id, created.id);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_wrong_password_and_unknown_email() {
        let db = setup_test_db().await;
        register_user(&db, "Bob", "bob@example.com", "pw")
            .await
            .unwrap();

        let wrong_password = authenticate_user(&db, "bob@example.com", "PW").await;
        let unknown_email = authenticate_user(&db, "nobody@example.com", "pw").await;

        assert!(matches!(wrong_password, Err(AuthError::WrongCredentials)));
        assert!(matches!(unknown_email, Err(AuthError::WrongCredentials)));
    }
}
