//! User accounts. Passwords are kept as Argon2 PHC strings.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::Utc;
use common::model::session::{User, UserMetadata};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use uuid::Uuid;

use super::StoreError;

/// Emails are matched case-insensitively and without surrounding spaces.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::PasswordHash(e.to_string()))
}

fn password_matches(password: &str, stored: &str) -> Result<bool, StoreError> {
    let parsed = PasswordHash::new(stored).map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Registers a new account. Fails with [`StoreError::DuplicateEmail`] when the
/// email is taken, including when a concurrent sign-up wins the insert.
pub fn create_user(
    conn: &Connection,
    email: &str,
    password: &str,
    metadata: UserMetadata,
) -> Result<User, StoreError> {
    let email = normalize_email(email);
    let id = Uuid::new_v4().to_string();
    let password_hash = hash_password(password)?;

    // The UNIQUE constraint on email is the only duplicate check, so two
    // racing sign-ups cannot both succeed.
    let inserted = conn.execute(
        "INSERT INTO users (id, email, password_hash, first_name, last_name, display_name, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            &id,
            &email,
            &password_hash,
            &metadata.first_name,
            &metadata.last_name,
            &metadata.display_name,
            Utc::now().to_rfc3339(),
        ],
    );
    match inserted {
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            return Err(StoreError::DuplicateEmail(email));
        }
        Err(e) => return Err(e.into()),
        Ok(_) => {}
    }

    Ok(User {
        id,
        email,
        user_metadata: metadata,
    })
}

/// Returns the user when `email` and `password` match an account.
pub fn verify_credentials(
    conn: &Connection,
    email: &str,
    password: &str,
) -> Result<Option<User>, StoreError> {
    let email = normalize_email(email);
    let row = conn
        .query_row(
            "SELECT id, email, password_hash, first_name, last_name, display_name
             FROM users WHERE email = ?1",
            params![&email],
            |row| {
                Ok((
                    User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        user_metadata: UserMetadata {
                            first_name: row.get(3)?,
                            last_name: row.get(4)?,
                            display_name: row.get(5)?,
                        },
                    },
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    let Some((user, hash)) = row else {
        return Ok(None);
    };
    Ok(password_matches(password, &hash)?.then_some(user))
}

/// Looks a user up by id.
pub fn find_user(conn: &Connection, user_id: &str) -> Result<Option<User>, StoreError> {
    let user = conn
        .query_row(
            "SELECT id, email, first_name, last_name, display_name FROM users WHERE id = ?1",
            params![user_id],
            |row| {
                Ok(User {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    user_metadata: UserMetadata {
                        first_name: row.get(2)?,
                        last_name: row.get(3)?,
                        display_name: row.get(4)?,
                    },
                })
            },
        )
        .optional()?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::temp_state;

    #[test]
    fn created_user_can_sign_in_with_any_email_case() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        let user = create_user(
            &conn,
            " Buyer@Example.com ",
            "s3cret",
            UserMetadata::from_names("Ada", "Lovelace"),
        )
        .unwrap();
        assert_eq!(user.email, "buyer@example.com");

        let found = verify_credentials(&conn, "BUYER@example.com", "s3cret").unwrap();
        assert_eq!(found, Some(user.clone()));
        assert_eq!(find_user(&conn, &user.id).unwrap(), Some(user));
    }

    #[test]
    fn wrong_password_or_unknown_email_yield_none() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        create_user(&conn, "buyer@example.com", "s3cret", UserMetadata::default()).unwrap();

        assert_eq!(verify_credentials(&conn, "buyer@example.com", "nope").unwrap(), None);
        assert_eq!(verify_credentials(&conn, "other@example.com", "s3cret").unwrap(), None);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        create_user(&conn, "buyer@example.com", "a", UserMetadata::default()).unwrap();

        let err = create_user(&conn, "BUYER@example.com", "b", UserMetadata::default()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(email) if email == "buyer@example.com"));
    }

    #[test]
    fn passwords_are_not_stored_in_clear() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        create_user(&conn, "buyer@example.com", "s3cret", UserMetadata::default()).unwrap();

        let stored: String = conn
            .query_row("SELECT password_hash FROM users", [], |row| row.get(0))
            .unwrap();
        assert_ne!(stored, "s3cret");
        assert!(stored.starts_with("$argon2id$"), "unexpected hash format: {stored}");
    }

    #[test]
    fn same_password_gets_a_fresh_salt_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        create_user(&conn, "a@example.com", "s3cret", UserMetadata::default()).unwrap();
        create_user(&conn, "b@example.com", "s3cret", UserMetadata::default()).unwrap();

        let hashes: Vec<String> = conn
            .prepare("SELECT password_hash FROM users")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_ne!(hashes[0], hashes[1]);
    }

    #[test]
    fn email_taken_through_another_connection_is_a_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let state = temp_state(&dir);
        let first = state.connect().unwrap();
        let second = state.connect().unwrap();

        create_user(&first, "buyer@example.com", "a", UserMetadata::default()).unwrap();
        let err = create_user(&second, "buyer@example.com", "b", UserMetadata::default()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(email) if email == "buyer@example.com"));
    }
}
