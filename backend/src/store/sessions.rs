//! Bearer sessions issued at sign-in.

use chrono::{DateTime, Utc};
use common::model::session::{Session, User};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use super::users::find_user;
use super::StoreError;

/// Issues a new session for `user_id`, valid for `ttl_secs` from `now`.
pub fn create_session(
    conn: &Connection,
    user_id: &str,
    ttl_secs: i64,
    now: DateTime<Utc>,
) -> Result<Session, StoreError> {
    let session = Session {
        user_id: user_id.to_string(),
        access_token: Uuid::new_v4().simple().to_string(),
        refresh_token: Uuid::new_v4().simple().to_string(),
        expires_at: now.timestamp() + ttl_secs,
        expires_in: ttl_secs,
    };
    conn.execute(
        "INSERT INTO sessions (access_token, refresh_token, user_id, expires_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            &session.access_token,
            &session.refresh_token,
            &session.user_id,
            session.expires_at
        ],
    )?;
    Ok(session)
}

/// Resolves an access token to its user. Unknown and expired tokens yield `None`.
pub fn verify_user_token(
    conn: &Connection,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Option<User>, StoreError> {
    let user_id: Option<String> = conn
        .query_row(
            "SELECT user_id FROM sessions WHERE access_token = ?1 AND expires_at > ?2",
            params![token, now.timestamp()],
            |row| row.get(0),
        )
        .optional()?;

    match user_id {
        Some(user_id) => find_user(conn, &user_id),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::temp_state;
    use crate::store::users::create_user;
    use chrono::Duration;
    use common::model::session::UserMetadata;

    #[test]
    fn issued_token_resolves_until_it_expires() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        let user = create_user(&conn, "buyer@example.com", "pw", UserMetadata::default()).unwrap();
        let now = Utc::now();

        let session = create_session(&conn, &user.id, 60, now).unwrap();
        assert_eq!(session.expires_at, now.timestamp() + 60);
        assert_eq!(session.expires_in, 60);

        let resolved = verify_user_token(&conn, &session.access_token, now).unwrap();
        assert_eq!(resolved, Some(user));

        let later = now + Duration::seconds(61);
        assert_eq!(verify_user_token(&conn, &session.access_token, later).unwrap(), None);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        assert_eq!(verify_user_token(&conn, "forged", Utc::now()).unwrap(), None);
    }
}
