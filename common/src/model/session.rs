use serde::{Deserialize, Serialize};

/// Profile data captured at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserMetadata {
    /// Builds the metadata from raw form input; the display name joins the
    /// trimmed first and last names.
    pub fn from_names(first_name: &str, last_name: &str) -> Self {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        let display_name = format!("{} {}", first_name, last_name).trim().to_string();
        Self {
            display_name,
            first_name,
            last_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub user_metadata: UserMetadata,
}

/// An authenticated session as handed out by sign-in.
///
/// The frontend keeps it in memory and passes it explicitly to every call that
/// needs a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) after which the access token is rejected.
    pub expires_at: i64,
    pub expires_in: i64,
}

impl Session {
    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
