//! Received quote requests, stored as the JSON text the client sent.

use common::requests::QuoteRecord;
use rusqlite::{params, Connection};

use super::StoreError;

/// Appends the request body `data` unchanged and returns how many quote
/// requests are stored in total.
pub fn insert_quote_request(
    conn: &Connection,
    user_id: &str,
    data: &str,
    received_at: &str,
) -> Result<u64, StoreError> {
    conn.execute(
        "INSERT INTO quote_requests (user_id, data, received_at) VALUES (?1, ?2, ?3)",
        params![user_id, data, received_at],
    )?;
    count_quote_requests(conn)
}

pub fn count_quote_requests(conn: &Connection) -> Result<u64, StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM quote_requests", [], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}

/// Quote requests sent by `user_id`, oldest first.
pub fn quote_requests_for_user(
    conn: &Connection,
    user_id: &str,
) -> Result<Vec<QuoteRecord>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT user_id, data, received_at FROM quote_requests WHERE user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(user_id, data, received_at)| -> Result<QuoteRecord, StoreError> {
            Ok(QuoteRecord {
                user_id,
                data: serde_json::from_str(&data)?,
                received_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::temp_state;

    const RECEIVED_AT: &str = "2026-10-18T09:00:00.000Z";

    fn insert(conn: &Connection, user_id: &str, product: &str) -> u64 {
        let data = format!(r#"{{"productName":"{}"}}"#, product);
        insert_quote_request(conn, user_id, &data, RECEIVED_AT).unwrap()
    }

    #[test]
    fn insert_reports_running_total() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();

        assert_eq!(insert(&conn, "a", "Bolts"), 1);
        assert_eq!(insert(&conn, "b", "Nuts"), 2);
        assert_eq!(count_quote_requests(&conn).unwrap(), 2);
    }

    #[test]
    fn stored_payload_reads_back_per_user() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        insert(&conn, "a", "Bolts");
        insert(&conn, "b", "Nuts");
        insert(&conn, "a", "Washers");

        let stored = quote_requests_for_user(&conn, "a").unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].user_id, "a");
        assert_eq!(stored[0].received_at, RECEIVED_AT);
        assert_eq!(stored[0].order().product_name, "Bolts");
        assert_eq!(stored[1].order().product_name, "Washers");
    }

    #[test]
    fn body_text_is_stored_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let conn = temp_state(&dir).connect().unwrap();
        let body = r#"{ "zeta": 1, "alpha": {"nested": [true, null]} }"#;
        insert_quote_request(&conn, "a", body, RECEIVED_AT).unwrap();

        let stored: String = conn
            .query_row("SELECT data FROM quote_requests", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, body);
    }
}
