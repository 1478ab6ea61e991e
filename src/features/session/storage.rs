//! Durable-storage mirror of the session triple. One record lives under a
//! fixed localStorage key so a reload restores the session without
//! re-authenticating. Writes are best-effort: storage failures are ignored
//! and the in-memory state stays authoritative. A record missing any of the
//! three fields is treated as no session at all.

use crate::features::session::state::UserSession;
use serde::{Deserialize, Serialize};

/// Fixed durable-storage key for the persisted session record.
const STORAGE_KEY: &str = "authsystem_session";

/// On-disk shape of the session record. Cleared sessions are written with all
/// fields null rather than removing the entry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    email: Option<String>,
    role: Option<String>,
    token: Option<String>,
}

impl StoredSession {
    fn cleared() -> Self {
        Self {
            email: None,
            role: None,
            token: None,
        }
    }
}

impl From<&UserSession> for StoredSession {
    fn from(session: &UserSession) -> Self {
        Self {
            email: Some(session.email.clone()),
            role: Some(session.role.clone()),
            token: Some(session.token.clone()),
        }
    }
}

/// Restores the persisted session, if a complete one exists.
pub fn load() -> Option<UserSession> {
    read_item(STORAGE_KEY).and_then(|raw| parse_stored(&raw))
}

/// Mirrors the current session triple to durable storage.
pub fn save(session: &UserSession) {
    if let Ok(raw) = serde_json::to_string(&StoredSession::from(session)) {
        write_item(STORAGE_KEY, &raw);
    }
}

/// Mirrors the cleared state to durable storage.
pub fn clear() {
    if let Ok(raw) = serde_json::to_string(&StoredSession::cleared()) {
        write_item(STORAGE_KEY, &raw);
    }
}

/// Parses a raw record, accepting only a fully populated triple.
fn parse_stored(raw: &str) -> Option<UserSession> {
    let stored: StoredSession = serde_json::from_str(raw).ok()?;
    match (stored.email, stored.role, stored.token) {
        (Some(email), Some(role), Some(token)) => Some(UserSession { email, role, token }),
        _ => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_item(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn read_item(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_item(key: &str, value: &str) {
    if let Some(storage) = web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_item(_key: &str, _value: &str) {}

#[cfg(test)]
mod tests {
    use super::{StoredSession, parse_stored};
    use crate::features::session::state::UserSession;

    #[test]
    fn parses_a_complete_record() {
        let raw = r#"{"email":"a@b.com","role":"admin","token":"T"}"#;
        assert_eq!(
            parse_stored(raw),
            Some(UserSession {
                email: "a@b.com".to_string(),
                role: "admin".to_string(),
                token: "T".to_string(),
            })
        );
    }

    #[test]
    fn rejects_partial_records() {
        assert_eq!(
            parse_stored(r#"{"email":"a@b.com","role":null,"token":"T"}"#),
            None
        );
        assert_eq!(
            parse_stored(r#"{"email":null,"role":null,"token":null}"#),
            None
        );
        assert_eq!(parse_stored(r#"{"email":"a@b.com"}"#), None);
    }

    #[test]
    fn rejects_unparseable_records() {
        assert_eq!(parse_stored(""), None);
        assert_eq!(parse_stored("not json"), None);
    }

    #[test]
    fn round_trips_a_session() {
        let session = UserSession {
            email: "a@b.com".to_string(),
            role: "customer".to_string(),
            token: "T".to_string(),
        };
        let raw = serde_json::to_string(&StoredSession::from(&session)).expect("serialize");

        assert_eq!(parse_stored(&raw), Some(session));
    }

    #[test]
    fn cleared_record_reads_back_as_no_session() {
        let raw = serde_json::to_string(&StoredSession::cleared()).expect("serialize");
        assert_eq!(parse_stored(&raw), None);
    }
}
