use serde::{Deserialize, Serialize};

const SESSION_KEY: &str = "session";

/// The only session state that survives a reload. Everything else is
/// rehydrated through `GET /user/current` on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Token persisted from the last successful login, if any.
pub fn load_token() -> Option<String> {
    let raw = storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str::<PersistedSession>(&raw)
        .ok()
        .map(|session| session.token)
}

/// Persist the credential. Storage failures are ignored; the session
/// simply will not survive the next reload.
pub fn save_token(token: &str) {
    if let Some(storage) = storage() {
        if let Ok(raw) = serde_json::to_string(&PersistedSession {
            token: token.to_string(),
        }) {
            let _ = storage.set_item(SESSION_KEY, &raw);
        }
    }
}

/// Drop the persisted credential on logout.
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_session_round_trip() {
        let session = PersistedSession {
            token: "eyJhbGciOiJIUzI1NiJ9.payload.sig".to_string(),
        };
        let raw = serde_json::to_string(&session).unwrap();
        let restored: PersistedSession = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored.token, session.token);
    }

    #[test]
    fn test_persisted_shape_is_token_only() {
        let value = serde_json::to_value(PersistedSession {
            token: "t".to_string(),
        })
        .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["token"], "t");
    }
}
