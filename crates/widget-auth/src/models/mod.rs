use serde::{Deserialize, Serialize};
use std::fmt;

/// Token response returned to the widget page
///
/// Field names are fixed by the widget snippet that reads `token`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub event_path: String,
    pub token: String,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("event_path", &self.event_path)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
