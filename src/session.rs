use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A visit to a place. At most one session is open at a time; ascents
/// ticked while it is open reference it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Session {
    pub place_id: Uuid,
    pub started: i64,
    pub ended: Option<i64>,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.ended.is_none()
    }

    pub fn duration_secs(&self, now: i64) -> i64 {
        self.ended.unwrap_or(now) - self.started
    }
}
