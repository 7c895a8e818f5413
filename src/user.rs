use serde::{Deserialize, Serialize};

/// The local profile. Authentication lives behind the (out of scope)
/// login flow; the client only carries a display name.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "guest"
        } else {
            &self.name
        }
    }
}
