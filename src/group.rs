use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Member,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Member {
    pub name: String,
    pub role: Role,
}

/// The climbing crew the log is shared with. The first member added
/// becomes the owner.
#[derive(Serialize, Deserialize, Debug)]
pub struct Group {
    pub name: String,
    pub members: IndexMap<Uuid, Member>,
}

impl Group {
    pub fn add_member(&mut self, name: String) {
        let role = if self.members.is_empty() {
            Role::Owner
        } else {
            Role::Member
        };
        self.members.insert(Uuid::new_v4(), Member { name, role });
    }
}

impl Default for Group {
    fn default() -> Group {
        Group {
            name: "My crew".into(),
            members: IndexMap::new(),
        }
    }
}
