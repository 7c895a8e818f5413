use indexmap::{indexmap, IndexMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceKind {
    Indoor,
    Outdoor,
}

impl PlaceKind {
    pub fn word(self) -> &'static str {
        match self {
            PlaceKind::Indoor => "gym",
            PlaceKind::Outdoor => "crag",
        }
    }

    pub fn toggled(self) -> PlaceKind {
        match self {
            PlaceKind::Indoor => PlaceKind::Outdoor,
            PlaceKind::Outdoor => PlaceKind::Indoor,
        }
    }
}

impl Default for PlaceKind {
    fn default() -> PlaceKind {
        PlaceKind::Indoor
    }
}

/// Somewhere climbing happens. Boulders and sessions point at a place by
/// id; deleting one leaves those references dangling and the views fall
/// back to a placeholder name.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Place {
    pub name: String,
    pub kind: PlaceKind,
}

impl Place {
    pub fn defaults() -> IndexMap<Uuid, Place> {
        indexmap! {
            Uuid::new_v4() => Place { name: "Blockhelden".into(), kind: PlaceKind::Indoor },
            Uuid::new_v4() => Place { name: "Fontainebleau".into(), kind: PlaceKind::Outdoor },
        }
    }
}
