use indexmap::{indexmap, IndexMap};
use serde::{Deserialize, Serialize};

/// Hold colors gyms use to tag their sets. Rendered as inline-styled
/// swatches so no stylesheet entry is needed per color.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HoldColor {
    pub label: String,
    pub hex: String,
}

impl HoldColor {
    pub fn defaults() -> IndexMap<String, HoldColor> {
        indexmap! {
            "red".into() => HoldColor { label: "red".into(), hex: "#d0372d".into() },
            "orange".into() => HoldColor { label: "orange".into(), hex: "#e08a2e".into() },
            "yellow".into() => HoldColor { label: "yellow".into(), hex: "#e3c51f".into() },
            "green".into() => HoldColor { label: "green".into(), hex: "#3f9b49".into() },
            "blue".into() => HoldColor { label: "blue".into(), hex: "#3466c5".into() },
            "purple".into() => HoldColor { label: "purple".into(), hex: "#7d3bbd".into() },
            "pink".into() => HoldColor { label: "pink".into(), hex: "#d560a8".into() },
            "brown".into() => HoldColor { label: "brown".into(), hex: "#7a5230".into() },
            "white".into() => HoldColor { label: "white".into(), hex: "#f0f0ec".into() },
            "black".into() => HoldColor { label: "black".into(), hex: "#262626".into() },
        }
    }
}
