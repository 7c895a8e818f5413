use indexmap::{indexmap, IndexMap};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One position on a reference scale. The scale index is implicit in the
/// grade's position within its system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub id: Uuid,
    pub label: String,
}

/// An ordered reference scale of difficulty labels. Immutable once built;
/// custom grading schemes are carved on top of it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GradeSystem {
    pub name: String,
    pub grades: Vec<Grade>,
}

impl GradeSystem {
    fn new(name: &str, labels: &[&str]) -> GradeSystem {
        GradeSystem {
            name: name.into(),
            grades: labels
                .iter()
                .map(|label| Grade {
                    id: Uuid::new_v4(),
                    label: (*label).into(),
                })
                .collect(),
        }
    }

    pub fn label_at(&self, index: usize) -> &str {
        self.grades.get(index).map_or("?", |grade| grade.label.as_str())
    }

    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.grades.iter().position(|grade| grade.label == label)
    }

    pub fn defaults() -> IndexMap<String, GradeSystem> {
        indexmap! {
            "font".into() => GradeSystem::new("Fontainebleau", &[
                "3", "4", "4+", "5", "5+", "6A", "6A+", "6B", "6B+", "6C", "6C+",
                "7A", "7A+", "7B", "7B+", "7C", "7C+", "8A",
            ]),
            "hueco".into() => GradeSystem::new("Hueco", &[
                "VB", "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9",
                "V10",
            ]),
            "french".into() => GradeSystem::new("French sport", &[
                "4a", "4b", "4c", "5a", "5b", "5c", "6a", "6a+", "6b", "6b+",
                "6c", "6c+", "7a", "7a+", "7b", "7b+", "7c",
            ]),
            "uiaa".into() => GradeSystem::new("UIAA", &[
                "III", "IV", "IV+", "V-", "V", "V+", "VI-", "VI", "VI+", "VII-",
                "VII", "VII+", "VIII-", "VIII", "VIII+",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_scale_order() {
        let systems = GradeSystem::defaults();
        let font = &systems["font"];
        assert_eq!(font.position_of("3"), Some(0));
        assert_eq!(font.position_of("6A"), Some(5));
        assert_eq!(font.position_of("9C"), None);
        assert_eq!(font.label_at(5), "6A");
        assert_eq!(font.label_at(999), "?");
    }
}
