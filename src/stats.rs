use indexmap::IndexMap;
use itertools::Itertools;
use uuid::Uuid;

use crate::boulder::{AscentStyle, Boulder};
use crate::grade::GradeSystem;

/// Send counts per grade label, ordered by the reference scale. Grades
/// the scale does not know sort to the end.
pub fn sends_by_grade<'a>(
    boulders: impl IntoIterator<Item = &'a Boulder>,
    system: &GradeSystem,
) -> Vec<(String, usize)> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for boulder in boulders {
        if boulder.is_sent() && !boulder.grade.is_empty() {
            *counts.entry(boulder.grade.clone()).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .sorted_by_key(|(label, _)| system.position_of(label).unwrap_or(usize::MAX))
        .collect()
}

/// `(sends, attempts)` ticked during one session.
pub fn session_tally<'a>(
    boulders: impl IntoIterator<Item = &'a Boulder>,
    session_id: Uuid,
) -> (usize, usize) {
    boulders
        .into_iter()
        .flat_map(|boulder| &boulder.ascents)
        .filter(|ascent| ascent.session_id == Some(session_id))
        .fold((0, 0), |(sends, attempts), ascent| match ascent.style {
            AscentStyle::Attempt => (sends, attempts + 1),
            _ => (sends + 1, attempts),
        })
}

/// The highest-positioned grade among sent boulders, if any carry a
/// grade the scale knows.
pub fn hardest_send<'a>(
    boulders: impl IntoIterator<Item = &'a Boulder>,
    system: &GradeSystem,
) -> Option<&'a str> {
    boulders
        .into_iter()
        .filter(|boulder| boulder.is_sent())
        .filter_map(|boulder| {
            system
                .position_of(&boulder.grade)
                .map(|position| (position, boulder.grade.as_str()))
        })
        .max_by_key(|(position, _)| *position)
        .map(|(_, label)| label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boulder::Ascent;

    fn boulder_with(grade: &str, styles: &[AscentStyle], session_id: Option<Uuid>) -> Boulder {
        Boulder {
            title: grade.into(),
            color: "blue".into(),
            grade: grade.into(),
            place_id: None,
            ascents: styles
                .iter()
                .map(|&style| Ascent {
                    style,
                    timestamp: 0,
                    session_id,
                })
                .collect(),
        }
    }

    fn font() -> GradeSystem {
        GradeSystem::defaults()
            .shift_remove("font")
            .expect("font scale")
    }

    #[test]
    fn sends_group_by_grade_in_scale_order() {
        let boulders = vec![
            boulder_with("6B", &[AscentStyle::Send], None),
            boulder_with("5", &[AscentStyle::Flash], None),
            boulder_with("6B", &[AscentStyle::Send], None),
            boulder_with("7A", &[AscentStyle::Attempt], None),
        ];
        let counts = sends_by_grade(&boulders, &font());
        assert_eq!(
            counts,
            vec![("5".to_string(), 1), ("6B".to_string(), 2)]
        );
    }

    #[test]
    fn session_tally_only_counts_its_own_ascents() {
        let session = Uuid::new_v4();
        let other = Uuid::new_v4();
        let boulders = vec![
            boulder_with("6A", &[AscentStyle::Send, AscentStyle::Attempt], Some(session)),
            boulder_with("6C", &[AscentStyle::Flash], Some(other)),
            boulder_with("5+", &[AscentStyle::Attempt], None),
        ];
        assert_eq!(session_tally(&boulders, session), (1, 1));
        assert_eq!(session_tally(&boulders, other), (1, 0));
    }

    #[test]
    fn hardest_send_ignores_attempts_and_unknown_grades() {
        let boulders = vec![
            boulder_with("6B", &[AscentStyle::Send], None),
            boulder_with("8C", &[AscentStyle::Send], None),
            boulder_with("7C", &[AscentStyle::Attempt], None),
        ];
        assert_eq!(hardest_send(&boulders, &font()), Some("6B"));
        assert_eq!(hardest_send(&[], &font()), None);
    }
}
