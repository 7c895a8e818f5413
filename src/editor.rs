use serde::{Deserialize, Serialize};

use crate::grade::GradeSystem;

pub type BucketId = u32;

/// A user-authored bucket covering a contiguous run of positions on the
/// active reference scale. Serializes with the field names the grading
/// endpoint expects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomGrade {
    pub id: BucketId,
    pub label: String,
    pub min_index: usize,
    pub max_index: usize,
}

/// State for carving a reference grade system into named buckets.
///
/// Buckets stay ordered by `min_index` and contiguous: each one starts a
/// single position after its left neighbour ends, and the first bucket is
/// pinned to the start of the scale. An invalid handle move is dropped
/// without feedback; the slider snaps back to the stored value on the
/// next render.
///
/// Removing a bucket from the middle leaves a gap behind. Later handle
/// moves on either neighbour close it again, but nothing does so
/// automatically.
#[derive(Default, Serialize, Deserialize)]
pub struct GradeEditor {
    system: Option<GradeSystem>,
    buckets: Vec<CustomGrade>,
    next_id: BucketId,
}

impl GradeEditor {
    pub fn system(&self) -> Option<&GradeSystem> {
        self.system.as_ref()
    }

    pub fn buckets(&self) -> &[CustomGrade] {
        &self.buckets
    }

    /// Number of positions on the active reference scale.
    pub fn scale_len(&self) -> usize {
        self.system.as_ref().map_or(0, |system| system.grades.len())
    }

    /// Replaces the active reference scale. Buckets never survive a scale
    /// change; the partition restarts empty.
    pub fn select_system(&mut self, system: GradeSystem) {
        self.system = Some(system);
        self.buckets.clear();
    }

    /// Appends a bucket continuing right after the last one.
    ///
    /// The first bucket seeds as the single position `0`; later ones
    /// provisionally claim the next two positions, clamped to the top of
    /// the scale. When no position remains after the last bucket the add
    /// is refused.
    pub fn add_bucket(&mut self) {
        let len = self.scale_len();
        if len == 0 {
            return;
        }
        let (min_index, max_index) = match self.buckets.last() {
            None => (0, 0),
            Some(last) => {
                if last.max_index + 1 >= len {
                    return;
                }
                (last.max_index + 1, (last.max_index + 2).min(len - 1))
            }
        };
        let id = self.next_id;
        self.next_id += 1;
        self.buckets.push(CustomGrade {
            id,
            label: String::new(),
            min_index,
            max_index,
        });
    }

    /// Deletes a bucket. Neighbours keep their bounds, so deleting from
    /// the middle leaves a gap until further handle moves close it.
    pub fn remove_bucket(&mut self, id: BucketId) {
        self.buckets.retain(|bucket| bucket.id != id);
    }

    pub fn set_label(&mut self, id: BucketId, label: String) {
        if let Some(bucket) = self.buckets.iter_mut().find(|bucket| bucket.id == id) {
            bucket.label = label;
        }
    }

    /// Applies one slider event for the bucket at `position`.
    ///
    /// The slider reports the full `(min, max)` pair with one of the two
    /// values changed; diffing against the stored bounds decides which
    /// handle moved. The first bucket's lower handle is pinned, so a
    /// reported pair can only differ in its upper value there.
    pub fn move_handles(&mut self, position: usize, new_min: usize, new_max: usize) {
        let len = self.scale_len();
        if new_min >= len || new_max >= len {
            return;
        }
        let (cur_min, cur_max) = match self.buckets.get(position) {
            Some(bucket) => (bucket.min_index, bucket.max_index),
            None => return,
        };
        if new_min != cur_min {
            self.move_lower(position, new_min);
        } else if new_max != cur_max {
            self.move_upper(position, new_max);
        }
    }

    fn move_lower(&mut self, position: usize, value: usize) {
        if position == 0 || value == 0 {
            return;
        }
        let bucket_max = self.buckets[position].max_index;
        let prev = &self.buckets[position - 1];
        // A previous bucket spanning exactly two positions blocks the move,
        // whichever way the handle travels.
        if prev.min_index + 1 == prev.max_index {
            return;
        }
        if value <= prev.min_index || value > bucket_max {
            return;
        }
        self.buckets[position].min_index = value;
        self.buckets[position - 1].max_index = value - 1;
    }

    fn move_upper(&mut self, position: usize, value: usize) {
        let bucket = &self.buckets[position];
        if value < bucket.min_index {
            return;
        }
        if position == self.buckets.len() - 1 {
            // No right-hand neighbour to coordinate with.
            self.buckets[position].max_index = value;
            return;
        }
        let growing = value >= bucket.max_index;
        let next = &self.buckets[position + 1];
        if growing {
            // Mirror of the lower-handle rule: a two-position neighbour
            // refuses to give up ground.
            if next.min_index + 1 == next.max_index {
                return;
            }
            if value >= next.max_index {
                return;
            }
        }
        self.buckets[position].max_index = value;
        self.buckets[position + 1].min_index = value + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Grade;
    use uuid::Uuid;

    fn scale(len: usize) -> GradeSystem {
        GradeSystem {
            name: "test scale".into(),
            grades: (0..len)
                .map(|n| Grade {
                    id: Uuid::new_v4(),
                    label: format!("g{}", n),
                })
                .collect(),
        }
    }

    fn editor(len: usize, ranges: &[(usize, usize)]) -> GradeEditor {
        GradeEditor {
            system: Some(scale(len)),
            buckets: ranges
                .iter()
                .enumerate()
                .map(|(n, &(min_index, max_index))| CustomGrade {
                    id: n as BucketId,
                    label: String::new(),
                    min_index,
                    max_index,
                })
                .collect(),
            next_id: ranges.len() as BucketId,
        }
    }

    fn ranges(editor: &GradeEditor) -> Vec<(usize, usize)> {
        editor
            .buckets()
            .iter()
            .map(|bucket| (bucket.min_index, bucket.max_index))
            .collect()
    }

    fn assert_well_formed(editor: &GradeEditor) {
        let buckets = editor.buckets();
        if let Some(first) = buckets.first() {
            assert_eq!(first.min_index, 0);
        }
        for bucket in buckets {
            assert!(bucket.min_index <= bucket.max_index);
            assert!(bucket.max_index < editor.scale_len());
        }
        for pair in buckets.windows(2) {
            assert_eq!(pair[1].min_index, pair[0].max_index + 1);
        }
    }

    #[test]
    fn first_bucket_seeds_at_origin() {
        let mut editor = editor(10, &[]);
        editor.add_bucket();
        assert_eq!(ranges(&editor), vec![(0, 0)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn second_bucket_claims_next_two_positions() {
        let mut editor = editor(10, &[]);
        editor.add_bucket();
        editor.add_bucket();
        assert_eq!(ranges(&editor), vec![(0, 0), (1, 2)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn seed_is_clamped_to_the_top_of_short_scales() {
        let mut editor = editor(2, &[]);
        editor.add_bucket();
        editor.add_bucket();
        assert_eq!(ranges(&editor), vec![(0, 0), (1, 1)]);
        // The scale is exhausted, so another add is refused.
        editor.add_bucket();
        assert_eq!(ranges(&editor), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn add_without_a_system_is_refused() {
        let mut editor = GradeEditor::default();
        editor.add_bucket();
        assert!(editor.buckets().is_empty());
    }

    #[test]
    fn selecting_a_system_clears_all_buckets() {
        let mut editor = editor(10, &[(0, 4), (5, 9)]);
        editor.select_system(scale(6));
        assert!(editor.buckets().is_empty());
        assert_eq!(editor.scale_len(), 6);
    }

    #[test]
    fn bucket_ids_are_never_reused() {
        let mut editor = editor(10, &[]);
        editor.add_bucket();
        editor.add_bucket();
        let removed = editor.buckets()[1].id;
        editor.remove_bucket(removed);
        editor.add_bucket();
        assert_ne!(editor.buckets()[1].id, removed);
    }

    #[test]
    fn removing_a_middle_bucket_leaves_the_gap() {
        let mut editor = editor(10, &[(0, 2), (3, 5), (6, 8)]);
        let middle = editor.buckets()[1].id;
        editor.remove_bucket(middle);
        assert_eq!(ranges(&editor), vec![(0, 2), (6, 8)]);
    }

    #[test]
    fn lower_move_pulls_the_previous_upper_bound_along() {
        let mut editor = editor(10, &[(0, 2), (3, 5)]);
        editor.move_handles(1, 4, 5);
        assert_eq!(ranges(&editor), vec![(0, 3), (4, 5)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn lower_move_to_the_scale_origin_is_rejected() {
        let mut editor = editor(10, &[(0, 2), (3, 5)]);
        editor.move_handles(1, 0, 5);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn lower_move_past_its_own_upper_bound_is_rejected() {
        let mut editor = editor(10, &[(0, 2), (3, 5)]);
        editor.move_handles(1, 6, 5);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn lower_move_cannot_erase_the_previous_bucket() {
        let mut editor = editor(10, &[(0, 2), (3, 5), (6, 8)]);
        // Bucket 2's lower handle may not cross below bucket 1's origin.
        editor.move_handles(2, 3, 8);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 5), (6, 8)]);
    }

    // The two-position guard is kept exactly as the original behaves: a
    // previous bucket spanning two positions blocks the move outright,
    // even in the direction that would merely shrink it to one position.
    #[test]
    fn two_position_previous_bucket_blocks_lower_moves() {
        let mut editor = editor(10, &[(0, 1), (2, 5)]);
        editor.move_handles(1, 1, 5);
        assert_eq!(ranges(&editor), vec![(0, 1), (2, 5)]);
        editor.move_handles(1, 3, 5);
        assert_eq!(ranges(&editor), vec![(0, 1), (2, 5)]);
    }

    #[test]
    fn upper_grow_pushes_the_next_lower_bound_forward() {
        let mut editor = editor(10, &[(0, 2), (3, 8)]);
        editor.move_handles(0, 0, 5);
        assert_eq!(ranges(&editor), vec![(0, 5), (6, 8)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn upper_shrink_cedes_positions_to_the_next_bucket() {
        let mut editor = editor(10, &[(0, 5), (6, 8)]);
        editor.move_handles(0, 0, 2);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 8)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn two_position_next_bucket_blocks_upper_growth() {
        let mut editor = editor(10, &[(0, 2), (3, 4)]);
        editor.move_handles(0, 0, 3);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 4)]);
    }

    #[test]
    fn upper_grow_cannot_erase_the_next_bucket() {
        let mut editor = editor(10, &[(0, 2), (3, 9)]);
        editor.move_handles(0, 0, 9);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 9)]);
    }

    #[test]
    fn last_bucket_upper_moves_freely_within_the_scale() {
        let mut editor = editor(10, &[(0, 2), (3, 5)]);
        editor.move_handles(1, 3, 9);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 9)]);
        editor.move_handles(1, 3, 3);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 3)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn values_beyond_the_scale_are_rejected_at_entry() {
        let mut editor = editor(10, &[(0, 2), (3, 5)]);
        editor.move_handles(1, 3, 12);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn single_bucket_growth_is_unconditional() {
        let mut editor = editor(10, &[(0, 0)]);
        editor.move_handles(0, 0, 7);
        assert_eq!(ranges(&editor), vec![(0, 7)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn upper_shrink_below_its_own_lower_bound_is_rejected() {
        let mut editor = editor(10, &[(0, 2), (4, 7), (8, 9)]);
        editor.move_handles(1, 4, 3);
        assert_eq!(ranges(&editor), vec![(0, 2), (4, 7), (8, 9)]);
    }

    #[test]
    fn moves_over_a_gap_reattach_the_neighbours() {
        let mut editor = editor(10, &[(0, 2), (3, 5), (6, 8)]);
        let middle = editor.buckets()[1].id;
        editor.remove_bucket(middle);
        editor.move_handles(1, 4, 8);
        assert_eq!(ranges(&editor), vec![(0, 3), (4, 8)]);
        assert_well_formed(&editor);
    }

    #[test]
    fn contiguity_survives_a_long_move_sequence() {
        let mut editor = editor(12, &[]);
        editor.add_bucket();
        editor.move_handles(0, 0, 3);
        editor.add_bucket();
        editor.move_handles(1, 4, 7);
        editor.add_bucket();
        editor.move_handles(2, 8, 11);
        editor.move_handles(1, 5, 7);
        editor.move_handles(0, 0, 2);
        editor.move_handles(2, 9, 11);
        assert_well_formed(&editor);
        assert_eq!(ranges(&editor), vec![(0, 2), (3, 8), (9, 11)]);
    }

    #[test]
    fn bucket_payload_uses_wire_field_names() {
        let editor = editor(10, &[(0, 2)]);
        let payload = serde_json::to_string(editor.buckets()).unwrap();
        assert!(payload.contains("\"minIndex\":0"));
        assert!(payload.contains("\"maxIndex\":2"));
    }
}
