//! Keep/delete partitioning.

use std::path::PathBuf;

/// The planned outcome of a rotation: which files go and which stay.
///
/// Both sequences preserve the scan order (oldest first); `to_delete` is
/// the prefix and `to_keep` the suffix of the sorted listing, so together
/// they are exactly the filtered entry set with no overlap.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Files slated for deletion, oldest first.
    pub to_delete: Vec<PathBuf>,

    /// The most recent files, retained.
    pub to_keep: Vec<PathBuf>,
}

impl Partition {
    /// Split a sorted listing into delete and keep sets.
    ///
    /// A listing of one file (or none) is never partitioned: a single
    /// matching file is kept regardless of `keep`, even `keep == 0`. The
    /// last old file is usually the only backup there is.
    pub fn plan(entries: Vec<PathBuf>, keep: usize) -> Self {
        if entries.len() <= 1 {
            return Self {
                to_delete: Vec::new(),
                to_keep: entries,
            };
        }

        if entries.len() <= keep {
            return Self {
                to_delete: Vec::new(),
                to_keep: entries,
            };
        }

        let split = entries.len() - keep;
        let mut to_delete = entries;
        let to_keep = to_delete.split_off(split);
        Self { to_delete, to_keep }
    }

    /// True when the plan deletes nothing.
    pub fn is_noop(&self) -> bool {
        self.to_delete.is_empty()
    }

    /// Total number of files covered by the plan.
    pub fn total(&self) -> usize {
        self.to_delete.len() + self.to_keep.len()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_plan_deletes_oldest_keeps_newest() {
        let entries = paths(&["a_01", "a_02", "a_03", "a_04", "a_05"]);
        let plan = Partition::plan(entries, 3);
        assert_eq!(plan.to_delete, paths(&["a_01", "a_02"]));
        assert_eq!(plan.to_keep, paths(&["a_03", "a_04", "a_05"]));
    }

    #[test]
    fn test_plan_keeps_everything_when_count_fits() {
        let entries = paths(&["a_01", "a_02"]);
        let plan = Partition::plan(entries.clone(), 4);
        assert!(plan.is_noop());
        assert_eq!(plan.to_keep, entries);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(10)]
    fn test_plan_single_file_is_never_deleted(#[case] keep: usize) {
        let plan = Partition::plan(paths(&["only_one"]), keep);
        assert!(plan.is_noop());
        assert_eq!(plan.to_keep, paths(&["only_one"]));
    }

    #[test]
    fn test_plan_empty_listing() {
        let plan = Partition::plan(Vec::new(), 4);
        assert!(plan.is_noop());
        assert!(plan.to_keep.is_empty());
        assert_eq!(plan.total(), 0);
    }

    #[test]
    fn test_plan_keep_zero_deletes_all_but_nothing_to_keep() {
        let entries = paths(&["a_01", "a_02", "a_03"]);
        let plan = Partition::plan(entries.clone(), 0);
        assert_eq!(plan.to_delete, entries);
        assert!(plan.to_keep.is_empty());
    }

    #[rstest]
    #[case(5, 3)]
    #[case(5, 5)]
    #[case(5, 0)]
    #[case(2, 1)]
    #[case(7, 4)]
    fn test_plan_invariants(#[case] count: usize, #[case] keep: usize) {
        let entries: Vec<PathBuf> = (0..count).map(|i| PathBuf::from(format!("f_{i:02}"))).collect();
        let plan = Partition::plan(entries.clone(), keep);

        // Disjoint union of the input, in the input's order
        let mut reunited = plan.to_delete.clone();
        reunited.extend(plan.to_keep.iter().cloned());
        assert_eq!(reunited, entries);

        assert_eq!(plan.to_keep.len(), keep.min(count));
        assert_eq!(plan.total(), count);
    }
}
