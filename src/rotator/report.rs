//! Human-readable rendering of a rotation plan and its outcome.
//!
//! Pure presentation: nothing here changes what gets deleted. The binary
//! prints these strings to stdout unless `--silent` is set.

use super::{ApplyReport, Partition};

/// Render the plan: how many files will go, which ones, and which stay.
pub fn render(partition: &Partition, dry_run: bool) -> String {
    let mut out = String::new();

    let verb = if dry_run { "Would delete" } else { "Deleting" };
    out.push_str(&format!(
        "{} {} of {} matching file(s)\n",
        verb,
        partition.to_delete.len(),
        partition.total()
    ));

    if !partition.to_delete.is_empty() {
        out.push_str("\nFiles to delete:\n");
        for path in &partition.to_delete {
            out.push_str(&format!("  {}\n", path.display()));
        }
    }

    if !partition.to_keep.is_empty() {
        out.push_str("\nFiles to keep:\n");
        for path in &partition.to_keep {
            out.push_str(&format!("  {}\n", path.display()));
        }
    }

    out
}

/// Render the per-file failures of an apply pass, empty string if none.
pub fn render_failures(report: &ApplyReport) -> String {
    let mut out = String::new();
    if report.has_failures() {
        out.push_str(&format!(
            "\n{} deletion(s) failed:\n",
            report.failed.len()
        ));
        for (path, error) in &report.failed {
            out.push_str(&format!("  {}: {}\n", path.display(), error));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn partition() -> Partition {
        Partition {
            to_delete: vec![PathBuf::from("/logs/a_01.log")],
            to_keep: vec![PathBuf::from("/logs/a_02.log"), PathBuf::from("/logs/a_03.log")],
        }
    }

    #[test]
    fn test_render_lists_both_sets() {
        let text = render(&partition(), false);
        assert!(text.starts_with("Deleting 1 of 3 matching file(s)"));
        assert!(text.contains("Files to delete:\n  /logs/a_01.log"));
        assert!(text.contains("Files to keep:\n  /logs/a_02.log"));
        assert!(text.contains("/logs/a_03.log"));
    }

    #[test]
    fn test_render_dry_run_wording() {
        let text = render(&partition(), true);
        assert!(text.starts_with("Would delete 1 of 3"));
    }

    #[test]
    fn test_render_noop_plan_has_no_delete_section() {
        let plan = Partition {
            to_delete: Vec::new(),
            to_keep: vec![PathBuf::from("/logs/a_01.log")],
        };
        let text = render(&plan, false);
        assert!(text.contains("Deleting 0 of 1"));
        assert!(!text.contains("Files to delete:"));
    }

    #[test]
    fn test_render_failures_empty_when_clean() {
        let report = ApplyReport::default();
        assert!(render_failures(&report).is_empty());
    }

    #[test]
    fn test_render_failures_lists_errors() {
        let report = ApplyReport {
            failed: vec![(
                PathBuf::from("/logs/a_01.log"),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            )],
            ..ApplyReport::default()
        };
        let text = render_failures(&report);
        assert!(text.contains("1 deletion(s) failed"));
        assert!(text.contains("/logs/a_01.log: denied"));
    }
}
