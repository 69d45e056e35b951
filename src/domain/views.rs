use super::enums::{FocusStatus, TaskCategory};
use super::task::TaskRecord;

/// Tasks grouped under one category heading, in display order
#[derive(Debug)]
pub struct RoutineSection<'a> {
    pub category: TaskCategory,
    pub tasks: Vec<&'a TaskRecord>,
}

/// Group tasks by category for the routine page. Empty sections are skipped.
pub fn routine_sections(tasks: &[TaskRecord]) -> Vec<RoutineSection<'_>> {
    TaskCategory::all()
        .iter()
        .filter_map(|&category| {
            let grouped: Vec<&TaskRecord> =
                tasks.iter().filter(|t| t.category == category).collect();
            if grouped.is_empty() {
                None
            } else {
                Some(RoutineSection {
                    category,
                    tasks: grouped,
                })
            }
        })
        .collect()
}

/// Flatten the routine into selectable rows, in section display order
pub fn routine_rows(tasks: &[TaskRecord]) -> Vec<&TaskRecord> {
    routine_sections(tasks)
        .into_iter()
        .flat_map(|section| section.tasks)
        .collect()
}

/// Count checked-off tasks
pub fn completed_count(tasks: &[TaskRecord]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}

/// Completion percentage for the progress gauge (0.0 to 100.0)
pub fn progress_percent(tasks: &[TaskRecord]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    completed_count(tasks) as f64 / tasks.len() as f64 * 100.0
}

/// Checkbox glyph for a routine row
pub fn task_checkbox(completed: bool, use_emoji: bool) -> &'static str {
    if use_emoji {
        if completed {
            "✅"
        } else {
            "⬜"
        }
    } else {
        if completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// Status badge text for the focus timer
pub fn focus_badge(status: FocusStatus) -> &'static str {
    match status {
        FocusStatus::Running => "⏱ RUNNING",
        FocusStatus::Paused => "⏸ PAUSED",
        FocusStatus::Idle => "○ READY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::starter_routine;

    #[test]
    fn test_routine_sections_grouping() {
        let tasks = starter_routine();
        let sections = routine_sections(&tasks);

        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].category, TaskCategory::Morning);
        assert_eq!(sections[0].tasks.len(), 2);
        assert_eq!(sections[1].category, TaskCategory::Afternoon);
        assert_eq!(sections[2].category, TaskCategory::Evening);
    }

    #[test]
    fn test_routine_sections_skip_empty() {
        let tasks: Vec<TaskRecord> = starter_routine()
            .into_iter()
            .filter(|t| t.category != TaskCategory::Evening)
            .collect();
        let sections = routine_sections(&tasks);
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_routine_rows_order() {
        let tasks = starter_routine();
        let rows = routine_rows(&tasks);
        assert_eq!(rows.len(), 6);
        // Morning tasks first, evening last
        assert_eq!(rows[0].category, TaskCategory::Morning);
        assert_eq!(rows[5].category, TaskCategory::Evening);
    }

    #[test]
    fn test_completed_count_and_percent() {
        let tasks = starter_routine();
        assert_eq!(completed_count(&tasks), 3);
        assert_eq!(progress_percent(&tasks), 50.0);
        assert_eq!(progress_percent(&[]), 0.0);
    }

    #[test]
    fn test_task_checkbox() {
        assert_eq!(task_checkbox(true, true), "✅");
        assert_eq!(task_checkbox(false, true), "⬜");
        assert_eq!(task_checkbox(true, false), "[x]");
        assert_eq!(task_checkbox(false, false), "[ ]");
    }

    #[test]
    fn test_focus_badge() {
        assert_eq!(focus_badge(FocusStatus::Running), "⏱ RUNNING");
        assert_eq!(focus_badge(FocusStatus::Paused), "⏸ PAUSED");
        assert_eq!(focus_badge(FocusStatus::Idle), "○ READY");
    }
}
