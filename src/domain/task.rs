use super::enums::TaskCategory;
use chrono::NaiveTime;

/// A single routine task
#[derive(Debug, Clone)]
pub struct TaskRecord {
    /// Unique ID within the routine (seeded, stable for the session)
    pub id: String,
    /// Task title
    pub title: String,
    /// Scheduled time of day
    pub scheduled_at: NaiveTime,
    /// Whether the task has been checked off today
    pub completed: bool,
    /// Time-of-day bucket
    pub category: TaskCategory,
}

impl TaskRecord {
    pub fn new(
        id: &str,
        title: &str,
        scheduled_at: NaiveTime,
        category: TaskCategory,
        completed: bool,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            scheduled_at,
            completed,
            category,
        }
    }

    /// Flip the completion state
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Scheduled time formatted as HH:MM
    pub fn time_formatted(&self) -> String {
        self.scheduled_at.format("%H:%M").to_string()
    }
}

/// Build a NaiveTime from hour and minute, falling back to midnight
fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// The seeded daily routine. There are no insert/delete operations at
/// runtime, only completion toggles.
pub fn starter_routine() -> Vec<TaskRecord> {
    vec![
        TaskRecord::new("1", "Brush teeth", hm(7, 0), TaskCategory::Morning, true),
        TaskRecord::new("2", "Eat breakfast", hm(7, 30), TaskCategory::Morning, true),
        TaskRecord::new("3", "Do homework", hm(14, 0), TaskCategory::Afternoon, false),
        TaskRecord::new("4", "Read a book", hm(15, 30), TaskCategory::Afternoon, true),
        TaskRecord::new("5", "Family dinner", hm(19, 0), TaskCategory::Evening, false),
        TaskRecord::new("6", "Get ready for bed", hm(21, 0), TaskCategory::Evening, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_starter_routine_ids_unique() {
        let tasks = starter_routine();
        let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_starter_routine_seed() {
        let tasks = starter_routine();
        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks.iter().filter(|t| t.completed).count(), 3);
        assert_eq!(tasks[2].id, "3");
        assert!(!tasks[2].completed);
        assert_eq!(tasks[2].category, TaskCategory::Afternoon);
    }

    #[test]
    fn test_toggle() {
        let mut task = TaskRecord::new("9", "Water plants", hm(8, 0), TaskCategory::Morning, false);
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_time_formatted() {
        let task = TaskRecord::new("9", "Water plants", hm(7, 5), TaskCategory::Morning, false);
        assert_eq!(task.time_formatted(), "07:05");
    }
}
