/// An unlockable badge shown on the rewards page
#[derive(Debug, Clone)]
pub struct Achievement {
    /// Unique ID within the badge set
    pub id: String,
    /// Display name
    pub name: String,
    /// Badge emoji
    pub icon: &'static str,
    /// Whether the badge has been earned
    pub unlocked: bool,
}

impl Achievement {
    fn new(id: &str, name: &str, icon: &'static str, unlocked: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon,
            unlocked,
        }
    }
}

/// The seeded badge set for the rewards grid
pub fn starter_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new("1", "First Task", "🎯", true),
        Achievement::new("2", "Deep Focus", "🧠", true),
        Achievement::new("3", "Full Week", "📅", false),
        Achievement::new("4", "Focus Master", "👑", false),
        Achievement::new("5", "Shining Star", "⭐", true),
        Achievement::new("6", "Super Routine", "💪", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_starter_achievements_seed() {
        let badges = starter_achievements();
        assert_eq!(badges.len(), 6);
        assert_eq!(badges.iter().filter(|a| a.unlocked).count(), 3);
    }

    #[test]
    fn test_starter_achievement_ids_unique() {
        let badges = starter_achievements();
        let ids: HashSet<&str> = badges.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), badges.len());
    }
}
