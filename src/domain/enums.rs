/// Top-level pages the user can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Dashboard,
    Routine,
    Focus,
    Checkin,
    Chat,
    Rewards,
    Profile,
}

impl Page {
    /// Parse a page from its registered name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "login" => Some(Self::Login),
            "dashboard" => Some(Self::Dashboard),
            "routine" => Some(Self::Routine),
            "focus" => Some(Self::Focus),
            "checkin" => Some(Self::Checkin),
            "chat" => Some(Self::Chat),
            "rewards" => Some(Self::Rewards),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// Registered name of this page
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::Routine => "routine",
            Self::Focus => "focus",
            Self::Checkin => "checkin",
            Self::Chat => "chat",
            Self::Rewards => "rewards",
            Self::Profile => "profile",
        }
    }

    /// Display title for pane headers and the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Routine => "Routine",
            Self::Focus => "Focus",
            Self::Checkin => "Check-in",
            Self::Chat => "Chat",
            Self::Rewards => "Rewards",
            Self::Profile => "Profile",
        }
    }

    /// Get the emoji symbol for this page
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Login => "🔑",
            Self::Dashboard => "🏠",
            Self::Routine => "📋",
            Self::Focus => "🧠",
            Self::Checkin => "💜",
            Self::Chat => "💬",
            Self::Rewards => "🏆",
            Self::Profile => "👤",
        }
    }

    /// Pages reachable from the bottom navigation bar, in display order
    pub fn nav_order() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Routine,
            Page::Focus,
            Page::Checkin,
            Page::Chat,
            Page::Rewards,
            Page::Profile,
        ]
    }
}

/// Time-of-day bucket for routine tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    Morning,
    Afternoon,
    Evening,
}

impl TaskCategory {
    /// Section heading for the routine page
    pub fn title(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }

    /// Get the emoji symbol for this category
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Morning => "🌅",
            Self::Afternoon => "🌞",
            Self::Evening => "🌙",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [TaskCategory] {
        &[
            TaskCategory::Morning,
            TaskCategory::Afternoon,
            TaskCategory::Evening,
        ]
    }
}

/// Mood options for the emotional check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Calm,
    Okay,
    Sad,
    Angry,
}

impl Mood {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Happy => "😄",
            Self::Calm => "😌",
            Self::Okay => "😐",
            Self::Sad => "😢",
            Self::Angry => "😠",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Calm => "Calm",
            Self::Okay => "Okay",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
        }
    }

    /// All moods in display order
    pub fn all() -> &'static [Mood] {
        &[Mood::Happy, Mood::Calm, Mood::Okay, Mood::Sad, Mood::Angry]
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

/// Runtime status of the focus countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStatus {
    /// Full duration remaining, not counting down
    Idle,
    /// Counting down once per second
    Running,
    /// Stopped partway, remaining time kept
    Paused,
}

impl FocusStatus {
    /// Whether the countdown is advancing
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into the check-in note field
    EditingNote,
    /// Logout confirmation prompt is up
    ConfirmLogout,
    /// A dismissable notice banner is up (e.g. session complete)
    Notice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_name() {
        assert_eq!(Page::from_name("dashboard"), Some(Page::Dashboard));
        assert_eq!(Page::from_name("FOCUS"), Some(Page::Focus));
        assert_eq!(Page::from_name("rewards"), Some(Page::Rewards));
        assert_eq!(Page::from_name("unknownpage"), None);
        assert_eq!(Page::from_name(""), None);
    }

    #[test]
    fn test_page_name_round_trip() {
        for page in Page::nav_order() {
            assert_eq!(Page::from_name(page.name()), Some(*page));
        }
    }

    #[test]
    fn test_nav_order_excludes_login() {
        assert!(!Page::nav_order().contains(&Page::Login));
        assert_eq!(Page::nav_order().len(), 7);
    }

    #[test]
    fn test_focus_status_is_active() {
        assert!(FocusStatus::Running.is_active());
        assert!(!FocusStatus::Idle.is_active());
        assert!(!FocusStatus::Paused.is_active());
    }
}
