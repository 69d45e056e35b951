pub mod chat;
pub mod enums;
pub mod focus;
pub mod rewards;
pub mod task;
pub mod views;

pub use chat::{bot_reply, BotContext, ChatMessage};
pub use enums::{ChatSender, FocusStatus, Mood, Page, TaskCategory, UiMode};
pub use focus::{format_clock, FocusSession, TickOutcome, DEFAULT_FOCUS_SECS};
pub use rewards::{starter_achievements, Achievement};
pub use task::{starter_routine, TaskRecord};
pub use views::{
    completed_count, focus_badge, progress_percent, routine_rows, routine_sections, task_checkbox,
    RoutineSection,
};
