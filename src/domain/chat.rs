use super::enums::ChatSender;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single entry in the chat transcript
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Unique ID for internal references
    pub id: Uuid,
    /// Message body
    pub text: String,
    /// Who wrote it
    pub sender: ChatSender,
    /// When it was appended to the transcript
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: String, sender: ChatSender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            sent_at: Local::now(),
        }
    }

    /// Timestamp formatted as HH:MM
    pub fn time_formatted(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

/// Live state the bot can weave into replies
#[derive(Debug, Clone, Copy)]
pub struct BotContext<'a> {
    pub user_name: &'a str,
    pub points_total: i64,
    pub completed_today: usize,
}

/// Pick a canned reply for a user message.
///
/// Keyword checks run in order; the first hit wins, with a generic
/// listener fallback when nothing matches.
pub fn bot_reply(input: &str, ctx: BotContext) -> String {
    let msg = input.to_lowercase();

    if msg.contains("help") {
        "I'm here to help! You can ask me about your tasks, focus tips, or just chat. \
         What can I do for you?"
            .to_string()
    } else if msg.contains("task") || msg.contains("routine") {
        format!(
            "You have {} tasks completed today! Want to review your full routine?",
            ctx.completed_today
        )
    } else if msg.contains("focus") {
        "Focus mode is great for concentrating! How about a 25-minute session right now?"
            .to_string()
    } else if msg.contains("point") {
        format!(
            "You have {} points! Keep it up and unlock more achievements!",
            ctx.points_total
        )
    } else if msg.contains("thank") {
        "You're welcome! I'm always here for you 😊".to_string()
    } else if msg.contains("hello") || msg.contains("hey") || msg.starts_with("hi") {
        format!("Hi, {}! How can I help you today?", ctx.user_name)
    } else {
        "Interesting! Tell me more about that. I'm here to listen and help.".to_string()
    }
}
