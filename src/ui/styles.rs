use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Active tab in the navigation bar
pub fn nav_active_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Inactive tab in the navigation bar
pub fn nav_inactive_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Completed routine task style
pub fn completed_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Running countdown style
pub fn timer_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused countdown style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Points display style
pub fn points_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(Color::Green).bg(Color::DarkGray)
}

/// User chat message style
pub fn user_message_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Bot chat message style
pub fn bot_message_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Unlocked achievement style
pub fn unlocked_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Locked achievement style
pub fn locked_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Selected mood highlight style
pub fn mood_selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD)
}
