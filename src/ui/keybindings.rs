use crate::app::AppState;
use crate::domain::{Page, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the context-sensitive keybinding hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Notice => " any key dismiss",
        UiMode::ConfirmLogout => " y confirm   n cancel",
        UiMode::EditingNote => " type your note   Enter/Esc done",
        UiMode::Normal => match app.page {
            Page::Login => " type to fill   Tab switch field   Enter sign in   Esc quit",
            Page::Dashboard => " f focus   r routine   c check-in   1-7 pages   Tab next   q quit",
            Page::Routine => " ↑/↓ select   Enter/Space check off   1-7 pages   Esc back   q quit",
            Page::Focus => " Enter/s start/pause   r reset   Esc close   q quit",
            Page::Checkin => " 1-5 mood   n note   Enter submit   Esc back   q quit",
            Page::Chat => " type a message   Enter send   Tab next page   Esc back",
            Page::Rewards => " 1-7 pages   Tab next   Esc back   q quit",
            Page::Profile => " l logout   1-7 pages   Esc back   q quit",
        },
    };

    let paragraph = Paragraph::new(Line::raw(hints)).style(hint_style());
    f.render_widget(paragraph, area);
}
