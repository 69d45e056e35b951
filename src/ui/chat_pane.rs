use crate::app::AppState;
use crate::domain::ChatSender;
use crate::ui::styles::{
    border_style, bot_message_style, hint_style, modal_title_style, title_style,
    user_message_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the chat page: transcript above, input line below
pub fn render_chat_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Transcript
            Constraint::Length(3), // Input line
        ])
        .split(area);

    render_transcript(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
}

fn render_transcript(f: &mut Frame, app: &AppState, area: Rect) {
    // Keep the newest messages in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.chat_messages.len().saturating_sub(visible);

    let items: Vec<ListItem> = app
        .chat_messages
        .iter()
        .skip(skip)
        .map(|message| {
            let (who, style) = match message.sender {
                ChatSender::User => ("You", user_message_style()),
                ChatSender::Bot => ("Robo 🤖", bot_message_style()),
            };
            let line = Line::from(vec![
                Span::styled(format!(" [{}] {}: ", message.time_formatted(), who), style),
                Span::raw(message.text.clone()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" 💬 Chat with Robo ", title_style())),
    );
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" > "),
        Span::styled(app.chat_input.as_str(), modal_title_style()),
        Span::styled("█", modal_title_style()),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Message ", hint_style())),
    );
    f.render_widget(paragraph, area);
}
