use crate::app::AppState;
use crate::domain::{focus_badge, FocusStatus};
use crate::ui::styles::{
    border_style, gauge_style, hint_style, paused_style, timer_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the focus mode page. The bottom navigation is hidden here so
/// the countdown gets the whole screen.
pub fn render_focus_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" 🧠 Focus Mode ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Countdown
            Constraint::Length(3), // Progress gauge
            Constraint::Length(2), // Session counter
        ])
        .split(inner);

    let badge_style = match app.focus.status {
        FocusStatus::Running => timer_style(),
        FocusStatus::Paused => paused_style(),
        FocusStatus::Idle => hint_style(),
    };

    let countdown = vec![
        Line::raw(""),
        Line::raw(""),
        Line::styled(app.focus.formatted(), timer_style()),
        Line::raw(""),
        Line::styled(focus_badge(app.focus.status), badge_style),
    ];
    let paragraph = Paragraph::new(countdown).alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[0]);

    let ratio = app.focus.progress_ratio().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(app.focus.formatted());
    f.render_widget(gauge, chunks[1]);

    let sessions = Paragraph::new(Line::raw(format!(
        "Sessions completed today: {}",
        app.focus.sessions_today
    )))
    .alignment(Alignment::Center)
    .style(hint_style());
    f.render_widget(sessions, chunks[2]);
}
