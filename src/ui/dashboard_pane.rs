use crate::app::AppState;
use crate::domain::progress_percent;
use crate::ui::styles::{border_style, gauge_style, hint_style, points_style, title_style};
use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the dashboard summary page
pub fn render_dashboard_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" 🏠 Dashboard ({}) ", date);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Greeting and counters
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),    // Quick actions
        ])
        .split(inner);

    let clock = Local::now().format("%H:%M").to_string();
    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw(format!("  Hello, {}! 👋", app.user_name)),
        Span::raw(format!("   🕒 {}", clock)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("⭐ {} pts", app.points_total), points_style()),
    ]));
    lines.push(Line::raw(format!(
        "  ✅ {} of {} tasks complete   🧠 {} focus sessions today",
        app.completed_today, app.total_today, app.focus.sessions_today
    )));
    f.render_widget(Paragraph::new(lines), chunks[0]);

    let percent = progress_percent(&app.tasks).round() as u16;
    let gauge = Gauge::default()
        .block(Block::default().title("Today's routine"))
        .gauge_style(gauge_style())
        .percent(percent.min(100));
    f.render_widget(gauge, chunks[1]);

    let actions = vec![
        Line::raw(""),
        Line::raw("  Quick actions:"),
        Line::styled("  [f] Start a focus session", hint_style()),
        Line::styled("  [r] Review your routine", hint_style()),
        Line::styled("  [c] Emotional check-in", hint_style()),
    ];
    f.render_widget(Paragraph::new(actions), chunks[2]);
}
