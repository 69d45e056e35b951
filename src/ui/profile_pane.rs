use crate::app::AppState;
use crate::ui::styles::{border_style, hint_style, points_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the profile page
pub fn render_profile_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!("  👤 {}", app.user_name)));
    lines.push(Line::styled(
        format!("  Access key: {}", app.access_key),
        hint_style(),
    ));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("⭐ {} points", app.points_total), points_style()),
    ]));
    lines.push(Line::raw(format!(
        "  🧠 {} focus sessions today",
        app.focus.sessions_today
    )));
    lines.push(Line::raw(format!(
        "  💜 {} check-ins this session",
        app.checkin_log.len()
    )));
    lines.push(Line::raw(format!(
        "  ✅ {} of {} routine tasks done",
        app.completed_today, app.total_today
    )));
    lines.push(Line::raw(""));
    lines.push(Line::styled("  [l] Sign out", hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 👤 Profile ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
