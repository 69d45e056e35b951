use crate::app::AppState;
use crate::ui::styles::{border_style, error_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the login page
pub fn render_login_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.login_form;
    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::styled("  🤖 RoboFocus", title_style()));
    lines.push(Line::styled(
        "  Your friendly routine companion",
        hint_style(),
    ));
    lines.push(Line::raw(""));

    // Name field
    let name_label = if form.editing_field == 0 {
        "  Name: (editing)"
    } else {
        "  Name:"
    };
    lines.push(Line::raw(name_label));
    lines.push(field_line(&form.name, form.editing_field == 0));
    lines.push(Line::raw(""));

    // Access key field (uppercased as typed)
    let key_label = if form.editing_field == 1 {
        "  Access key: (editing)"
    } else {
        "  Access key:"
    };
    lines.push(Line::raw(key_label));
    lines.push(field_line(&form.access_key, form.editing_field == 1));
    lines.push(Line::raw(""));

    if app.is_verifying() {
        lines.push(Line::styled("  Verifying...", modal_title_style()));
    } else if let Some(error) = &form.error {
        lines.push(Line::styled(format!("  ⚠ {}", error), error_style()));
    } else {
        lines.push(Line::raw(""));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "  Ask your institution for an access key.",
        hint_style(),
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" 🔑 Sign In ", title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// One input field line, with a cursor block when active
fn field_line(value: &str, active: bool) -> Line<'_> {
    let mut spans = vec![Span::raw("  > "), Span::styled(value, modal_title_style())];
    if active {
        spans.push(Span::styled("█", modal_title_style()));
    }
    Line::from(spans)
}
