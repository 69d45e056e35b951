use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the logout confirmation prompt
pub fn render_logout_modal(f: &mut Frame, area: Rect) {
    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Are you sure you want to sign out?"));
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Your points and sessions are kept only for"));
    lines.push(Line::raw("  this run of the app."));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(" Sign out  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" Stay  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" 👤 Sign Out ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the dismissable notice banner (e.g. focus session complete)
pub fn render_notice_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let modal_area = create_modal_area(area);

        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!("  {}", notice)));
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("any key", modal_title_style()),
            Span::raw(" to continue"),
        ]));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" ✨ Nice Work ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
