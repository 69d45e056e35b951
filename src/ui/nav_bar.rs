use crate::app::AppState;
use crate::domain::Page;
use crate::ui::styles::{nav_active_style, nav_inactive_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom navigation bar.
///
/// Hidden entirely in focus mode (the caller skips it); greyed out until
/// the user is logged in.
pub fn render_nav_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    for (idx, page) in Page::nav_order().iter().enumerate() {
        let label = format!(" {} {} {} ", idx + 1, page.symbol(), page.title());
        let style = if *page == app.page && app.is_authenticated {
            nav_active_style()
        } else {
            nav_inactive_style()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
