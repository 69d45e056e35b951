use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub hint_area: Rect,
    pub page_area: Rect,
    pub nav_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybinding hints (1 row)
/// - Middle: the active page
/// - Bottom: navigation bar (1 row), hidden in focus mode
pub fn create_layout(area: Rect, show_nav: bool) -> MainLayout {
    if show_nav {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Hint bar
                Constraint::Min(0),    // Page content
                Constraint::Length(1), // Navigation bar
            ])
            .split(area);

        MainLayout {
            hint_area: chunks[0],
            page_area: chunks[1],
            nav_area: Some(chunks[2]),
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Hint bar
                Constraint::Min(0),    // Page content
            ])
            .split(area);

        MainLayout {
            hint_area: chunks[0],
            page_area: chunks[1],
            nav_area: None,
        }
    }
}

/// Create a centered modal area (for confirmations and notices)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
