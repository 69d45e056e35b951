pub mod chat_pane;
pub mod checkin_pane;
pub mod dashboard_pane;
pub mod focus_pane;
pub mod keybindings;
pub mod layout;
pub mod login_pane;
pub mod modal;
pub mod nav_bar;
pub mod profile_pane;
pub mod rewards_pane;
pub mod routine_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::{Page, UiMode};
use chat_pane::render_chat_pane;
use checkin_pane::render_checkin_pane;
use dashboard_pane::render_dashboard_pane;
use focus_pane::render_focus_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use login_pane::render_login_pane;
use modal::{render_logout_modal, render_notice_modal};
use nav_bar::render_nav_bar;
use profile_pane::render_profile_pane;
use ratatui::Frame;
use rewards_pane::render_rewards_pane;
use routine_pane::render_routine_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.nav_visible());

    // Render keybindings bar
    render_keybindings(f, app, layout.hint_area);

    // Render the active page
    match app.page {
        Page::Login => render_login_pane(f, app, layout.page_area),
        Page::Dashboard => render_dashboard_pane(f, app, layout.page_area),
        Page::Routine => render_routine_pane(f, app, layout.page_area),
        Page::Focus => render_focus_pane(f, app, layout.page_area),
        Page::Checkin => render_checkin_pane(f, app, layout.page_area),
        Page::Chat => render_chat_pane(f, app, layout.page_area),
        Page::Rewards => render_rewards_pane(f, app, layout.page_area),
        Page::Profile => render_profile_pane(f, app, layout.page_area),
    }

    // Render the bottom navigation (hidden in focus mode)
    if let Some(nav_area) = layout.nav_area {
        render_nav_bar(f, app, nav_area);
    }

    // Render modals on top
    if app.ui_mode == UiMode::ConfirmLogout {
        render_logout_modal(f, size);
    }
    if app.notice.is_some() {
        render_notice_modal(f, app, size);
    }
}
