use crate::app::AppState;
use crate::domain::{Mood, Page, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Notice => {
            // Any key takes the banner down
            app.dismiss_notice();
            Ok(false)
        }
        UiMode::ConfirmLogout => handle_confirm_logout(app, key),
        UiMode::EditingNote => handle_note_editing(app, key),
        UiMode::Normal => match app.page {
            Page::Login => handle_login_keys(app, key),
            Page::Chat => handle_chat_keys(app, key),
            _ => handle_page_keys(app, key),
        },
    }
}

/// Keys on the non-typing pages (dashboard, routine, focus, check-in,
/// rewards, profile)
fn handle_page_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Page cycling is available everywhere outside text entry
    match key.code {
        KeyCode::Tab => {
            app.cycle_nav(true);
            return Ok(false);
        }
        KeyCode::BackTab => {
            app.cycle_nav(false);
            return Ok(false);
        }
        _ => {}
    }

    match app.page {
        Page::Dashboard => handle_dashboard_keys(app, key),
        Page::Routine => handle_routine_keys(app, key),
        Page::Focus => handle_focus_keys(app, key),
        Page::Checkin => handle_checkin_keys(app, key),
        Page::Rewards | Page::Profile => handle_passive_page_keys(app, key),
        // Login and Chat have dedicated handlers
        _ => Ok(false),
    }
}

/// Navigate via the numbered bottom-nav slots
fn handle_nav_digit(app: &mut AppState, key: KeyEvent) -> bool {
    if let KeyCode::Char(c @ '1'..='7') = key.code {
        let slot = (c as usize) - ('1' as usize);
        app.navigate_to_nav_slot(slot);
        return true;
    }
    false
}

fn handle_dashboard_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_nav_digit(app, key) {
        return Ok(false);
    }

    match key.code {
        // Quick actions
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.navigate_to(Page::Routine);
            Ok(false)
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.navigate_to(Page::Focus);
            Ok(false)
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.navigate_to(Page::Checkin);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

fn handle_routine_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_nav_digit(app, key) {
        return Ok(false);
    }

    match key.code {
        KeyCode::Up => {
            app.select_prev_task();
            Ok(false)
        }
        KeyCode::Down => {
            app.select_next_task();
            Ok(false)
        }

        // Check off / uncheck the selected task
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_selected_task();
            Ok(false)
        }

        KeyCode::Esc => {
            app.navigate_to(Page::Dashboard);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

fn handle_focus_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_nav_digit(app, key) {
        return Ok(false);
    }

    match key.code {
        // Start / pause
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.toggle_focus();
            Ok(false)
        }

        // Wind back to full duration
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_focus();
            Ok(false)
        }

        // Close focus mode (timer keeps its state)
        KeyCode::Esc => {
            app.navigate_to(Page::Dashboard);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

fn handle_checkin_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // On the success screen, Enter (or Esc) returns to the dashboard
    if app.checkin.submitted {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.finish_checkin();
                Ok(false)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
            _ => Ok(false),
        };
    }

    match key.code {
        // Digits pick moods here; page jumps go through Tab instead
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(mood) = Mood::all().get(idx) {
                app.select_mood(*mood);
            }
            Ok(false)
        }

        // Edit the optional note
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.ui_mode = UiMode::EditingNote;
            Ok(false)
        }

        KeyCode::Enter => {
            app.submit_checkin();
            Ok(false)
        }

        KeyCode::Esc => {
            app.navigate_to(Page::Dashboard);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

fn handle_passive_page_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if handle_nav_digit(app, key) {
        return Ok(false);
    }

    match key.code {
        // Logout lives on the profile page
        KeyCode::Char('l') | KeyCode::Char('L') if app.page == Page::Profile => {
            app.request_logout();
            Ok(false)
        }

        KeyCode::Esc => {
            app.navigate_to(Page::Dashboard);
            Ok(false)
        }

        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        _ => Ok(false),
    }
}

/// Keys on the login page. Characters go to the active field, so quitting
/// here is Esc rather than 'q'.
fn handle_login_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ignore input while the verify delay runs
    if app.is_verifying() {
        return Ok(false);
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_login();
            Ok(false)
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            app.login_form_toggle_field();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.login_form_backspace();
            Ok(false)
        }
        KeyCode::Esc => Ok(true),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login_form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Keys on the chat page. Characters go to the input line.
fn handle_chat_keys(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.send_chat_message();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.chat_input_backspace();
            Ok(false)
        }
        KeyCode::Tab => {
            app.cycle_nav(true);
            Ok(false)
        }
        KeyCode::BackTab => {
            app.cycle_nav(false);
            Ok(false)
        }
        KeyCode::Esc => {
            app.navigate_to(Page::Dashboard);
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.chat_input_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Keys while editing the check-in note
fn handle_note_editing(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Done editing
        KeyCode::Enter | KeyCode::Esc => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }
        KeyCode::Backspace => {
            app.checkin_note_backspace();
            Ok(false)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.checkin_note_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Keys on the logout confirmation prompt
fn handle_confirm_logout(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_logout();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_logout();
            Ok(false)
        }
        _ => Ok(false),
    }
}
