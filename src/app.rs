use crate::auth::{self, LoginError};
use crate::config::AppConfig;
use crate::domain::{
    bot_reply, completed_count, routine_rows, starter_achievements, starter_routine, Achievement,
    BotContext, ChatMessage, ChatSender, FocusSession, Mood, Page, TaskRecord, TickOutcome, UiMode,
};
use crate::notifications;
use crate::ticker::{Cadence, OneShot, CADENCE_PERIOD};
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Points awarded (or taken back) for a routine task toggle
pub const TASK_POINTS: i64 = 10;
/// Points awarded for a completed focus session
pub const FOCUS_SESSION_POINTS: i64 = 50;
/// Points awarded for submitting an emotional check-in
pub const CHECKIN_POINTS: i64 = 10;
/// Points seeded at startup
pub const STARTING_POINTS: i64 = 1250;

/// Simulated verification delay after a valid login submit
const LOGIN_VERIFY_DELAY: Duration = Duration::from_millis(800);
/// Delay before the bot answers a chat message
const BOT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// State of the login form fields
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub name: String,
    pub access_key: String,
    /// 0 = name, 1 = access key
    pub editing_field: usize,
    pub error: Option<LoginError>,
}

/// A login that passed validation and is waiting out the verify delay
#[derive(Debug, Clone)]
pub struct PendingLogin {
    pub name: String,
    pub access_key: String,
    pub ready: OneShot,
}

/// State of the emotional check-in form
#[derive(Debug, Clone, Default)]
pub struct CheckinState {
    pub selected_mood: Option<Mood>,
    pub note: String,
    /// Whether the success screen is showing
    pub submitted: bool,
    pub prompt: Option<&'static str>,
}

/// A submitted check-in entry
#[derive(Debug, Clone)]
pub struct CheckinEntry {
    pub mood: Mood,
    pub note: String,
    pub at: DateTime<Local>,
}

/// A user message waiting out the bot reply delay
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub prompt: String,
    pub ready: OneShot,
}

/// Main application state
pub struct AppState {
    pub config: AppConfig,
    pub page: Page,
    pub ui_mode: UiMode,

    // Login / profile
    pub is_authenticated: bool,
    pub user_name: String,
    pub access_key: String,
    pub login_form: LoginForm,
    pub pending_login: Option<PendingLogin>,

    // Points and routine
    pub points_total: i64,
    pub completed_today: usize,
    pub total_today: usize,
    pub tasks: Vec<TaskRecord>,
    pub selected_task: usize,

    // Focus timer
    pub focus: FocusSession,
    pub focus_cadence: Cadence,

    // Emotional check-in
    pub checkin: CheckinState,
    pub checkin_log: Vec<CheckinEntry>,

    // Chat
    pub chat_messages: Vec<ChatMessage>,
    pub chat_input: String,
    pub pending_replies: Vec<PendingReply>,

    // Rewards
    pub achievements: Vec<Achievement>,

    // Dismissable notice banner
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let tasks = starter_routine();
        let total_today = tasks.len();
        let focus = FocusSession::new(config.focus_secs());

        let mut app = Self {
            config,
            page: Page::Login,
            ui_mode: UiMode::Normal,

            is_authenticated: false,
            user_name: String::new(),
            access_key: String::new(),
            login_form: LoginForm::default(),
            pending_login: None,

            points_total: STARTING_POINTS,
            completed_today: 0,
            total_today,
            tasks,
            selected_task: 0,

            focus,
            focus_cadence: Cadence::new(CADENCE_PERIOD),

            checkin: CheckinState::default(),
            checkin_log: Vec::new(),

            chat_messages: Vec::new(),
            chat_input: String::new(),
            pending_replies: Vec::new(),

            achievements: starter_achievements(),

            notice: None,
        };

        app.refresh_progress();
        app
    }

    // ---- Navigation -----------------------------------------------------

    /// Switch to a page and run its refresh hook before returning.
    ///
    /// Exactly one page is current at any time; assigning here deactivates
    /// the previous page unconditionally.
    pub fn navigate_to(&mut self, page: Page) {
        self.page = page;

        match page {
            // Both summaries re-derive the progress counters on entry
            Page::Dashboard | Page::Routine => self.refresh_progress(),
            // The rewards grid re-derives from state on render
            _ => {}
        }
    }

    /// Navigate by page name. Unknown names are rejected and the prior
    /// page stays fully active.
    pub fn navigate_by_name(&mut self, name: &str) {
        if let Some(page) = Page::from_name(name) {
            self.navigate_to(page);
        }
    }

    /// Navigate to the n-th bottom-nav slot (0-based), if authenticated
    pub fn navigate_to_nav_slot(&mut self, slot: usize) {
        if !self.is_authenticated {
            return;
        }
        if let Some(page) = Page::nav_order().get(slot) {
            self.navigate_to(*page);
        }
    }

    /// Cycle to the next/previous bottom-nav page
    pub fn cycle_nav(&mut self, forward: bool) {
        if !self.is_authenticated {
            return;
        }
        let order = Page::nav_order();
        let current = order.iter().position(|p| *p == self.page).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.navigate_to(order[next]);
    }

    /// Whether the bottom navigation bar is visible (hidden in focus mode)
    pub fn nav_visible(&self) -> bool {
        self.page != Page::Focus
    }

    /// Recompute the completed/total counters from the task list
    pub fn refresh_progress(&mut self) {
        self.completed_today = completed_count(&self.tasks);
        self.total_today = self.tasks.len();
    }

    // ---- Routine --------------------------------------------------------

    /// Flip a task's completion state and settle the point delta.
    /// Unknown ids are a silent no-op.
    pub fn toggle_task(&mut self, id: &str) {
        let task = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task,
            None => return,
        };

        task.toggle();
        if task.completed {
            self.points_total += TASK_POINTS;
        } else {
            self.points_total -= TASK_POINTS;
        }

        self.refresh_progress();
    }

    /// Toggle the task currently selected on the routine page
    pub fn toggle_selected_task(&mut self) {
        let id = routine_rows(&self.tasks)
            .get(self.selected_task)
            .map(|t| t.id.clone());
        if let Some(id) = id {
            self.toggle_task(&id);
        }
    }

    /// Move routine selection up
    pub fn select_prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Move routine selection down
    pub fn select_next_task(&mut self) {
        if self.selected_task + 1 < routine_rows(&self.tasks).len() {
            self.selected_task += 1;
        }
    }

    // ---- Focus timer ----------------------------------------------------

    /// Start or resume the focus countdown and arm the tick cadence
    pub fn start_focus(&mut self) {
        self.start_focus_at(Instant::now());
    }

    fn start_focus_at(&mut self, now: Instant) {
        self.focus.start();
        if self.focus.is_active() {
            // Arming while armed is a no-op; never a second cadence
            self.focus_cadence.start(now);
        }
    }

    /// Pause the countdown and disarm the cadence. Idempotent.
    pub fn pause_focus(&mut self) {
        self.focus.pause();
        self.focus_cadence.cancel();
    }

    /// Wind the countdown back to full duration and disarm. Idempotent.
    pub fn reset_focus(&mut self) {
        self.focus.reset();
        self.focus_cadence.cancel();
    }

    /// Toggle between running and paused
    pub fn toggle_focus(&mut self) {
        if self.focus.is_active() {
            self.pause_focus();
        } else {
            self.start_focus();
        }
    }

    /// Apply one countdown tick, settling completion side effects
    fn apply_focus_tick(&mut self) {
        if self.focus.tick() == TickOutcome::Completed {
            self.focus_cadence.cancel();
            self.points_total += FOCUS_SESSION_POINTS;
            notifications::notify_session_complete(self.focus.sessions_today);
            self.show_notice(format!(
                "🎉 Congratulations! You completed a focus session! +{} points",
                FOCUS_SESSION_POINTS
            ));
        }
    }

    // ---- Event-loop tick ------------------------------------------------

    /// Advance all timers: the focus cadence and any pending one-shots
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let due = self.focus_cadence.poll(now);
        for _ in 0..due {
            self.apply_focus_tick();
        }

        let login_due = self
            .pending_login
            .as_ref()
            .map_or(false, |p| p.ready.is_due(now));
        if login_due {
            if let Some(pending) = self.pending_login.take() {
                self.complete_login(pending);
            }
        }

        let mut i = 0;
        while i < self.pending_replies.len() {
            if self.pending_replies[i].ready.is_due(now) {
                let pending = self.pending_replies.remove(i);
                self.deliver_bot_reply(&pending.prompt);
            } else {
                i += 1;
            }
        }
    }

    // ---- Notices --------------------------------------------------------

    /// Put up a dismissable notice banner
    pub fn show_notice(&mut self, message: String) {
        self.notice = Some(message);
        self.ui_mode = UiMode::Notice;
    }

    /// Take down the notice banner
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- Login / profile ------------------------------------------------

    /// Add a character to the active login field. Access keys are
    /// uppercased as typed; any inline error clears on input.
    pub fn login_form_add_char(&mut self, c: char) {
        self.login_form.error = None;
        match self.login_form.editing_field {
            0 => self.login_form.name.push(c),
            _ => self.login_form.access_key.extend(c.to_uppercase()),
        }
    }

    /// Backspace in the active login field
    pub fn login_form_backspace(&mut self) {
        self.login_form.error = None;
        match self.login_form.editing_field {
            0 => {
                self.login_form.name.pop();
            }
            _ => {
                self.login_form.access_key.pop();
            }
        }
    }

    /// Switch between the name and access-key fields
    pub fn login_form_toggle_field(&mut self) {
        self.login_form.editing_field = (self.login_form.editing_field + 1) % 2;
    }

    /// Submit the login form. Valid credentials enter the verify delay;
    /// invalid ones surface an inline error.
    pub fn submit_login(&mut self) {
        self.submit_login_at(Instant::now());
    }

    fn submit_login_at(&mut self, now: Instant) {
        if self.pending_login.is_some() {
            return; // Already verifying
        }

        let name = self.login_form.name.trim().to_string();
        let key = self.login_form.access_key.trim().to_string();

        match auth::validate_login(&name, &key, &self.config.access_keys) {
            Ok(()) => {
                self.login_form.error = None;
                self.pending_login = Some(PendingLogin {
                    name,
                    access_key: key,
                    ready: OneShot::after(now, LOGIN_VERIFY_DELAY),
                });
            }
            Err(e) => self.login_form.error = Some(e),
        }
    }

    fn complete_login(&mut self, pending: PendingLogin) {
        self.is_authenticated = true;
        self.user_name = pending.name;
        self.access_key = pending.access_key;
        self.login_form = LoginForm::default();
        self.navigate_to(Page::Dashboard);
    }

    /// Whether a login submit is waiting out the verify delay
    pub fn is_verifying(&self) -> bool {
        self.pending_login.is_some()
    }

    /// Put up the logout confirmation prompt
    pub fn request_logout(&mut self) {
        self.ui_mode = UiMode::ConfirmLogout;
    }

    /// Confirm logout: clear the authenticated user and return to login
    pub fn confirm_logout(&mut self) {
        self.is_authenticated = false;
        self.user_name.clear();
        self.access_key.clear();
        self.login_form = LoginForm::default();
        self.ui_mode = UiMode::Normal;
        self.navigate_to(Page::Login);
    }

    /// Dismiss the logout confirmation prompt
    pub fn cancel_logout(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    // ---- Emotional check-in ---------------------------------------------

    /// Select a mood on the check-in form
    pub fn select_mood(&mut self, mood: Mood) {
        self.checkin.selected_mood = Some(mood);
        self.checkin.prompt = None;
    }

    /// Add a character to the check-in note
    pub fn checkin_note_add_char(&mut self, c: char) {
        self.checkin.note.push(c);
    }

    /// Backspace in the check-in note
    pub fn checkin_note_backspace(&mut self) {
        self.checkin.note.pop();
    }

    /// Submit the check-in. Without a selected mood this only surfaces an
    /// inline prompt; with one it records the entry, awards points and
    /// shows the success screen.
    pub fn submit_checkin(&mut self) {
        if self.checkin.submitted {
            return;
        }

        let mood = match self.checkin.selected_mood {
            Some(mood) => mood,
            None => {
                self.checkin.prompt = Some("Please select how you're feeling");
                return;
            }
        };

        self.points_total += CHECKIN_POINTS;
        self.checkin_log.push(CheckinEntry {
            mood,
            note: self.checkin.note.clone(),
            at: Local::now(),
        });
        self.checkin.submitted = true;
    }

    /// Leave the success screen: reset the form and go to the dashboard
    pub fn finish_checkin(&mut self) {
        self.checkin = CheckinState::default();
        self.navigate_to(Page::Dashboard);
    }

    // ---- Chat -----------------------------------------------------------

    /// Add a character to the chat input
    pub fn chat_input_add_char(&mut self, c: char) {
        self.chat_input.push(c);
    }

    /// Backspace in the chat input
    pub fn chat_input_backspace(&mut self) {
        self.chat_input.pop();
    }

    /// Send the chat input. Empty input is a no-op; otherwise the user
    /// message lands in the transcript and a bot reply is scheduled.
    pub fn send_chat_message(&mut self) {
        self.send_chat_message_at(Instant::now());
    }

    fn send_chat_message_at(&mut self, now: Instant) {
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.chat_input.clear();
        self.chat_messages
            .push(ChatMessage::new(text.clone(), ChatSender::User));
        self.pending_replies.push(PendingReply {
            prompt: text,
            ready: OneShot::after(now, BOT_REPLY_DELAY),
        });
    }

    fn deliver_bot_reply(&mut self, prompt: &str) {
        let reply = bot_reply(
            prompt,
            BotContext {
                user_name: &self.user_name,
                points_total: self.points_total,
                completed_today: self.completed_today,
            },
        );
        self.chat_messages
            .push(ChatMessage::new(reply, ChatSender::Bot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FocusStatus;

    fn create_test_app() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn login(app: &mut AppState) {
        let t0 = Instant::now();
        app.login_form.name = "Alex".to_string();
        app.login_form.access_key = "ROBO2026".to_string();
        app.submit_login_at(t0);
        app.tick_at(t0 + Duration::from_secs(1));
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.page, Page::Login);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.is_authenticated);
        assert_eq!(app.points_total, STARTING_POINTS);
        assert_eq!(app.tasks.len(), 6);
        assert_eq!(app.completed_today, 3);
        assert_eq!(app.total_today, 6);
        assert_eq!(app.focus.remaining_secs, 1500);
        assert_eq!(app.achievements.len(), 6);
    }

    // ---- Navigation -----------------------------------------------------

    #[test]
    fn test_navigate_to_sets_single_active_page() {
        let mut app = create_test_app();
        for page in Page::nav_order() {
            app.navigate_to(*page);
            assert_eq!(app.page, *page);
        }
    }

    #[test]
    fn test_navigate_runs_refresh_hook() {
        let mut app = create_test_app();
        // Desync the counter, then navigate to a page with a refresh hook
        app.completed_today = 0;
        app.navigate_to(Page::Dashboard);
        assert_eq!(app.completed_today, 3);

        app.completed_today = 0;
        app.navigate_to(Page::Routine);
        assert_eq!(app.completed_today, 3);
    }

    #[test]
    fn test_navigate_by_unknown_name_keeps_prior_page_active() {
        let mut app = create_test_app();
        app.navigate_to(Page::Dashboard);

        app.navigate_by_name("unknownpage");
        assert_eq!(app.page, Page::Dashboard);

        app.navigate_by_name("rewards");
        assert_eq!(app.page, Page::Rewards);
    }

    #[test]
    fn test_nav_hidden_only_in_focus_mode() {
        let mut app = create_test_app();
        app.navigate_to(Page::Focus);
        assert!(!app.nav_visible());

        for page in [Page::Dashboard, Page::Routine, Page::Chat, Page::Login] {
            app.navigate_to(page);
            assert!(app.nav_visible());
        }
    }

    #[test]
    fn test_nav_slots_require_authentication() {
        let mut app = create_test_app();
        app.navigate_to_nav_slot(0);
        assert_eq!(app.page, Page::Login);

        login(&mut app);
        app.navigate_to_nav_slot(1);
        assert_eq!(app.page, Page::Routine);

        // Out-of-range slot is a no-op
        app.navigate_to_nav_slot(99);
        assert_eq!(app.page, Page::Routine);
    }

    #[test]
    fn test_cycle_nav_wraps() {
        let mut app = create_test_app();
        login(&mut app);
        assert_eq!(app.page, Page::Dashboard);

        app.cycle_nav(false);
        assert_eq!(app.page, Page::Profile);
        app.cycle_nav(true);
        assert_eq!(app.page, Page::Dashboard);
    }

    // ---- Routine toggles ------------------------------------------------

    #[test]
    fn test_toggle_task_awards_points() {
        let mut app = create_test_app();
        let before = app.points_total;

        // Task "3" starts incomplete
        app.toggle_task("3");
        let task = app.tasks.iter().find(|t| t.id == "3").unwrap();
        assert!(task.completed);
        assert_eq!(app.points_total, before + TASK_POINTS);
        assert_eq!(app.completed_today, 4);
    }

    #[test]
    fn test_toggle_task_twice_restores_state() {
        let mut app = create_test_app();
        let points_before = app.points_total;
        let completed_before = app.completed_today;

        app.toggle_task("3");
        app.toggle_task("3");

        let task = app.tasks.iter().find(|t| t.id == "3").unwrap();
        assert!(!task.completed);
        assert_eq!(app.points_total, points_before);
        assert_eq!(app.completed_today, completed_before);
    }

    #[test]
    fn test_toggle_unknown_task_is_noop() {
        let mut app = create_test_app();
        let points_before = app.points_total;

        app.toggle_task("999");
        assert_eq!(app.points_total, points_before);
        assert_eq!(app.completed_today, 3);
    }

    #[test]
    fn test_uncompleting_can_drive_points_negative() {
        let mut app = create_test_app();
        app.points_total = 5;

        // Task "1" starts completed; unchecking deducts below zero
        app.toggle_task("1");
        assert_eq!(app.points_total, -5);
    }

    #[test]
    fn test_selection_moves_within_routine_rows() {
        let mut app = create_test_app();
        assert_eq!(app.selected_task, 0);

        app.select_prev_task();
        assert_eq!(app.selected_task, 0);

        for _ in 0..10 {
            app.select_next_task();
        }
        assert_eq!(app.selected_task, 5);
    }

    #[test]
    fn test_toggle_selected_task() {
        let mut app = create_test_app();
        // Third row in section order is task "3" (first afternoon task)
        app.select_next_task();
        app.select_next_task();
        app.toggle_selected_task();

        let task = app.tasks.iter().find(|t| t.id == "3").unwrap();
        assert!(task.completed);
    }

    // ---- Focus timer ----------------------------------------------------

    #[test]
    fn test_start_focus_arms_cadence() {
        let mut app = create_test_app();
        app.start_focus();
        assert!(app.focus.is_active());
        assert!(app.focus_cadence.is_armed());
    }

    #[test]
    fn test_focus_single_tick() {
        let mut app = create_test_app();
        app.start_focus();
        app.apply_focus_tick();
        assert_eq!(app.focus.remaining_secs, 1499);
        assert!(app.focus.is_active());
    }

    #[test]
    fn test_focus_pause_resume_keeps_remaining() {
        let mut app = create_test_app();
        app.start_focus();
        app.apply_focus_tick();

        app.pause_focus();
        assert!(!app.focus.is_active());
        assert!(!app.focus_cadence.is_armed());
        assert_eq!(app.focus.remaining_secs, 1499);

        app.start_focus();
        assert!(app.focus.is_active());
        assert_eq!(app.focus.remaining_secs, 1499);
    }

    #[test]
    fn test_focus_reset_winds_back() {
        let mut app = create_test_app();
        app.start_focus();
        app.apply_focus_tick();
        app.reset_focus();

        assert_eq!(app.focus.remaining_secs, 1500);
        assert_eq!(app.focus.status, FocusStatus::Idle);
        assert!(!app.focus_cadence.is_armed());
    }

    #[test]
    fn test_focus_completion_side_effects() {
        let mut app = create_test_app();
        app.focus = FocusSession::new(2);
        let points_before = app.points_total;

        app.start_focus();
        app.apply_focus_tick();
        app.apply_focus_tick();

        assert_eq!(app.focus.sessions_today, 1);
        assert_eq!(app.focus.remaining_secs, 2);
        assert!(!app.focus.is_active());
        assert!(!app.focus_cadence.is_armed());
        assert_eq!(app.points_total, points_before + FOCUS_SESSION_POINTS);
        assert_eq!(app.ui_mode, UiMode::Notice);
        assert!(app.notice.as_ref().unwrap().contains("+50 points"));
    }

    #[test]
    fn test_focus_ticks_driven_by_cadence() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.start_focus_at(t0);

        app.tick_at(t0 + Duration::from_millis(500));
        assert_eq!(app.focus.remaining_secs, 1500);

        app.tick_at(t0 + Duration::from_secs(1));
        assert_eq!(app.focus.remaining_secs, 1499);

        // A late poll catches up, one tick per elapsed second
        app.tick_at(t0 + Duration::from_secs(4));
        assert_eq!(app.focus.remaining_secs, 1496);
    }

    #[test]
    fn test_no_ticks_after_pause() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.start_focus_at(t0);
        app.pause_focus();

        app.tick_at(t0 + Duration::from_secs(10));
        assert_eq!(app.focus.remaining_secs, 1500);
    }

    #[test]
    fn test_dismiss_notice() {
        let mut app = create_test_app();
        app.show_notice("done".to_string());
        assert_eq!(app.ui_mode, UiMode::Notice);

        app.dismiss_notice();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.notice.is_none());
    }

    // ---- Login ----------------------------------------------------------

    #[test]
    fn test_login_key_uppercased_as_typed() {
        let mut app = create_test_app();
        app.login_form_toggle_field();
        for c in "robo2026".chars() {
            app.login_form_add_char(c);
        }
        assert_eq!(app.login_form.access_key, "ROBO2026");
    }

    #[test]
    fn test_login_rejects_bad_key_inline() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.login_form.name = "Alex".to_string();
        app.login_form.access_key = "WRONG".to_string();
        app.submit_login_at(t0);

        assert_eq!(app.login_form.error, Some(LoginError::UnknownKey));
        assert!(!app.is_verifying());
        assert!(!app.is_authenticated);

        // Typing clears the error
        app.login_form_add_char('X');
        assert!(app.login_form.error.is_none());
    }

    #[test]
    fn test_login_waits_out_verify_delay() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.login_form.name = "Alex".to_string();
        app.login_form.access_key = "ROBO2026".to_string();
        app.submit_login_at(t0);

        assert!(app.is_verifying());
        app.tick_at(t0 + Duration::from_millis(500));
        assert!(!app.is_authenticated);

        app.tick_at(t0 + Duration::from_millis(900));
        assert!(app.is_authenticated);
        assert_eq!(app.user_name, "Alex");
        assert_eq!(app.page, Page::Dashboard);
        assert!(app.login_form.name.is_empty());
    }

    #[test]
    fn test_submit_while_verifying_is_noop() {
        let mut app = create_test_app();
        let t0 = Instant::now();
        app.login_form.name = "Alex".to_string();
        app.login_form.access_key = "ROBO2026".to_string();
        app.submit_login_at(t0);

        app.login_form.name = "Sam".to_string();
        app.submit_login_at(t0 + Duration::from_millis(100));

        app.tick_at(t0 + Duration::from_secs(1));
        assert_eq!(app.user_name, "Alex");
    }

    #[test]
    fn test_logout_flow() {
        let mut app = create_test_app();
        login(&mut app);
        assert!(app.is_authenticated);

        app.request_logout();
        assert_eq!(app.ui_mode, UiMode::ConfirmLogout);

        app.cancel_logout();
        assert!(app.is_authenticated);
        assert_eq!(app.ui_mode, UiMode::Normal);

        app.request_logout();
        app.confirm_logout();
        assert!(!app.is_authenticated);
        assert_eq!(app.page, Page::Login);
        assert!(app.user_name.is_empty());
    }

    // ---- Check-in -------------------------------------------------------

    #[test]
    fn test_checkin_requires_mood() {
        let mut app = create_test_app();
        let points_before = app.points_total;

        app.submit_checkin();
        assert!(!app.checkin.submitted);
        assert!(app.checkin.prompt.is_some());
        assert_eq!(app.points_total, points_before);
    }

    #[test]
    fn test_checkin_submit_and_finish() {
        let mut app = create_test_app();
        login(&mut app);
        app.navigate_to(Page::Checkin);
        let points_before = app.points_total;

        app.select_mood(Mood::Happy);
        for c in "slept well".chars() {
            app.checkin_note_add_char(c);
        }
        app.submit_checkin();

        assert!(app.checkin.submitted);
        assert_eq!(app.points_total, points_before + CHECKIN_POINTS);
        assert_eq!(app.checkin_log.len(), 1);
        assert_eq!(app.checkin_log[0].mood, Mood::Happy);
        assert_eq!(app.checkin_log[0].note, "slept well");

        // Submitting again on the success screen changes nothing
        app.submit_checkin();
        assert_eq!(app.checkin_log.len(), 1);

        app.finish_checkin();
        assert!(app.checkin.selected_mood.is_none());
        assert!(!app.checkin.submitted);
        assert_eq!(app.page, Page::Dashboard);
    }

    // ---- Chat -----------------------------------------------------------

    #[test]
    fn test_empty_chat_message_is_noop() {
        let mut app = create_test_app();
        app.chat_input = "   ".to_string();
        app.send_chat_message();
        assert!(app.chat_messages.is_empty());
        assert!(app.pending_replies.is_empty());
    }

    #[test]
    fn test_chat_reply_arrives_after_delay() {
        let mut app = create_test_app();
        login(&mut app);
        let t0 = Instant::now();

        app.chat_input = "how many points do I have?".to_string();
        app.send_chat_message_at(t0);

        assert_eq!(app.chat_messages.len(), 1);
        assert_eq!(app.chat_messages[0].sender, ChatSender::User);

        app.tick_at(t0 + Duration::from_millis(500));
        assert_eq!(app.chat_messages.len(), 1);

        app.tick_at(t0 + Duration::from_millis(1100));
        assert_eq!(app.chat_messages.len(), 2);
        assert_eq!(app.chat_messages[1].sender, ChatSender::Bot);
        assert!(app.chat_messages[1]
            .text
            .contains(&app.points_total.to_string()));
    }

    #[test]
    fn test_two_pending_replies_both_arrive() {
        let mut app = create_test_app();
        login(&mut app);
        let t0 = Instant::now();

        app.chat_input = "hello".to_string();
        app.send_chat_message_at(t0);
        app.chat_input = "thanks".to_string();
        app.send_chat_message_at(t0 + Duration::from_millis(300));

        app.tick_at(t0 + Duration::from_secs(2));
        assert_eq!(app.chat_messages.len(), 4);
        assert_eq!(app.chat_messages[2].sender, ChatSender::Bot);
        assert_eq!(app.chat_messages[3].sender, ChatSender::Bot);
    }
}
