/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when a focus session completes
pub fn notify_session_complete(sessions_today: u32) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "🎉 Session #{} complete — +50 points" with title "RoboFocus - Focus Session""#,
            sessions_today
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = sessions_today;
    }
}
