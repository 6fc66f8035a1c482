//! Application-wide constants
//!
//! Goals, window sizes and labels shared by the core and the renderer.

/// Number of days kept in the rolling health history. The last slot is "today".
pub const HISTORY_DAYS: usize = 7;

/// Weekday labels for the history window, oldest first.
pub const WEEKDAY_LABELS: [&str; HISTORY_DAYS] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// Daily goals
pub const STEPS_GOAL: f64 = 10_000.0;
pub const SLEEP_GOAL_HOURS: f64 = 8.0;
pub const CALORIES_GOAL: f64 = 2_000.0;

/// Display name of the single local user.
pub const VIEWER_NAME: &str = "Ethan Carter";

/// Membership tier shown on the profile.
pub const VIEWER_TIER: &str = "Free Member";

/// Title shown in the header on the main view.
pub const APP_TITLE: &str = "Health Teen";

/// strftime pattern for chat timestamps ("10:32 AM").
pub const CHAT_TIME_FORMAT: &str = "%-I:%M %p";

/// Env var that enables file logging.
pub const LOG_FILE_ENV: &str = "HEALTHTEEN_LOG_FILE";
