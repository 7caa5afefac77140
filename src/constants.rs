/// Date format for stored birthdays and user input (DD.MM.YYYY)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Default command prefix
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Default timezone for the daily birthday check
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

/// Default cron expression for the daily birthday check (noon every day)
pub const DEFAULT_ANNOUNCE_CRON: &str = "0 0 12 * * *";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "birthdaybot_rs=info";
