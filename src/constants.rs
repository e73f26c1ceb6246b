/// Minimum number of characters in a contact name
pub const MIN_NAME_LENGTH: usize = 3;

/// Exact number of digits in a phone number
pub const PHONE_LENGTH: usize = 10;

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Oldest accepted birthday, in years before today
pub const MAX_AGE_YEARS: u32 = 100;

/// Number of days covered by the birthday reminder, today included
pub const REMINDER_WINDOW_DAYS: u64 = 7;

/// Default sqlite database used to persist the contact book
pub const DEFAULT_DATABASE_URL: &str = "sqlite://contacts.db?mode=rwc";

/// Timezone used to determine "today" when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "contact_book=warn";
