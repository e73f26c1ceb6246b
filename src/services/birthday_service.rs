/// Birthday service - works out who to greet in the coming week
use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::constants::REMINDER_WINDOW_DAYS;
use crate::models::AddressBook;
use crate::utils::datetime::{next_anniversary, roll_weekend_to_monday, weekday_name};

/// Contacts to greet, grouped by weekday
///
/// Only weekdays with at least one contact are present. Weekend birthdays
/// are grouped under the following Monday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyBirthdays {
    days: Vec<(Weekday, Vec<String>)>,
}

impl WeeklyBirthdays {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl fmt::Display for WeeklyBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "No birthdays in the next {} days.", REMINDER_WINDOW_DAYS);
        }
        let lines: Vec<String> = self
            .days
            .iter()
            .map(|(day, names)| format!("{}: {}", weekday_name(*day), names.join(", ")))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Service computing birthday reminders from the contact book
pub struct BirthdayService<'a> {
    book: &'a AddressBook,
}

impl<'a> BirthdayService<'a> {
    pub fn new(book: &'a AddressBook) -> Self {
        Self { book }
    }

    /// Birthdays falling within `[today, today + days - 1]`, grouped by reminder weekday
    pub fn upcoming(&self, today: NaiveDate, days: u64) -> WeeklyBirthdays {
        if days == 0 {
            return WeeklyBirthdays::default();
        }
        let Some(last_day) = today.checked_add_days(Days::new(days - 1)) else {
            return WeeklyBirthdays::default();
        };

        // (reminder date, actual occurrence, name)
        let mut entries: Vec<(NaiveDate, NaiveDate, &str)> = self
            .book
            .all_sorted()
            .into_iter()
            .filter_map(|record| {
                let occurrence = next_anniversary(record.birthday()?, today)?;
                (occurrence <= last_day).then(|| {
                    (roll_weekend_to_monday(occurrence), occurrence, record.name())
                })
            })
            .collect();
        entries.sort();

        let mut result = WeeklyBirthdays::default();
        for (reminder, occurrence, name) in entries {
            debug!("{} has a birthday on {}, greeting on {}", name, occurrence, reminder);
            let weekday = reminder.weekday();
            match result.days.iter_mut().find(|(day, _)| *day == weekday) {
                Some((_, names)) => names.push(name.to_string()),
                None => result.days.push((weekday, vec![name.to_string()])),
            }
        }
        result
    }

    /// Birthdays in the standard seven-day reminder window
    pub fn upcoming_week(&self, today: NaiveDate) -> WeeklyBirthdays {
        self.upcoming(today, REMINDER_WINDOW_DAYS)
    }
}
