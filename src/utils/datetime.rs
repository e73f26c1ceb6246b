/// Pure date utility functions used by birthday validation and reminders
use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::constants::BIRTHDAY_FORMAT;

/// Check if a given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// The date a birthday is observed in `year`
///
/// February 29 is observed on March 1 in non-leap years.
pub fn anniversary_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday.with_year(year).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 && !is_leap_year(year) {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// The first observance of `birthday` on or after `today`
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(birthday, today.year())?;
    if this_year < today {
        anniversary_in_year(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move Saturday and Sunday forward to the following Monday
pub fn roll_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift)).unwrap_or(date)
}

/// Full English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Format a birthday as "DD.MM.YYYY"
pub fn format_birthday_display(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000)); // Divisible by 400
        assert!(is_leap_year(2020)); // Divisible by 4, not by 100
        assert!(is_leap_year(2024));

        assert!(!is_leap_year(1900)); // Divisible by 100, not by 400
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_anniversary_in_year() {
        assert_eq!(anniversary_in_year(date(1990, 1, 12), 2024), Some(date(2024, 1, 12)));
        assert_eq!(anniversary_in_year(date(2000, 2, 29), 2024), Some(date(2024, 2, 29)));
        assert_eq!(anniversary_in_year(date(2000, 2, 29), 2023), Some(date(2023, 3, 1)));
    }

    #[test]
    fn test_next_anniversary() {
        let today = date(2024, 1, 10);
        assert_eq!(next_anniversary(date(1990, 1, 10), today), Some(date(2024, 1, 10)));
        assert_eq!(next_anniversary(date(1990, 1, 12), today), Some(date(2024, 1, 12)));
        assert_eq!(next_anniversary(date(1990, 1, 9), today), Some(date(2025, 1, 9)));

        let new_years_eve = date(2023, 12, 30);
        assert_eq!(next_anniversary(date(1990, 1, 2), new_years_eve), Some(date(2024, 1, 2)));
    }

    #[test]
    fn test_roll_weekend_to_monday() {
        // 2024-01-13 is a Saturday
        assert_eq!(roll_weekend_to_monday(date(2024, 1, 13)), date(2024, 1, 15));
        assert_eq!(roll_weekend_to_monday(date(2024, 1, 14)), date(2024, 1, 15));
        assert_eq!(roll_weekend_to_monday(date(2024, 1, 12)), date(2024, 1, 12));
        assert_eq!(roll_weekend_to_monday(date(2024, 1, 15)), date(2024, 1, 15));
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Fri), "Friday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_format_birthday_display() {
        assert_eq!(format_birthday_display(date(1990, 1, 12)), "12.01.1990");
        assert_eq!(format_birthday_display(date(2001, 11, 3)), "03.11.2001");
    }
}
