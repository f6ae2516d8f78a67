use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Month names shown by the date picker (Uzbek, Latin script)
pub const MONTH_NAMES: [&str; 12] = [
    "Yanvar", "Fevral", "Mart", "Aprel", "May", "Iyun",
    "Iyul", "Avgust", "Sentabr", "Oktabr", "Noyabr", "Dekabr",
];

/// Abbreviated weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = ["Du", "Se", "Ch", "Pa", "Ju", "Sh", "Ya"];

/// Length of both `yyyy-mm-dd` and `dd-mm-yyyy`
pub const DATE_STRING_LEN: usize = 10;

/// Years a four-digit input can express
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// The two string forms a date travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `yyyy-mm-dd`, exchanged with the API
    Canonical,
    /// `dd-mm-yyyy`, shown to the user
    Display,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected yyyy-mm-dd or dd-mm-yyyy, got {0:?}")]
    Malformed(String),
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// A validated (year, month, day) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

/// 1970-01-01, used when the clock cannot be read
pub const UNIX_EPOCH: CalendarDate = CalendarDate { year: 1970, month: 1, day: 1 };

impl CalendarDate {
    /// Build a date, rejecting anything chrono would not derive back to the same components
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let out_of_range = DateError::OutOfRange { year, month, day };
        if !YEAR_RANGE.contains(&year) {
            return Err(out_of_range);
        }

        let derived = NaiveDate::from_ymd_opt(year, month, day).ok_or(out_of_range.clone())?;

        if (derived.year(), derived.month(), derived.day()) != (year, month, day) {
            return Err(out_of_range);
        }

        Ok(Self { year, month, day })
    }

    /// Parse either `yyyy-mm-dd` or `dd-mm-yyyy`, picked by digit grouping
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let malformed = || DateError::Malformed(raw.to_string());

        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 || !parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
            return Err(malformed());
        }

        let (year, month, day) = match (parts[0].len(), parts[1].len(), parts[2].len()) {
            (4, 2, 2) => (parts[0], parts[1], parts[2]),
            (2, 2, 4) => (parts[2], parts[1], parts[0]),
            _ => return Err(malformed()),
        };

        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;

        Self::new(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Render in the requested form
    pub fn format(&self, target: DateFormat) -> String {
        match target {
            DateFormat::Canonical => format!("{:04}-{:02}-{:02}", self.year, self.month, self.day),
            DateFormat::Display => format!("{:02}-{:02}-{:04}", self.day, self.month, self.year),
        }
    }

    /// 0 = Monday ... 6 = Sunday
    pub fn weekday_from_monday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|d| d.weekday().num_days_from_monday())
            .unwrap_or(0)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateFormat::Canonical))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Format an optional date; `None` renders as an empty string
pub fn format_date(date: Option<&CalendarDate>, target: DateFormat) -> String {
    date.map(|d| d.format(target)).unwrap_or_default()
}

/// Convert a canonical API value into the display form shown in an input.
/// Values that do not parse produce an empty string.
pub fn canonical_to_display(canonical: &str) -> String {
    format_date(CalendarDate::parse(canonical).ok().as_ref(), DateFormat::Display)
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Days in a 1-based month, 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    next.map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(0)
}

/// Name of a 1-based month, empty for anything outside 1..=12
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Result of masking one keystroke in the display-form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDate {
    /// What the input should show, `dd-mm-yyyy` grouping so far
    pub display: String,
    /// Set only once the display is complete and is a real calendar date
    pub date: Option<CalendarDate>,
}

/// Mask free-form typing into `dd-mm-yyyy`, dropping everything but digits.
/// A complete date in either form (e.g. a pasted `yyyy-mm-dd`) is taken as is.
pub fn mask_keystroke(partial: &str) -> MaskedDate {
    if let Ok(date) = CalendarDate::parse(partial.trim()) {
        return MaskedDate { display: date.format(DateFormat::Display), date: Some(date) };
    }

    let digits: Vec<char> = partial.chars().filter(char::is_ascii_digit).take(8).collect();

    let mut masked = String::with_capacity(DATE_STRING_LEN);
    for (i, c) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            masked.push('-');
        }
        masked.push(*c);
    }

    let date = if masked.len() == DATE_STRING_LEN {
        match CalendarDate::parse(&masked) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::debug!(input = %masked, error = %e, "complete date rejected");
                None
            }
        }
    } else {
        None
    };

    MaskedDate { display: masked, date }
}

/// The month currently shown by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Month is clamped into 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month: month.clamp(1, 12) }
    }

    pub fn of(date: &CalendarDate) -> Self {
        Self { year: date.year, month: date.month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// e.g. "Fevral 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// One cell of the 7-column month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the 1st so that columns line up with weekdays
    Blank,
    Day {
        date: CalendarDate,
        is_selected: bool,
        is_today: bool,
    },
}

/// Build the Monday-first grid for the month under the cursor
pub fn month_grid(cursor: MonthCursor, selected: Option<CalendarDate>, today: CalendarDate) -> Vec<GridCell> {
    let Some(first) = NaiveDate::from_ymd_opt(cursor.year, cursor.month, 1) else {
        return Vec::new();
    };

    let leading = first.weekday().num_days_from_monday() as usize;
    let days = days_in_month(cursor.year, cursor.month);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat(GridCell::Blank).take(leading));

    for day in 1..=days {
        let date = CalendarDate { year: cursor.year, month: cursor.month, day };
        cells.push(GridCell::Day {
            date,
            is_selected: selected == Some(date),
            is_today: date == today,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_both_forms() {
        assert_eq!(CalendarDate::parse("2024-03-15").unwrap(), date(2024, 3, 15));
        assert_eq!(CalendarDate::parse("15-03-2024").unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn test_canonical_round_trip_for_every_day() {
        for year in [1999, 2023, 2024, 2100] {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let d = date(year, month, day);
                    assert_eq!(CalendarDate::parse(&d.format(DateFormat::Canonical)).unwrap(), d);
                    assert_eq!(CalendarDate::parse(&d.format(DateFormat::Display)).unwrap(), d);
                }
            }
        }
    }

    #[test]
    fn test_day_overflow_is_rejected() {
        assert_eq!(
            CalendarDate::parse("31-02-2024"),
            Err(DateError::OutOfRange { year: 2024, month: 2, day: 31 })
        );
        assert!(CalendarDate::parse("31-04-2024").is_err());
        assert!(CalendarDate::parse("2024-06-31").is_err());
        assert!(CalendarDate::parse("00-01-2024").is_err());
        assert!(CalendarDate::parse("01-13-2024").is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(CalendarDate::parse("29-02-2024").is_ok());
        assert!(CalendarDate::parse("29-02-2023").is_err());
        assert!(CalendarDate::parse("2000-02-29").is_ok());
        assert!(CalendarDate::parse("1900-02-29").is_err());

        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_year_zero_is_rejected() {
        assert_eq!(
            CalendarDate::parse("01-01-0000"),
            Err(DateError::OutOfRange { year: 0, month: 1, day: 1 })
        );
        assert_eq!(mask_keystroke("01010000").date, None);
        assert!(CalendarDate::parse("9999-12-31").is_ok());
        assert!(CalendarDate::parse("0001-01-01").is_ok());
    }

    #[test]
    fn test_malformed_shapes() {
        for raw in ["", "2024-3-15", "15/03/2024", "2024-03-15T00:00:00", "1a-03-2024", "24-03-15", "2024--03-15", " 2024-03-15"] {
            assert!(
                matches!(CalendarDate::parse(raw), Err(DateError::Malformed(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_format_optional_date() {
        assert_eq!(format_date(None, DateFormat::Display), "");
        assert_eq!(format_date(Some(&date(2024, 1, 5)), DateFormat::Display), "05-01-2024");
        assert_eq!(canonical_to_display("2024-01-05"), "05-01-2024");
        assert_eq!(canonical_to_display(""), "");
        assert_eq!(canonical_to_display("garbage"), "");
    }

    #[test]
    fn test_mask_groups_digits_while_typing() {
        assert_eq!(mask_keystroke("1").display, "1");
        assert_eq!(mask_keystroke("15").display, "15");
        assert_eq!(mask_keystroke("150").display, "15-0");
        assert_eq!(mask_keystroke("15-03-2").display, "15-03-2");
        assert_eq!(mask_keystroke("15a03b2024").display, "15-03-2024");
        assert_eq!(mask_keystroke("15-03-20245").display, "15-03-2024");
        assert_eq!(mask_keystroke("").display, "");
    }

    #[test]
    fn test_mask_emits_date_only_when_complete_and_valid() {
        assert_eq!(mask_keystroke("15-03-202").date, None);
        assert_eq!(mask_keystroke("15032024").date, Some(date(2024, 3, 15)));

        let masked = mask_keystroke("31-02-2024");
        assert_eq!(masked.display, "31-02-2024");
        assert_eq!(masked.date, None);
    }

    #[test]
    fn test_mask_accepts_pasted_canonical_date() {
        let masked = mask_keystroke("2024-02-29");
        assert_eq!(masked.display, "29-02-2024");
        assert_eq!(masked.date, Some(date(2024, 2, 29)));

        let masked = mask_keystroke(" 2024-03-15 ");
        assert_eq!(masked.display, "15-03-2024");

        // An invalid canonical paste falls back to digit masking
        assert_eq!(mask_keystroke("2023-02-29").date, None);
    }

    #[test]
    fn test_month_navigation_wraps() {
        let december = MonthCursor::new(2024, 12);
        assert_eq!(december.next(), MonthCursor::new(2025, 1));

        let january = MonthCursor::new(2024, 1);
        assert_eq!(january.prev(), MonthCursor::new(2023, 12));

        assert_eq!(MonthCursor::new(2024, 5).next().prev(), MonthCursor::new(2024, 5));
    }

    #[test]
    fn test_month_label_uses_fixed_names() {
        assert_eq!(MonthCursor::new(2024, 2).label(), "Fevral 2024");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn test_grid_starts_on_monday() {
        let today = date(2024, 2, 10);

        // 2024-01-01 is a Monday
        let january = month_grid(MonthCursor::new(2024, 1), None, today);
        assert!(matches!(january[0], GridCell::Day { .. }));
        assert_eq!(january.len(), 31);

        // 2024-02-01 is a Thursday
        let february = month_grid(MonthCursor::new(2024, 2), None, today);
        assert_eq!(february.iter().take_while(|c| **c == GridCell::Blank).count(), 3);
        assert_eq!(february.len(), 3 + 29);

        // 2024-09-01 is a Sunday
        let september = month_grid(MonthCursor::new(2024, 9), None, today);
        assert_eq!(september.iter().take_while(|c| **c == GridCell::Blank).count(), 6);
    }

    #[test]
    fn test_grid_marks_selected_and_today() {
        let today = date(2024, 2, 10);
        let selected = date(2024, 2, 14);
        let grid = month_grid(MonthCursor::of(&today), Some(selected), today);

        let flags: Vec<(u32, bool, bool)> = grid
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Day { date, is_selected, is_today } if *is_selected || *is_today => {
                    Some((date.day(), *is_selected, *is_today))
                }
                _ => None,
            })
            .collect();

        assert_eq!(flags, vec![(10, false, true), (14, true, false)]);
    }

    #[test]
    fn test_weekday_from_monday() {
        assert_eq!(date(2024, 1, 1).weekday_from_monday(), 0);
        assert_eq!(date(2024, 9, 1).weekday_from_monday(), 6);
    }
}
