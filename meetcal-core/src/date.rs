//! Local calendar-day arithmetic.
//!
//! Every value handled here is a wall-clock day (`NaiveDate`). Nothing is
//! routed through UTC, so a `YYYY-MM-DD` string always lands on the day it
//! names regardless of the host timezone.

use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone};

/// Date-time layouts tried (in order) for strings that are not bare `YYYY-MM-DD`.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];

/// Anything that carries a local calendar day.
///
/// Implementations only look at the year/month/day already captured in the
/// value; no timezone conversion happens.
pub trait LocalDay {
    fn local_day(&self) -> NaiveDate;
}

impl LocalDay for NaiveDate {
    fn local_day(&self) -> NaiveDate {
        *self
    }
}

impl LocalDay for NaiveDateTime {
    fn local_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> LocalDay for DateTime<Tz> {
    fn local_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: LocalDay + ?Sized> LocalDay for &T {
    fn local_day(&self) -> NaiveDate {
        (**self).local_day()
    }
}

/// Input accepted by [`parse_local_date`]: either text or an existing date value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Day(NaiveDate),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(s: &'a str) -> Self {
        DateInput::Text(s)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(s: &'a String) -> Self {
        DateInput::Text(s.as_str())
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Day(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Day(dt.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(dt: DateTime<Tz>) -> Self {
        DateInput::Day(dt.date_naive())
    }
}

/// Format a day as `YYYY-MM-DD` (zero-padded month and day).
pub fn format_local_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Resolve a string or date value to a local calendar day.
///
/// - Date values are truncated to their own calendar day.
/// - Bare `YYYY-MM-DD` strings are split and built directly, never handed to a
///   general parser (those tend to read the bare form as UTC midnight).
/// - Anything else goes through the general layouts; the calendar day as
///   written survives, time-of-day and offset are dropped.
///
/// Returns `None` when the input is not a recognizable date.
pub fn parse_local_date<'a>(input: impl Into<DateInput<'a>>) -> Option<NaiveDate> {
    match input.into() {
        DateInput::Day(date) => Some(date),
        DateInput::Text(s) if is_bare_ymd(s) => {
            let year = s[0..4].parse().ok()?;
            let month = s[5..7].parse().ok()?;
            let day = s[8..10].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        DateInput::Text(s) => parse_general(s.trim()),
    }
}

/// True iff both values fall on the same year, month and day.
pub fn is_same_local_day(a: impl LocalDay, b: impl LocalDay) -> bool {
    let (a, b) = (a.local_day(), b.local_day());
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Every day cell of a month view, padded to whole Sunday..Saturday weeks.
///
/// `month_index` is 0-based. Indices outside `0..12` roll over into the
/// neighbouring years. Years chrono cannot represent give an empty grid.
pub fn month_grid(year: i32, month_index: i32) -> Vec<NaiveDate> {
    let cursor = MonthCursor::new(year, month_index);

    let Some(first) = cursor.first_day() else {
        return Vec::new();
    };
    let Some(last) = last_day_of_month(first) else {
        return Vec::new();
    };

    let start_offset = first.weekday().num_days_from_sunday();
    let end_offset = 6 - last.weekday().num_days_from_sunday();

    let (Some(start), Some(end)) = (
        first.checked_sub_days(Days::new(start_offset.into())),
        last.checked_add_days(Days::new(end_offset.into())),
    ) else {
        return Vec::new();
    };

    start.iter_days().take_while(|d| *d <= end).collect()
}

/// The Sunday-start week containing `day`.
pub fn week_of(day: NaiveDate) -> Vec<NaiveDate> {
    let offset = day.weekday().num_days_from_sunday();
    let start = day.checked_sub_days(Days::new(offset.into())).unwrap_or(day);
    start.iter_days().take(7).collect()
}

/// Whether `day` lies strictly before `today`.
pub fn is_past(day: NaiveDate, today: NaiveDate) -> bool {
    day < today
}

/// Today's date on the local wall clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A month being viewed, with year rollover on navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month_index: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month_index: i32) -> Self {
        MonthCursor {
            year: year.saturating_add(month_index.div_euclid(12)),
            month_index: month_index.rem_euclid(12) as u32,
        }
    }

    pub fn containing(day: NaiveDate) -> Self {
        MonthCursor {
            year: day.year(),
            month_index: day.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month (January = 0).
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    pub fn prev(self) -> Self {
        Self::new(self.year, self.month_index as i32 - 1)
    }

    pub fn next(self) -> Self {
        Self::new(self.year, self.month_index as i32 + 1)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month_index + 1, 1)
    }

    pub fn grid(&self) -> Vec<NaiveDate> {
        month_grid(self.year, self.month_index as i32)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day.year() == self.year && day.month0() == self.month_index
    }

    /// Display label such as "September 2025".
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(first) => first.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month_index + 1),
        }
    }
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}

fn is_bare_ymd(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

fn parse_general(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.date_naive());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt.date());
    }

    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}
