//! Natural-language due-date extraction.
//!
//! Scans free-form task text for a time phrase ("at 5pm", "14:30", "noon") and
//! then a date phrase ("tomorrow", "next friday", "in 3 days"), strips both from
//! the text and returns them as normalized values. Time runs first so that the
//! digits of a date phrase are never read as an hour.

use std::ops::Range;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Serialize, Serializer};
use tracing::debug;

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(
        r"(?i)\b(?P<at>at\s+)?(?:(?P<word>noon|midnight)|(?P<hour>\d{1,2})(?::(?P<minute>\d{2}))?(?:\s*(?P<meridiem>[ap]m))?)\b"
    )
    .expect("Failed to compile TIME_RE regex");

    static ref DATE_RE: Regex = {
        let weekdays = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";
        let pattern = format!(
            r"(?i)\b(?:(?P<today>today)|(?P<tomorrow>tomorrow)|next\s+(?P<next>{weekdays})|on\s+(?P<on>{weekdays})|in\s+(?P<days>\d+)\s+days?)\b"
        );
        Regex::new(&pattern).expect("Failed to compile DATE_RE regex")
    };
}

/// What a task's text said about when it is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    #[serde(serialize_with = "serialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(serialize_with = "serialize_time")]
    pub time: Option<NaiveTime>,
    pub clean_text: String,
}

impl ExtractionResult {
    /// `YYYY-MM-DD`, or an empty string when no date was found.
    pub fn date_string(&self) -> String {
        self.date.map(format_date).unwrap_or_default()
    }

    /// `HH:MM` on a 24-hour clock, or an empty string when no time was found.
    pub fn time_string(&self) -> String {
        self.time.map(format_time).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none()
    }
}

/// A recognised date phrase, before it is resolved against the reference day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePhrase {
    Today,
    Tomorrow,
    /// `next <weekday>`: always a later week when the weekday is today.
    NextWeekday(Weekday),
    /// `on <weekday>`: resolves to today when the weekday is today.
    OnWeekday(Weekday),
    InDays(u64),
}

impl DatePhrase {
    pub fn resolve(self, now: NaiveDateTime) -> Option<NaiveDate> {
        let today = now.date();
        match self {
            DatePhrase::Today => Some(today),
            DatePhrase::Tomorrow => today.checked_add_days(Days::new(1)),
            DatePhrase::NextWeekday(target) => {
                let mut diff = weekday_diff(target, today.weekday());
                if diff <= 0 {
                    diff += 7;
                }
                today.checked_add_days(Days::new(diff as u64))
            }
            DatePhrase::OnWeekday(target) => {
                let mut diff = weekday_diff(target, today.weekday());
                if diff < 0 {
                    diff += 7;
                }
                today.checked_add_days(Days::new(diff as u64))
            }
            DatePhrase::InDays(n) => today.checked_add_days(Days::new(n)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TimeMatch {
    range: Range<usize>,
    time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DateMatch {
    range: Range<usize>,
    phrase: DatePhrase,
    date: NaiveDate,
}

/// Pulls a time and a date out of `text`, resolving relative phrases against `now`.
///
/// Never fails: anything that is not understood is left in `clean_text`.
pub fn extract(text: &str, now: NaiveDateTime) -> ExtractionResult {
    let mut working = text.trim().to_string();
    let mut time = None;
    let mut date = None;

    // Stripping one phrase can join its neighbours into another ("at tomorrow 5"
    // leaves "at 5"), so keep scanning until neither pass finds anything new.
    loop {
        let mut found = false;
        if time.is_none() {
            time = take_time(&mut working);
            found |= time.is_some();
        }
        if date.is_none() {
            date = take_date(&mut working, now);
            found |= date.is_some();
        }
        if !found {
            break;
        }
    }

    ExtractionResult {
        date,
        time,
        clean_text: working,
    }
}

fn take_time(working: &mut String) -> Option<NaiveTime> {
    let m = find_time(working)?;
    debug!(phrase = &working[m.range.clone()], time = %format_time(m.time), "matched time phrase");
    *working = strip(working, m.range);
    Some(m.time)
}

fn take_date(working: &mut String, now: NaiveDateTime) -> Option<NaiveDate> {
    let m = find_date(working, now)?;
    debug!(phrase = &working[m.range.clone()], kind = ?m.phrase, date = %format_date(m.date), "matched date phrase");
    *working = strip(working, m.range);
    Some(m.date)
}

/// Parses a standalone time such as `14:30`, `5pm`, `at 9:15am` or `noon`.
pub fn parse_time_phrase(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    find_time(input)
        .filter(|m| m.range == (0..input.len()))
        .map(|m| m.time)
}

fn find_time(text: &str) -> Option<TimeMatch> {
    TIME_RE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        normalize_time(&caps).map(|time| TimeMatch {
            range: whole.range(),
            time,
        })
    })
}

fn normalize_time(caps: &Captures<'_>) -> Option<NaiveTime> {
    if let Some(word) = caps.name("word") {
        return if word.as_str().eq_ignore_ascii_case("noon") {
            NaiveTime::from_hms_opt(12, 0, 0)
        } else {
            NaiveTime::from_hms_opt(0, 0, 0)
        };
    }

    let minute = caps.name("minute");
    let meridiem = caps.name("meridiem");
    // A lone number is only a time when introduced by "at".
    if minute.is_none() && meridiem.is_none() && caps.name("at").is_none() {
        return None;
    }

    let mut hour: u32 = caps.name("hour")?.as_str().parse().ok()?;
    let minute: u32 = match minute {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = meridiem {
        let pm = meridiem.as_str().eq_ignore_ascii_case("pm");
        if pm && hour < 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn find_date(text: &str, now: NaiveDateTime) -> Option<DateMatch> {
    let caps = DATE_RE.captures(text)?;
    let whole = caps.get(0)?;
    let phrase = date_phrase(&caps)?;
    let date = phrase.resolve(now)?;
    Some(DateMatch {
        range: whole.range(),
        phrase,
        date,
    })
}

fn date_phrase(caps: &Captures<'_>) -> Option<DatePhrase> {
    if caps.name("today").is_some() {
        Some(DatePhrase::Today)
    } else if caps.name("tomorrow").is_some() {
        Some(DatePhrase::Tomorrow)
    } else if let Some(day) = caps.name("next") {
        day.as_str().parse().ok().map(DatePhrase::NextWeekday)
    } else if let Some(day) = caps.name("on") {
        day.as_str().parse().ok().map(DatePhrase::OnWeekday)
    } else if let Some(n) = caps.name("days") {
        n.as_str().parse().ok().map(DatePhrase::InDays)
    } else {
        None
    }
}

/// Sunday-based weekday arithmetic: `target - current` in `-6..=6`.
fn weekday_diff(target: Weekday, current: Weekday) -> i64 {
    i64::from(target.num_days_from_sunday()) - i64::from(current.num_days_from_sunday())
}

fn strip(text: &str, range: Range<usize>) -> String {
    let before = text[..range.start].trim_end();
    let after = text[range.end..].trim_start();
    match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_string(),
        (_, true) => before.to_string(),
        _ => format!("{before} {after}"),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn serialize_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.map(format_date).unwrap_or_default())
}

fn serialize_time<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&time.map(format_time).unwrap_or_default())
}
