//! Milestone Date Parsing
//!
//! Milestone dates arrive as text in one of two shapes:
//! - ISO, `YYYY-MM-DD` (what the browser date input produces)
//! - day-first, `DD-MM-YYYY`
//!
//! Text counts as ISO when it contains a hyphen and its first
//! hyphen-delimited segment is four characters long. Anything else is read
//! as day-first and reassembled into ISO order before parsing. Text that
//! fails either path yields `None`.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Iso,
    DayFirst,
}

pub fn detect_format(text: &str) -> DateFormat {
    let first_segment = text.split('-').next().unwrap_or_default();
    if text.contains('-') && first_segment.len() == 4 {
        DateFormat::Iso
    } else {
        DateFormat::DayFirst
    }
}

/// Parse a milestone date, `None` when it is empty or not a real date.
pub fn parse_milestone_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match detect_format(text) {
        DateFormat::Iso => NaiveDate::parse_from_str(text, ISO_FORMAT).ok(),
        DateFormat::DayFirst => {
            let mut parts = text.split('-');
            let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
            if parts.next().is_some() {
                return None;
            }
            NaiveDate::parse_from_str(&format!("{}-{}-{}", year, month, day), ISO_FORMAT).ok()
        }
    }
}

/// Normalize either accepted shape to `YYYY-MM-DD`
pub fn to_iso_date(text: &str) -> Option<String> {
    parse_milestone_date(text).map(|date| date.format(ISO_FORMAT).to_string())
}
