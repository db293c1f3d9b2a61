use chrono::{Datelike, NaiveDateTime};

pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `03:07:09 PM`
pub fn format_time(t: &NaiveDateTime) -> String {
    t.format("%I:%M:%S %p").to_string()
}

/// `19th of October 2026`
pub fn format_date(t: &NaiveDateTime) -> String {
    format!("{}{} of {}", t.day(), ordinal_suffix(t.day()), t.format("%B %Y"))
}
