//! pt-BR display conventions for numbers and dates

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Group digits with `.`: `1234567` -> `1.234.567`
pub fn format_integer(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Two decimals, `,` as decimal separator: `1234.5` -> `1.234,50`
pub fn format_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{},{}", sign, group_thousands(int_part), frac_part)
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Calendar day of `ts` in the local zone, matching the dashboard day filter
pub fn format_local_day(ts: &DateTime<Utc>) -> String {
    format_day_in(ts, &Local)
}

/// Calendar day of `ts` as seen in `tz`
pub fn format_day_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String {
    format_date(ts.with_timezone(tz).date_naive())
}

/// `dd/mm/yyyy HH:MM:SS` in the timestamp's own zone
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%d/%m/%Y %H:%M:%S").to_string()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
