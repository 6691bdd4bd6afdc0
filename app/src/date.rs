use time::{format_description::FormatItem, macros::format_description, Date, Month};

const ISO: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date, the format used by `<input type="date">`.
pub fn parse(value: &str) -> Option<Date> {
    Date::parse(value.trim(), ISO).ok()
}

pub fn format_iso(date: Date) -> String {
    date.format(ISO).unwrap_or_else(|_| date.to_string())
}

/// Human readable date, e.g. `Friday, 2 January 2026`.
pub fn format_long(date: Date) -> String {
    format!(
        "{}, {} {} {}",
        date.weekday(),
        date.day(),
        date.month(),
        date.year()
    )
}

/// Current local date according to the browser clock.
///
/// Only available in the browser, there is no clock on `wasm32-unknown-unknown` otherwise.
pub fn today() -> Option<Date> {
    let now = js_sys::Date::new_0();
    let month = Month::try_from(now.get_month() as u8 + 1).ok()?;
    Date::from_calendar_date(now.get_full_year() as i32, month, now.get_date() as u8).ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Empty,
    Valid(Date),
    Invalid,
    BeforeMin(Date),
    AfterMax(Date),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Empty | Self::Valid(_))
    }

    pub fn message(&self) -> String {
        match self {
            Self::Empty | Self::Valid(_) => String::new(),
            Self::Invalid => "Not a valid date".to_owned(),
            Self::BeforeMin(min) => format!("Pick a day on or after {}", format_iso(*min)),
            Self::AfterMax(max) => format!("Pick a day on or before {}", format_iso(*max)),
        }
    }
}

/// Validates a picker value against optional inclusive bounds.
pub fn check(value: &str, min: Option<Date>, max: Option<Date>) -> Validity {
    if value.trim().is_empty() {
        return Validity::Empty;
    }

    let Some(date) = parse(value) else {
        return Validity::Invalid;
    };

    match (min, max) {
        (Some(min), _) if date < min => Validity::BeforeMin(min),
        (_, Some(max)) if date > max => Validity::AfterMax(max),
        _ => Validity::Valid(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse_iso() {
        assert_eq!(parse("2026-01-02"), Some(date!(2026 - 01 - 02)));
        assert_eq!(parse(" 2026-01-02 "), Some(date!(2026 - 01 - 02)));
        assert_eq!(parse("2026-02-30"), None);
        assert_eq!(parse("02.01.2026"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn format() {
        assert_eq!(format_iso(date!(2026 - 01 - 02)), "2026-01-02");
        assert_eq!(format_long(date!(2026 - 01 - 02)), "Friday, 2 January 2026");
        assert_eq!(format_long(date!(2026 - 10 - 19)), "Monday, 19 October 2026");
    }

    #[test]
    fn check_bounds() {
        let min = Some(date!(2026 - 01 - 01));
        let max = Some(date!(2026 - 12 - 31));

        assert_eq!(check("", min, max), Validity::Empty);
        assert_eq!(check("nope", min, max), Validity::Invalid);
        assert_eq!(
            check("2026-06-01", min, max),
            Validity::Valid(date!(2026 - 06 - 01))
        );
        assert_eq!(
            check("2026-01-01", min, max),
            Validity::Valid(date!(2026 - 01 - 01))
        );
        assert_eq!(
            check("2025-12-31", min, max),
            Validity::BeforeMin(date!(2026 - 01 - 01))
        );
        assert_eq!(
            check("2027-01-01", min, max),
            Validity::AfterMax(date!(2026 - 12 - 31))
        );
        assert_eq!(
            check("1999-01-01", None, None),
            Validity::Valid(date!(1999 - 01 - 01))
        );
    }

    #[test]
    fn validity_message() {
        assert!(Validity::Empty.is_valid());
        assert_eq!(Validity::Empty.message(), "");
        assert!(!Validity::Invalid.is_valid());
        assert_eq!(
            Validity::BeforeMin(date!(2026 - 01 - 01)).message(),
            "Pick a day on or after 2026-01-01"
        );
    }
}
