//! Date labels for entries.
//!
//! Dates are stored as the user typed them. When a display format is chosen
//! the common shapes are re-rendered in it; anything else is shown verbatim.

use chrono::NaiveDate;

use crate::models::settings::DateFormat;

pub const PRESENT: &str = "Present";
const RANGE_SEPARATOR: &str = " — ";

enum Parsed {
    Month(NaiveDate),
    Year(i32),
}

fn parse(raw: &str) -> Option<Parsed> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Parsed::Month(date));
    }
    let with_day = [
        (format!("{raw}-01"), "%Y-%m-%d"),
        (format!("01/{raw}"), "%d/%m/%Y"),
        (format!("01 {raw}"), "%d %b %Y"),
        (format!("01 {raw}"), "%d %B %Y"),
    ];
    for (candidate, fmt) in &with_day {
        if let Ok(date) = NaiveDate::parse_from_str(candidate, fmt) {
            return Some(Parsed::Month(date));
        }
    }
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().ok().map(Parsed::Year);
    }
    None
}

/// Renders one date in `format`, or returns it trimmed when no format is set
/// or the value is not recognised.
pub fn format_date(raw: &str, format: Option<DateFormat>) -> String {
    let raw = raw.trim();
    let Some(format) = format else {
        return raw.to_string();
    };
    match parse(raw) {
        Some(Parsed::Month(date)) => {
            let pattern = match format {
                DateFormat::NumericMonth => "%m/%Y",
                DateFormat::YearOnly => "%Y",
                DateFormat::ShortMonth => "%b %Y",
                DateFormat::LongMonth => "%B %Y",
            };
            date.format(pattern).to_string()
        }
        Some(Parsed::Year(year)) => year.to_string(),
        None => raw.to_string(),
    }
}

/// `start — end`, with `Present` for ongoing entries whatever end date is stored.
pub fn date_range(
    start: &str,
    end: Option<&str>,
    current: bool,
    format: Option<DateFormat>,
) -> String {
    let start = format_date(start, format);
    let end = if current {
        PRESENT.to_string()
    } else {
        end.map(|e| format_date(e, format)).unwrap_or_default()
    };
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start}{RANGE_SEPARATOR}{end}"),
        (false, true) => start,
        (true, _) => end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_shows_present_regardless_of_end_date() {
        assert_eq!(
            date_range("2020-01", Some("2022-05"), true, None),
            "2020-01 — Present"
        );
    }

    #[test]
    fn test_verbatim_without_format() {
        assert_eq!(date_range("Jan 2019", Some("Mar 2021"), false, None), "Jan 2019 — Mar 2021");
        assert_eq!(format_date("  sometime ", None), "sometime");
    }

    #[test]
    fn test_reformats_known_shapes() {
        let short = Some(DateFormat::ShortMonth);
        assert_eq!(format_date("2021-03", short), "Mar 2021");
        assert_eq!(format_date("2021-03-15", short), "Mar 2021");
        assert_eq!(format_date("03/2021", short), "Mar 2021");
        assert_eq!(format_date("March 2021", Some(DateFormat::NumericMonth)), "03/2021");
        assert_eq!(format_date("Mar 2021", Some(DateFormat::LongMonth)), "March 2021");
        assert_eq!(format_date("2021-03", Some(DateFormat::YearOnly)), "2021");
        assert_eq!(format_date("2021", short), "2021");
    }

    #[test]
    fn test_unparseable_is_kept() {
        assert_eq!(format_date("Spring term", Some(DateFormat::YearOnly)), "Spring term");
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(date_range("2020", None, false, None), "2020");
        assert_eq!(date_range("", Some("2021"), false, None), "2021");
        assert_eq!(date_range("", None, false, None), "");
    }
}
