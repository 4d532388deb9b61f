use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM-DD` or the keyword `today`.
pub fn resolve_date(s: &str) -> Option<NaiveDate> {
    if s.eq_ignore_ascii_case("today") {
        Some(today())
    } else {
        parse_date(s)
    }
}
