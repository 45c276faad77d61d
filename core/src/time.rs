use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local date as stored in entries.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_iso() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_entry_date(&today).is_some());
    }

    #[test]
    fn test_parse_entry_date() {
        let date = parse_entry_date("2024-01-05").unwrap();
        assert_eq!(format_date(date), "2024-01-05");
        assert!(parse_entry_date("05/01/2024").is_none());
        assert!(parse_entry_date("2024-02-30").is_none());
    }
}
