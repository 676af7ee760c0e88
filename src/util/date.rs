pub use time::Date;
pub use time::PrimitiveDateTime;

use time::macros::format_description;

pub type StaticDateFormat<'a> =
    &'static [time::format_description::BorrowedFormatItem<'a>];

pub const STANDARD_DATE_FORMAT: StaticDateFormat =
    format_description!("[year]-[month]-[day]");

// Activity exports render trade timestamps as "2024-01-02, 10:00:00".
pub const ACTIVITY_DATETIME_FORMAT: StaticDateFormat =
    format_description!("[year]-[month]-[day], [hour]:[minute]:[second]");

// Statement metadata dates are spelled out, e.g. "June 28, 2024".
pub const STATEMENT_DATE_FORMAT: StaticDateFormat =
    format_description!("[month repr:long] [day padding:none], [year]");

pub fn parse_standard_date(date_str: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date_str, STANDARD_DATE_FORMAT)
}

pub fn parse_activity_datetime(
    datetime_str: &str,
) -> Result<PrimitiveDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(datetime_str, ACTIVITY_DATETIME_FORMAT)
}

pub fn parse_statement_date(date_str: &str) -> Result<Date, time::error::Parse> {
    Date::parse(date_str, STATEMENT_DATE_FORMAT)
}

pub fn render_datetime(dt: &PrimitiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}:{:02}",
        dt.date(),
        dt.hour(),
        dt.minute(),
        dt.second()
    )
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, Time};

    use super::{
        parse_activity_datetime, parse_standard_date, parse_statement_date,
        render_datetime,
    };

    #[test]
    fn test_parse_standard_date() {
        let d = parse_standard_date("2023-01-21");
        assert_eq!(
            d.unwrap(),
            Date::from_calendar_date(2023, Month::January, 21).unwrap()
        );

        let d = parse_standard_date("2023-01-41");
        assert!(d.is_err());
    }

    #[test]
    fn test_parse_activity_datetime() {
        let dt = parse_activity_datetime("2024-01-02, 10:00:05").unwrap();
        assert_eq!(
            dt.date(),
            Date::from_calendar_date(2024, Month::January, 2).unwrap()
        );
        assert_eq!(dt.time(), Time::from_hms(10, 0, 5).unwrap());

        // Date-only strings must not satisfy the datetime pattern.
        assert!(parse_activity_datetime("2024-01-02").is_err());
    }

    #[test]
    fn test_parse_statement_date() {
        assert_eq!(
            parse_statement_date("June 28, 2024").unwrap(),
            Date::from_calendar_date(2024, Month::June, 28).unwrap()
        );
        assert_eq!(
            parse_statement_date("December 1, 2023").unwrap(),
            Date::from_calendar_date(2023, Month::December, 1).unwrap()
        );
        assert!(parse_statement_date("2024-06-28").is_err());
    }

    #[test]
    fn test_render_datetime() {
        let dt = parse_activity_datetime("2024-01-02, 09:05:00").unwrap();
        assert_eq!(render_datetime(&dt), "2024-01-02 09:05:00");
    }
}
