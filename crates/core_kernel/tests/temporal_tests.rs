//! Unit tests for rental periods and dataset date parsing

use chrono::NaiveDate;
use core_kernel::temporal::{lenient_date, TemporalError};
use core_kernel::{parse_date, RentalPeriod};
use serde::Deserialize;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod duration {
    use super::*;

    #[test]
    fn test_single_day_rental_lasts_one_day() {
        let period = RentalPeriod::new(date(2017, 12, 8), date(2017, 12, 8)).unwrap();
        assert_eq!(period.duration_days(), 1);
    }

    #[test]
    fn test_three_day_rental() {
        let period = RentalPeriod::new(date(2017, 12, 8), date(2017, 12, 10)).unwrap();
        assert_eq!(period.duration_days(), 3);
    }

    #[test]
    fn test_duration_across_month_boundary() {
        let period = RentalPeriod::new(date(2015, 7, 28), date(2015, 8, 7)).unwrap();
        assert_eq!(period.duration_days(), 11);
    }

    #[test]
    fn test_duration_across_leap_day() {
        let period = RentalPeriod::new(date(2016, 2, 28), date(2016, 3, 1)).unwrap();
        assert_eq!(period.duration_days(), 3);
    }
}

mod bounds {
    use super::*;

    #[test]
    fn test_with_bounds_keeps_missing_values() {
        let period = RentalPeriod::new(date(2015, 12, 8), date(2015, 12, 8)).unwrap();
        let extended = period.with_bounds(None, Some(date(2015, 12, 10))).unwrap();

        assert_eq!(extended.start(), date(2015, 12, 8));
        assert_eq!(extended.end(), date(2015, 12, 10));
        assert_eq!(extended.duration_days(), 3);
    }

    #[test]
    fn test_with_bounds_rejects_inverted_period() {
        let period = RentalPeriod::new(date(2015, 12, 8), date(2015, 12, 10)).unwrap();
        let result = period.with_bounds(Some(date(2015, 12, 11)), None);

        assert_eq!(
            result,
            Err(TemporalError::InvalidPeriod {
                start: date(2015, 12, 11),
                end: date(2015, 12, 10),
            })
        );
    }
}

mod parsing {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(with = "lenient_date")]
        start_date: NaiveDate,
        #[serde(default, with = "lenient_date::option")]
        end_date: Option<NaiveDate>,
    }

    #[test]
    fn test_parse_date_accepts_padding_variants() {
        assert_eq!(parse_date("2015-3-1").unwrap(), date(2015, 3, 1));
        assert_eq!(parse_date("2015-03-01").unwrap(), date(2015, 3, 1));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("yesterday"),
            Err(TemporalError::InvalidDate("yesterday".to_string()))
        );
    }

    #[test]
    fn test_lenient_date_deserializes_optional_fields() {
        let row: Row = serde_json::from_str(r#"{"start_date": "2015-12-8"}"#).unwrap();
        assert_eq!(row.start_date, date(2015, 12, 8));
        assert_eq!(row.end_date, None);

        let row: Row =
            serde_json::from_str(r#"{"start_date": "2015-12-8", "end_date": "2015-12-10"}"#).unwrap();
        assert_eq!(row.end_date, Some(date(2015, 12, 10)));
    }

    #[test]
    fn test_lenient_date_reports_bad_dates() {
        let result: Result<Row, _> = serde_json::from_str(r#"{"start_date": "2015-13-40"}"#);
        assert!(result.is_err());
    }
}
