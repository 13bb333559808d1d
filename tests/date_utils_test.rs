use datekit::{is_leap, is_leap_year, DateValue};

fn mid_year(year: i32) -> DateValue {
    DateValue::from_local_ymd_hms_milli(year, 6, 15, 12, 0, 0, 0).unwrap()
}

#[test]
fn test_is_leap_year_examples() {
    assert!(!is_leap_year(&mid_year(1900)));
    assert!(is_leap_year(&mid_year(2000)));
    assert!(!is_leap_year(&mid_year(2001)));
    assert!(is_leap_year(&mid_year(2012)));
    assert!(!is_leap_year(&mid_year(2015)));
}

#[test]
fn test_is_leap_year_ignores_month_and_day() {
    let january = DateValue::from_local_ymd_hms_milli(2016, 1, 10, 12, 0, 0, 0).unwrap();
    let december = DateValue::from_local_ymd_hms_milli(2016, 12, 20, 12, 0, 0, 0).unwrap();
    assert!(is_leap_year(&january));
    assert!(is_leap_year(&december));
}

#[test]
fn test_is_leap_matches_gregorian_rule() {
    for year in -800..=2800 {
        let expected = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
        assert_eq!(is_leap(year), expected, "year {}", year);
    }
}

#[test]
fn test_is_leap_agrees_with_chrono_calendar() {
    // Feb 29 exists exactly in leap years
    for year in 1583..=2400 {
        let has_feb_29 = chrono::NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap(year), has_feb_29, "year {}", year);
    }
}
