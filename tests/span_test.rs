use datekit::{format_time_span, DateValue, TimeSpan};

fn at(hour: u32, minute: u32, second: u32, milli: u32) -> DateValue {
    DateValue::from_local_ymd_hms_milli(2016, 1, 19, hour, minute, second, milli).unwrap()
}

#[test]
fn test_format_time_span_examples() {
    let start = at(10, 0, 0, 0);
    assert_eq!(format_time_span(&start, &at(11, 0, 0, 0)), "01:00:00.000");
    assert_eq!(format_time_span(&start, &at(10, 30, 0, 0)), "00:30:00.000");
    assert_eq!(format_time_span(&start, &at(10, 0, 20, 0)), "00:00:20.000");
    assert_eq!(format_time_span(&start, &at(10, 0, 0, 250)), "00:00:00.250");
    assert_eq!(format_time_span(&start, &at(15, 20, 10, 453)), "05:20:10.453");
}

#[test]
fn test_same_instant_is_zero() {
    let date = at(13, 48, 2, 7);
    assert_eq!(format_time_span(&date, &date), "00:00:00.000");
}

#[test]
fn test_fields_do_not_carry() {
    // 10:50 -> 11:10 is twenty minutes, but each field is subtracted on its own
    let span = TimeSpan::between(&at(10, 50, 0, 0), &at(11, 10, 0, 0));
    assert_eq!(
        span,
        TimeSpan {
            hours: 1,
            minutes: -40,
            seconds: 0,
            milliseconds: 0,
        }
    );
    assert_eq!(span.to_string(), "01:-40:00.000");
}

#[test]
fn test_date_part_is_ignored() {
    let start = at(10, 0, 0, 0);
    let next_day = DateValue::from_local_ymd_hms_milli(2016, 1, 20, 12, 0, 0, 0).unwrap();
    assert_eq!(format_time_span(&start, &next_day), "02:00:00.000");
}

#[test]
fn test_negative_field_is_string_padded() {
    let span = format_time_span(&at(10, 0, 0, 300), &at(10, 0, 0, 295));
    assert_eq!(span, "00:00:00.0-5");
}
