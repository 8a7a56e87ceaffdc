use chrono::NaiveDate;
use shiftpay::core::weekly::{group_by_week, week_start_monday};
use shiftpay::models::shift::Shift;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn shift_on(date: NaiveDate, hours: f64) -> Shift {
    Shift {
        id: "0".to_string(),
        date,
        start: None,
        end: None,
        hours,
    }
}

#[test]
fn sunday_maps_back_to_the_previous_monday() {
    // 2025-09-01 is a Monday, 2025-09-07 the following Sunday
    assert_eq!(week_start_monday(d(2025, 9, 7)), d(2025, 9, 1));
    assert_eq!(week_start_monday(d(2025, 9, 1)), d(2025, 9, 1));
    assert_eq!(week_start_monday(d(2025, 9, 3)), d(2025, 9, 1));
}

#[test]
fn monday_and_sunday_of_one_week_share_a_bucket() {
    let shifts = vec![shift_on(d(2025, 9, 1), 8.0), shift_on(d(2025, 9, 7), 4.0)];

    let buckets = group_by_week(&shifts);
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].start, d(2025, 9, 1));
    assert_eq!(buckets[0].total_hours, 12.0);
    assert_eq!(buckets[0].shift_count, 2);
}

#[test]
fn a_tuesday_and_the_next_monday_split_into_two_buckets() {
    let shifts = vec![shift_on(d(2025, 9, 2), 8.0), shift_on(d(2025, 9, 8), 8.0)];

    let buckets = group_by_week(&shifts);
    assert_eq!(buckets.len(), 2);

    // newest week first
    assert_eq!(buckets[0].start, d(2025, 9, 8));
    assert_eq!(buckets[1].start, d(2025, 9, 1));
}

#[test]
fn week_end_is_six_days_after_start() {
    let buckets = group_by_week(&[shift_on(d(2025, 9, 3), 8.0)]);
    assert_eq!(buckets[0].end(), d(2025, 9, 7));
}
