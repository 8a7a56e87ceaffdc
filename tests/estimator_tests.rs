use chrono::NaiveDate;
use shiftpay::core::estimator::{PaySettings, estimate};
use shiftpay::models::shift::Shift;

const EPS: f64 = 1e-6;

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

fn paystub_settings(vacation_is_deduction: bool) -> PaySettings {
    PaySettings {
        hourly_rate: 17.50,
        federal_tax: 0.022,
        pension: 0.0356,
        insurance: 0.0117,
        vacation: 0.04,
        vacation_is_deduction,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn deduction_mode_matches_the_paystub() {
    // 80 hours over the period
    let shifts = vec![
        shift_on(d(2025, 7, 28), 40.0),
        shift_on(d(2025, 8, 4), 40.0),
    ];
    let pay = estimate(
        &shifts,
        d(2025, 7, 28),
        d(2025, 8, 10),
        &paystub_settings(true),
    );

    assert_close(pay.total_hours, 80.0);
    assert_close(pay.base_gross, 1400.0);
    assert_close(pay.vacation, 56.0);
    assert_close(pay.taxable_base, 1400.0);
    assert_close(pay.deductions, 97.02);
    assert_close(pay.net, 1246.98);
    assert_close(pay.gross_shown, 1400.0);
}

#[test]
fn payout_mode_taxes_the_vacation_too() {
    let shifts = vec![
        shift_on(d(2025, 7, 28), 40.0),
        shift_on(d(2025, 8, 4), 40.0),
    ];
    let pay = estimate(
        &shifts,
        d(2025, 7, 28),
        d(2025, 8, 10),
        &paystub_settings(false),
    );

    assert_close(pay.taxable_base, 1456.0);
    assert_close(pay.deductions, 100.9008);
    assert_close(pay.net, 1355.0992);
    assert_close(pay.gross_shown, 1456.0);
}

#[test]
fn filter_is_inclusive_on_both_period_edges() {
    let shifts = vec![
        shift_on(d(2025, 7, 27), 1.0), // day before
        shift_on(d(2025, 7, 28), 2.0), // first day
        shift_on(d(2025, 8, 10), 3.0), // last day
        shift_on(d(2025, 8, 11), 4.0), // day after
    ];
    let pay = estimate(
        &shifts,
        d(2025, 7, 28),
        d(2025, 8, 10),
        &paystub_settings(true),
    );

    assert_close(pay.total_hours, 5.0);
}

#[test]
fn non_finite_hours_count_as_zero() {
    let shifts = vec![
        shift_on(d(2025, 7, 28), f64::NAN),
        shift_on(d(2025, 7, 29), 8.0),
    ];
    let pay = estimate(
        &shifts,
        d(2025, 7, 28),
        d(2025, 8, 10),
        &paystub_settings(true),
    );

    assert_close(pay.total_hours, 8.0);
    assert!(pay.net.is_finite());
}

#[test]
fn empty_period_estimates_to_zero_everywhere() {
    let pay = estimate(&[], d(2025, 7, 28), d(2025, 8, 10), &paystub_settings(true));

    assert_close(pay.total_hours, 0.0);
    assert_close(pay.gross_shown, 0.0);
    assert_close(pay.net, 0.0);
}
