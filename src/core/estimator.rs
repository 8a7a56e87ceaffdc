//! Net-pay estimation for one pay period under a fixed-rate deduction model.

use crate::models::shift::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed deduction rates, loaded from the configuration file and immutable
/// for the duration of a run. Values are trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaySettings {
    pub hourly_rate: f64,
    /// Flat federal tax rate applied to the taxable base.
    pub federal_tax: f64,
    /// Pension contribution rate.
    pub pension: f64,
    /// Employment-insurance premium rate.
    pub insurance: f64,
    /// Vacation accrual as a fraction of base gross.
    pub vacation: f64,
    /// true: vacation is accrued (withheld from the payout).
    /// false: vacation is paid out now and taxed with the rest.
    pub vacation_is_deduction: bool,
}

impl Default for PaySettings {
    fn default() -> Self {
        Self {
            hourly_rate: 17.50,
            federal_tax: 0.022,
            pension: 0.0356,
            insurance: 0.0117,
            vacation: 0.04,
            vacation_is_deduction: true,
        }
    }
}

/// Full breakdown for one period. All amounts are full-precision; two-decimal
/// rounding happens only at display time.
#[derive(Debug, Clone, PartialEq)]
pub struct PayEstimate {
    pub total_hours: f64,
    pub base_gross: f64,
    pub vacation: f64,
    pub taxable_base: f64,
    pub federal: f64,
    pub pension: f64,
    pub insurance: f64,
    pub deductions: f64,
    pub net: f64,
    /// What the pay stub would show as "Gross Pay" for the selected mode.
    pub gross_shown: f64,
}

/// Estimate pay for the shifts falling inside `start..=end`.
/// Non-finite stored hours count as zero so one bad row cannot poison a total.
pub fn estimate(
    shifts: &[Shift],
    start: NaiveDate,
    end: NaiveDate,
    settings: &PaySettings,
) -> PayEstimate {
    let total_hours: f64 = shifts
        .iter()
        .filter(|s| s.date >= start && s.date <= end)
        .map(|s| if s.hours.is_finite() { s.hours } else { 0.0 })
        .sum();

    let base_gross = total_hours * settings.hourly_rate;
    let vacation = base_gross * settings.vacation;

    if settings.vacation_is_deduction {
        // Vacation accrued, not paid: tax the base gross, then withhold the
        // vacation amount from the payout.
        let taxable_base = base_gross;
        let federal = taxable_base * settings.federal_tax;
        let pension = taxable_base * settings.pension;
        let insurance = taxable_base * settings.insurance;
        let deductions = federal + pension + insurance;

        PayEstimate {
            total_hours,
            base_gross,
            vacation,
            taxable_base,
            federal,
            pension,
            insurance,
            deductions,
            net: base_gross - deductions - vacation,
            gross_shown: base_gross,
        }
    } else {
        // Vacation paid out: it joins the taxable base and is not subtracted
        // again afterwards.
        let taxable_base = base_gross + vacation;
        let federal = taxable_base * settings.federal_tax;
        let pension = taxable_base * settings.pension;
        let insurance = taxable_base * settings.insurance;
        let deductions = federal + pension + insurance;

        PayEstimate {
            total_hours,
            base_gross,
            vacation,
            taxable_base,
            federal,
            pension,
            insurance,
            deductions,
            net: taxable_base - deductions,
            gross_shown: taxable_base,
        }
    }
}
