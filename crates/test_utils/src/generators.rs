//! Property-Based Test Generators
//!
//! Proptest strategies for generating domain values that stay inside the
//! shapes the system accepts.

use chrono::NaiveDate;
use proptest::prelude::*;

use core_kernel::Money;
use domain_invoice::ServicePlan;

/// Strategy over all six service plans
pub fn plan_strategy() -> impl Strategy<Value = ServicePlan> {
    prop_oneof![
        Just(ServicePlan::OneYear),
        Just(ServicePlan::TwoYears),
        Just(ServicePlan::ThreeYears),
        Just(ServicePlan::OneYearCayambe),
        Just(ServicePlan::TwoYearsCayambe),
        Just(ServicePlan::ThreeYearsCayambe),
    ]
}

/// Non-negative gross totals in cents, up to $1,000,000.00
pub fn gross_cents_strategy() -> impl Strategy<Value = i64> {
    0i64..100_000_000i64
}

/// Non-negative gross totals as Money
pub fn gross_money_strategy() -> impl Strategy<Value = Money> {
    gross_cents_strategy().prop_map(Money::from_cents)
}

/// Valid calendar dates between 2020 and 2030
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=31).prop_filter_map("valid calendar date", |(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
    })
}
