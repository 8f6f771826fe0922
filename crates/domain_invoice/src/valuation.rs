//! Charge derivation engine
//!
//! Splits a gross invoice amount into the fixed service fee, the excess above
//! it, the VAT owed on each part, and the dealer commission. The decomposition
//! feeds the semestral VAT filings, so the formulas below are pinned: same
//! order of operations, exact decimal arithmetic, no intermediate rounding.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::plan::ServicePlan;
use crate::schedule::{vat_rate, FeeSchedule};

/// The monetary fields derived from `(gross_total, plan)`.
///
/// Field serialization keeps the names used by the existing document
/// collection so historical data loads unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedCharges {
    /// VAT-inclusive fixed fee for the plan
    #[serde(rename = "valorFijo")]
    pub fixed_fee: Money,
    /// Gross amount above the fixed fee; negative for under-priced invoices
    #[serde(rename = "excedente")]
    pub excess: Money,
    /// VAT owed on the excess
    #[serde(rename = "ivaExcedente")]
    pub vat_on_excess: Money,
    /// Dealer commission: the excess net of its VAT
    #[serde(rename = "comisionVal")]
    pub commission: Money,
    /// VAT owed on the fixed fee
    #[serde(rename = "ivaGananciaPropia")]
    pub vat_on_fee: Money,
    /// Total VAT for the invoice
    #[serde(rename = "totalIva")]
    pub total_vat: Money,
}

impl DerivedCharges {
    /// Derives all charge fields from the gross total and plan.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// outputs. Zero or negative gross totals are not rejected here; amount
    /// validation belongs to the input layer.
    pub fn derive(gross_total: Money, plan: ServicePlan, schedule: &FeeSchedule) -> Self {
        let vat = vat_rate();

        let fixed_fee = schedule.fee_for(plan);
        let excess = gross_total - fixed_fee;
        let vat_on_excess = vat.apply(excess);
        // Pinned formulation: gross - fee - VAT(excess), not excess - VAT(excess).
        let commission = gross_total - fixed_fee - vat_on_excess;
        let vat_on_fee = vat.apply(fixed_fee);
        let total_vat = vat_on_fee + vat_on_excess;

        Self {
            fixed_fee,
            excess,
            vat_on_excess,
            commission,
            vat_on_fee,
            total_vat,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn plan_strategy() -> impl Strategy<Value = ServicePlan> {
        prop_oneof![
            Just(ServicePlan::OneYear),
            Just(ServicePlan::TwoYears),
            Just(ServicePlan::ThreeYears),
            Just(ServicePlan::OneYearCayambe),
            Just(ServicePlan::TwoYearsCayambe),
            Just(ServicePlan::ThreeYearsCayambe),
        ]
    }

    proptest! {
        #[test]
        fn fee_plus_excess_equals_gross(
            cents in 0i64..100_000_000i64,
            plan in plan_strategy()
        ) {
            let gross = Money::from_cents(cents);
            let c = DerivedCharges::derive(gross, plan, FeeSchedule::standard());
            prop_assert_eq!(c.fixed_fee + c.excess, gross);
        }

        #[test]
        fn vat_components_sum_to_total(
            cents in 0i64..100_000_000i64,
            plan in plan_strategy()
        ) {
            let gross = Money::from_cents(cents);
            let c = DerivedCharges::derive(gross, plan, FeeSchedule::standard());
            prop_assert_eq!(c.vat_on_fee + c.vat_on_excess, c.total_vat);
        }

        #[test]
        fn derivation_has_no_hidden_state(
            cents in 0i64..100_000_000i64,
            plan in plan_strategy()
        ) {
            let gross = Money::from_cents(cents);
            let first = DerivedCharges::derive(gross, plan, FeeSchedule::standard());
            let second = DerivedCharges::derive(gross, plan, FeeSchedule::standard());
            prop_assert_eq!(first, second);
        }
    }
}
