//! Fixed fee schedule
//!
//! Every plan maps to one VAT-inclusive fixed fee. The mapping is closed and
//! never computed; the Cayambe variants are the base fee plus the regional
//! surcharge of $20. The schedule is an explicit value passed to the
//! valuation engine rather than ambient global state, so tests can substitute
//! alternate tables.

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use core_kernel::{Money, Rate};

use crate::error::PlanError;
use crate::plan::ServicePlan;

/// VAT rate applied both to the fixed fee and to the excess
pub fn vat_rate() -> Rate {
    Rate::new(dec!(0.15))
}

static STANDARD: Lazy<FeeSchedule> = Lazy::new(|| {
    FeeSchedule::new([
        (ServicePlan::OneYear, Money::from_major(208)),
        (ServicePlan::TwoYears, Money::from_major(301)),
        (ServicePlan::ThreeYears, Money::from_major(394)),
        (ServicePlan::OneYearCayambe, Money::from_major(228)),
        (ServicePlan::TwoYearsCayambe, Money::from_major(321)),
        (ServicePlan::ThreeYearsCayambe, Money::from_major(414)),
    ])
    .expect("standard schedule covers all plans")
});

/// Immutable mapping from plan to fixed fee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    fees: BTreeMap<ServicePlan, Money>,
}

impl FeeSchedule {
    /// Builds a schedule, requiring an entry for every plan code so that
    /// lookups can never fail.
    pub fn new(entries: impl IntoIterator<Item = (ServicePlan, Money)>) -> Result<Self, PlanError> {
        let fees: BTreeMap<ServicePlan, Money> = entries.into_iter().collect();
        for plan in ServicePlan::ALL {
            if !fees.contains_key(&plan) {
                return Err(PlanError::IncompleteSchedule(plan.code()));
            }
        }
        Ok(Self { fees })
    }

    /// The production fee table, constructed once per process
    pub fn standard() -> &'static FeeSchedule {
        &STANDARD
    }

    /// The fixed fee for a plan
    pub fn fee_for(&self, plan: ServicePlan) -> Money {
        *self
            .fees
            .get(&plan)
            .expect("schedule is complete by construction")
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::standard().clone()
    }
}
