//! Temporal Property Tests
//!
//! Properties that must hold for arbitrary dates, plans, and amounts.

use chrono::Datelike;
use proptest::prelude::*;

use domain_reporting::{renewal_due_date, vat_total, SemesterWindow};
use test_utils::{date_strategy, gross_money_strategy, plan_strategy, TestInvoiceBuilder};

proptest! {
    /// Every date lies inside the window computed from it, and the two
    /// windows of its year partition the year
    #[test]
    fn date_belongs_to_its_own_window(date in date_strategy()) {
        let window = SemesterWindow::of(date);
        prop_assert!(window.contains(date));
        prop_assert_eq!(window.start.year(), date.year());

        let (start_month, end_month) = (window.start.month(), window.end.month());
        prop_assert!(
            (start_month, end_month) == (1, 6) || (start_month, end_month) == (7, 12)
        );
    }

    /// The due date is exactly the plan duration ahead, allowing for the
    /// Feb 29 rollover
    #[test]
    fn due_date_is_duration_years_ahead(
        installed in date_strategy(),
        plan in plan_strategy()
    ) {
        let due = renewal_due_date(installed, plan);
        prop_assert_eq!(due.year(), installed.year() + plan.duration_years() as i32);

        if installed.month() == 2 && installed.day() == 29 {
            prop_assert!(
                (due.month(), due.day()) == (2, 29) || (due.month(), due.day()) == (3, 1)
            );
        } else {
            prop_assert_eq!(due.month(), installed.month());
            prop_assert_eq!(due.day(), installed.day());
        }
    }

    /// Summed VAT over any pair of invoices equals the sum of the parts
    #[test]
    fn vat_total_is_additive(
        gross_a in gross_money_strategy(),
        gross_b in gross_money_strategy(),
        plan in plan_strategy()
    ) {
        let a = TestInvoiceBuilder::new().gross(gross_a).plan(plan).build();
        let b = TestInvoiceBuilder::new().gross(gross_b).plan(plan).build();

        let together = vat_total(&[a.clone(), b.clone()]);
        prop_assert_eq!(together, vat_total(&[a]) + vat_total(&[b]));
    }
}
