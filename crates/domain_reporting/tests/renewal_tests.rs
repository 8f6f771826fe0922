//! Renewal Report Tests
//!
//! Scenario tests for renewal due dates, status classification, filtering,
//! and the exclusion of invoices that have no installation date.

use domain_invoice::ServicePlan;
use domain_reporting::{
    renewal_due_date, renewal_entries, RenewalIntentFilter, RenewalStatus, RenewalStatusFilter,
};
use test_utils::{date, InvoiceFixtures, TestInvoiceBuilder};

mod due_date_tests {
    use super::*;

    /// Installation 2024-01-10 on the one-year plan falls due 2025-01-10
    #[test]
    fn test_one_year_due_date() {
        assert_eq!(
            renewal_due_date(date(2024, 1, 10), ServicePlan::OneYear),
            date(2025, 1, 10)
        );
    }

    /// Cayambe variants share the duration of their base plan
    #[test]
    fn test_cayambe_duration_matches_base() {
        for (base, cayambe) in [
            (ServicePlan::OneYear, ServicePlan::OneYearCayambe),
            (ServicePlan::TwoYears, ServicePlan::TwoYearsCayambe),
            (ServicePlan::ThreeYears, ServicePlan::ThreeYearsCayambe),
        ] {
            assert_eq!(
                renewal_due_date(date(2024, 5, 20), base),
                renewal_due_date(date(2024, 5, 20), cayambe),
            );
        }
    }

    /// Feb 29 installations roll to Mar 1 in non-leap target years
    #[test]
    fn test_leap_day_installation() {
        assert_eq!(
            renewal_due_date(date(2024, 2, 29), ServicePlan::OneYear),
            date(2025, 3, 1)
        );
    }
}

mod classification_tests {
    use super::*;

    /// Fourteen days out is inside the alert window
    #[test]
    fn test_due_soon_fourteen_days_before() {
        let invoice = InvoiceFixtures::installed_one_year();
        let entries = renewal_entries(
            &[invoice],
            date(2024, 12, 27),
            RenewalStatusFilter::All,
            RenewalIntentFilter::All,
        );

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].due_date, date(2025, 1, 10));
        assert_eq!(entries[0].days_remaining, 14);
        assert_eq!(entries[0].status, RenewalStatus::DueSoon);
    }

    /// One day past due is overdue
    #[test]
    fn test_overdue_day_after() {
        let invoice = InvoiceFixtures::installed_one_year();
        let entries = renewal_entries(
            &[invoice],
            date(2025, 1, 11),
            RenewalStatusFilter::All,
            RenewalIntentFilter::All,
        );

        assert_eq!(entries[0].days_remaining, -1);
        assert_eq!(entries[0].status, RenewalStatus::Overdue);
    }

    /// Well before the window the contract is simply current
    #[test]
    fn test_current_months_before() {
        let invoice = InvoiceFixtures::installed_one_year();
        let entries = renewal_entries(
            &[invoice],
            date(2024, 6, 1),
            RenewalStatusFilter::All,
            RenewalIntentFilter::All,
        );

        assert_eq!(entries[0].status, RenewalStatus::Current);
    }
}

mod exclusion_and_filter_tests {
    use super::*;

    /// Invoices without an installation date never appear, whatever the
    /// filters say
    #[test]
    fn test_uninstalled_invoices_are_excluded() {
        let invoices = vec![
            InvoiceFixtures::without_vehicle(),
            InvoiceFixtures::installed_one_year(),
            // vehicle data but no installation date
            TestInvoiceBuilder::new().number("INV-009").plate("PBA-111").build(),
        ];

        for filter in [
            RenewalStatusFilter::All,
            RenewalStatusFilter::DueSoon,
            RenewalStatusFilter::Overdue,
            RenewalStatusFilter::Current,
        ] {
            let entries = renewal_entries(
                &invoices,
                date(2024, 12, 27),
                filter,
                RenewalIntentFilter::All,
            );
            assert!(
                entries.iter().all(|e| e.invoice.installed_on().is_some()),
                "only installed invoices may be classified"
            );
        }
    }

    /// Most urgent contracts sort first
    #[test]
    fn test_entries_sorted_by_days_remaining() {
        let invoices = vec![
            TestInvoiceBuilder::new().number("1").installed_on(date(2024, 6, 1)).build(),
            TestInvoiceBuilder::new().number("2").installed_on(date(2023, 12, 1)).build(),
            TestInvoiceBuilder::new().number("3").installed_on(date(2024, 2, 1)).build(),
        ];

        let entries = renewal_entries(
            &invoices,
            date(2024, 12, 27),
            RenewalStatusFilter::All,
            RenewalIntentFilter::All,
        );

        let numbers: Vec<&str> = entries
            .iter()
            .map(|e| e.invoice.invoice_number.as_str())
            .collect();
        // due dates: #2 -> 2024-12-01 (overdue), #3 -> 2025-02-01, #1 -> 2025-06-01
        assert_eq!(numbers, vec!["2", "3", "1"]);
    }

    /// Status filter narrows to one bucket
    #[test]
    fn test_status_filter() {
        let invoices = vec![
            TestInvoiceBuilder::new().number("overdue").installed_on(date(2023, 12, 1)).build(),
            TestInvoiceBuilder::new().number("current").installed_on(date(2024, 6, 1)).build(),
        ];

        let overdue = renewal_entries(
            &invoices,
            date(2024, 12, 27),
            RenewalStatusFilter::Overdue,
            RenewalIntentFilter::All,
        );
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].invoice.invoice_number, "overdue");
    }

    /// Intent filter splits declined from pending renewals
    #[test]
    fn test_intent_filter() {
        let invoices = vec![
            TestInvoiceBuilder::new()
                .number("declined")
                .installed_on(date(2024, 1, 10))
                .declines_renewal(true)
                .build(),
            TestInvoiceBuilder::new()
                .number("pending")
                .installed_on(date(2024, 1, 10))
                .build(),
        ];

        let declined = renewal_entries(
            &invoices,
            date(2024, 12, 27),
            RenewalStatusFilter::All,
            RenewalIntentFilter::Declined,
        );
        assert_eq!(declined.len(), 1);
        assert_eq!(declined[0].invoice.invoice_number, "declined");

        let pending = renewal_entries(
            &invoices,
            date(2024, 12, 27),
            RenewalStatusFilter::All,
            RenewalIntentFilter::Pending,
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].invoice.invoice_number, "pending");
    }
}
