//! Profit
//!
//! Profit per invoice is the gross amount minus the dealer commission and the
//! total VAT. It is always derived at read time from the stored fields, never
//! cached on the record, so every report computes it the same way.

use serde::Serialize;

use core_kernel::Money;
use domain_invoice::Invoice;

/// Profit for one invoice: `gross_total - commission - total_vat`
pub fn profit(invoice: &Invoice) -> Money {
    invoice.gross_total - invoice.charges.commission - invoice.charges.total_vat
}

/// Totals line of the profit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct ProfitSummary {
    pub gross_total: Money,
    pub commission: Money,
    pub total_vat: Money,
    pub profit: Money,
}

/// Sums the profit-report columns over a period's invoices
pub fn summarize_period(invoices: &[Invoice]) -> ProfitSummary {
    invoices
        .iter()
        .fold(ProfitSummary::default(), |acc, invoice| ProfitSummary {
            gross_total: acc.gross_total + invoice.gross_total,
            commission: acc.commission + invoice.charges.commission,
            total_vat: acc.total_vat + invoice.charges.total_vat,
            profit: acc.profit + profit(invoice),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain_invoice::{FeeSchedule, InvoiceDraft, ServicePlan};
    use rust_decimal_macros::dec;

    fn invoice(gross: i64, plan: ServicePlan) -> Invoice {
        Invoice::from_draft(
            InvoiceDraft {
                dealer: "PROAUTO".to_string(),
                invoice_number: "1".to_string(),
                gross_total: Money::from_major(gross),
                plan,
                invoice_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                client: "Cliente".to_string(),
                vehicle: None,
                paid: false,
                declines_renewal: false,
            },
            FeeSchedule::standard(),
        )
    }

    #[test]
    fn test_profit_for_single_invoice() {
        // gross 500, commission 248.20, VAT 75.00 -> profit 176.80
        let inv = invoice(500, ServicePlan::OneYear);
        assert_eq!(profit(&inv).amount(), dec!(176.80));
    }

    #[test]
    fn test_break_even_invoice_profit_is_fee_minus_its_vat() {
        // gross == fee: commission 0, VAT 45.15 -> profit 255.85
        let inv = invoice(301, ServicePlan::TwoYears);
        assert_eq!(profit(&inv).amount(), dec!(255.85));
    }

    #[test]
    fn test_summary_sums_each_column() {
        let invoices = vec![invoice(500, ServicePlan::OneYear), invoice(301, ServicePlan::TwoYears)];
        let summary = summarize_period(&invoices);

        assert_eq!(summary.gross_total.amount(), dec!(801));
        assert_eq!(summary.commission.amount(), dec!(248.20));
        assert_eq!(summary.total_vat.amount(), dec!(120.15));
        assert_eq!(summary.profit.amount(), dec!(432.65));
    }

    #[test]
    fn test_empty_period() {
        let summary = summarize_period(&[]);
        assert_eq!(summary.profit, Money::zero());
    }
}
