//! Assertion helpers for domain invariants

use domain_invoice::{DerivedCharges, FeeSchedule, Invoice};

/// Asserts the two valuation identities and that the stored charges equal a
/// fresh derivation from the invoice's own gross total and plan.
pub fn assert_charges_consistent(invoice: &Invoice) {
    let c = &invoice.charges;

    assert_eq!(
        c.fixed_fee + c.excess,
        invoice.gross_total,
        "fixed fee + excess must equal the gross total"
    );
    assert_eq!(
        c.vat_on_fee + c.vat_on_excess,
        c.total_vat,
        "VAT components must sum to the total VAT"
    );

    let recomputed =
        DerivedCharges::derive(invoice.gross_total, invoice.plan, FeeSchedule::standard());
    assert_eq!(
        *c, recomputed,
        "stored charges must match a fresh derivation"
    );
}
