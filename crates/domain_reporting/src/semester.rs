//! Semester VAT cuts
//!
//! VAT is filed twice a year. A year splits into exactly two windows,
//! January 1 - June 30 and July 1 - December 31, both inclusive, in local
//! calendar dates. Cuts are recomputed from the in-memory invoice list on
//! every render and never persisted.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use core_kernel::Money;
use domain_invoice::Invoice;

/// One of the two fixed semestral windows of a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SemesterWindow {
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
}

impl SemesterWindow {
    /// The window containing `date`. Every date belongs to exactly one
    /// window; windows never overlap.
    pub fn of(date: NaiveDate) -> Self {
        let year = date.year();
        if date.month() <= 6 {
            Self {
                start: NaiveDate::from_ymd_opt(year, 1, 1).expect("Jan 1 is always valid"),
                end: NaiveDate::from_ymd_opt(year, 6, 30).expect("Jun 30 is always valid"),
            }
        } else {
            Self {
                start: NaiveDate::from_ymd_opt(year, 7, 1).expect("Jul 1 is always valid"),
                end: NaiveDate::from_ymd_opt(year, 12, 31).expect("Dec 31 is always valid"),
            }
        }
    }

    /// Returns true if `date` falls inside this window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A semester's invoices and their summed VAT, ready for the fiscal filing
#[derive(Debug, Clone, Serialize)]
pub struct SemesterCut {
    pub window: SemesterWindow,
    pub invoices: Vec<Invoice>,
    pub total_vat: Money,
}

/// Groups invoices into semester cuts, ascending by window start.
///
/// The grouping key is derived from the invoice's own date field, never from
/// its creation timestamp.
pub fn bucket_by_semester(invoices: &[Invoice]) -> Vec<SemesterCut> {
    let mut cuts: BTreeMap<NaiveDate, SemesterCut> = BTreeMap::new();

    for invoice in invoices {
        let window = SemesterWindow::of(invoice.invoice_date);
        let cut = cuts.entry(window.start).or_insert_with(|| SemesterCut {
            window,
            invoices: Vec::new(),
            total_vat: Money::zero(),
        });
        cut.total_vat = cut.total_vat + invoice.charges.total_vat;
        cut.invoices.push(invoice.clone());
    }

    cuts.into_values().collect()
}

/// Summed total VAT over a set of invoices, for custom date-range cuts
pub fn vat_total(invoices: &[Invoice]) -> Money {
    invoices.iter().map(|i| i.charges.total_vat).sum()
}
