//! List filtering and ordering
//!
//! The pieces shared by the operational list views: inclusive date-range
//! filtering with chronological order for period reports, the numeric
//! invoice-number order for list views, and the pending-installation query.

use serde::Serialize;

use core_kernel::{matches_search, DateRange};
use domain_invoice::Invoice;

/// Invoices dated inside `range` (boundaries included), ascending by invoice
/// date for chronological reports
pub fn filter_by_range(invoices: &[Invoice], range: DateRange) -> Vec<Invoice> {
    let mut selected: Vec<Invoice> = invoices
        .iter()
        .filter(|i| range.contains(i.invoice_date))
        .cloned()
        .collect();
    selected.sort_by_key(|i| i.invoice_date);
    selected
}

/// List-view order: descending by the numeric run in the invoice number.
/// Dealers zero-pad inconsistently, so lexical order would put "INV-002"
/// above "INV-100".
pub fn sorted_by_invoice_number_desc(mut invoices: Vec<Invoice>) -> Vec<Invoice> {
    invoices.sort_by_key(|i| std::cmp::Reverse(i.invoice_number_key()));
    invoices
}

/// Installation-state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallationFilter {
    #[default]
    All,
    /// No installation date recorded yet
    Pending,
    /// Installation date recorded
    Installed,
}

/// Payment-state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentFilter {
    #[default]
    All,
    Paid,
    Pending,
}

/// Query for the pending-installation report: two state filters plus
/// accent-insensitive substring searches over plate, client and city.
#[derive(Debug, Clone, Default)]
pub struct InstallationQuery {
    pub installation: InstallationFilter,
    pub payment: PaymentFilter,
    pub plate: String,
    pub client: String,
    pub city: String,
}

impl InstallationQuery {
    /// Returns true when `invoice` passes every active criterion.
    ///
    /// An empty search box matches everything; a non-empty search against an
    /// invoice that lacks the field does not match.
    pub fn matches(&self, invoice: &Invoice) -> bool {
        match self.installation {
            InstallationFilter::Pending if invoice.installed_on().is_some() => return false,
            InstallationFilter::Installed if invoice.installed_on().is_none() => return false,
            _ => {}
        }
        match self.payment {
            PaymentFilter::Paid if !invoice.paid => return false,
            PaymentFilter::Pending if invoice.paid => return false,
            _ => {}
        }

        let plate = invoice.vehicle.as_ref().and_then(|v| v.plate.as_deref());
        let city = invoice.vehicle.as_ref().and_then(|v| v.city.as_deref());

        field_matches(plate, &self.plate)
            && field_matches(Some(&invoice.client), &self.client)
            && field_matches(city, &self.city)
    }
}

fn field_matches(field: Option<&str>, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    field.map(|f| matches_search(f, query)).unwrap_or(false)
}

/// Counts shown in the pending-installation report header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallationTally {
    pub total: usize,
    pub installed: usize,
    pub pending: usize,
}

/// Applies an [`InstallationQuery`], preserving the input order
pub fn filter_installation_report(invoices: &[Invoice], query: &InstallationQuery) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|i| query.matches(i))
        .cloned()
        .collect()
}

/// Installed/pending tally over a set of invoices
pub fn tally_installations(invoices: &[Invoice]) -> InstallationTally {
    let installed = invoices.iter().filter(|i| i.installed_on().is_some()).count();
    InstallationTally {
        total: invoices.len(),
        installed,
        pending: invoices.len() - installed,
    }
}
