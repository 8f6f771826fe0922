//! Renewal windows
//!
//! A contract runs from the installation date for the plan's duration.
//! Invoices without an installation date have no renewal window and are
//! excluded from this report entirely; renewal tracking only applies once a
//! vehicle is installed.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use core_kernel::temporal::{add_calendar_years, days_between};
use domain_invoice::{Invoice, ServicePlan};

/// Fixed alert window: contracts due within this many days are flagged
pub const ALERT_WINDOW_DAYS: i64 = 15;

/// Renewal standing of an installed contract relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenewalStatus {
    /// Due date has passed
    Overdue,
    /// Due within the alert window
    DueSoon,
    /// Nothing to act on yet
    Current,
}

impl RenewalStatus {
    /// Classifies a days-remaining count. Evaluation order matters: overdue
    /// wins over due-soon, which wins over current.
    pub fn classify(days_remaining: i64) -> Self {
        if days_remaining < 0 {
            RenewalStatus::Overdue
        } else if days_remaining <= ALERT_WINDOW_DAYS {
            RenewalStatus::DueSoon
        } else {
            RenewalStatus::Current
        }
    }

    /// Operator-facing label
    pub fn label(&self) -> &'static str {
        match self {
            RenewalStatus::Overdue => "Vencido",
            RenewalStatus::DueSoon => "Próximo a vencer",
            RenewalStatus::Current => "Vigente",
        }
    }
}

impl fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Renewal due date: installation date plus the plan duration in calendar
/// years
pub fn renewal_due_date(installed_on: NaiveDate, plan: ServicePlan) -> NaiveDate {
    add_calendar_years(installed_on, plan.duration_years())
}

/// One row of the renewal report
#[derive(Debug, Clone, Serialize)]
pub struct RenewalEntry {
    pub invoice: Invoice,
    pub due_date: NaiveDate,
    /// Whole calendar days until the due date; negative when overdue
    pub days_remaining: i64,
    pub status: RenewalStatus,
}

/// Status filter for the renewal report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenewalStatusFilter {
    #[default]
    All,
    DueSoon,
    Overdue,
    Current,
}

impl RenewalStatusFilter {
    fn accepts(&self, status: RenewalStatus) -> bool {
        match self {
            RenewalStatusFilter::All => true,
            RenewalStatusFilter::DueSoon => status == RenewalStatus::DueSoon,
            RenewalStatusFilter::Overdue => status == RenewalStatus::Overdue,
            RenewalStatusFilter::Current => status == RenewalStatus::Current,
        }
    }
}

/// Filter on the client's stated renewal intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenewalIntentFilter {
    #[default]
    All,
    /// Clients expected to renew (no declination recorded)
    Pending,
    /// Clients who said they will not renew
    Declined,
}

impl RenewalIntentFilter {
    fn accepts(&self, declines_renewal: bool) -> bool {
        match self {
            RenewalIntentFilter::All => true,
            RenewalIntentFilter::Pending => !declines_renewal,
            RenewalIntentFilter::Declined => declines_renewal,
        }
    }
}

/// Builds the renewal report: one entry per installed invoice matching the
/// filters, sorted by days remaining ascending so the most urgent contracts
/// come first.
pub fn renewal_entries(
    invoices: &[Invoice],
    today: NaiveDate,
    status_filter: RenewalStatusFilter,
    intent_filter: RenewalIntentFilter,
) -> Vec<RenewalEntry> {
    let mut entries: Vec<RenewalEntry> = invoices
        .iter()
        .filter_map(|invoice| {
            let installed_on = invoice.installed_on()?;
            let due_date = renewal_due_date(installed_on, invoice.plan);
            let days_remaining = days_between(today, due_date);
            Some(RenewalEntry {
                status: RenewalStatus::classify(days_remaining),
                due_date,
                days_remaining,
                invoice: invoice.clone(),
            })
        })
        .filter(|e| {
            status_filter.accepts(e.status) && intent_filter.accepts(e.invoice.declines_renewal)
        })
        .collect();

    entries.sort_by_key(|e| e.days_remaining);
    entries
}
