//! Reporting Domain
//!
//! Derived, never-persisted views over the invoice collection:
//! - Semester VAT cuts for the fiscal filings (Jan-Jun / Jul-Dec)
//! - Renewal windows and due-soon/overdue classification
//! - Per-period profit summaries
//! - List filtering and ordering shared by the operational reports
//!
//! Everything here is a pure transform over invoice slices; "today" is always
//! an explicit argument so classification stays deterministic under test.

pub mod semester;
pub mod renewal;
pub mod profit;
pub mod listing;

pub use semester::{bucket_by_semester, vat_total, SemesterCut, SemesterWindow};
pub use renewal::{
    renewal_due_date, renewal_entries, RenewalEntry, RenewalIntentFilter, RenewalStatus,
    RenewalStatusFilter, ALERT_WINDOW_DAYS,
};
pub use profit::{profit, summarize_period, ProfitSummary};
pub use listing::{
    filter_by_range, filter_installation_report, sorted_by_invoice_number_desc,
    tally_installations, InstallationFilter, InstallationQuery, InstallationTally, PaymentFilter,
};
