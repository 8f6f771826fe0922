//! Invoice orchestration
//!
//! The service sits between the hosting application and the domain: it
//! validates input, derives charges, writes through the repository, and
//! assembles the reports. Every mutation that can change `gross_total` or
//! `plan` recomputes the derived charges in the same synchronous sequence as
//! the write, so no reader can observe an invoice whose charges disagree
//! with its own gross total and plan.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::instrument;

use core_kernel::{DateRange, InvoiceId, Money};
use domain_invoice::{FeeSchedule, Invoice};
use domain_reporting::{
    bucket_by_semester, filter_by_range, filter_installation_report, renewal_entries,
    sorted_by_invoice_number_desc, summarize_period, tally_installations, vat_total,
    InstallationQuery, ProfitSummary, RenewalEntry, RenewalIntentFilter, RenewalStatusFilter,
    SemesterCut,
};
use domain_reporting::listing::InstallationTally;
use infra_store::{DocumentStore, InvoiceRepository};

use crate::error::ServiceError;
use crate::input::{InvoicePatch, NewInvoiceInput};

/// Period selector for the profit report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitPeriod {
    CurrentMonth,
    PreviousMonth,
    Custom(DateRange),
}

/// Profit report: the period's invoices in chronological order plus the
/// totals line
#[derive(Debug, Clone, Serialize)]
pub struct ProfitReport {
    pub range: DateRange,
    pub invoices: Vec<Invoice>,
    pub totals: ProfitSummary,
}

/// A custom VAT cut over an arbitrary date range
#[derive(Debug, Clone, Serialize)]
pub struct VatCut {
    pub range: DateRange,
    pub invoices: Vec<Invoice>,
    pub total_vat: Money,
}

/// Pending-installation report: matching invoices plus the overall tally
#[derive(Debug, Clone, Serialize)]
pub struct InstallationReport {
    pub invoices: Vec<Invoice>,
    pub tally: InstallationTally,
}

/// Application service over any document store
#[derive(Debug)]
pub struct InvoiceService<S> {
    repo: InvoiceRepository<S>,
    schedule: FeeSchedule,
}

impl<S: DocumentStore> InvoiceService<S> {
    /// Creates a service using the production fee schedule
    pub fn new(store: S) -> Self {
        Self::with_schedule(store, FeeSchedule::standard().clone())
    }

    /// Creates a service with an explicit fee schedule (tests, simulations)
    pub fn with_schedule(store: S, schedule: FeeSchedule) -> Self {
        Self {
            repo: InvoiceRepository::new(store),
            schedule,
        }
    }

    /// Validates the input, derives the charges, and persists the invoice
    #[instrument(skip(self, input), fields(invoice_number = %input.invoice_number))]
    pub async fn create_invoice(&self, input: NewInvoiceInput) -> Result<Invoice, ServiceError> {
        let draft = input.into_draft()?;
        let invoice = Invoice::from_draft(draft, &self.schedule);
        Ok(self.repo.create(invoice).await?)
    }

    /// Applies a partial update and recomputes the derived charges before
    /// writing, whatever fields the patch touched
    #[instrument(skip(self, patch))]
    pub async fn update_invoice(
        &self,
        id: InvoiceId,
        patch: InvoicePatch,
    ) -> Result<Invoice, ServiceError> {
        let mut invoice = self.repo.find(id).await?;
        patch.apply(&mut invoice)?;
        invoice.recompute_charges(&self.schedule);
        self.repo.save(&invoice).await?;
        Ok(invoice)
    }

    /// Deletes one invoice; nothing cascades
    #[instrument(skip(self))]
    pub async fn delete_invoice(&self, id: InvoiceId) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }

    /// List view: every invoice, descending by the numeric run in the
    /// invoice number
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, ServiceError> {
        Ok(sorted_by_invoice_number_desc(self.repo.list_all().await?))
    }

    /// The semestral VAT cuts over the whole collection, ascending by window
    pub async fn semester_cuts(&self) -> Result<Vec<SemesterCut>, ServiceError> {
        Ok(bucket_by_semester(&self.repo.list_all().await?))
    }

    /// A VAT cut over an arbitrary period; invoices in list-view order
    pub async fn vat_cut(&self, range: DateRange) -> Result<VatCut, ServiceError> {
        let invoices = sorted_by_invoice_number_desc(self.repo.list_by_range(range).await?);
        let total_vat = vat_total(&invoices);
        Ok(VatCut {
            range,
            invoices,
            total_vat,
        })
    }

    /// Profit report for a period, rows in chronological order
    pub async fn profit_report(&self, period: ProfitPeriod) -> Result<ProfitReport, ServiceError> {
        let today = Local::now().date_naive();
        let range = match period {
            ProfitPeriod::CurrentMonth => DateRange::month_of(today),
            ProfitPeriod::PreviousMonth => DateRange::previous_month_of(today),
            ProfitPeriod::Custom(range) => range,
        };
        let invoices = filter_by_range(&self.repo.list_all().await?, range);
        let totals = summarize_period(&invoices);
        Ok(ProfitReport {
            range,
            invoices,
            totals,
        })
    }

    /// Renewal report as of the local calendar day
    pub async fn renewal_report(
        &self,
        status_filter: RenewalStatusFilter,
        intent_filter: RenewalIntentFilter,
    ) -> Result<Vec<RenewalEntry>, ServiceError> {
        self.renewal_report_as_of(Local::now().date_naive(), status_filter, intent_filter)
            .await
    }

    /// Renewal report against an explicit "today", for deterministic tests
    /// and backdated views
    pub async fn renewal_report_as_of(
        &self,
        today: NaiveDate,
        status_filter: RenewalStatusFilter,
        intent_filter: RenewalIntentFilter,
    ) -> Result<Vec<RenewalEntry>, ServiceError> {
        let invoices = self.repo.list_all().await?;
        Ok(renewal_entries(
            &invoices,
            today,
            status_filter,
            intent_filter,
        ))
    }

    /// Pending-installation report in list-view order
    pub async fn installation_report(
        &self,
        query: &InstallationQuery,
    ) -> Result<InstallationReport, ServiceError> {
        let all = sorted_by_invoice_number_desc(self.repo.list_all().await?);
        let tally = tally_installations(&all);
        Ok(InstallationReport {
            invoices: filter_installation_report(&all, query),
            tally,
        })
    }
}
