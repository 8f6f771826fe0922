//! Test Data Builders
//!
//! A builder for constructing test invoices with sensible defaults, so tests
//! only spell out the fields they care about. Charges always come from the
//! real derivation against the standard schedule.

use chrono::NaiveDate;

use core_kernel::Money;
use domain_invoice::{FeeSchedule, FuelType, Invoice, InvoiceDraft, ServicePlan, VehicleInfo};

/// Builder for test invoices
pub struct TestInvoiceBuilder {
    dealer: String,
    invoice_number: String,
    gross_total: Money,
    plan: ServicePlan,
    invoice_date: NaiveDate,
    client: String,
    vehicle: Option<VehicleInfo>,
    paid: bool,
    declines_renewal: bool,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder with default values: a $500 one-year contract from
    /// March 2024
    pub fn new() -> Self {
        Self {
            dealer: "HIDROBO".to_string(),
            invoice_number: "INV-001".to_string(),
            gross_total: Money::from_major(500),
            plan: ServicePlan::OneYear,
            invoice_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            client: "José Pérez".to_string(),
            vehicle: None,
            paid: false,
            declines_renewal: false,
        }
    }

    pub fn dealer(mut self, dealer: &str) -> Self {
        self.dealer = dealer.to_string();
        self
    }

    pub fn number(mut self, number: &str) -> Self {
        self.invoice_number = number.to_string();
        self
    }

    pub fn gross(mut self, gross: Money) -> Self {
        self.gross_total = gross;
        self
    }

    pub fn plan(mut self, plan: ServicePlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.invoice_date = date;
        self
    }

    pub fn client(mut self, client: &str) -> Self {
        self.client = client.to_string();
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn declines_renewal(mut self, declines: bool) -> Self {
        self.declines_renewal = declines;
        self
    }

    pub fn plate(mut self, plate: &str) -> Self {
        self.vehicle_mut().plate = Some(plate.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.vehicle_mut().city = Some(city.to_string());
        self
    }

    pub fn fuel(mut self, fuel: FuelType) -> Self {
        self.vehicle_mut().fuel = Some(fuel);
        self
    }

    pub fn installed_on(mut self, date: NaiveDate) -> Self {
        self.vehicle_mut().installed_on = Some(date);
        self
    }

    fn vehicle_mut(&mut self) -> &mut VehicleInfo {
        self.vehicle.get_or_insert_with(VehicleInfo::default)
    }

    /// Builds the invoice, deriving charges through the standard schedule
    pub fn build(self) -> Invoice {
        Invoice::from_draft(
            InvoiceDraft {
                dealer: self.dealer,
                invoice_number: self.invoice_number,
                gross_total: self.gross_total,
                plan: self.plan,
                invoice_date: self.invoice_date,
                client: self.client,
                vehicle: self.vehicle,
                paid: self.paid,
                declines_renewal: self.declines_renewal,
            },
            FeeSchedule::standard(),
        )
    }
}
