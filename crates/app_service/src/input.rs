//! Service inputs
//!
//! What a form is allowed to send. Derived charge fields are deliberately
//! missing from both types: whatever a client transmits, charges are always
//! recomputed server-side from the gross total and plan.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::temporal::parse_local_date;
use core_kernel::Money;
use domain_invoice::{FuelType, InvoiceDraft, ServicePlan, VehicleInfo};

use crate::error::ServiceError;

/// Vehicle metadata as submitted by the form; dates arrive as `YYYY-MM-DD`
/// strings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleInput {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub fuel: Option<FuelType>,
    #[serde(default)]
    pub plate: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub installed_on: Option<String>,
}

impl VehicleInput {
    fn into_info(self) -> Result<VehicleInfo, ServiceError> {
        let installed_on = match self.installed_on.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(parse_local_date(raw)?),
            _ => None,
        };
        Ok(VehicleInfo {
            model: none_if_blank(self.model),
            year: self.year,
            fuel: self.fuel,
            plate: none_if_blank(self.plate),
            color: none_if_blank(self.color),
            city: none_if_blank(self.city),
            address: none_if_blank(self.address),
            phone: none_if_blank(self.phone),
            installed_on,
        })
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Input for creating an invoice
#[derive(Debug, Clone, Validate, Deserialize)]
pub struct NewInvoiceInput {
    #[validate(length(min = 1, message = "dealer is required"))]
    pub dealer: String,

    #[validate(length(min = 1, message = "invoice number is required"))]
    pub invoice_number: String,

    /// Gross amount; must be non-negative
    pub gross_total: Decimal,

    pub plan: ServicePlan,

    /// Invoice date as `YYYY-MM-DD`
    pub invoice_date: String,

    #[validate(length(min = 1, message = "client is required"))]
    pub client: String,

    #[serde(default)]
    pub vehicle: Option<VehicleInput>,

    #[serde(default)]
    pub paid: bool,

    #[serde(default)]
    pub declines_renewal: bool,
}

impl NewInvoiceInput {
    /// Validates the input and converts it into a domain draft
    pub fn into_draft(self) -> Result<InvoiceDraft, ServiceError> {
        self.validate()?;
        if self.gross_total.is_sign_negative() {
            return Err(ServiceError::InvalidAmount(format!(
                "gross total must not be negative, got {}",
                self.gross_total
            )));
        }
        let invoice_date = parse_local_date(&self.invoice_date)?;
        let vehicle = self.vehicle.map(VehicleInput::into_info).transpose()?;

        Ok(InvoiceDraft {
            dealer: self.dealer,
            invoice_number: self.invoice_number,
            gross_total: Money::new(self.gross_total),
            plan: self.plan,
            invoice_date,
            client: self.client,
            vehicle,
            paid: self.paid,
            declines_renewal: self.declines_renewal,
        })
    }
}

/// Partial update for an existing invoice. Absent fields are left unchanged;
/// sending a vehicle block replaces the whole block (and an all-empty block
/// clears it).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicePatch {
    #[serde(default)]
    pub dealer: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub gross_total: Option<Decimal>,
    #[serde(default)]
    pub plan: Option<ServicePlan>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub vehicle: Option<VehicleInput>,
    #[serde(default)]
    pub paid: Option<bool>,
    #[serde(default)]
    pub declines_renewal: Option<bool>,
}

impl InvoicePatch {
    /// Applies the patch to an invoice. The caller must recompute charges
    /// afterwards; this only moves field values.
    pub(crate) fn apply(
        self,
        invoice: &mut domain_invoice::Invoice,
    ) -> Result<(), ServiceError> {
        if let Some(gross) = self.gross_total {
            if gross.is_sign_negative() {
                return Err(ServiceError::InvalidAmount(format!(
                    "gross total must not be negative, got {gross}"
                )));
            }
            invoice.gross_total = Money::new(gross);
        }
        if let Some(dealer) = self.dealer {
            invoice.dealer = dealer;
        }
        if let Some(number) = self.invoice_number {
            invoice.invoice_number = number;
        }
        if let Some(plan) = self.plan {
            invoice.plan = plan;
        }
        if let Some(raw_date) = self.invoice_date {
            invoice.invoice_date = parse_local_date(&raw_date)?;
        }
        if let Some(client) = self.client {
            invoice.client = client;
        }
        if let Some(vehicle) = self.vehicle {
            let info = vehicle.into_info()?;
            invoice.vehicle = if info.is_empty() { None } else { Some(info) };
        }
        if let Some(paid) = self.paid {
            invoice.paid = paid;
        }
        if let Some(declines) = self.declines_renewal {
            invoice.declines_renewal = declines;
        }
        Ok(())
    }
}
