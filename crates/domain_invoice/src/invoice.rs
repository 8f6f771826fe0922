//! Invoice records
//!
//! The central record of the system. Serialization mirrors the legacy
//! document collection (Spanish field names, vehicle block absent when
//! empty), so existing data loads without migration.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::temporal::{serde_local_date, serde_local_date_opt};
use core_kernel::{InvoiceId, Money};

use crate::plan::ServicePlan;
use crate::schedule::FeeSchedule;
use crate::valuation::DerivedCharges;

/// Vehicle fuel type, stored with the legacy uppercase Spanish literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    #[serde(rename = "DIESEL")]
    Diesel,
    #[serde(rename = "GASOLINA")]
    Gasoline,
    #[serde(rename = "ELECTRICO")]
    Electric,
    #[serde(rename = "HIBRIDO")]
    Hybrid,
}

/// Optional vehicle and installation metadata attached to an invoice.
///
/// Every field is individually optional; an all-empty value is normalized to
/// an absent block before persisting rather than written as an empty object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VehicleInfo {
    #[serde(rename = "modelo", default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(rename = "ano", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<FuelType>,

    #[serde(rename = "placa", default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Date the tracking device was installed and the vehicle delivered
    #[serde(
        rename = "fechaEntrega",
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_local_date_opt"
    )]
    pub installed_on: Option<NaiveDate>,
}

impl VehicleInfo {
    /// Returns true when no field carries a value
    pub fn is_empty(&self) -> bool {
        self.model.is_none()
            && self.year.is_none()
            && self.fuel.is_none()
            && self.plate.is_none()
            && self.color.is_none()
            && self.city.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.installed_on.is_none()
    }
}

/// The caller-supplied part of an invoice. Derived charges are deliberately
/// absent: they are computed, never accepted.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub dealer: String,
    pub invoice_number: String,
    pub gross_total: Money,
    pub plan: ServicePlan,
    pub invoice_date: NaiveDate,
    pub client: String,
    pub vehicle: Option<VehicleInfo>,
    pub paid: bool,
    pub declines_renewal: bool,
}

/// An invoice for a multi-year vehicle-tracking service contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Storage-assigned identifier; lives outside the document body
    #[serde(skip, default)]
    pub id: InvoiceId,

    /// Dealer (comercializadora) that sold the contract
    #[serde(rename = "comercializadora")]
    pub dealer: String,

    /// Free-text invoice number; expected to contain a numeric run
    #[serde(rename = "numeroFactura")]
    pub invoice_number: String,

    /// Gross invoice amount
    #[serde(rename = "valorTotal")]
    pub gross_total: Money,

    /// Service plan code
    #[serde(rename = "anosServicio")]
    pub plan: ServicePlan,

    /// Invoice date (local calendar date, no time-of-day)
    #[serde(rename = "fechaFactura", with = "serde_local_date")]
    pub invoice_date: NaiveDate,

    /// Client name as typed by the operator
    #[serde(rename = "cliente")]
    pub client: String,

    /// The six derived monetary fields, always a pure function of
    /// `(gross_total, plan)`
    #[serde(flatten)]
    pub charges: DerivedCharges,

    /// Vehicle metadata; absent as a whole when nothing was captured
    #[serde(
        rename = "datosVehiculo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle: Option<VehicleInfo>,

    /// True once the invoice has been paid
    #[serde(rename = "pagada", default)]
    pub paid: bool,

    /// True when the client has said they will not renew the service
    #[serde(rename = "noDeseaRenovar", default)]
    pub declines_renewal: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Builds a new invoice from a draft, computing the derived charges.
    ///
    /// An empty vehicle block is dropped here so it is impossible to persist
    /// an empty object.
    pub fn from_draft(draft: InvoiceDraft, schedule: &FeeSchedule) -> Self {
        let now = Utc::now();
        Self {
            id: InvoiceId::new_v7(),
            charges: DerivedCharges::derive(draft.gross_total, draft.plan, schedule),
            dealer: draft.dealer,
            invoice_number: draft.invoice_number,
            gross_total: draft.gross_total,
            plan: draft.plan,
            invoice_date: draft.invoice_date,
            client: draft.client,
            vehicle: draft.vehicle.filter(|v| !v.is_empty()),
            paid: draft.paid,
            declines_renewal: draft.declines_renewal,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recomputes the derived charges from the current gross total and plan
    /// and stamps the update time. Must be called by every mutation path
    /// before the record is written.
    pub fn recompute_charges(&mut self, schedule: &FeeSchedule) {
        self.charges = DerivedCharges::derive(self.gross_total, self.plan, schedule);
        self.vehicle = self.vehicle.take().filter(|v| !v.is_empty());
        self.updated_at = Utc::now();
    }

    /// Installation date, when the vehicle block carries one
    pub fn installed_on(&self) -> Option<NaiveDate> {
        self.vehicle.as_ref().and_then(|v| v.installed_on)
    }

    /// Numeric sort key for list views: every digit in the invoice number,
    /// concatenated and parsed. Invoice numbers are zero-padded
    /// inconsistently across dealers, so lexical order is wrong
    /// ("INV-002" must sort below "INV-100").
    ///
    /// No digits parse as 0; runs longer than 18 digits are truncated to
    /// keep the key inside `u64`.
    pub fn invoice_number_key(&self) -> u64 {
        let digits: String = self
            .invoice_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(18)
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft() -> InvoiceDraft {
        InvoiceDraft {
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

    #[test]
    fn test_from_draft_computes_charges() {
        let invoice = Invoice::from_draft(draft(), FeeSchedule::standard());
        assert_eq!(invoice.charges.fixed_fee.amount(), dec!(208));
        assert_eq!(invoice.charges.commission.amount(), dec!(248.20));
        assert_eq!(invoice.charges.total_vat.amount(), dec!(75.00));
    }

    #[test]
    fn test_recompute_after_plan_change() {
        let mut invoice = Invoice::from_draft(draft(), FeeSchedule::standard());
        invoice.plan = ServicePlan::OneYearCayambe;
        invoice.recompute_charges(FeeSchedule::standard());
        assert_eq!(invoice.charges.fixed_fee.amount(), dec!(228));
        assert_eq!(invoice.charges.excess.amount(), dec!(272));
    }

    #[test]
    fn test_empty_vehicle_block_is_dropped() {
        let mut d = draft();
        d.vehicle = Some(VehicleInfo::default());
        let invoice = Invoice::from_draft(d, FeeSchedule::standard());
        assert!(invoice.vehicle.is_none());
    }

    #[test]
    fn test_populated_vehicle_block_is_kept() {
        let mut d = draft();
        d.vehicle = Some(VehicleInfo {
            plate: Some("PBX-1234".to_string()),
            ..VehicleInfo::default()
        });
        let invoice = Invoice::from_draft(d, FeeSchedule::standard());
        assert!(invoice.vehicle.is_some());
    }

    #[test]
    fn test_invoice_number_key() {
        let mut invoice = Invoice::from_draft(draft(), FeeSchedule::standard());

        invoice.invoice_number = "INV-100".to_string();
        assert_eq!(invoice.invoice_number_key(), 100);

        invoice.invoice_number = "INV-002".to_string();
        assert_eq!(invoice.invoice_number_key(), 2);

        invoice.invoice_number = "001-002-123".to_string();
        assert_eq!(invoice.invoice_number_key(), 1002123);

        invoice.invoice_number = "SIN NUMERO".to_string();
        assert_eq!(invoice.invoice_number_key(), 0);
    }

    #[test]
    fn test_document_round_trip_keeps_legacy_names() {
        let invoice = Invoice::from_draft(draft(), FeeSchedule::standard());
        let doc = serde_json::to_value(&invoice).unwrap();

        assert_eq!(doc["comercializadora"], "HIDROBO");
        assert_eq!(doc["fechaFactura"], "2024-03-15");
        assert_eq!(doc["valorFijo"], "208");
        assert!(doc.get("datosVehiculo").is_none());
        assert!(doc.get("id").is_none());

        let back: Invoice = serde_json::from_value(doc).unwrap();
        assert_eq!(back.charges, invoice.charges);
        assert_eq!(back.invoice_date, invoice.invoice_date);
    }

    #[test]
    fn test_loads_legacy_timestamp_date() {
        let invoice = Invoice::from_draft(draft(), FeeSchedule::standard());
        let mut doc = serde_json::to_value(&invoice).unwrap();
        doc["fechaFactura"] = serde_json::json!("2024-03-15T05:00:00.000Z");

        let back: Invoice = serde_json::from_value(doc).unwrap();
        assert_eq!(
            back.invoice_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }
}
