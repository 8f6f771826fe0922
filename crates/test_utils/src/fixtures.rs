//! Pre-built Test Fixtures
//!
//! Ready-to-use invoices and raw documents for common scenarios, consistent
//! and predictable across test suites.

use chrono::NaiveDate;
use serde_json::{json, Value};

use core_kernel::Money;
use domain_invoice::{Invoice, ServicePlan};

use crate::builders::TestInvoiceBuilder;

/// Calendar-date shorthand for tests
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}

/// Invoice fixtures
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// The worked accounting example: $500 gross on the one-year plan
    pub fn one_year_500() -> Invoice {
        TestInvoiceBuilder::new().build()
    }

    /// Gross exactly at the two-year fixed fee: zero excess and commission
    pub fn two_year_break_even() -> Invoice {
        TestInvoiceBuilder::new()
            .number("INV-002")
            .gross(Money::from_major(301))
            .plan(ServicePlan::TwoYears)
            .build()
    }

    /// An installed one-year contract (installation 2024-01-10, due
    /// 2025-01-10)
    pub fn installed_one_year() -> Invoice {
        TestInvoiceBuilder::new()
            .number("INV-003")
            .installed_on(date(2024, 1, 10))
            .build()
    }

    /// An invoice with no vehicle block at all
    pub fn without_vehicle() -> Invoice {
        TestInvoiceBuilder::new().number("INV-004").build()
    }

    /// A raw document in the shape written before the duration/region split:
    /// numeric plan code and an ISO-timestamp invoice date
    pub fn legacy_numeric_document() -> Value {
        json!({
            "comercializadora": "AMBACAR",
            "numeroFactura": "774",
            "valorTotal": "350",
            "anosServicio": 2,
            "fechaFactura": "2023-11-02T05:00:00.000Z",
            "cliente": "María Cárdenas",
            "valorFijo": "301",
            "excedente": "49",
            "ivaExcedente": "7.35",
            "comisionVal": "41.65",
            "ivaGananciaPropia": "45.15",
            "totalIva": "52.50",
            "pagada": false,
            "noDeseaRenovar": false,
            "createdAt": "2023-11-02T15:04:05Z",
            "updatedAt": "2023-11-02T15:04:05Z"
        })
    }

    /// A document whose invoice date cannot be parsed; range queries must
    /// skip it rather than fail
    pub fn invalid_date_document() -> Value {
        let mut doc = Self::legacy_numeric_document();
        doc["fechaFactura"] = json!("sin fecha");
        doc["numeroFactura"] = json!("775");
        doc
    }
}
