use serde::{Deserialize, Serialize};
use std::fmt;

use super::model::Invoice;

/// Payment status derived from an invoice's payment fields.
///
/// Variant order matches the alphabetical order of the labels, which is
/// what the `status` sort mode orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Unpaid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "PAID"),
            InvoiceStatus::Unpaid => write!(f, "UNPAID"),
        }
    }
}

/// Derive the status of one invoice. Never fails; absent amounts are zero.
pub fn classify(invoice: &Invoice) -> InvoiceStatus {
    // Nothing recorded at all, whatever the total or payment date says
    if invoice.payment_total == 0.0 && invoice.credit_total == 0.0 {
        return InvoiceStatus::Unpaid;
    }

    if invoice.payment_date.is_some() {
        return InvoiceStatus::Paid;
    }

    if invoice.credit_total + invoice.payment_total >= invoice.total {
        InvoiceStatus::Paid
    } else {
        InvoiceStatus::Unpaid
    }
}
