use super::model::Invoice;
use super::status::InvoiceStatus;

/// Headline figures over a vendor's complete invoice list
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSummary<'a> {
    pub count: usize,
    pub total_amount: f64,
    pub total_paid: f64,
    pub total_unpaid: f64,
    pub average_amount: f64,
    pub oldest_unpaid: Option<&'a Invoice>,
}

/// Summarize `invoices`. Independent of any filter, sort or page state.
pub fn summarize(invoices: &[Invoice]) -> InvoiceSummary<'_> {
    let mut total_paid = 0.0;
    let mut total_unpaid = 0.0;
    let mut oldest_unpaid: Option<&Invoice> = None;

    for invoice in invoices {
        match invoice.status() {
            InvoiceStatus::Paid => total_paid += invoice.total,
            InvoiceStatus::Unpaid => {
                total_unpaid += invoice.total;
                // Strictly older only, so the first of equal dates wins
                if oldest_unpaid.map_or(true, |oldest| invoice.date < oldest.date) {
                    oldest_unpaid = Some(invoice);
                }
            }
        }
    }

    let total_amount: f64 = invoices.iter().map(|i| i.total).sum();
    let average_amount = if invoices.is_empty() {
        0.0
    } else {
        total_amount / invoices.len() as f64
    };

    InvoiceSummary {
        count: invoices.len(),
        total_amount,
        total_paid,
        total_unpaid,
        average_amount,
        oldest_unpaid,
    }
}
