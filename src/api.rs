use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};
use ureq::Agent;

use crate::config::ApiSettings;
use crate::error::{DashboardError, Result};
use crate::invoice::Invoice;

/// Where a vendor's invoices come from
pub trait InvoiceSource {
    /// All invoices for `vendor_id`, in the order the source returns them
    fn fetch_invoices(&self, vendor_id: &str) -> Result<Vec<Invoice>>;

    /// One invoice with its full line items
    fn fetch_invoice(&self, invoice_id: &str) -> Result<Invoice>;
}

/// Storefront REST API over blocking HTTP
pub struct HttpInvoiceSource {
    agent: Agent,
    base_url: String,
}

impl HttpInvoiceSource {
    pub fn new(settings: &ApiSettings) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, path: &str) -> std::result::Result<String, ureq::Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let mut response = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .call()?;
        response.body_mut().read_to_string()
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| DashboardError::Load(format!("invalid response: {e}")))
}

/// Decode a JSON array of invoices one record at a time.
///
/// A body that isn't an array fails the whole load. A record that can't be
/// decoded (no usable `invoiceDate`, an amount that isn't a number) is
/// skipped with a warning and the rest of the list is kept.
pub fn parse_invoice_list(body: &str) -> Result<Vec<Invoice>> {
    let records: Vec<serde_json::Value> = parse_body(body)?;

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Invoice>(record) {
            Ok(invoice) => Some(invoice),
            Err(e) => {
                warn!(index, error = %e, "skipping invoice record");
                None
            }
        })
        .collect())
}

impl InvoiceSource for HttpInvoiceSource {
    fn fetch_invoices(&self, vendor_id: &str) -> Result<Vec<Invoice>> {
        let body = self
            .get(&format!("/vendors/{vendor_id}/invoices"))
            .map_err(|e| {
                debug!(vendor_id, error = %e, "invoice list request failed");
                DashboardError::Load(e.to_string())
            })?;
        let invoices = parse_invoice_list(&body)?;

        debug!(vendor_id, count = invoices.len(), "loaded invoices");
        Ok(invoices)
    }

    fn fetch_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        let body = self
            .get(&format!("/invoices/{invoice_id}"))
            .map_err(|e| match e {
                ureq::Error::StatusCode(404) => {
                    DashboardError::InvoiceNotFound(invoice_id.to_string())
                }
                e => {
                    debug!(invoice_id, error = %e, "invoice detail request failed");
                    DashboardError::Load(e.to_string())
                }
            })?;
        parse_body(&body)
    }
}

/// A JSON array of invoices on disk, as the API would return it
pub struct FileInvoiceSource {
    path: PathBuf,
}

impl FileInvoiceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<Invoice>> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| DashboardError::Load(format!("{}: {e}", self.path.display())))?;
        parse_invoice_list(&content)
    }
}

impl InvoiceSource for FileInvoiceSource {
    fn fetch_invoices(&self, _vendor_id: &str) -> Result<Vec<Invoice>> {
        let invoices = self.read_all()?;
        debug!(path = %self.path.display(), count = invoices.len(), "loaded invoices");
        Ok(invoices)
    }

    fn fetch_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        self.read_all()?
            .into_iter()
            .find(|i| i.id == invoice_id)
            .ok_or_else(|| DashboardError::InvoiceNotFound(invoice_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_records_with_missing_text() {
        let body = r#"[
            {"invoiceID": 1, "invoiceDate": "2024-01-01", "invoiceTotal": 10},
            {"invoiceID": 2, "invoiceNumber": "B-2", "invoiceDate": "2024-01-02",
             "lineItems": [{"description": null}]}
        ]"#;

        let invoices = parse_invoice_list(body).unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].number, "");
        assert_eq!(invoices[1].line_items[0].description, "");
    }

    #[test]
    fn list_skips_records_without_a_date() {
        let body = r#"[
            {"invoiceID": 1, "invoiceNumber": "A-1", "invoiceTotal": 10},
            {"invoiceID": 2, "invoiceNumber": "A-2", "invoiceDate": "someday"},
            {"invoiceID": 3, "invoiceNumber": "A-3", "invoiceDate": "2024-01-03"}
        ]"#;

        let invoices = parse_invoice_list(body).unwrap();
        let ids: Vec<&str> = invoices.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["3"]);
    }

    #[test]
    fn list_body_must_be_an_array() {
        let err = parse_invoice_list(r#"{"invoices": []}"#).unwrap_err();
        assert!(matches!(err, DashboardError::Load(_)));
        assert!(parse_invoice_list("not json").is_err());
    }
}
