use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::status::{classify, InvoiceStatus};

/// A single line on an invoice
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LineItem {
    #[serde(alias = "Description", default, deserialize_with = "text_or_number")]
    pub description: String,
}

/// One vendor billing record as served by the storefront API.
///
/// Both the camelCase and the PascalCase spellings of each field are
/// accepted, so the rest of the crate only ever sees this one shape.
/// Missing or null text fields decode as empty text. The issue date is the
/// only field a record can't do without.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Invoice {
    #[serde(rename = "invoiceID", alias = "InvoiceID", default, deserialize_with = "text_or_number")]
    pub id: String,

    #[serde(
        rename = "invoiceNumber",
        alias = "InvoiceNumber",
        default,
        deserialize_with = "text_or_number"
    )]
    pub number: String,

    #[serde(rename = "invoiceDate", alias = "InvoiceDate", deserialize_with = "calendar_date")]
    pub date: NaiveDate,

    #[serde(rename = "invoiceTotal", alias = "InvoiceTotal", default, deserialize_with = "amount")]
    pub total: f64,

    #[serde(rename = "paymentTotal", alias = "PaymentTotal", default, deserialize_with = "amount")]
    pub payment_total: f64,

    #[serde(rename = "creditTotal", alias = "CreditTotal", default, deserialize_with = "amount")]
    pub credit_total: f64,

    #[serde(
        rename = "paymentDate",
        alias = "PaymentDate",
        default,
        deserialize_with = "optional_calendar_date"
    )]
    pub payment_date: Option<NaiveDate>,

    #[serde(rename = "lineItems", alias = "LineItems", default, deserialize_with = "line_items")]
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    pub fn status(&self) -> InvoiceStatus {
        classify(self)
    }

    /// Amount still owed after payments and credits, never negative
    pub fn balance_due(&self) -> f64 {
        (self.total - self.payment_total - self.credit_total).max(0.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => String::new(),
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Int(n)) => n.to_string(),
        Some(TextOrNumber::Float(n)) => n.to_string(),
    })
}

/// Money arrives as a number, a numeric string (SQL decimals), or null
fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<TextOrNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(TextOrNumber::Int(n)) => Ok(n as f64),
        Some(TextOrNumber::Float(n)) => Ok(n),
        Some(TextOrNumber::Text(s)) if s.trim().is_empty() => Ok(0.0),
        Some(TextOrNumber::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid amount '{s}'"))),
    }
}

/// Parse `YYYY-MM-DD`, or take the date part of an ISO-8601 timestamp
pub(crate) fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

fn calendar_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_calendar_date(&s).ok_or_else(|| de::Error::custom(format!("invalid date '{s}'")))
}

fn optional_calendar_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_calendar_date(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date '{s}'"))),
    }
}

fn line_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<LineItem>, D::Error> {
    Ok(Option::<Vec<LineItem>>::deserialize(deserializer)?.unwrap_or_default())
}
