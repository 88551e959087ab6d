use chrono::NaiveDate;
use std::str::FromStr;

use super::model::{parse_calendar_date, Invoice};
use super::status::InvoiceStatus;
use crate::error::DashboardError;

/// Which derived statuses to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl StatusFilter {
    fn admits(&self, status: InvoiceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Paid => status == InvoiceStatus::Paid,
            StatusFilter::Unpaid => status == InvoiceStatus::Unpaid,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" | "" => Ok(StatusFilter::All),
            "paid" => Ok(StatusFilter::Paid),
            "unpaid" => Ok(StatusFilter::Unpaid),
            _ => Err(DashboardError::InvalidStatusFilter(s.to_string())),
        }
    }
}

/// Filter criteria for the invoice list. The default value keeps everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceFilter {
    pub status: StatusFilter,
    pub search: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl InvoiceFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, invoice: &Invoice) -> bool {
        self.status.admits(invoice.status())
            && self.matches_search(invoice)
            && self.date_from.map_or(true, |from| invoice.date >= from)
            // Date-only values, so this already covers the whole `date_to` day
            && self.date_to.map_or(true, |to| invoice.date <= to)
    }

    fn matches_search(&self, invoice: &Invoice) -> bool {
        let term = self.search.to_lowercase();
        if term.is_empty() {
            return true;
        }

        invoice.number.to_lowercase().contains(&term)
            || invoice.total.to_string().contains(&term)
            || invoice
                .line_items
                .iter()
                .any(|item| item.description.to_lowercase().contains(&term))
    }
}

/// Keep the invoices matching `filter`, in their original order
pub fn filter_invoices<'a, I>(invoices: I, filter: &InvoiceFilter) -> Vec<&'a Invoice>
where
    I: IntoIterator<Item = &'a Invoice>,
{
    invoices.into_iter().filter(|i| filter.matches(i)).collect()
}

/// Parse a `--from`/`--to` style date argument
pub fn parse_date_arg(flag: &'static str, value: &str) -> Result<NaiveDate, DashboardError> {
    parse_calendar_date(value).ok_or_else(|| DashboardError::InvalidDate {
        flag,
        value: value.to_string(),
    })
}
