use std::fmt;
use std::str::FromStr;

use super::model::Invoice;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    DateDesc,
    DateAsc,
    TotalDesc,
    TotalAsc,
    /// Alphabetical by status label, so paid before unpaid
    Status,
    /// Keep the order the API returned
    #[default]
    Default,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::DateDesc,
        SortMode::DateAsc,
        SortMode::TotalDesc,
        SortMode::TotalAsc,
        SortMode::Status,
        SortMode::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::DateDesc => "date-desc",
            SortMode::DateAsc => "date-asc",
            SortMode::TotalDesc => "total-desc",
            SortMode::TotalAsc => "total-asc",
            SortMode::Status => "status",
            SortMode::Default => "default",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DashboardError::InvalidSortMode(s.to_string()))
    }
}

/// Order invoices by `mode`. The sort is stable: ties keep their input order.
pub fn sort_invoices<'a, I>(invoices: I, mode: SortMode) -> Vec<&'a Invoice>
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut sorted: Vec<&Invoice> = invoices.into_iter().collect();

    match mode {
        SortMode::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortMode::DateAsc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortMode::TotalDesc => sorted.sort_by(|a, b| b.total.total_cmp(&a.total)),
        SortMode::TotalAsc => sorted.sort_by(|a, b| a.total.total_cmp(&b.total)),
        SortMode::Status => sorted.sort_by_key(|i| i.status()),
        SortMode::Default => {}
    }

    sorted
}
