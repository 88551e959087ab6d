use tracing::debug;

use super::filter::{filter_invoices, InvoiceFilter};
use super::model::Invoice;
use super::page::{paginate, total_pages, Pager, PAGE_SIZE};
use super::sort::{sort_invoices, SortMode};
use super::summary::{summarize, InvoiceSummary};

/// Filter, sort and page state of one dashboard view
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardQuery {
    pub filter: InvoiceFilter,
    pub sort: SortMode,
    pub page: usize,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            filter: InvoiceFilter::default(),
            sort: SortMode::default(),
            page: 1,
        }
    }
}

impl DashboardQuery {
    /// Back to the unfiltered, unsorted first page
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }
}

/// Everything the renderer needs for one page of the dashboard
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    pub rows: Vec<&'a Invoice>,
    /// Position of the first row within the matching list, 0-based
    pub offset: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub matching: usize,
    pub summary: InvoiceSummary<'a>,
}

/// Run the list pipeline for `query`: filter, sort, then slice out one page.
///
/// The requested page is clamped to the pages that exist, so a query left
/// on page 5 after narrowing the filter shows the last page instead of
/// nothing. The summary always covers the full `invoices` list.
pub fn build_view<'a>(invoices: &'a [Invoice], query: &DashboardQuery) -> DashboardView<'a> {
    let filtered = filter_invoices(invoices, &query.filter);
    let sorted = sort_invoices(filtered, query.sort);

    let pages = total_pages(sorted.len(), PAGE_SIZE);
    let pager = Pager::new(query.page, pages);
    let rows = paginate(&sorted, pager.current(), PAGE_SIZE).to_vec();

    debug!(
        invoices = invoices.len(),
        matching = sorted.len(),
        sort = %query.sort,
        page = pager.current(),
        pages,
        "built dashboard view"
    );

    DashboardView {
        rows,
        offset: (pager.current() - 1) * PAGE_SIZE,
        current_page: pager.current(),
        total_pages: pages,
        matching: sorted.len(),
        summary: summarize(invoices),
    }
}
