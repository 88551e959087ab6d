mod filter;
mod model;
mod page;
mod sort;
mod status;
mod summary;
mod view;

pub use filter::{filter_invoices, parse_date_arg, InvoiceFilter, StatusFilter};
pub use model::{Invoice, LineItem};
pub use page::{paginate, total_pages, Pager, PAGE_SIZE};
pub use sort::{sort_invoices, SortMode};
pub use status::{classify, InvoiceStatus};
pub use summary::{summarize, InvoiceSummary};
pub use view::{build_view, DashboardQuery, DashboardView};
