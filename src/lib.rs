pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod invoice;
pub mod logging;

pub use api::{FileInvoiceSource, HttpInvoiceSource, InvoiceSource};
pub use config::{Config, Session};
pub use error::{DashboardError, Result};
pub use invoice::{
    build_view, classify, summarize, DashboardQuery, DashboardView, Invoice, InvoiceFilter,
    InvoiceStatus, InvoiceSummary, SortMode, StatusFilter,
};
