use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Config directory not found at {0}. Run 'vendor-dashboard init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("No vendor selected. Pass --vendor <ID> or run 'vendor-dashboard login --vendor <ID>'.")]
    NoVendor,

    #[error("Invalid status filter '{0}'. Use 'all', 'paid', or 'unpaid'.")]
    InvalidStatusFilter(String),

    #[error(
        "Invalid sort mode '{0}'. Use 'date-desc', 'date-asc', 'total-desc', 'total-asc', 'status', or 'default'."
    )]
    InvalidSortMode(String),

    #[error("Invalid {flag} date '{value}'. Expected YYYY-MM-DD.")]
    InvalidDate { flag: &'static str, value: String },

    #[error("Invalid page '{0}'. Pages start at 1.")]
    InvalidPage(usize),

    #[error("Failed to load invoices: {0}")]
    Load(String),

    #[error("Invoice '{0}' not found")]
    InvoiceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
