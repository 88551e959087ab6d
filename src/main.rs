use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use vendor_dashboard::config::{
    clear_session, config_dir, ensure_initialized, init_config_dir, load_config, load_session,
    save_session, Session,
};
use vendor_dashboard::format::{add_summary_footer, format_money};
use vendor_dashboard::invoice::{
    build_view, parse_date_arg, summarize, DashboardQuery, Invoice, InvoiceFilter,
    InvoiceSummary, SortMode, StatusFilter,
};
use vendor_dashboard::logging::init_tracing;
use vendor_dashboard::{
    Config, DashboardError, FileInvoiceSource, HttpInvoiceSource, InvoiceSource, Result,
};

#[derive(Parser)]
#[command(name = "vendor-dashboard")]
#[command(version, about = "Vendor invoice dashboard for the storefront API", long_about = None)]
struct Cli {
    /// Path to config directory (default: XDG config dir)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log requests and pipeline steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the config directory with a template config.toml
    Init,

    /// Select the vendor whose invoices are shown
    Login {
        /// Vendor identifier
        #[arg(long)]
        vendor: String,

        /// Display name for the vendor
        #[arg(long)]
        name: Option<String>,
    },

    /// Forget the selected vendor
    Logout,

    /// Show config location, API endpoint and selected vendor
    Status,

    /// List one page of invoices
    Invoices {
        /// Vendor identifier (default: the logged-in vendor)
        #[arg(long)]
        vendor: Option<String>,

        /// Read invoices from a JSON file instead of the API
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Filter by payment status (all, paid, unpaid)
        #[arg(long, default_value = "all")]
        status: String,

        /// Case-insensitive match on number, total or line item description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only invoices issued on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only invoices issued on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Sort order (date-desc, date-asc, total-desc, total-asc, status, default)
        #[arg(long, default_value = "default")]
        sort: String,

        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show one invoice with its line items
    Show {
        /// Invoice ID
        invoice: String,

        /// Read invoices from a JSON file instead of the API
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Show totals over all of a vendor's invoices
    Summary {
        /// Vendor identifier (default: the logged-in vendor)
        #[arg(long)]
        vendor: Option<String>,

        /// Read invoices from a JSON file instead of the API
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        command => run_initialized(&cfg_dir, command),
    }
}

/// Every command but `init` needs the config directory and the session
fn run_initialized(cfg_dir: &Path, command: Commands) -> Result<()> {
    ensure_initialized(cfg_dir)?;
    let session = load_session(cfg_dir)?;
    debug!(
        config_dir = %cfg_dir.display(),
        vendor = ?session.as_ref().map(|s| &s.vendor_id),
        "loaded session"
    );

    match command {
        Commands::Init => cmd_init(cfg_dir),
        Commands::Login { vendor, name } => cmd_login(cfg_dir, vendor, name),
        Commands::Logout => cmd_logout(cfg_dir),
        Commands::Status => cmd_status(cfg_dir, session.as_ref()),
        Commands::Invoices {
            vendor,
            file,
            status,
            search,
            from,
            to,
            sort,
            page,
        } => {
            let query = build_query(&status, search, from, to, &sort, page)?;
            cmd_invoices(cfg_dir, session.as_ref(), vendor, file, query)
        }
        Commands::Show { invoice, file } => cmd_show(cfg_dir, &invoice, file),
        Commands::Summary { vendor, file } => cmd_summary(cfg_dir, session.as_ref(), vendor, file),
    }
}

/// Initialize config directory
fn cmd_init(cfg_dir: &Path) -> Result<()> {
    init_config_dir(cfg_dir)?;

    println!("Initialized vendor-dashboard config at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Point it at the storefront API:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!("  2. Select your vendor:              vendor-dashboard login --vendor <id>");
    println!();
    println!("Then list your invoices:");
    println!("  vendor-dashboard invoices --status unpaid --sort date-asc");

    Ok(())
}

fn cmd_login(cfg_dir: &Path, vendor_id: String, vendor_name: Option<String>) -> Result<()> {
    let session = Session {
        vendor_id,
        vendor_name,
    };
    save_session(cfg_dir, &session)?;
    println!("Logged in as vendor {}", session.display_name());
    Ok(())
}

fn cmd_logout(cfg_dir: &Path) -> Result<()> {
    if clear_session(cfg_dir)? {
        println!("Logged out");
    } else {
        println!("No vendor was logged in");
    }
    Ok(())
}

fn cmd_status(cfg_dir: &Path, session: Option<&Session>) -> Result<()> {
    let config = load_config(cfg_dir)?;

    println!("Dashboard Status");
    println!("{}", "-".repeat(50));
    println!("Config directory: {}", cfg_dir.display());
    println!("API:              {}", config.api.base_url);
    println!("Timeout:          {}s", config.api.timeout_secs);
    match session {
        Some(s) => println!("Vendor:           {}", s.display_name()),
        None => println!("Vendor:           (none, run 'vendor-dashboard login --vendor <id>')"),
    }

    Ok(())
}

fn build_query(
    status: &str,
    search: String,
    from: Option<String>,
    to: Option<String>,
    sort: &str,
    page: usize,
) -> Result<DashboardQuery> {
    if page == 0 {
        return Err(DashboardError::InvalidPage(page));
    }

    let filter = InvoiceFilter {
        status: status.parse::<StatusFilter>()?,
        search,
        date_from: from.map(|s| parse_date_arg("--from", &s)).transpose()?,
        date_to: to.map(|s| parse_date_arg("--to", &s)).transpose()?,
    };

    Ok(DashboardQuery {
        filter,
        sort: sort.parse::<SortMode>()?,
        page,
    })
}

/// The file source when `--file` is given, otherwise the configured API
fn invoice_source(config: &Config, file: Option<PathBuf>) -> Box<dyn InvoiceSource> {
    match file {
        Some(path) => Box::new(FileInvoiceSource::new(path)),
        None => Box::new(HttpInvoiceSource::new(&config.api)),
    }
}

/// `--vendor` beats the session. A file source doesn't need a vendor.
fn resolve_vendor(
    flag: Option<String>,
    session: Option<&Session>,
    file: Option<&PathBuf>,
) -> Result<String> {
    match (flag, session, file) {
        (Some(vendor), _, _) => Ok(vendor),
        (None, Some(s), _) => Ok(s.vendor_id.clone()),
        (None, None, Some(_)) => Ok(String::new()),
        (None, None, None) => Err(DashboardError::NoVendor),
    }
}

fn load_invoices(
    cfg_dir: &Path,
    session: Option<&Session>,
    vendor: Option<String>,
    file: Option<PathBuf>,
) -> Result<(Config, Vec<Invoice>)> {
    let config = load_config(cfg_dir)?;
    let vendor_id = resolve_vendor(vendor, session, file.as_ref())?;
    let invoices = invoice_source(&config, file).fetch_invoices(&vendor_id)?;
    Ok((config, invoices))
}

#[derive(Tabled)]
struct InvoiceRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "TOTAL")]
    total: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

/// List one page of invoices with a summary footer
fn cmd_invoices(
    cfg_dir: &Path,
    session: Option<&Session>,
    vendor: Option<String>,
    file: Option<PathBuf>,
    query: DashboardQuery,
) -> Result<()> {
    let (config, invoices) = load_invoices(cfg_dir, session, vendor, file)?;
    let symbol = &config.dashboard.currency_symbol;

    if invoices.is_empty() {
        println!("No invoices yet.");
        return Ok(());
    }

    let view = build_view(&invoices, &query);
    if view.rows.is_empty() {
        println!("No invoices match the given filters.");
        return Ok(());
    }

    let summary = &view.summary;
    let footer = [
        ("ALL INVOICES", format_money(summary.total_amount, symbol)),
        ("PAID", format_money(summary.total_paid, symbol)),
        ("UNPAID", format_money(summary.total_unpaid, symbol)),
    ];

    // Right-align amounts to a common width so the footer lines up
    let totals: Vec<String> = view
        .rows
        .iter()
        .map(|i| format_money(i.total, symbol))
        .collect();
    let width = totals
        .iter()
        .chain(footer.iter().map(|(_, v)| v))
        .map(|v| v.chars().count())
        .max()
        .unwrap_or(0);

    let rows: Vec<InvoiceRow> = view
        .rows
        .iter()
        .zip(totals)
        .enumerate()
        .map(|(idx, (invoice, total))| InvoiceRow {
            index: view.offset + idx + 1,
            id: invoice.id.clone(),
            number: invoice.number.clone(),
            date: invoice.date.to_string(),
            total: format!("{total:>width$}"),
            status: invoice.status().to_string(),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    let table = add_summary_footer(&table, 4, &footer);
    println!("{table}");

    println!();
    print_averages(summary, symbol);
    println!(
        "Page {} of {} ({} matching of {} invoices)",
        view.current_page, view.total_pages, view.matching, summary.count
    );
    if view.current_page != query.page {
        println!(
            "(page {} does not exist, showing page {})",
            query.page, view.current_page
        );
    }

    Ok(())
}

fn print_averages(summary: &InvoiceSummary<'_>, symbol: &str) {
    println!("Average invoice: {}", format_money(summary.average_amount, symbol));
    match summary.oldest_unpaid {
        Some(oldest) => println!(
            "Oldest unpaid:   {} ({}, {})",
            oldest.number,
            oldest.date,
            format_money(oldest.total, symbol)
        ),
        None => println!("Oldest unpaid:   none"),
    }
}

/// Show one invoice with its line items
fn cmd_show(cfg_dir: &Path, invoice_id: &str, file: Option<PathBuf>) -> Result<()> {
    let config = load_config(cfg_dir)?;
    let symbol = &config.dashboard.currency_symbol;
    let invoice = invoice_source(&config, file).fetch_invoice(invoice_id)?;

    println!("Invoice {}", invoice.number);
    println!("{}", "-".repeat(50));
    println!("ID:           {}", invoice.id);
    println!("Date:         {}", invoice.date);
    println!("Status:       {}", invoice.status());
    println!("Total:        {}", format_money(invoice.total, symbol));
    println!("Paid:         {}", format_money(invoice.payment_total, symbol));
    println!("Credit:       {}", format_money(invoice.credit_total, symbol));
    println!("Balance due:  {}", format_money(invoice.balance_due(), symbol));
    match invoice.payment_date {
        Some(date) => println!("Payment date: {date}"),
        None => println!("Payment date: -"),
    }
    println!();

    if invoice.line_items.is_empty() {
        println!("No line items.");
    } else {
        let rows: Vec<LineItemRow> = invoice
            .line_items
            .iter()
            .enumerate()
            .map(|(idx, item)| LineItemRow {
                index: idx + 1,
                description: item.description.clone(),
            })
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{table}");
    }

    Ok(())
}

/// Show totals over all invoices
fn cmd_summary(
    cfg_dir: &Path,
    session: Option<&Session>,
    vendor: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let (config, invoices) = load_invoices(cfg_dir, session, vendor, file)?;
    let symbol = &config.dashboard.currency_symbol;
    let summary = summarize(&invoices);

    println!("Invoice Summary");
    println!("{}", "-".repeat(50));
    println!("Invoices:        {}", summary.count);
    println!("Total invoiced:  {}", format_money(summary.total_amount, symbol));
    println!("Total paid:      {}", format_money(summary.total_paid, symbol));
    println!("Total unpaid:    {}", format_money(summary.total_unpaid, symbol));
    print_averages(&summary, symbol);

    Ok(())
}
