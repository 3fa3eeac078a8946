//! Ihsan Charity CLI
//!
//! Thin wrapper around ihsan-core for managing a donation cart from the
//! terminal. The cart lives in the data directory and is shared with the
//! desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Browse projects and add one to the cart
//! ihsan projects --category water
//! ihsan give water-well-somalia --amount 75
//!
//! # Quick gifts from the Donate page
//! ihsan quick zakat 100
//!
//! # Add an arbitrary line item
//! ihsan add w1 "Water Well" 50 --category General
//!
//! # Review and edit
//! ihsan list
//! ihsan update w1 80
//! ihsan remove w1
//!
//! # Options and totals
//! ihsan options --cover-fees true --payment card --for in-memory-of --name "Amina"
//! ihsan totals
//!
//! # Record the pledge
//! ihsan checkout
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ihsan_core::catalog::{self, GivingOption, DEFAULT_PROJECT_AMOUNT};
use ihsan_core::{
    format_usd, CartConfig, CartEvent, CartStore, Designation, DesignationKind, EmployerMatch, EventReceiver,
    ItemDraft, KvCartRepository, NoticeLevel, PaymentMethod, RedbStore, DEFAULT_CATEGORY,
};

type Store = CartStore<KvCartRepository<RedbStore>>;

/// Ihsan Charity - Donation Cart
#[derive(Parser)]
#[command(name = "ihsan")]
#[command(version = "0.1.0")]
#[command(about = "Ihsan Charity - build a donation cart and pledge once")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir /ihsan)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding the fee schedule
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a donation line item
    Add {
        /// Item ID (project id or any unique token)
        id: String,
        /// Display title
        title: String,
        /// Amount in dollars
        amount: String,
        /// Category such as Zakat, Sadaqah or General
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List line items in the cart
    List,
    /// Change the amount of a line item (0 or less removes it)
    Update {
        id: String,
        #[arg(allow_hyphen_values = true)]
        amount: f64,
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// Remove a line item
    Remove {
        id: String,
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },
    /// Empty the cart and reset options
    Clear,
    /// Show subtotal, processing fee and total
    Totals,
    /// Show or change checkout options
    Options {
        /// Add processing fees to the total
        #[arg(long)]
        cover_fees: Option<bool>,
        /// card or bank-transfer
        #[arg(long)]
        payment: Option<PaymentMethod>,
        /// self, on-behalf-of or in-memory-of
        #[arg(long = "for")]
        donation_for: Option<DesignationKind>,
        /// Name of the person the donation honours
        #[arg(long)]
        name: Option<String>,
        /// Employer company for gift matching
        #[arg(long, requires = "email")]
        employer: Option<String>,
        /// Employer contact email
        #[arg(long, requires = "employer")]
        email: Option<String>,
        /// Turn off employer matching
        #[arg(long, conflicts_with = "employer")]
        no_employer: bool,
    },
    /// List fundraising projects
    Projects {
        /// Only show one category (water, orphans, food, housing, mosques)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Add a project to the cart
    Give {
        project_id: String,
        #[arg(short, long, default_value_t = DEFAULT_PROJECT_AMOUNT)]
        amount: f64,
    },
    /// Quick gift: one-time, monthly, zakat, sadaqah or qurbani
    Quick {
        option: GivingOption,
        /// Amount (defaults to the option's first preset)
        amount: Option<f64>,
    },
    /// Replace the cart with the demo items
    Demo,
    /// Record a pledge for the cart and empty it
    Checkout {
        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the saved cart from the data directory
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = match &cli.config {
        Some(path) => CartConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CartConfig::default(),
    };

    let repo = KvCartRepository::open_in(&data_dir)
        .with_context(|| format!("Failed to open cart in {}", data_dir.display()))?;
    let mut store = CartStore::with_config(repo, config);
    if let Some(warning) = store.restore_warning() {
        println!("! Saved cart could not be restored, starting empty ({})", warning);
    }
    let mut notices = store.subscribe();

    let result = run(&mut store, cli.command);
    drain_notices(&mut notices);
    result
}

fn run(store: &mut Store, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            id,
            title,
            amount,
            category,
        } => {
            let mut draft = ItemDraft::new(id, title, amount);
            draft.category = category;
            store.add_item(draft)?;
        }

        Commands::List => print_items(store),

        Commands::Update {
            id,
            amount,
            category,
        } => {
            store.update_item_amount(&id, &category, amount)?;
        }

        Commands::Remove { id, category } => {
            if !store.remove_item(&id, &category) {
                println!("No donation '{}' ({}) in the cart.", id, category);
            }
        }

        Commands::Clear => store.clear(),

        Commands::Totals => print_totals(store),

        Commands::Options {
            cover_fees,
            payment,
            donation_for,
            name,
            employer,
            email,
            no_employer,
        } => {
            if let Some(cover) = cover_fees {
                store.set_cover_fees(cover);
            }
            if let Some(method) = payment {
                store.set_payment_method(method);
            }
            if donation_for.is_some() || name.is_some() {
                let current = store.options().donation_for.clone();
                store.set_donation_for(Designation {
                    kind: donation_for.unwrap_or(current.kind),
                    name: name.unwrap_or(current.name),
                });
            }
            if let (Some(company), Some(email)) = (employer, email) {
                store.set_employer_match(EmployerMatch::new(company, email));
            } else if no_employer {
                store.set_employer_match(EmployerMatch::default());
            }
            print_options(store);
        }

        Commands::Projects { category } => {
            let projects = catalog::projects_in(&category);
            if projects.is_empty() {
                println!(
                    "No projects in '{}'. Categories: {}",
                    category,
                    catalog::categories().join(", ")
                );
            }
            for project in projects {
                println!("{} [{}]", project.title, project.category);
                println!("  ID: {}", project.id);
                println!(
                    "  Raised: ${} of ${} ({}%)",
                    project.raised,
                    project.goal,
                    project.progress_percent()
                );
            }
        }

        Commands::Give { project_id, amount } => {
            let project = catalog::find_project(&project_id)
                .ok_or_else(|| anyhow::anyhow!("Unknown project '{}'", project_id))?;
            store.add_item(project.draft(amount))?;
        }

        Commands::Quick { option, amount } => {
            let amount = amount
                .or_else(|| option.presets().first().map(|preset| f64::from(*preset)))
                .unwrap_or(DEFAULT_PROJECT_AMOUNT);
            store.add_item(option.draft(amount))?;
        }

        Commands::Demo => {
            store.clear();
            for draft in catalog::demo_drafts() {
                store.add_item(draft)?;
            }
            print_items(store);
        }

        Commands::Checkout { json } => {
            let receipt = store.checkout()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!("Pledge recorded");
                println!("  Reference: {}", receipt.reference);
                println!("  Items: {}", receipt.items.len());
                println!("  Payment: {}", receipt.options.payment_method.label());
                println!("  Total: {}", format_usd(receipt.totals.total));
            }
        }

        Commands::Reset => {
            store.repository().forget()?;
            println!("Saved cart deleted.");
        }
    }

    Ok(())
}

/// Print notifications raised while the command ran.
///
/// Rejections are skipped; they surface as the command's error instead.
fn drain_notices(notices: &mut EventReceiver) {
    while let Ok(event) = notices.try_recv() {
        if !event.is_notice() || matches!(event, CartEvent::Rejected { .. }) {
            continue;
        }
        match event.level() {
            NoticeLevel::Warning => println!("! {}", event),
            NoticeLevel::Success | NoticeLevel::Info => println!("* {}", event),
        }
    }
}

fn print_items(store: &Store) {
    if store.is_empty() {
        println!("Your donation cart is empty.");
        return;
    }

    println!("Donation cart ({} items):", store.item_count());
    for item in store.items() {
        println!("  {} [{}] {}", item.title, item.category, format_usd(item.amount));
        println!("    ID: {}", item.id);
    }
}

fn print_totals(store: &Store) {
    let totals = store.compute_totals();
    let options = store.options();
    println!("Subtotal: {}", format_usd(totals.subtotal));
    if options.cover_fees {
        println!("Processing fee: {}", format_usd(totals.processing_fee));
    } else if options.payment_method.has_fee() && totals.processing_fee > 0.0 {
        println!(
            "Processing fee: {} (not covered)",
            format_usd(totals.processing_fee)
        );
    }
    println!("Total: {}", format_usd(totals.total));
}

fn print_options(store: &Store) {
    let options = store.options();
    println!("Options:");
    println!("  Cover fees: {}", if options.cover_fees { "yes" } else { "no" });
    println!("  Payment: {}", options.payment_method);
    match options.donation_for.kind {
        DesignationKind::Personal => println!("  For: self"),
        kind => println!("  For: {} {}", kind, options.donation_for.name),
    }
    let employer = &options.employer_match;
    if employer.enabled {
        println!("  Employer match: {} <{}>", employer.company_name, employer.contact_email);
    } else {
        println!("  Employer match: off");
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (<platform data dir>/ihsan)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ihsan")
}
