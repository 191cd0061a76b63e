//! Demo Smoke CLI - the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Pass the age gate for this session
//! ds-cli age confirm
//!
//! # Browse
//! ds-cli catalog list --category cbd
//! ds-cli catalog search grinder
//!
//! # Shop
//! ds-cli cart add acc-001 --quantity 2
//! ds-cli account sign-in -e demo@example.com -p secret1
//! ds-cli checkout submit --pickup-time "2:00 PM"
//! ds-cli orders list
//! ```
//!
//! # Commands
//!
//! - `age` - Age gate for the current session
//! - `session end` - Forget session state (the age gate)
//! - `catalog` - Browse and search products
//! - `cart` - Manage the cart
//! - `account` - Sign up, sign in and edit your profile
//! - `checkout` - Pickup slots, order summary and placing the order
//! - `orders` - Order history
//!
//! Data lives in `DEMO_SMOKE_DATA_DIR` (default `.demo-smoke`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use demo_smoke_core::OrderType;
use demo_smoke_storefront::checkout::DetailsForm;
use demo_smoke_storefront::config::{LogFormat, StorefrontConfig};
use demo_smoke_storefront::forms::{SignInForm, SignUpForm};
use demo_smoke_storefront::models::ProfileUpdate;
use demo_smoke_storefront::storage::FileStore;
use demo_smoke_storefront::{AppError, Storefront};

mod commands;

#[derive(Parser)]
#[command(name = "ds-cli")]
#[command(author, version, about = "Demo Smoke storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Confirm or check the age gate
    Age {
        #[command(subcommand)]
        action: AgeAction,
    },
    /// Manage the browsing session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage your account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Check out the cart
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// View your orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum AgeAction {
    /// Confirm you are 21 or older
    Confirm,
    /// Show whether the age gate has been passed
    Status,
}

#[derive(Subcommand)]
enum SessionAction {
    /// End the session; the age gate shows again
    End,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List categories with product counts
    Categories,
    /// List products
    List {
        /// Category slug (e.g. `vapes`, `cbd`)
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured products
        #[arg(short, long)]
        featured: bool,
    },
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Search names, descriptions and categories
    Search {
        /// Search text
        query: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Set a product's quantity (0 removes it)
    Set {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account and sign in
    SignUp {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(short, long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },
    /// Sign in to an existing account
    SignIn {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    SignOut,
    /// Show the signed-in account
    Whoami,
    /// Edit your profile
    Update {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand)]
enum CheckoutAction {
    /// List pickup times
    Slots,
    /// Show subtotal, tax and total
    Summary,
    /// Place the order
    Submit {
        /// Defaults to your profile
        #[arg(long)]
        first_name: Option<String>,

        /// Defaults to your profile
        #[arg(long)]
        last_name: Option<String>,

        /// Defaults to your profile
        #[arg(long)]
        email: Option<String>,

        /// Defaults to your profile
        #[arg(long)]
        phone: Option<String>,

        /// `pickup` or `delivery`
        #[arg(long, default_value = "pickup")]
        order_type: OrderType,

        /// Pickup slot, e.g. `14:00` or `2:00 PM`
        #[arg(long)]
        pickup_time: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List your orders
    List,
}

fn main() {
    let config = StorefrontConfig::from_env();
    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::default(), |c| c.log_format),
    );

    let cli = Cli::parse();

    let result = config
        .map_err(AppError::from)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::debug!(error = %e, "Command failed");
        tracing::error!("{}", e.user_message());
        std::process::exit(1);
    }
}

/// Install the global subscriber.
///
/// Defaults to info level for the storefront crates if `RUST_LOG` is not set.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "demo_smoke_storefront=info,ds_cli=info".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (
            Some(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_target(false),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty)
        .with(json)
        .init();
}

fn run(cli: Cli, config: StorefrontConfig) -> Result<(), AppError> {
    let shop = Storefront::<FileStore>::open(config)?;

    match cli.command {
        Commands::Age { action } => match action {
            AgeAction::Confirm => commands::session::confirm_age(&shop)?,
            AgeAction::Status => commands::session::age_status(&shop)?,
        },
        Commands::Session { action } => match action {
            SessionAction::End => commands::session::end(&shop)?,
        },
        command => {
            shop.require_age_verified()?;
            dispatch(&shop, command)?;
        }
    }
    Ok(())
}

/// Run a command that is behind the age gate.
fn dispatch(shop: &Storefront<FileStore>, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Catalog { action } => match action {
            CatalogAction::Categories => commands::catalog::categories(shop),
            CatalogAction::List { category, featured } => {
                commands::catalog::list(shop, category.as_deref(), featured)?;
            }
            CatalogAction::Show { id } => commands::catalog::show(shop, &id.into())?,
            CatalogAction::Search { query } => commands::catalog::search(shop, &query),
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(shop)?,
            CartAction::Add { id, quantity } => commands::cart::add(shop, &id.into(), quantity)?,
            CartAction::Remove { id } => commands::cart::remove(shop, &id.into())?,
            CartAction::Set { id, quantity } => {
                commands::cart::set_quantity(shop, &id.into(), quantity)?;
            }
            CartAction::Clear => commands::cart::clear(shop)?,
        },
        Commands::Account { action } => match action {
            AccountAction::SignUp {
                first_name,
                last_name,
                email,
                phone,
                password,
                confirm_password,
            } => commands::account::sign_up(
                shop,
                SignUpForm {
                    first_name,
                    last_name,
                    email,
                    phone,
                    password: SecretString::from(password),
                    confirm_password: SecretString::from(confirm_password),
                },
            )?,
            AccountAction::SignIn { email, password } => commands::account::sign_in(
                shop,
                SignInForm {
                    email,
                    password: SecretString::from(password),
                },
            )?,
            AccountAction::SignOut => commands::account::sign_out(shop)?,
            AccountAction::Whoami => commands::account::whoami(shop)?,
            AccountAction::Update {
                first_name,
                last_name,
                phone,
            } => commands::account::update(
                shop,
                &ProfileUpdate {
                    first_name,
                    last_name,
                    phone,
                },
            )?,
        },
        Commands::Checkout { action } => match action {
            CheckoutAction::Slots => commands::checkout::slots(shop),
            CheckoutAction::Summary => commands::checkout::summary(shop)?,
            CheckoutAction::Submit {
                first_name,
                last_name,
                email,
                phone,
                order_type,
                pickup_time,
            } => commands::checkout::submit(
                shop,
                commands::checkout::ContactOverrides {
                    first_name,
                    last_name,
                    email,
                    phone,
                },
                &DetailsForm {
                    order_type,
                    pickup_time,
                },
            )?,
        },
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(shop)?,
        },
        Commands::Age { .. } | Commands::Session { .. } => {}
    }
    Ok(())
}
