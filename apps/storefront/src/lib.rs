//! # Storefront Library
//!
//! Composition root for the storefront: configuration, session state and
//! the commands the client invokes.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (tracing, session startup)
//! ├── config.rs       ◄─── StorefrontConfig from STOREFRONT_* env vars
//! ├── catalog.rs      ◄─── CatalogSource trait + MockCatalog
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState composition root
//! │   ├── cart.rs     ◄─── Cart state (Arc<Mutex<CartStore>>)
//! │   ├── wishlist.rs ◄─── Wishlist state
//! │   └── catalog.rs  ◄─── Loaded product list
//! ├── commands/
//! │   ├── product.rs  ◄─── Listing, detail, facets
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── wishlist.rs ◄─── Saved-for-later
//! │   └── checkout.rs ◄─── Order summary, place order
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::MockCatalog;
use config::StorefrontConfig;
use state::AppState;

/// Starts a storefront session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,storefront=debug; override with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_* env vars over defaults                               │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Cart and wishlist rehydrated from <data dir>/*.json               │
/// │                                                                         │
/// │  4. Fetch Catalog ────────────────────────────────────────────────────► │
/// │     • MockCatalog after the configured delay                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<AppState, Box<dyn Error + Send + Sync>> {
    init_tracing();

    info!("Starting storefront session");

    let config = StorefrontConfig::from_env()?;
    info!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let app = AppState::new(config);
    app.cart.with_cart(|cart| {
        info!(
            lines = cart.item_count(),
            total = %app.config.format_currency(cart.total()),
            "Cart restored"
        )
    });
    app.wishlist
        .with_wishlist(|wishlist| info!(items = wishlist.len(), "Wishlist restored"));

    let source = MockCatalog::new(app.config.catalog_delay);
    app.load_catalog(&source).await?;

    Ok(app)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_store=trace` - Trace snapshot writes only
/// - Default: INFO, DEBUG for the `storefront*` crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
