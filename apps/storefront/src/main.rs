//! # Storefront Entry Point
//!
//! Starts a session and logs what the shopper would see on the home page.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (data dir, catalog delay, checkout policy)
//! 3. Rehydrate cart and wishlist
//! 4. Fetch the catalog
//! 5. Log the featured listing and the order summary

use std::process::ExitCode;

use storefront::commands::{checkout, product};
use storefront_core::FilterCriteria;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let app = match storefront::run().await {
        Ok(app) => app,
        Err(err) => {
            error!(error = %err, "Storefront failed to start");
            return ExitCode::FAILURE;
        }
    };

    match product::list_products(&app.catalog, None, &FilterCriteria::default()) {
        Ok(listing) => {
            for dto in &listing.products {
                info!(
                    id = %dto.product.id,
                    name = %dto.product.name,
                    price = %app.config.format_currency(dto.product.price),
                    featured = dto.product.featured,
                    "Product"
                );
            }
            info!(products = listing.total_count, "Catalog listing ready");
        }
        Err(err) => {
            error!(error = %err, "Catalog listing failed");
            return ExitCode::FAILURE;
        }
    }

    let summary = checkout::get_order_summary(&app.config, &app.cart);
    info!(
        subtotal = %app.config.format_currency(summary.summary.subtotal),
        shipping = %app.config.format_currency(summary.summary.shipping),
        tax = %app.config.format_currency(summary.summary.tax),
        total = %summary.formatted_total,
        "Order summary"
    );

    ExitCode::SUCCESS
}
