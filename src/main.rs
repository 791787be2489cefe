//! Demo driver for the library store.
//!
//! Walks one shopping session against the configured storage file:
//! 1.  Loading (or creating) the [`Library`].
//! 2.  Registering a user and stocking a product.
//! 3.  A refused purchase, a deposit, then a successful purchase.
//! 4.  Saving the result.
//!
//! Each run adds another user and product to the same file.

use library_store::model::Category;
use library_store::runtime::setup_tracing;
use library_store::{Library, LibraryConfig, LibraryError};
use tracing::{info, warn};

fn main() -> Result<(), LibraryError> {
    setup_tracing();

    let config = LibraryConfig::from_env();
    info!(path = %config.storage_path.display(), "Starting library demo");
    let mut library = Library::new(config)?;

    let span = tracing::info_span!("stocking");
    let (user_id, product_id) = {
        let _enter = span.enter();
        let user_id = library.add_user("Alice").id.clone();
        let product_id = library
            .add_product("The Rust Programming Language", 39.95, Category::Books)?
            .id
            .clone();
        (user_id, product_id)
    };

    let span = tracing::info_span!("shopping", %user_id);
    {
        let _enter = span.enter();

        match library.buy(&user_id, &product_id) {
            Ok(purchase) => {
                warn!(purchase_id = %purchase.id, "Purchase went through on an empty budget")
            }
            Err(e) => info!(error = %e, "Purchase refused"),
        }

        let budget = library.deposit(&user_id, 50.0)?;
        info!(budget, "Deposited");

        let purchase_id = library.buy(&user_id, &product_id)?.id.clone();
        let budget = library.get_user(&user_id)?.budget;
        info!(%purchase_id, budget, "Purchase completed");
    }

    for product in library.list_products() {
        info!(
            id = %product.id,
            title = %product.title,
            price = product.price,
            category = %product.category,
            "Product"
        );
    }
    info!(
        purchases = library.list_purchases(&user_id).len(),
        "Purchases by Alice"
    );

    library.save()?;
    info!("Library saved");
    Ok(())
}
