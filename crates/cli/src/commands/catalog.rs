//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! ds-cli catalog categories
//! ds-cli catalog list --category glass
//! ds-cli catalog list --featured
//! ds-cli catalog show vape-001
//! ds-cli catalog search "rolling"
//! ```

use demo_smoke_core::ProductId;
use demo_smoke_storefront::catalog::Product;
use demo_smoke_storefront::storage::KeyValueStore;
use demo_smoke_storefront::{AppError, Storefront};

/// List categories with how many products each holds.
pub fn categories<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>) {
    for (category, count) in shop.catalog().category_counts() {
        tracing::info!(
            "{:<14} {:>2} products  (--category {})",
            category.display_name(),
            count,
            category.slug()
        );
    }
}

/// Products to list for an optional category slug and featured flag.
fn select<'a, L: KeyValueStore, S: KeyValueStore>(
    shop: &'a Storefront<L, S>,
    category: Option<&str>,
    featured: bool,
) -> Result<Vec<&'a Product>, AppError> {
    let category = category.map(|slug| shop.category(slug)).transpose()?;
    Ok(shop
        .catalog()
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| !featured || p.featured)
        .collect())
}

/// List products, optionally narrowed to one category or to featured items.
///
/// # Errors
///
/// Returns `AppError::CategoryNotFound` for an unknown slug.
pub fn list<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    category: Option<&str>,
    featured: bool,
) -> Result<(), AppError> {
    let products = select(shop, category, featured)?;
    if products.is_empty() {
        tracing::info!("No products found");
        return Ok(());
    }
    for product in products {
        log_row(product);
    }
    Ok(())
}

/// Show one product with its specifications.
///
/// # Errors
///
/// Returns `AppError::ProductNotFound` for an unknown ID.
pub fn show<L: KeyValueStore, S: KeyValueStore>(
    shop: &Storefront<L, S>,
    id: &ProductId,
) -> Result<(), AppError> {
    let product = shop.product(id)?;
    tracing::info!("{} ({})", product.name, product.id);
    tracing::info!("{} | {}", product.price, product.category.display_name());
    tracing::info!(
        "{}",
        if product.in_stock { "In stock" } else { "Out of stock" }
    );
    if !product.description.is_empty() {
        tracing::info!("{}", product.description);
    }
    for spec in &product.specifications {
        tracing::info!("  {}: {}", spec.name, spec.value);
    }
    Ok(())
}

/// Search names, descriptions and categories.
pub fn search<L: KeyValueStore, S: KeyValueStore>(shop: &Storefront<L, S>, query: &str) {
    let results = shop.catalog().search(query);
    tracing::info!("{} result(s) for \"{}\"", results.len(), query.trim());
    for product in results {
        log_row(product);
    }
}

fn log_row(product: &Product) {
    tracing::info!(
        "{:<12} {:<32} {:>9}  {}",
        product.id.as_str(),
        product.name,
        product.price.to_string(),
        product.category.display_name()
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_smoke_core::ProductCategory;

    use super::*;
    use crate::commands::test_support::shop;

    #[test]
    fn test_select_by_category() {
        let shop = shop();
        let products = select(&shop, Some("cbd"), false).unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.category == ProductCategory::Cbd));
    }

    #[test]
    fn test_select_featured_within_category() {
        let shop = shop();
        let products = select(&shop, Some("vapes"), true).unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["vape-001", "vape-002"]);
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let shop = shop();
        assert!(matches!(
            list(&shop, Some("hats"), false),
            Err(AppError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_show_unknown_product() {
        let shop = shop();
        assert!(matches!(
            show(&shop, &ProductId::new("nope")),
            Err(AppError::ProductNotFound(_))
        ));
    }
}
