//! Product catalog.
//!
//! The catalog is fixed reference data compiled into the binary. At a few
//! dozen products a linear scan beats any index, so filtering and search are
//! plain iterator passes with no ranking or pagination.

mod data;

use serde::{Deserialize, Serialize};

use demo_smoke_core::{Price, ProductCategory, ProductId};

/// A named product attribute such as `Battery: 1200mAh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

/// A product on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub category: ProductCategory,
    /// Image path relative to the site's static root.
    pub image: String,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
    /// Attributes in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
}

impl Product {
    /// Create an in-stock product with no description, image or specs.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: ProductCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category,
            image: String::new(),
            in_stock: true,
            featured: false,
            specifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    #[must_use]
    pub fn with_spec(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Case-insensitive substring match over name, description and category.
    ///
    /// `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// The set of products the shop sells.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The shop's built-in catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(data::products())
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in `category`.
    pub fn by_category(&self, category: ProductCategory) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.featured)
    }

    /// Products whose name, description or category contains `query`,
    /// ignoring case. A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        self.products.iter().filter(|p| p.matches(&needle)).collect()
    }

    /// Number of products in each category, in navigation order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(ProductCategory, usize)> {
        ProductCategory::ALL
            .into_iter()
            .map(|category| (category, self.by_category(category).count()))
            .collect()
    }
}
