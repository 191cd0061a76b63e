//! Product categories.
//!
//! The catalog is split into a fixed set of departments. Each one has three
//! spellings: the stored name (`CBD`), the URL slug (`cbd`) and the heading
//! shown to shoppers (`CBD Products`).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct ParseCategoryError(pub String);

/// A catalog department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "vapes")]
    Vapes,
    #[serde(rename = "glass")]
    Glass,
    #[serde(rename = "accessories")]
    Accessories,
    #[serde(rename = "papers")]
    Papers,
    #[serde(rename = "lighters")]
    Lighters,
    #[serde(rename = "CBD")]
    Cbd,
}

impl ProductCategory {
    /// Every category, in storefront navigation order.
    pub const ALL: [Self; 6] = [
        Self::Vapes,
        Self::Glass,
        Self::Accessories,
        Self::Papers,
        Self::Lighters,
        Self::Cbd,
    ];

    /// The stored category name, as it appears on product records.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vapes => "vapes",
            Self::Glass => "glass",
            Self::Accessories => "accessories",
            Self::Papers => "papers",
            Self::Lighters => "lighters",
            Self::Cbd => "CBD",
        }
    }

    /// The lower-case URL slug for the category page.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Cbd => "cbd",
            other => other.as_str(),
        }
    }

    /// Heading shown on the category page.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Vapes => "Vapes & E-Cigarettes",
            Self::Glass => "Glass & Water Pipes",
            Self::Accessories => "Accessories",
            Self::Papers => "Papers & Wraps",
            Self::Lighters => "Lighters",
            Self::Cbd => "CBD Products",
        }
    }

    /// Resolve a URL slug. Slugs are matched exactly; `CBD` is not a slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = ParseCategoryError;

    /// Accepts either the stored name or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s || c.slug() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}
