//! Product categories and the category filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// The category a product is listed under.
///
/// "All" is deliberately absent: it only exists as [`CategoryFilter::All`],
/// so no product can ever be assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Top Up")]
    TopUp,
    #[serde(rename = "Gift Card")]
    GiftCard,
    #[serde(rename = "Game Pass")]
    GamePass,
    #[serde(rename = "Bundle")]
    Bundle,
}

impl Category {
    /// Every assignable category, in display order.
    pub const ALL: [Category; 4] = [
        Category::TopUp,
        Category::GiftCard,
        Category::GamePass,
        Category::Bundle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::TopUp => "Top Up",
            Category::GiftCard => "Gift Card",
            Category::GamePass => "Game Pass",
            Category::Bundle => "Bundle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    /// Accepts display names and loose spellings: "Gift Card", "gift-card",
    /// "giftcard" all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match squash(s).as_str() {
            "topup" => Ok(Category::TopUp),
            "giftcard" => Ok(Category::GiftCard),
            "gamepass" => Ok(Category::GamePass),
            "bundle" => Ok(Category::Bundle),
            _ => Err(CommerceError::InvalidCategory(s.to_string())),
        }
    }
}

/// Category restriction applied by the catalog view.
///
/// Serialized as its display name, so "All" round-trips as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only products in this category.
    Only(Category),
}

impl CategoryFilter {
    /// Filter tabs in display order, "All" first.
    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::TopUp),
        CategoryFilter::Only(Category::GiftCard),
        CategoryFilter::Only(Category::GamePass),
        CategoryFilter::Only(Category::Bundle),
    ];

    /// Check whether a product in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CommerceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if squash(s) == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
