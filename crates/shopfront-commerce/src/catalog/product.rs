//! Product records and the editable draft used to create or replace them.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;

/// A product in the catalog.
///
/// The identifier is fixed at construction; nothing in the crate hands out
/// a mutable reference to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    id: ProductId,
    /// Display name.
    pub name: String,
    /// Listing category.
    pub category: Category,
    /// Price in minor currency units.
    pub price: u64,
    /// Average rating, conventionally 0 to 5.
    pub rating: f64,
    /// Image URI.
    pub image: String,
    /// Optional short badge label (e.g., "Hot").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    /// Create a product with no rating, image or badge.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            rating: 0.0,
            image: String::new(),
            badge: None,
        }
    }

    /// Build a product from a draft under a freshly minted id.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            category: draft.category,
            price: draft.price,
            rating: draft.rating,
            image: draft.image.trim().to_string(),
            badge: non_blank(draft.badge),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the badge label.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Get the product identifier.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Trim text fields and drop a blank badge, as creation does.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            badge: non_blank(self.badge),
            ..self
        }
    }

    /// Produce the replacement record for an edit.
    ///
    /// The id is kept. A blank name or image keeps the current value; a blank
    /// badge clears it.
    pub fn apply(&self, draft: ProductDraft) -> Product {
        let name = draft.name.trim();
        let image = draft.image.trim();
        Product {
            id: self.id.clone(),
            name: if name.is_empty() {
                self.name.clone()
            } else {
                name.to_string()
            },
            category: draft.category,
            price: draft.price,
            rating: draft.rating,
            image: if image.is_empty() {
                self.image.clone()
            } else {
                image.to_string()
            },
            badge: non_blank(draft.badge),
        }
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        needle.is_empty() || self.name.to_lowercase().contains(needle)
    }
}

/// Every editable product field; the shape of both create and update input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: Option<String>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: Category, price: u64) -> Self {
        Self {
            name: name.into(),
            category,
            price,
            ..Self::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category,
            price: product.price,
            rating: product.rating,
            image: product.image.clone(),
            badge: product.badge.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
