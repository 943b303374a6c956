//! Product, variant, and rating types.

use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Star rating aggregated from shopper reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating on a 0.0 to 5.0 scale.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

impl Rating {
    /// Create a new rating.
    pub fn new(rate: f64, count: u32) -> Self {
        Self { rate, count }
    }

    /// Whole stars to fill out of five.
    pub fn stars_filled(&self) -> u8 {
        self.rate.clamp(0.0, 5.0).floor() as u8
    }
}

/// A purchasable product configuration (e.g., a size).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier within the product.
    pub id: VariantId,
    /// Display name shown in the selector (e.g., "Large").
    pub name: String,
    /// Unit price charged when this variant is purchased.
    pub price: Money,
}

impl Variant {
    /// Create a new variant.
    pub fn new(id: impl Into<VariantId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// A product as rendered on a storefront tile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier from the catalog feed.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL of the tile artwork.
    pub image: String,
    /// Base unit price. Every variant prices at or above this.
    pub price: Money,
    /// Pre-sale price, shown struck through when above `price`.
    pub original_price: Option<Money>,
    /// Percent figure for the discount badge.
    pub discount_percent: Option<u8>,
    /// Review rating, when the product has reviews.
    pub rating: Option<Rating>,
    /// Explicit variants in display order. `None` or empty means the
    /// catalog synthesizes a default size ladder.
    pub variants: Option<Vec<Variant>>,
}

impl Product {
    /// Create a new product with the required tile fields.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: image.into(),
            price,
            original_price: None,
            discount_percent: None,
            rating: None,
            variants: None,
        }
    }

    /// Set the pre-sale price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the discount badge percent.
    pub fn with_discount_percent(mut self, percent: u8) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    /// Set the review rating.
    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set explicit variants.
    pub fn with_variants(mut self, variants: Vec<Variant>) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Check if the pre-sale price is strictly above the base price,
    /// which is what makes the markdown worth showing.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .and_then(|original| original.try_subtract(&self.price))
            .map(|markdown| markdown.is_positive())
            .unwrap_or(false)
    }

    /// Check the product against catalog pricing rules.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::NegativePrice(self.price.amount_cents));
        }

        if let Some(rating) = &self.rating {
            if !(0.0..=5.0).contains(&rating.rate) {
                return Err(CommerceError::RatingOutOfRange(rating.rate));
            }
        }

        if let Some(original) = &self.original_price {
            if original.currency != self.price.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.price.currency.code().to_string(),
                    got: original.currency.code().to_string(),
                });
            }
        }

        if let Some(variants) = &self.variants {
            let mut names: Vec<&str> = Vec::new();
            let mut ids: Vec<VariantId> = Vec::new();
            for variant in variants {
                if variant.price.currency != self.price.currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: self.price.currency.code().to_string(),
                        got: variant.price.currency.code().to_string(),
                    });
                }
                if variant.price.amount_cents < self.price.amount_cents {
                    return Err(CommerceError::VariantPriceBelowBase {
                        name: variant.name.clone(),
                        variant_cents: variant.price.amount_cents,
                        base_cents: self.price.amount_cents,
                    });
                }
                if names.contains(&variant.name.as_str()) {
                    return Err(CommerceError::DuplicateVariant(variant.name.clone()));
                }
                if ids.contains(&variant.id) {
                    return Err(CommerceError::DuplicateVariant(variant.id.to_string()));
                }
                names.push(variant.name.as_str());
                ids.push(variant.id);
            }
        }

        Ok(())
    }
}
