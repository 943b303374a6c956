//! Tile display projection.
//!
//! Render layers do not compute anything themselves; they draw a
//! [`TileView`] built here from the product, the resolved variants, and
//! the storefront's stock and price policies.

use crate::catalog::{effective_price, requires_selection, Product, StockPolicy, Variant};
use crate::error::CommerceError;
use crate::money::PriceFormatter;
use serde::Serialize;

/// Character count a tile headline gets before truncation.
const MAX_TITLE_CHARS: usize = 50;

/// One selector entry: the variant name plus the label shown for it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariantChoice {
    /// Canonical variant name; a submit passes this back as the selection.
    pub name: String,
    /// Label shown in the selector, with the price step from base.
    pub label: String,
}

/// Everything a render layer needs for one product tile, precomputed.
///
/// Building a view is pure: the same product, selection, and policies
/// always produce the same view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TileView {
    /// Headline, truncated to fit the tile.
    pub title: String,
    /// Filled stars out of five.
    pub stars_filled: u8,
    /// Review count shown next to the stars.
    pub rating_count: u32,
    /// Effective price under the current selection, formatted.
    pub price: String,
    /// Struck-through pre-sale price, present only when above base.
    pub original_price: Option<String>,
    /// Percent figure for the discount badge.
    pub discount_percent: Option<u8>,
    /// Whether the sold-out treatment applies.
    pub out_of_stock: bool,
    /// Selector entries in display order. Empty when the catalog offers
    /// no real choice and the selector is hidden.
    pub choices: Vec<VariantChoice>,
    /// Whether the add-to-cart control accepts a click. This gates on
    /// selection only: stock rejections surface as toasts when the click
    /// goes through, and a busy workflow disables the control separately.
    pub can_submit: bool,
}

impl TileView {
    /// Build the view for one tile.
    pub fn build(
        product: &Product,
        variants: &[Variant],
        stock: &dyn StockPolicy,
        formatter: &PriceFormatter,
        selection: Option<&str>,
    ) -> Result<TileView, CommerceError> {
        let price = formatter.format(effective_price(product, variants, selection)?);

        let original_price = if product.is_discounted() {
            product.original_price.map(|original| formatter.format(original))
        } else {
            None
        };

        let choices = if requires_selection(variants) {
            variants
                .iter()
                .map(|variant| variant_choice(product, variant, formatter))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Ok(TileView {
            title: truncate_title(&product.title),
            stars_filled: product.rating.map(|r| r.stars_filled()).unwrap_or(0),
            rating_count: product.rating.map(|r| r.count).unwrap_or(0),
            price,
            original_price,
            discount_percent: product.discount_percent,
            out_of_stock: !stock.is_available(product),
            can_submit: !requires_selection(variants) || selection.is_some(),
            choices,
        })
    }
}

/// Label a variant with its price step from base, e.g. "Large (+$10.00)".
fn variant_choice(
    product: &Product,
    variant: &Variant,
    formatter: &PriceFormatter,
) -> Result<VariantChoice, CommerceError> {
    let step = variant
        .price
        .try_subtract(&product.price)
        .ok_or_else(|| CommerceError::CurrencyMismatch {
            expected: product.price.currency.code().to_string(),
            got: variant.price.currency.code().to_string(),
        })?;

    Ok(VariantChoice {
        name: variant.name.clone(),
        label: format!("{} (+{})", variant.name, formatter.format(step)),
    })
}

/// Cut a headline to the tile's space, marking the cut with an ellipsis.
fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_CHARS {
        return title.to_string();
    }
    let mut cut: String = title.chars().take(MAX_TITLE_CHARS).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{resolve_variants, ParityStock, Rating};
    use crate::money::{Currency, Locale, Money};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn formatter() -> PriceFormatter {
        PriceFormatter::new(Currency::USD, Locale::EnUs)
    }

    fn view(product: &Product, selection: Option<&str>) -> TileView {
        let variants = resolve_variants(product);
        TileView::build(product, &variants, &ParityStock, &formatter(), selection)
            .expect("view should build")
    }

    #[test]
    fn test_short_titles_pass_through() {
        let product = Product::new(1, "Backpack", "img", usd(10995));
        assert_eq!(view(&product, None).title, "Backpack");
    }

    #[test]
    fn test_long_titles_truncate_with_ellipsis() {
        let long = "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops";
        let product = Product::new(1, long, "img", usd(10995));

        let title = view(&product, None).title;
        assert_eq!(
            title,
            "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Lapt..."
        );
        assert_eq!(title.chars().count(), 53);
    }

    #[test]
    fn test_exactly_fitting_title_is_untouched() {
        let fits = "a".repeat(50);
        let product = Product::new(1, fits.clone(), "img", usd(1000));
        assert_eq!(view(&product, None).title, fits);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let accented = "é".repeat(60);
        let product = Product::new(1, accented, "img", usd(1000));

        let title = view(&product, None).title;
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_missing_rating_renders_as_zero() {
        let product = Product::new(1, "Backpack", "img", usd(10995));
        let v = view(&product, None);

        assert_eq!(v.stars_filled, 0);
        assert_eq!(v.rating_count, 0);
    }

    #[test]
    fn test_stars_floor_the_average() {
        let product =
            Product::new(1, "Backpack", "img", usd(10995)).with_rating(Rating::new(3.9, 120));
        let v = view(&product, None);

        assert_eq!(v.stars_filled, 3);
        assert_eq!(v.rating_count, 120);
    }

    #[test]
    fn test_price_tracks_the_selection() {
        let product = Product::new(1, "Backpack", "img", usd(10995));

        assert_eq!(view(&product, None).price, "$109.95");
        assert_eq!(view(&product, Some("Large")).price, "$119.95");
    }

    #[test]
    fn test_original_price_needs_a_real_markdown() {
        let base = Product::new(1, "Backpack", "img", usd(10995));
        assert_eq!(view(&base, None).original_price, None);

        let equal = base.clone().with_original_price(usd(10995));
        assert_eq!(view(&equal, None).original_price, None);

        let marked_down = base.with_original_price(usd(12995));
        assert_eq!(
            view(&marked_down, None).original_price,
            Some("$129.95".to_string())
        );
    }

    #[test]
    fn test_discount_badge_passes_through() {
        let product = Product::new(1, "Backpack", "img", usd(10995)).with_discount_percent(15);
        assert_eq!(view(&product, None).discount_percent, Some(15));
    }

    #[test]
    fn test_out_of_stock_flag_follows_the_policy() {
        assert!(!view(&Product::new(1, "A", "img", usd(1000)), None).out_of_stock);
        assert!(view(&Product::new(2, "B", "img", usd(1000)), None).out_of_stock);
    }

    #[test]
    fn test_choices_label_price_steps() {
        let product = Product::new(1, "Backpack", "img", usd(10995));
        let v = view(&product, None);

        let labels: Vec<&str> = v.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Small (+$0.00)",
                "Medium (+$5.00)",
                "Large (+$10.00)",
            ]
        );
        assert_eq!(v.choices[2].name, "Large");
    }

    #[test]
    fn test_single_variant_tile_hides_the_selector() {
        let product = Product::new(1, "Poster", "img", usd(1200))
            .with_variants(vec![Variant::new(1, "One Size", usd(1200))]);
        let v = view(&product, None);

        assert!(v.choices.is_empty());
        assert!(v.can_submit);
    }

    #[test]
    fn test_submit_gate_requires_a_selection_only_when_there_is_a_choice() {
        let product = Product::new(1, "Backpack", "img", usd(10995));

        assert!(!view(&product, None).can_submit);
        assert!(view(&product, Some("Medium")).can_submit);

        // Sold-out tiles stay clickable; the workflow raises the toast.
        let sold_out = Product::new(2, "Backpack", "img", usd(10995));
        assert!(view(&sold_out, Some("Medium")).can_submit);
    }

    #[test]
    fn test_unknown_selection_propagates_the_error() {
        let product = Product::new(1, "Backpack", "img", usd(10995));
        let variants = resolve_variants(&product);

        let result = TileView::build(
            &product,
            &variants,
            &ParityStock,
            &formatter(),
            Some("Gigantic"),
        );
        assert_eq!(
            result,
            Err(CommerceError::VariantNotFound("Gigantic".to_string()))
        );
    }

    #[test]
    fn test_view_is_deterministic() {
        let product = Product::new(1, "Backpack", "img", usd(10995))
            .with_rating(Rating::new(4.6, 500))
            .with_original_price(usd(12995))
            .with_discount_percent(15);

        assert_eq!(view(&product, Some("Small")), view(&product, Some("Small")));
    }
}
