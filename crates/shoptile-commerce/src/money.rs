//! Money type and price formatting.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Formatting for
//! tiles goes through [`PriceFormatter`], which applies the storefront's
//! configured currency and locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Display locales supported by the tile price formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
    FrFr,
}

impl Locale {
    /// Get the BCP 47 tag (e.g., "en-US").
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }

    /// Parse a BCP 47 tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "en-us" | "en" => Some(Locale::EnUs),
            "de-de" | "de" => Some(Locale::DeDe),
            "fr-fr" | "fr" => Some(Locale::FrFr),
            _ => None,
        }
    }

    /// Separator inserted between digit groups of three.
    pub fn thousands_separator(&self) -> &'static str {
        match self {
            Locale::EnUs => ",",
            Locale::DeDe => ".",
            // Narrow no-break space, as CLDR specifies for fr-FR.
            Locale::FrFr => "\u{202f}",
        }
    }

    /// Separator between the whole and fractional parts.
    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs => ".",
            Locale::DeDe | Locale::FrFr => ",",
        }
    }

    /// Whether the currency symbol precedes the amount.
    pub fn symbol_leads(&self) -> bool {
        matches!(self, Locale::EnUs)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
/// This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use shoptile_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(109.95, Currency::USD);
    /// assert_eq!(price.amount_cents, 10995);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a plain display string without grouping (e.g., "$49.99").
    ///
    /// Log lines and debug output use this; shopper-facing strings go
    /// through [`PriceFormatter`] instead.
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Locale-aware price formatter for shopper-facing strings.
///
/// One formatter per storefront: the currency and locale are configuration,
/// so every tile renders prices the same way. Formatting is deterministic,
/// equal amounts always produce equal strings.
///
/// ```
/// use shoptile_commerce::money::{Currency, Locale, Money, PriceFormatter};
/// let formatter = PriceFormatter::new(Currency::USD, Locale::EnUs);
/// let price = Money::new(123_456, Currency::USD);
/// assert_eq!(formatter.format(price), "$1,234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormatter {
    currency: Currency,
    locale: Locale,
}

impl PriceFormatter {
    /// Create a formatter for the given currency and locale.
    pub fn new(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }

    /// The storefront's configured currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The storefront's configured locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Render a price string with digit grouping, e.g. "$1,234.56".
    ///
    /// The locale drives separators and symbol placement; the amount's own
    /// currency supplies the symbol and decimal places.
    pub fn format(&self, money: Money) -> String {
        let currency = money.currency;
        let places = currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let magnitude = money.amount_cents.unsigned_abs();
        let whole = group_digits(magnitude / divisor, self.locale.thousands_separator());

        let number = if places == 0 {
            whole
        } else {
            let frac = magnitude % divisor;
            let width = places as usize;
            format!(
                "{}{}{:0width$}",
                whole,
                self.locale.decimal_separator(),
                frac
            )
        };

        let mut out = String::new();
        if money.is_negative() {
            out.push('-');
        }
        if self.locale.symbol_leads() {
            out.push_str(currency.symbol());
            out.push_str(&number);
        } else {
            out.push_str(&number);
            // No-break space keeps the amount and symbol on one line.
            out.push('\u{a0}');
            out.push_str(currency.symbol());
        }
        out
    }
}

/// Insert a separator between groups of three digits.
fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
