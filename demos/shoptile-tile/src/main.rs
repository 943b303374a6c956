//! Terminal storefront demo.
//!
//! Renders a handful of product tiles, walks through the add-to-cart
//! scenarios a shopper can hit, and dumps the shared cart at the end.

use std::rc::Rc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shoptile_commerce::prelude::*;

/// ShopTile demo - product tiles and cart submission in a terminal
#[derive(Parser)]
#[command(name = "shoptile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulated cart round-trip latency in milliseconds
    #[arg(long, default_value_t = 500)]
    latency_ms: u64,

    /// Currency code for all tile prices
    #[arg(long, default_value = "USD")]
    currency: String,

    /// BCP 47 locale tag for price formatting
    #[arg(long, default_value = "en-US")]
    locale: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::info!(
        "starting tile demo with {}ms simulated cart latency",
        cli.latency_ms
    );

    let currency = Currency::from_code(&cli.currency)
        .ok_or_else(|| anyhow!("unsupported currency code: {}", cli.currency))?;
    let locale = Locale::from_tag(&cli.locale)
        .ok_or_else(|| anyhow!("unsupported locale tag: {}", cli.locale))?;
    let formatter = PriceFormatter::new(currency, locale);

    let store = Rc::new(InMemoryCartStore::new());
    let notifier = Rc::new(TracingNotifier);
    let remote: Rc<dyn CartRemote> =
        Rc::new(SimulatedRemote::new(Duration::from_millis(cli.latency_ms)));

    let mut tiles = Vec::new();
    for product in seed_products(currency) {
        product.validate()?;
        tiles.push(CartSubmissionWorkflow::new(
            product,
            Rc::new(ParityStock),
            store.clone(),
            notifier.clone(),
            remote.clone(),
        ));
    }

    banner("Storefront");
    for workflow in &tiles {
        let view = TileView::build(
            workflow.product(),
            workflow.variants(),
            &ParityStock,
            &formatter,
            None,
        )?;
        render_tile(&view);
        println!();
    }

    banner("Shopper session");

    // Tile 1: forgot to pick a size, then picked one.
    let outcome = tiles[0].submit(None).await;
    println!("backpack, no size:   {}", describe(&outcome));
    let outcome = tiles[0].submit(Some("Large")).await;
    println!("backpack, Large:     {}", describe(&outcome));

    // Tile 2 is sold out no matter the selection.
    let outcome = tiles[1].submit(Some("Small")).await;
    println!("t-shirt, Small:      {}", describe(&outcome));

    // Tile 4 has a single variant, no selection needed.
    let outcome = tiles[3].submit(None).await;
    println!("bracelet:            {}", describe(&outcome));

    // Tile 3: a double click lands while the first round trip is in flight.
    let (first, second) = tokio::join!(
        tiles[2].submit(Some("Medium")),
        tiles[2].submit(Some("Large")),
    );
    println!("jacket, 1st click:   {}", describe(&first));
    println!("jacket, 2nd click:   {}", describe(&second));

    // Tile 5: explicit variants pass through as-is.
    let outcome = tiles[4].submit(Some("Forest")).await;
    println!("coat, Forest:        {}", describe(&outcome));

    banner("Cart");
    println!("{}", serde_json::to_string_pretty(&store.items())?);
    if let Some(subtotal) = store.subtotal() {
        println!("\nsubtotal: {}", formatter.format(subtotal));
    }

    Ok(())
}

/// Tracing/logging initialization, configurable via RUST_LOG.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A handful of catalog entries exercising every tile shape.
fn seed_products(currency: Currency) -> Vec<Product> {
    let money = |decimal| Money::from_decimal(decimal, currency);
    vec![
        Product::new(
            1,
            "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "https://img.shoptile.dev/products/1.jpg",
            money(109.95),
        )
        .with_rating(Rating::new(3.9, 120)),
        Product::new(
            2,
            "Mens Casual Premium Slim Fit T-Shirts",
            "https://img.shoptile.dev/products/2.jpg",
            money(22.3),
        )
        .with_rating(Rating::new(4.1, 259)),
        Product::new(
            3,
            "Mens Cotton Jacket",
            "https://img.shoptile.dev/products/3.jpg",
            money(55.99),
        )
        .with_original_price(money(79.99))
        .with_discount_percent(30)
        .with_rating(Rating::new(4.7, 500)),
        Product::new(
            5,
            "John Hardy Womens Legends Naga Bracelet",
            "https://img.shoptile.dev/products/5.jpg",
            money(695.0),
        )
        .with_rating(Rating::new(4.6, 400))
        .with_variants(vec![Variant::new(1, "One Size", money(695.0))]),
        Product::new(
            7,
            "Mens Heavy Winter Coat",
            "https://img.shoptile.dev/products/7.jpg",
            money(129.99),
        )
        .with_rating(Rating::new(4.2, 181))
        .with_variants(vec![
            Variant::new(1, "Navy", money(129.99)),
            Variant::new(2, "Forest", money(139.99)),
        ]),
    ]
}

fn banner(text: &str) {
    println!("\n=== {text} ===\n");
}

fn render_tile(view: &TileView) {
    println!("  {}", view.title);
    println!("  {} ({})", stars(view.stars_filled), view.rating_count);
    match (&view.original_price, view.discount_percent) {
        (Some(original), Some(percent)) => {
            println!("  {}  was {}  -{}%", view.price, original, percent)
        }
        (Some(original), None) => println!("  {}  was {}", view.price, original),
        _ => println!("  {}", view.price),
    }
    if view.out_of_stock {
        println!("  [OUT OF STOCK]");
    }
    for choice in &view.choices {
        println!("    - {}", choice.label);
    }
    if !view.can_submit {
        println!("  (pick a variant to enable add-to-cart)");
    }
}

/// Five-star row, e.g. "★★★☆☆".
fn stars(filled: u8) -> String {
    let filled = filled.min(5) as usize;
    format!("{}{}", "\u{2605}".repeat(filled), "\u{2606}".repeat(5 - filled))
}

fn describe(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Added(item) => format!("added ({})", item.variant_name),
        SubmitOutcome::Rejected(err) => format!("rejected: {err}"),
        SubmitOutcome::Busy => "ignored: attempt already in flight".to_string(),
    }
}
