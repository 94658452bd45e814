//! # Shell
//!
//! The role-based menu tree:
//!
//! ```text
//! main menu ──► 1. owner (gate) ──► add product / list products /
//! │                                 list orders / back
//! ├───────────► 2. customer ──────► place order / list products / back
//! └───────────► 3. exit
//! ```
//!
//! Every handler takes the [`App`] state and a [`Console`]; nothing here
//! touches stdin/stdout directly, so the whole tree is driven by tests
//! with in-memory buffers.

pub mod customer;
pub mod owner;

use std::io::{self, BufRead, Write};

use mercado_core::{Order, Product};

use crate::config::Config;
use crate::input::Console;
use crate::state::App;

/// Runs the role-selection loop until the user exits (or EOF).
pub fn main_menu<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.say("")?;
        console.say(&format!("Welcome to {}!", app.config.store_name))?;
        console.say("1. Enter as store owner")?;
        console.say("2. Enter as customer")?;
        console.say("3. Exit")?;

        match console.prompt_choice("Choose an option: ")? {
            Some(1) => owner::session(app, console)?,
            Some(2) => customer::session(app, console)?,
            Some(3) | None => {
                console.say("Leaving...")?;
                return Ok(());
            }
            Some(_) => console.say("Invalid option. Try again.")?,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// One catalog line: name, price, stock.
pub(crate) fn format_product_line(product: &Product, config: &Config) -> String {
    format!(
        "{} - {} ({} in stock)",
        product.name,
        config.format_currency(product.price_cents),
        product.stock
    )
}

/// One order line: number, customer, items, total, address.
pub(crate) fn format_order_line(order: &Order, config: &Config) -> String {
    let items = order
        .items
        .iter()
        .map(|item| format!("{} (x{})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Order {} for {}: {} - total {} - deliver to {}",
        order.order_number,
        order.customer,
        items,
        config.format_currency(order.total_cents),
        order.address
    )
}

/// Prints the catalog in insertion order.
pub(crate) fn print_catalog<R: BufRead, W: Write>(
    app: &App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if app.market.product_count() == 0 {
        return console.say("The catalog is empty.");
    }
    for product in app.market.products() {
        console.say(&format_product_line(product, &app.config))?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
