//! # Customer Menu
//!
//! The customer side of the shell: browsing the catalog and placing
//! orders. Fulfillment outcomes are reported in full - the receipt for
//! what was accepted, then every item that could not be served and why.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use mercado_core::{Fulfillment, OrderRequest, User};

use crate::config::Config;
use crate::input::Console;
use crate::state::App;

/// Runs one customer session: name prompt, then the menu until "back".
pub fn session<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(name) = console.prompt_nonempty("Your name: ")? else {
        return Ok(());
    };
    let customer = User::customer(name);
    info!(user = %customer.name, role = customer.role.label(), "customer session started");

    loop {
        console.say("")?;
        console.say("Customer options:")?;
        console.say("1. Place order")?;
        console.say("2. List products")?;
        console.say("3. Back")?;

        match console.prompt_choice("Choose an option: ")? {
            Some(1) => place_order(app, console, &customer)?,
            Some(2) => super::print_catalog(app, console)?,
            Some(3) | None => return Ok(()),
            Some(_) => console.say("Invalid option. Try again.")?,
        }
    }
}

/// Prompts for an order and runs fulfillment.
///
/// The catalog is shown first so the customer can see what is on the
/// shelf before typing the item list.
fn place_order<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
    customer: &User,
) -> io::Result<()> {
    debug!(customer = %customer.name, "place_order");

    super::print_catalog(app, console)?;

    let Some(items) =
        console.prompt_order_items("Products and quantities (e.g. Rice 2, Beans 3): ")?
    else {
        return Ok(());
    };
    let Some(address) = console.prompt_nonempty("Delivery address: ")? else {
        return Ok(());
    };

    let request = OrderRequest::new(customer.name.clone(), items, address);
    match app.market.place_order(request) {
        Ok(outcome) => report_fulfillment(&outcome, &app.config, console)?,
        Err(err) => console.say(&format!("Could not place the order: {err}"))?,
    }

    Ok(())
}

/// Reports a fulfillment outcome: receipt first, unavailable list after.
fn report_fulfillment<R: BufRead, W: Write>(
    outcome: &Fulfillment,
    config: &Config,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match &outcome.receipt {
        Some(receipt) => {
            info!(
                order = %receipt.order_number,
                total_cents = receipt.total_cents,
                items = receipt.lines.len(),
                "order placed"
            );
            console.say(&format!(
                "Order placed successfully for {}! It will be delivered to {}",
                receipt.customer, receipt.address
            ))?;
            console.say(&format!("Order number: {}", receipt.order_number))?;
            console.say(&format!(
                "Total: {}",
                config.format_currency(receipt.total_cents)
            ))?;
            let items = receipt
                .lines
                .iter()
                .map(|line| format!("{} (x{})", line.name, line.quantity))
                .collect::<Vec<_>>()
                .join(", ");
            console.say(&format!("Items: {items}"))?;
        }
        None => console.say("No products found for the order.")?,
    }

    if !outcome.unavailable.is_empty() {
        console.say("The following items are not available in the requested quantity:")?;
        for item in &outcome.unavailable {
            console.say(&format!("  {}: {}", item.name, item.reason))?;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use mercado_core::{Money, Product};

    use crate::config::Config;

    fn stocked_app() -> App {
        let mut app = App::new(Config::default());
        app.market
            .add_product(Product::new("Rice", Money::from_cents(500), 10))
            .unwrap();
        app
    }

    fn test_console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        let (_, writer) = console.into_parts();
        String::from_utf8(writer).unwrap()
    }

    #[test]
    fn test_place_order_happy_path() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n1\nRice 3\n12 Harbor St\n3\n");

        session(&mut app, &mut console).unwrap();

        assert_eq!(app.market.order_count(), 1);
        assert_eq!(app.market.find_product("Rice").unwrap().stock, 7);

        let out = output(console);
        assert!(out.contains("Order placed successfully for Ana!"));
        assert!(out.contains("Total: $15.00"));
        assert!(out.contains("Items: Rice (x3)"));
    }

    #[test]
    fn test_place_order_over_stock_creates_no_order() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n1\nRice 20\nSomewhere\n3\n");

        session(&mut app, &mut console).unwrap();

        assert_eq!(app.market.order_count(), 0);
        assert_eq!(app.market.find_product("Rice").unwrap().stock, 10);

        let out = output(console);
        assert!(out.contains("No products found for the order."));
        assert!(out.contains("Rice: only 10 in stock"));
    }

    #[test]
    fn test_place_order_unknown_product() {
        let mut app = App::new(Config::default());
        let mut console = test_console("Ana\n1\nBeans 1\nSomewhere\n3\n");

        session(&mut app, &mut console).unwrap();

        assert_eq!(app.market.order_count(), 0);
        let out = output(console);
        assert!(out.contains("The catalog is empty."));
        assert!(out.contains("Beans: product not found"));
    }

    #[test]
    fn test_place_order_partial_fulfillment_reports_both() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n1\nRice 2, Coffee 1\n12 Harbor St\n3\n");

        session(&mut app, &mut console).unwrap();

        assert_eq!(app.market.order_count(), 1);
        assert_eq!(app.market.find_product("Rice").unwrap().stock, 8);

        let out = output(console);
        assert!(out.contains("Total: $10.00"));
        assert!(out.contains("Coffee: product not found"));
    }

    #[test]
    fn test_list_products_shows_catalog() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n2\n3\n");

        session(&mut app, &mut console).unwrap();
        assert!(output(console).contains("Rice - $5.00 (10 in stock)"));
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n9\n3\n");

        session(&mut app, &mut console).unwrap();
        assert!(output(console).contains("Invalid option"));
    }

    #[test]
    fn test_eof_during_address_prompt_places_nothing() {
        let mut app = stocked_app();
        let mut console = test_console("Ana\n1\nRice 3\n");

        session(&mut app, &mut console).unwrap();
        assert_eq!(app.market.order_count(), 0);
        assert_eq!(app.market.find_product("Rice").unwrap().stock, 10);
    }
}
