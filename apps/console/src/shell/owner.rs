//! # Owner Menu
//!
//! The owner side of the shell: a credentials gate, then catalog
//! management. The gate compares against the configured credentials in
//! plaintext; it picks a role, it does not protect anything.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use mercado_core::{Product, User};

use crate::input::Console;
use crate::state::App;

/// Runs one owner session: gate, then the owner menu until "back".
pub fn session<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    debug!("owner gate");

    let Some(username) = console.prompt_nonempty("Username: ")? else {
        return Ok(());
    };
    let Some(password) = console.prompt_nonempty("Password: ")? else {
        return Ok(());
    };

    if !app.config.owner_gate_matches(&username, &password) {
        console.say("Wrong username or password. Try again.")?;
        return Ok(());
    }

    let Some(name) = console.prompt_nonempty("Your name: ")? else {
        return Ok(());
    };
    let owner = User::owner(name);
    info!(user = %owner.name, role = owner.role.label(), "owner session started");

    loop {
        console.say("")?;
        console.say("Owner options:")?;
        console.say("1. Add product")?;
        console.say("2. List products")?;
        console.say("3. List orders")?;
        console.say("4. Back")?;

        match console.prompt_choice("Choose an option: ")? {
            Some(1) => add_product(app, console, &owner)?,
            Some(2) => super::print_catalog(app, console)?,
            Some(3) => print_orders(app, console)?,
            Some(4) | None => return Ok(()),
            Some(_) => console.say("Invalid option. Try again.")?,
        }
    }
}

/// Prompts for a new product and adds it to the catalog.
fn add_product<R: BufRead, W: Write>(
    app: &mut App,
    console: &mut Console<R, W>,
    owner: &User,
) -> io::Result<()> {
    debug!("add_product");

    let Some(name) = console.prompt_nonempty("Product name: ")? else {
        return Ok(());
    };
    let Some(price) = console.prompt_price("Product price: ")? else {
        return Ok(());
    };
    let Some(stock) = console.prompt_stock("Product quantity: ")? else {
        return Ok(());
    };

    match app.market.add_product(Product::new(name.clone(), price, stock)) {
        Ok(()) => {
            info!(product = %name, by = %owner.name, "product added");
            console.say(&format!(
                "{}, product {} added successfully!",
                owner.name, name
            ))?;
        }
        Err(err) => console.say(&format!("Could not add product: {err}"))?,
    }

    Ok(())
}

/// Prints every order placed so far.
fn print_orders<R: BufRead, W: Write>(app: &App, console: &mut Console<R, W>) -> io::Result<()> {
    if app.market.order_count() == 0 {
        return console.say("No orders have been placed yet.");
    }
    for order in app.market.orders() {
        console.say(&super::format_order_line(order, &app.config))?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
