//! # Console Input
//!
//! Line-oriented I/O for the shell: prompts, reprompt-until-valid loops,
//! and the pure parsers behind them.
//!
//! ## Input Rules
//! - Every value is trimmed before parsing.
//! - Malformed input reports the problem and reprompts; it never crashes
//!   the session.
//! - EOF on the input stream surfaces as `None`, which the menus treat as
//!   "back"/exit so the loop always terminates.
//!
//! [`Console`] is generic over `BufRead`/`Write`, so tests drive the real
//! menu code with in-memory buffers.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use mercado_core::{validation, Money, RequestedItem, ValidationError};

// =============================================================================
// Parse Errors
// =============================================================================

/// Errors from parsing a comma-separated order item list.
#[derive(Debug, Error)]
pub enum InputError {
    /// An entry did not read as a `Name quantity` pair.
    #[error("'{entry}' is not a 'Name quantity' pair (e.g. Rice 2)")]
    MalformedEntry { entry: String },

    /// The list contained no entries at all.
    #[error("no items given")]
    EmptyItems,

    /// A name or quantity failed business validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Order List Parsing
// =============================================================================

/// Parses a comma-separated order list: `"Rice 2, Black Beans 3"`.
///
/// The quantity is the last whitespace-separated token of each entry, so
/// product names may contain spaces. Duplicate names merge ADDITIVELY:
/// `"Rice 2, Rice 3"` is a request for 5 Rice. Empty entries (trailing
/// commas) are skipped.
pub fn parse_order_items(input: &str) -> Result<Vec<RequestedItem>, InputError> {
    let mut items: Vec<RequestedItem> = Vec::new();

    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let malformed = || InputError::MalformedEntry {
            entry: entry.to_string(),
        };

        let (name, quantity) = entry.rsplit_once(char::is_whitespace).ok_or_else(malformed)?;
        let name = name.trim();
        let quantity: i64 = quantity.parse().map_err(|_| malformed())?;

        validation::validate_product_name(name)?;
        validation::validate_quantity(quantity)?;

        match items.iter_mut().find(|i| i.name == name) {
            Some(existing) => existing.quantity += quantity,
            None => items.push(RequestedItem::new(name, quantity)),
        }
    }

    if items.is_empty() {
        return Err(InputError::EmptyItems);
    }

    // Merged duplicates can overflow the per-item cap.
    for item in &items {
        validation::validate_quantity(item.quantity)?;
    }

    Ok(items)
}

// =============================================================================
// Console
// =============================================================================

/// A prompt/response console over any `BufRead` + `Write` pair.
///
/// All `prompt_*` helpers return `Ok(None)` on EOF and otherwise loop
/// until the input parses.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// A console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Prints one line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    /// Prompts once and returns the trimmed response; `None` on EOF.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until the response is non-empty.
    pub fn prompt_nonempty(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(value) if value.is_empty() => {
                    self.say("A value is required. Try again.")?;
                }
                Some(value) => return Ok(Some(value)),
            }
        }
    }

    /// Prompts for a numeric menu choice.
    pub fn prompt_choice(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(value) => match value.parse::<u32>() {
                    Ok(choice) => return Ok(Some(choice)),
                    Err(_) => self.say("Please enter a number.")?,
                },
            }
        }
    }

    /// Prompts for a price, parsed as decimal text into [`Money`].
    pub fn prompt_price(&mut self, label: &str) -> io::Result<Option<Money>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(value) => match value.parse::<Money>() {
                    Ok(price) => return Ok(Some(price)),
                    Err(err) => self.say(&format!("Invalid price: {err}. Try again."))?,
                },
            }
        }
    }

    /// Prompts for an order quantity (1..=MAX_ITEM_QUANTITY).
    pub fn prompt_quantity(&mut self, label: &str) -> io::Result<Option<i64>> {
        self.prompt_units(label, validation::validate_quantity)
    }

    /// Prompts for a stock count (0 allowed).
    pub fn prompt_stock(&mut self, label: &str) -> io::Result<Option<i64>> {
        self.prompt_units(label, validation::validate_stock)
    }

    fn prompt_units(
        &mut self,
        label: &str,
        validate: fn(i64) -> Result<(), ValidationError>,
    ) -> io::Result<Option<i64>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(value) => match value.parse::<i64>() {
                    Ok(units) => match validate(units) {
                        Ok(()) => return Ok(Some(units)),
                        Err(err) => self.say(&format!("{err}. Try again."))?,
                    },
                    Err(_) => self.say("Please enter a whole number.")?,
                },
            }
        }
    }

    /// Prompts for a comma-separated order item list.
    pub fn prompt_order_items(&mut self, label: &str) -> io::Result<Option<Vec<RequestedItem>>> {
        loop {
            match self.prompt(label)? {
                None => return Ok(None),
                Some(value) => match parse_order_items(&value) {
                    Ok(items) => return Ok(Some(items)),
                    Err(err) => self.say(&format!("{err}. Try again."))?,
                },
            }
        }
    }

    /// Consumes the console, returning the underlying reader and writer.
    /// Tests use this to inspect captured output.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
