//! # Mercado Console Entry Point
//!
//! Thin binary wrapper; the actual setup and run loop live in the library
//! crate so tests can drive them.

fn main() {
    if let Err(err) = mercado_console::run() {
        eprintln!("error: {err}");
    }
}
