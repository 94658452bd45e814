//! # Application State
//!
//! The explicit state passed into the run loop. One console session owns
//! the whole thing exclusively; the market is single-user by contract, so
//! no locking is involved.

use mercado_core::Market;

use crate::config::Config;

/// Everything the shell needs: the market and the loaded configuration.
///
/// Lifecycle: created empty at startup, mutated by menu actions, dropped
/// on exit. Nothing persists across runs.
#[derive(Debug)]
pub struct App {
    pub market: Market,
    pub config: Config,
}

impl App {
    /// Creates the initial application state: an empty market.
    pub fn new(config: Config) -> Self {
        App {
            market: Market::new(),
            config,
        }
    }
}
