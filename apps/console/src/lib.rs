//! # Mercado Console Library
//!
//! The interactive shell over `mercado-core`.
//!
//! ## Module Organization
//! ```text
//! mercado_console/
//! ├── lib.rs          setup & run loop
//! ├── config.rs       Config: defaults, mercado.toml, MERCADO_* env
//! ├── input.rs        Console I/O: prompts, reprompt loops, parsers
//! ├── state.rs        App: the application state passed into the loop
//! └── shell/
//!     ├── mod.rs      role selection menu, catalog rendering
//!     ├── owner.rs    owner gate + owner menu
//!     └── customer.rs customer menu + order placement
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr, `RUST_LOG` override)
//! 2. Load configuration (defaults -> mercado.toml -> env)
//! 3. Create the App state (empty catalog, empty order list)
//! 4. Run the role-selection loop until the user exits

pub mod config;
pub mod input;
pub mod shell;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use input::Console;
use state::App;

/// Runs the console application until the user exits.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load()?;
    info!(store = %config.store_name, "starting mercado console");

    let mut app = App::new(config);
    let mut console = Console::stdio();
    shell::main_menu(&mut app, &mut console)?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menus on stdout.
/// `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mercado_console=debug,mercado_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
