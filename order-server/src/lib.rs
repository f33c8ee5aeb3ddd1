//! Sales Order Server
//!
//! REST service for creating sales orders against an embedded SurrealDB
//! store.
//!
//! # Module structure
//!
//! ```text
//! order-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer (models + repositories)
//! ├── orders/        # Order pipeline: resolve, build, commit, project
//! ├── attachments/   # Attachment storage
//! ├── payments/      # Payment gateway pass-through
//! └── utils/         # Logging and helpers
//! ```

pub mod api;
pub mod attachments;
pub mod core;
pub mod db;
pub mod orders;
pub mod payments;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use orders::{OrderError, OrderProjection, OrderService, ProductResolver};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment before anything else runs.
///
/// Loads `.env`, makes sure the work directory exists and
/// initializes the logger.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(std::env::var("LOG_LEVEL").ok().as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____          __
  / __ \_______/ /__  _____
 / / / / ___/ __  / _ \/ ___/
/ /_/ / /  / /_/ /  __/ /
\____/_/   \__,_/\___/_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
