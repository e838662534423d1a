//! # Variants API Server
//!
//! REST API over a collection of coronavirus variant documents. Full
//! collection reads go through a cache-aside path; every response says
//! whether it came from the cache (`cache_report`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use variants_server::args::ServerOverrides;
//! use variants_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Defaults, then variants.toml, then VARIANTS__* environment variables
//!     run(None, ServerOverrides::default()).await
//! }
//! ```
//!
//! ## Routes
//!
//! | Path | Description |
//! |------|-------------|
//! | `/variants` | Variant collection (see [`api::variants`]) |
//! | `/sequences` | Sequence placeholders |
//! | `/health` | Store and cache health |
//! | `/admin/cache/variants` | Evict the cached listing |

pub mod api;
pub mod args;
pub mod constants;
pub mod fairings;
pub mod init;

pub use api::build_rocket;
pub use init::run;
