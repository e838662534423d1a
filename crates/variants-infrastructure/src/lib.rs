//! Infrastructure Layer - Variants API
//!
//! Ambient services around the application core:
//!
//! - [`config`]: Figment-based configuration loading and validation
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context helpers lifting foreign errors into the domain error
//! - [`health`]: store and cache health checks
//! - [`di`]: the composition root building [`AppContext`]

// Force linkme registration of all providers
extern crate variants_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use di::{init_app, AppContext};
pub use error_ext::ErrorContext;
pub use health::{HealthResponse, HealthStatus};
