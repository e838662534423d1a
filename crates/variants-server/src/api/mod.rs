//! HTTP API
//!
//! Route handlers translate between HTTP and the application services held
//! by [`AppContext`]; they carry no cache or store logic of their own.

pub mod admin;
pub mod catchers;
pub mod error;
pub mod health;
pub mod models;
pub mod sequences;
pub mod variants;

use std::sync::Arc;

use rocket::{Build, Rocket};
use variants_infrastructure::di::AppContext;

use crate::constants::{ADMIN_BASE, SEQUENCES_BASE, VARIANTS_BASE};
use crate::fairings::{Cors, RequestLogger};

/// Build the Rocket application around an application context
pub fn build_rocket(context: Arc<AppContext>) -> Rocket<Build> {
    let server = context.config.server.clone();

    let mut rocket = rocket::build()
        .manage(context)
        .mount(VARIANTS_BASE, variants::routes())
        .mount(SEQUENCES_BASE, sequences::routes())
        .mount(ADMIN_BASE, admin::routes())
        .mount("/", health::routes())
        .register("/", catchers::catchers());

    if server.cors_enabled {
        rocket = rocket.attach(Cors);
    }
    if server.request_logging {
        rocket = rocket.attach(RequestLogger);
    }

    rocket
}
