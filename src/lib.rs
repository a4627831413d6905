#![doc(test(attr(deny(warnings))))]

//! Schema-driven CRUD core for user records: field schema, validation, form
//! state, widget mapping, a REST service facade and the list coordinator that
//! ties them together.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod schema;
pub mod store;
pub mod user;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("user CRUD core tracing initialized");
    });
}
