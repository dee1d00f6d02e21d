#![doc(test(attr(deny(warnings))))]

//! Contact form validation and step wizard controller, with a terminal host
//! for driving the form interactively or from scripts.

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Contact form tracing initialized.");
    });
}
