//! The one behaviour of the hello world application, kept in a library so that it can be
//! exercised without installing a global logger from `main`.

use log::info;

/// Message logged by [`greet`].
pub const GREETING: &str = "Hello, World!";

/// Log [`GREETING`] at INFO level.
pub fn greet() {
    info!("{GREETING}");
}
