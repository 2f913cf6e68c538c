//! A simple hello world application
//!
//! Uses the common acap-logging crate to demonstrate
//! 1. how to use it in an application, and
//! 2. how to build and bundle it as an application.

fn main() {
    acap_logging::init_logger();
    hello_world::greet();
}
