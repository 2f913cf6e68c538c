#![forbid(unsafe_code)]
#![allow(clippy::needless_doctest_main)]
#![doc = include_str!("../README.md")]
#[cfg(feature = "tty")]
use std::{env, io::IsTerminal};

use log::debug;

/// Failure to install the global logger.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a global logger has already been initialized")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

fn init_syslog() -> Result<(), Error> {
    libsyslog::Syslog::builder()
        .level(log::LevelFilter::Debug)
        .build()
        .init()?;
    Ok(())
}

#[cfg(feature = "tty")]
fn wants_stderr() -> bool {
    // Using `su -pc "..."` just says the "Connection to ... closed", and
    // I have not found another way to run as the SDK user over ssh and allocate a tty, so
    // if we detect an `env_logger` configuration, we write to stderr anyway.
    std::io::stdout().is_terminal()
        || env::var_os("RUST_LOG").is_some()
        || env::var_os("RUST_LOG_STYLE").is_some()
}

/// Set up logging as appropriate for the environment.
///
/// If stdout is a terminal, or `env_logger` is configured through `RUST_LOG` or
/// `RUST_LOG_STYLE`, write to stderr.
/// Otherwise, write to the system logger.
pub fn try_init_logger() -> Result<(), Error> {
    #[cfg(feature = "tty")]
    if wants_stderr() {
        env_logger::try_init()?;
        debug!("Logging initialized");
        return Ok(());
    }

    init_syslog()?;
    debug!("Logging initialized");
    Ok(())
}

/// Like [`try_init_logger`] but panics on failure.
///
/// # Panics
///
/// This function will panic if
/// it fails to initialize the appropriate logger or
/// a global logger has already been initialized.
pub fn init_logger() {
    if let Err(e) = try_init_logger() {
        panic!("Could not initialize logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        // Whichever sink the first call picks, the global logger can only be set once.
        let _ = try_init_logger();
        assert!(matches!(
            try_init_logger(),
            Err(Error::AlreadyInitialized(_))
        ));
    }
}
