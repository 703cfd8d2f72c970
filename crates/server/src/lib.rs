//! Static Asset Host: serves the prebuilt bundle with an entry document fallback.
//!
//! # Invariants
//! - A file that exists under the bundle root is served as-is.
//! - Every other GET is answered with the entry document and status 200.
//! - A bundle without an entry document is rejected before binding the port.

mod config;
mod error;
mod host;

pub use config::ServerConfig;
pub use error::ServerError;
pub use host::{router, serve};

pub fn crate_info() -> &'static str {
    "bobsphere-server v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("server"));
    }
}
