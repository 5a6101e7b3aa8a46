//! Bind address for the local static host, overridable through the
//! environment for the rare case where 8080 is taken.

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub fn host() -> String {
    env::var("VOUCHER_STUDIO_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn port() -> u16 {
    env::var("VOUCHER_STUDIO_PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env_overrides() {
        assert_eq!(DEFAULT_PORT, 8080);
        assert!(!host().is_empty());
        assert!(port() > 0);
    }
}
