use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs()))
            .build()
            .context("failed to build http client")
    })
}

fn request_timeout_secs() -> u64 {
    parse_timeout_secs(std::env::var("SCOUT_TIMEOUT_SECS").ok().as_deref())
}

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset_or_unparsable() {
        assert_eq!(parse_timeout_secs(None), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("soon")), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some("-5")), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn timeout_is_at_least_one_second() {
        assert_eq!(parse_timeout_secs(Some("0")), 1);
        assert_eq!(parse_timeout_secs(Some(" 45 ")), 45);
    }
}
