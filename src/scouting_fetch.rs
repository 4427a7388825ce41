use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::http_client::http_client;
use crate::state::{AnalyzeRequest, ScoutingReport};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
const ANALYZE_PATH: &str = "/analyze-players";

/// Backend origin from `SCOUT_API_BASE`, without a trailing slash.
pub fn api_base_from_env() -> String {
    std::env::var("SCOUT_API_BASE")
        .ok()
        .and_then(|val| normalize_base(&val))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn analyze_players(api_base: &str, request: &AnalyzeRequest) -> Result<ScoutingReport> {
    let client = http_client()?;
    analyze_players_with(client, api_base, request)
}

pub fn analyze_players_with(
    client: &Client,
    api_base: &str,
    request: &AnalyzeRequest,
) -> Result<ScoutingReport> {
    let url = format!("{api_base}{ANALYZE_PATH}");
    let resp = client
        .post(&url)
        .header(CONTENT_TYPE, "application/json")
        .header(ACCEPT, "application/json")
        .json(request)
        .send()
        .with_context(|| format!("POST {url} failed"))?;

    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {}: {}", status, snippet(&body)));
    }
    parse_scouting_report_json(&body)
}

pub fn parse_scouting_report_json(raw: &str) -> Result<ScoutingReport> {
    serde_json::from_str::<ScoutingReport>(raw).context("invalid scouting report json")
}

fn snippet(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_CHARS).collect();
    format!("{cut}...")
}
