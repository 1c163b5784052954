// Shared test helpers for mock search responses and test configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::MockServer;

use rank_tracker::CheckConfig;

/// SerpApi-shaped body with one organic result per link.
#[allow(dead_code)] // Used by other test files
pub fn organic_body(links: &[&str]) -> Value {
    let results: Vec<Value> = links
        .iter()
        .enumerate()
        .map(|(i, link)| json!({ "position": i + 1, "link": link, "title": "t" }))
        .collect();
    json!({
        "search_metadata": { "status": "Success" },
        "organic_results": results,
    })
}

/// Ten filler links that never match any test brand.
#[allow(dead_code)]
pub fn filler_links(page: u32) -> Vec<String> {
    (1..=10)
        .map(|i| format!("https://filler-{page}-{i}.org/page"))
        .collect()
}

/// Check configuration pointed at `server`, with pacing disabled.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, db_path: PathBuf, keywords: &[&str]) -> CheckConfig {
    CheckConfig {
        brand_url: "https://digitalpiloto.com".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        api_key: "test-key".to_string(),
        endpoint: format!("{}/search", server.uri()),
        db_path,
        timeout_seconds: 5,
        page_delay: Duration::ZERO,
        keyword_delay: Duration::ZERO,
        ..Default::default()
    }
}
