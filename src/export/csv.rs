//! CSV export functionality.

use std::io::Write;

use anyhow::Result;
use csv::Writer;

use crate::resolver::RankOutcome;
use crate::run::KeywordResult;
use crate::storage::RankRecord;

/// Writes one row per checked keyword: the downloadable batch results.
pub fn write_results_csv<W: Write>(output: W, results: &[KeywordResult]) -> Result<usize> {
    let mut writer = Writer::from_writer(output);
    writer.write_record([
        "Keyword",
        "Rank",
        "Page",
        "Matched URL",
        "Location",
        "Checked At",
    ])?;

    for result in results {
        let (page, matched_url) = match &result.outcome {
            RankOutcome::Found {
                page, matched_url, ..
            } => (page.to_string(), matched_url.as_str()),
            _ => (String::new(), ""),
        };
        writer.write_record([
            result.keyword.as_str(),
            result.outcome.display_rank().as_str(),
            page.as_str(),
            matched_url,
            result.location.as_deref().unwrap_or_default(),
            result.checked_at_display().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(results.len())
}

/// Writes every scanned SERP link of the batch, `keyword, position, url`.
pub fn write_serp_csv<W: Write>(output: W, results: &[KeywordResult]) -> Result<usize> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(["Keyword", "Position", "URL"])?;

    let mut count = 0;
    for result in results {
        for link in &result.scanned {
            writer.write_record([
                result.keyword.as_str(),
                link.position.to_string().as_str(),
                link.link.as_str(),
            ])?;
            count += 1;
        }
    }

    writer.flush()?;
    Ok(count)
}

/// Writes stored history records with every column.
pub fn write_history_csv<W: Write>(output: W, records: &[RankRecord]) -> Result<usize> {
    let mut writer = Writer::from_writer(output);
    writer.write_record([
        "id",
        "brand_url",
        "keyword",
        "rank",
        "status",
        "position",
        "page",
        "matched_url",
        "error_message",
        "country",
        "lang",
        "location",
        "checked_at",
    ])?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.brand_url.clone(),
            record.keyword.clone(),
            record.rank.clone(),
            record.status.map(|s| s.to_string()).unwrap_or_default(),
            record.position.map(|p| p.to_string()).unwrap_or_default(),
            record.page.map(|p| p.to_string()).unwrap_or_default(),
            record.matched_url.clone().unwrap_or_default(),
            record.error_message.clone().unwrap_or_default(),
            record.country.clone(),
            record.language.clone(),
            record.location.clone().unwrap_or_default(),
            record.checked_at.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ScannedLink;
    use chrono::{TimeZone, Utc};

    fn result(keyword: &str, outcome: RankOutcome, scanned: Vec<ScannedLink>) -> KeywordResult {
        KeywordResult {
            keyword: keyword.to_string(),
            outcome,
            location: Some("Kolkata, West Bengal, India".to_string()),
            checked_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
            scanned,
            record_id: 1,
        }
    }

    #[test]
    fn test_results_csv() {
        let results = vec![
            result(
                "seo agency",
                RankOutcome::Found {
                    position: 2,
                    page: 1,
                    matched_url: "https://www.digitalpiloto.com/services".to_string(),
                },
                Vec::new(),
            ),
            result("web design", RankOutcome::NotFound, Vec::new()),
        ];
        let mut buf = Vec::new();
        assert_eq!(write_results_csv(&mut buf, &results).unwrap(), 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Keyword,Rank,Page,Matched URL,Location,Checked At");
        assert_eq!(
            lines[1],
            "seo agency,2,1,https://www.digitalpiloto.com/services,\"Kolkata, West Bengal, India\",2025-03-01 12:30:00"
        );
        assert_eq!(
            lines[2],
            "web design,Not Found,,,\"Kolkata, West Bengal, India\",2025-03-01 12:30:00"
        );
    }

    #[test]
    fn test_serp_csv_flattens_links() {
        let scanned = vec![
            ScannedLink {
                position: 1,
                link: "https://competitor.com".to_string(),
            },
            ScannedLink {
                position: 2,
                link: "https://www.digitalpiloto.com/services".to_string(),
            },
        ];
        let results = vec![result("seo agency", RankOutcome::NotFound, scanned)];
        let mut buf = Vec::new();
        assert_eq!(write_serp_csv(&mut buf, &results).unwrap(), 2);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Keyword,Position,URL\n"));
        assert!(text.contains("seo agency,2,https://www.digitalpiloto.com/services\n"));
    }

    #[test]
    fn test_history_csv_leaves_missing_fields_empty() {
        let record = RankRecord {
            id: 9,
            brand_url: "digitalpiloto.com".to_string(),
            keyword: "old".to_string(),
            rank: "Not Found".to_string(),
            status: None,
            position: None,
            page: None,
            matched_url: None,
            error_message: None,
            country: "in".to_string(),
            language: "en".to_string(),
            location: None,
            checked_at: "2023-05-01 10:00:00".to_string(),
        };
        let mut buf = Vec::new();
        write_history_csv(&mut buf, &[record]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "9,digitalpiloto.com,old,Not Found,,,,,,in,en,,2023-05-01 10:00:00"
        );
    }
}
