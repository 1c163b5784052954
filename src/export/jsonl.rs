//! JSONL export functionality.
//!
//! Each line is a complete JSON object representing one stored check.

use std::io::Write;

use anyhow::Result;

use crate::storage::RankRecord;

/// Writes history records as JSON Lines.
pub fn write_history_jsonl<W: Write>(mut output: W, records: &[RankRecord]) -> Result<usize> {
    for record in records {
        serde_json::to_writer(&mut output, record)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RankStatus;

    #[test]
    fn test_jsonl_one_object_per_line() {
        let record = RankRecord {
            id: 1,
            brand_url: "https://digitalpiloto.com".to_string(),
            keyword: "seo agency".to_string(),
            rank: "2".to_string(),
            status: Some(RankStatus::Found),
            position: Some(2),
            page: Some(1),
            matched_url: Some("https://www.digitalpiloto.com/services".to_string()),
            error_message: None,
            country: "in".to_string(),
            language: "en".to_string(),
            location: Some("India".to_string()),
            checked_at: "2025-03-01 12:30:00".to_string(),
        };
        let mut buf = Vec::new();
        assert_eq!(
            write_history_jsonl(&mut buf, &[record.clone(), record]).unwrap(),
            2
        );

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["position"], 2);
        assert_eq!(value["error_message"], serde_json::Value::Null);
    }
}
