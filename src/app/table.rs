//! Plain-text tables for terminal output.

use std::io::{self, Write};

use crate::resolver::ScannedLink;
use crate::run::KeywordResult;
use crate::storage::RankRecord;

/// Writes `rows` under `headers` with every column padded to its widest cell.
pub fn render_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &header_cells, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or_default();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    writeln!(out, "{}", padded.join("  ").trim_end())
}

/// Batch results: Keyword, Rank, Page, Matched URL, Location, Checked At.
pub fn render_results<W: Write>(out: &mut W, results: &[KeywordResult]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            let (page, matched_url) = match &r.outcome {
                crate::resolver::RankOutcome::Found {
                    page, matched_url, ..
                } => (page.to_string(), matched_url.clone()),
                _ => (String::new(), String::new()),
            };
            vec![
                r.keyword.clone(),
                r.outcome.display_rank(),
                page,
                matched_url,
                r.location.clone().unwrap_or_default(),
                r.checked_at_display(),
            ]
        })
        .collect();
    render_table(
        out,
        &["Keyword", "Rank", "Page", "Matched URL", "Location", "Checked At"],
        &rows,
    )
}

/// Scanned links of one keyword.
pub fn render_serp_links<W: Write>(
    out: &mut W,
    keyword: &str,
    links: &[ScannedLink],
) -> io::Result<()> {
    writeln!(out, "SERP links for '{keyword}'")?;
    let rows: Vec<Vec<String>> = links
        .iter()
        .map(|l| vec![l.position.to_string(), l.link.clone()])
        .collect();
    render_table(out, &["Position", "URL"], &rows)
}

/// Stored history, newest first.
pub fn render_history<W: Write>(out: &mut W, records: &[RankRecord]) -> io::Result<()> {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.checked_at.clone(),
                r.brand_url.clone(),
                r.keyword.clone(),
                r.rank.clone(),
                r.page.map(|p| p.to_string()).unwrap_or_default(),
                r.location.clone().unwrap_or_default(),
                format!("{}/{}", r.country, r.language),
            ]
        })
        .collect();
    render_table(
        out,
        &["Checked At", "Brand", "Keyword", "Rank", "Page", "Location", "gl/hl"],
        &rows,
    )
}
