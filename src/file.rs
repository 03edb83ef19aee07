// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::card::Card;
use crate::config::options::{OutputFormat, OutputOptions};
use crate::csv::to_export_string;

/// Render a card in the requested format.
pub fn render(card: &Card, out: &OutputOptions) -> Result<String, serde_json::Error> {
    let text = match out.format {
        OutputFormat::Summary => render_summary(card),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(card)?;
            s.push('\n');
            s
        }
        OutputFormat::Csv | OutputFormat::Tsv => to_export_string(
            &Card::transaction_headers(),
            &card.transaction_rows(),
            out.include_headers,
            out.format.delim().unwrap_or(','),
        ),
    };
    Ok(text)
}

/// Aligned label block, then the statement as an aligned table.
pub fn render_summary(card: &Card) -> String {
    let mut s = s!();
    for (label, value) in card.summary() {
        s.push_str(&format!("{:<18} {}\n", join!(label, ":"), value));
    }

    if card.transactions.is_empty() {
        s.push_str("\nNo transactions.\n");
        return s;
    }

    let headers = Card::transaction_headers();
    let rows = card.transaction_rows();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    s.push('\n');
    for row in std::iter::once(&headers).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}", w = *w))
            .collect();
        s.push_str(line.join("  ").trim_end());
        s.push('\n');
    }
    s
}

/// Render and write to the configured file, or stdout when there is none.
/// Returns the path written, if any.
pub fn export_card(card: &Card, out: &OutputOptions) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let contents = render(card, out)?;

    let Some(path) = out.out_path() else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        stdout.flush()?;
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, contents)?;
    logf!("wrote {}", path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
