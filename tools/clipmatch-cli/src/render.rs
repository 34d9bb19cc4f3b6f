//! Terminal and JSON rendering of alignment rows.

use clap::ValueEnum;
use clipmatch_core::AlignmentSummary;
use clipmatch_model::AlignmentRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON array of rows
    Json,
}

const HEADERS: [&str; 6] = ["#", "Speaker", "Start–End", "Dur", "Utterance", "Clip"];

/// Print rows in the requested format, with a summary line for tables.
pub fn print_rows(
    rows: &[AlignmentRow],
    summary: &AlignmentSummary,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No utterances.");
            } else {
                print!("{}", render_table(rows));
            }
            println!();
            println!("{}", summary_line(summary));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
    }
    Ok(())
}

/// Render rows as a left-aligned text table.
pub fn render_table(rows: &[AlignmentRow]) -> String {
    let cells: Vec<[String; 6]> = rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_line(&mut output, &HEADERS.map(str::to_string), &widths);
    push_line(&mut output, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &cells {
        push_line(&mut output, row, &widths);
    }
    output
}

/// One-line description of a run.
pub fn summary_line(summary: &AlignmentSummary) -> String {
    format!(
        "Matched {} of {} utterances ({} distinct clips, {} candidates)",
        summary.matched, summary.utterances, summary.distinct_clips, summary.candidates
    )
}

fn row_cells(row: &AlignmentRow) -> [String; 6] {
    let clip = match &row.clip {
        Some(clip) => format!("{} (dist {:.2})", clip.file_name, clip.score),
        None => "no clip".to_string(),
    };
    [
        (row.index + 1).to_string(),
        row.speaker.clone(),
        format!("{:.2}–{:.2}", row.start, row.end),
        format!("{:.2}", row.duration),
        row.utterance.clone(),
        clip,
    ]
}

fn push_line(output: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    output.push_str(line.trim_end());
    output.push('\n');
}
