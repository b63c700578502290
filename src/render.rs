// Text Rendering
//
// Plain-text views of a simulation for the terminal: a single step, the
// per-step summary table, statistics, a hit/fault bar chart and policy
// descriptions. Every function returns a String and prints nothing.

use std::fmt::Write;

use crate::simulator::{FrameSet, Policy, SimulationResult, StepRecord};
use crate::stats::{summary_rows, Comparison, Statistics};

const EMPTY_FRAME: &str = "Empty";

fn frame_cell(frames: &FrameSet, frame_id: usize) -> String {
    frames
        .get(frame_id)
        .map(|page| page.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn outcome(fault: bool) -> &'static str {
    if fault { "FAULT" } else { "HIT" }
}

/// Render a bordered table; every row must have as many cells as `headers`
fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for &width in &widths {
            line.push_str(&"-".repeat(width.max(3) + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (i, cell) in cells.iter().enumerate() {
            let width = widths[i].max(3);
            let _ = write!(line, " {:<width$} |", cell, width = width);
        }
        line
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", separator);
    let _ = writeln!(out, "{}", format_row(headers));
    let _ = writeln!(out, "{}", separator);
    for row in rows {
        let _ = writeln!(out, "{}", format_row(row));
    }
    let _ = writeln!(out, "{}", separator);
    let _ = write!(out, "({} {})", rows.len(), if rows.len() == 1 { "row" } else { "rows" });
    out
}

/// Render one step as shown while stepping through a run
pub fn render_step(step: &StepRecord, index: usize, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Step {} of {}", index + 1, total);
    let _ = writeln!(out, "Page {}", step.page);
    let _ = writeln!(out, "{}", if step.fault { "PAGE FAULT" } else { "PAGE HIT" });

    if let (Some(slot), Some(evicted)) = (step.slot, step.evicted) {
        let _ = writeln!(out, "Replaced page {} in frame {}", evicted, slot);
    }

    for (frame_id, slot) in step.frames.slots().iter().enumerate() {
        let content = match slot {
            Some(page) => page.to_string(),
            None => EMPTY_FRAME.to_string(),
        };
        let marker = if step.slot == Some(frame_id) { " *" } else { "" };
        let _ = writeln!(out, "  Frame {}: {}{}", frame_id, content, marker);
    }
    out
}

/// Render every step as a table: request number, page, frames, outcome
pub fn render_summary_table(result: &SimulationResult) -> String {
    let mut headers = vec!["#".to_string(), "Page".to_string()];
    headers.extend((0..result.frame_count).map(|i| format!("F{}", i)));
    headers.push("Result".to_string());

    let rows: Vec<Vec<String>> = summary_rows(result)
        .into_iter()
        .map(|row| {
            let mut cells = vec![row.request.to_string(), row.page.to_string()];
            cells.extend((0..result.frame_count).map(|i| frame_cell(&row.frames, i)));
            cells.push(outcome(row.fault).to_string());
            cells
        })
        .collect();

    render_table(&headers, &rows)
}

pub fn render_statistics(stats: &Statistics) -> String {
    format!(
        "Total requests: {}\nPage faults:    {}\nPage hits:      {}\nHit ratio:      {:.2}%",
        stats.total_requests,
        stats.page_faults,
        stats.hits,
        stats.hit_ratio()
    )
}

/// Horizontal bar chart of hits against faults, bars scaled to `width`
pub fn render_chart(stats: &Statistics, width: usize) -> String {
    let bar = |count: usize| {
        if stats.total_requests == 0 {
            return 0;
        }
        (count * width + stats.total_requests / 2) / stats.total_requests
    };

    format!(
        "Hits   |{:<width$}| {} ({:.2}%)\nFaults |{:<width$}| {} ({:.2}%)",
        "#".repeat(bar(stats.hits)),
        stats.hits,
        stats.hit_ratio(),
        "#".repeat(bar(stats.page_faults)),
        stats.page_faults,
        stats.fault_ratio(),
        width = width
    )
}

pub fn render_comparison(comparison: &Comparison) -> String {
    let headers: Vec<String> = ["Policy", "Requests", "Faults", "Hits", "Hit ratio"]
        .iter()
        .map(|h| h.to_string())
        .collect();

    let rows: Vec<Vec<String>> = comparison
        .entries
        .iter()
        .map(|(policy, stats)| {
            vec![
                policy.to_string(),
                stats.total_requests.to_string(),
                stats.page_faults.to_string(),
                stats.hits.to_string(),
                format!("{:.2}%", stats.hit_ratio()),
            ]
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    if let Some((policy, stats)) = comparison.best() {
        let _ = write!(out, "\nFewest faults: {} ({})", policy, stats.page_faults);
    }
    out
}

pub fn render_description(policy: Policy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", policy.title());
    let _ = writeln!(out, "{}", "=".repeat(policy.title().len()));
    let _ = writeln!(out, "{}", policy.summary());
    let _ = writeln!(out);

    let _ = writeln!(out, "How it works:");
    for (i, step) in policy.steps().iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    let _ = writeln!(out, "Advantages:");
    for item in policy.advantages() {
        let _ = writeln!(out, "  + {}", item);
    }

    let _ = writeln!(out, "Disadvantages:");
    for item in policy.disadvantages() {
        let _ = writeln!(out, "  - {}", item);
    }
    out
}
