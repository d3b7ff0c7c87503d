//! Plain-text rendering of filtered entries.
//!
//! Full mode reproduces each entry as scanned. Description-only mode drops
//! the structural fields by a fixed label set; any line the set does not
//! recognize counts as descriptive prose. The set is deliberately closed —
//! an unrecognized future label will be misclassified as description.
use crate::entries::Entry;

/// Field labels that mark structural (non-description) lines.
const FIELD_LABELS: &[&str] = &["Type:", "Default:", "Example:", "Declared by:"];

/// Inline description label; the label is stripped, the prose kept.
const DESCRIPTION_LABEL: &str = "Description:";

fn is_structural_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    FIELD_LABELS.iter().any(|label| trimmed.starts_with(label))
        || trimmed.contains("<nixpkgs/")
}

/// Render `entries` to the output text, one blank line between entries.
pub fn render(entries: &[Entry], description_only: bool) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            if description_only {
                render_description(entry)
            } else {
                render_full(entry)
            }
        })
        .collect();

    let mut out = blocks.join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn render_full(entry: &Entry) -> String {
    let mut lines = vec![entry.name.clone()];
    lines.extend(entry.body.iter().cloned());
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

fn render_description(entry: &Entry) -> String {
    let mut lines = vec![entry.name.clone()];
    for raw in &entry.body {
        if is_structural_line(raw) {
            continue;
        }
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            // Collapse blank runs the stripping leaves behind.
            if lines.last().is_some_and(|line| !line.is_empty()) {
                lines.push(String::new());
            }
            continue;
        }
        let prose = trimmed.strip_prefix(DESCRIPTION_LABEL).unwrap_or(trimmed);
        lines.push(prose.trim_start().to_string());
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
