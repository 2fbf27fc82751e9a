//! Compatibility Report Rendering
//!
//! Turns a structured [`CompatibilityReport`] into the markdown block the
//! dashboard displays alongside the plant selection. Pure string building;
//! empty buckets are omitted entirely.

use crate::compatibility::CompatibilityReport;

/// Render a compatibility report as markdown.
///
/// Layout: one `###` section per non-empty bucket, pair labels as bullets,
/// then a **Why**/**Cautions** reason list for the compatible and
/// incompatible sections. An empty report renders a single placeholder
/// line.
pub fn render_markdown(report: &CompatibilityReport) -> String {
    if report.is_empty() {
        return "No plant pairs to analyse.".to_string();
    }

    let mut lines = Vec::new();

    if !report.compatible.pairs.is_empty() {
        lines.push("### Compatible".to_string());
        lines.push(String::new());
        for pair in &report.compatible.pairs {
            lines.push(format!("- {}", pair));
        }
        lines.push(String::new());
        lines.push("**Why these work together:**".to_string());
        for reason in &report.compatible.reasons {
            lines.push(format!("- {}", reason));
        }
    }

    if !report.incompatible.pairs.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("### Incompatible".to_string());
        lines.push(String::new());
        for pair in &report.incompatible.pairs {
            lines.push(format!("- {}", pair));
        }
        lines.push(String::new());
        lines.push("**Cautions:**".to_string());
        for reason in &report.incompatible.reasons {
            lines.push(format!("- {}", reason));
        }
    }

    if !report.neutral.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("### Neutral".to_string());
        lines.push(String::new());
        for pair in &report.neutral {
            lines.push(format!("- {}", pair));
        }
    }

    lines.join("\n")
}
